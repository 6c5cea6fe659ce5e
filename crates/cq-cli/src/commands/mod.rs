pub mod article;
pub mod dispatch;
pub mod milestone;
pub mod question;
pub mod research;
pub mod response;
pub mod schema;
pub mod sentence;
pub mod shared;
pub mod take;
pub mod user;
