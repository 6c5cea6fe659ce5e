//! Repository modules implementing CRUD and participant operations.
//!
//! Each module adds methods to `CqService` via `impl CqService` blocks.
//! `assignment`, `lineage`, `renewal` and `seeding` hold the operations built
//! on top of the plain entity repositories.

pub mod article;
pub mod assignment;
pub mod lineage;
pub mod milestone;
pub mod profile;
pub mod question;
pub mod renewal;
pub mod research;
pub mod response;
pub mod seeding;
pub mod sentence;
pub mod take;
pub mod user;
