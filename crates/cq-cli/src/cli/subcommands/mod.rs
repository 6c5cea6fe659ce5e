mod article;
mod milestone;
mod question;
mod research;
mod response;
mod sentence;
mod take;
mod user;

pub use article::ArticleCommands;
pub use milestone::MilestoneCommands;
pub use question::QuestionCommands;
pub use research::ResearchCommands;
pub use response::ResponseCommands;
pub use sentence::SentenceCommands;
pub use take::TakeCommands;
pub use user::UserCommands;
