//! Entity structs for all cq domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `cq-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema validation.

mod article;
mod milestone;
mod profile;
mod question;
mod research;
mod response;
mod sentence;
mod take;
mod user;

pub use article::{Article, ArticleLoad};
pub use milestone::{LineageCandidate, Milestone};
pub use profile::Profile;
pub use question::Question;
pub use research::Research;
pub use response::Response;
pub use sentence::Sentence;
pub use take::Take;
pub use user::User;
