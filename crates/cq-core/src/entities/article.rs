use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A text participants read and highlight. Belongs to one research.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub research_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// An article together with the number of profiles currently assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArticleLoad {
    pub article: Article,
    pub profile_count: u64,
}
