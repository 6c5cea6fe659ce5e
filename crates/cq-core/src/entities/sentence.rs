use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The highlightable unit of article text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Sentence {
    pub id: String,
    pub article_id: String,
    /// 0-based position within the article.
    pub position: u32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
