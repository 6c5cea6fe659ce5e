use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One highlighted sentence inside a milestone.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Response {
    pub id: String,
    pub milestone_id: String,
    pub sentence_id: String,
    pub user_id: String,
    /// Text of the referenced sentence (read-only).
    pub text: String,
    pub created_at: DateTime<Utc>,
}
