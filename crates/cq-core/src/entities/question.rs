use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A question posed by a researcher, asked against every article of its research.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub research_id: String,
    pub owner_id: String,
    pub content: String,
    pub created_phase: Option<String>,
    pub created_at: DateTime<Utc>,
}
