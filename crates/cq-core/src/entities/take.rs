use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One participant's working session on an (article, question) pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Take {
    pub id: String,
    pub user_id: String,
    pub article_id: String,
    pub question_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    pub removed_at: Option<DateTime<Utc>>,
}

impl Take {
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        self.removed_at.is_some()
    }
}
