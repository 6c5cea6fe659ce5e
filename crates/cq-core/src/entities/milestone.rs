use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A saved snapshot of a take's highlighted sentences.
///
/// `copied_from` is `None` for milestones a participant produced themselves and
/// holds the source milestone ID for milestones seeded from another take.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Milestone {
    pub id: String,
    pub take_id: String,
    pub user_id: String,
    pub found: Option<DateTime<Utc>>,
    pub copied_from: Option<String>,
    pub response_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Milestone {
    #[must_use]
    pub const fn is_copy(&self) -> bool {
        self.copied_from.is_some()
    }
}

/// A sibling milestone as seen by the lineage resolver.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LineageCandidate {
    pub milestone: Milestone,
    pub response_count: u64,
}

impl LineageCandidate {
    /// A milestone is complete when it has a `found` marker and at least one response.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.milestone.found.is_some() && self.response_count > 0
    }

    /// Only complete, organically created milestones may seed another take.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.is_complete() && !self.milestone.is_copy()
    }
}
