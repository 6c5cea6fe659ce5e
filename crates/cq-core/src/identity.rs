use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The user on whose behalf an operation runs.
///
/// Passed explicitly into every mutation that records ownership (takes,
/// milestones, responses, questions) and into visibility-filtered listings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Actor {
    /// ID of the acting user (`usr-...`).
    pub user_id: String,
    /// Superusers see every user in listings.
    pub is_superuser: bool,
}

impl Actor {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            is_superuser: false,
        }
    }

    #[must_use]
    pub fn superuser(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            is_superuser: true,
        }
    }
}
