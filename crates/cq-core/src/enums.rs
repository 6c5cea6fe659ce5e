//! Entity types and selection policies for cq.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so they round-trip through TEXT columns, TOML config, and CLI arguments alike.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Type of entity in the system, used in error reporting and schema lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    User,
    Profile,
    Research,
    Article,
    Sentence,
    Question,
    Take,
    Milestone,
    Response,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Profile => "profile",
            Self::Research => "research",
            Self::Article => "article",
            Self::Sentence => "sentence",
            Self::Question => "question",
            Self::Take => "take",
            Self::Milestone => "milestone",
            Self::Response => "response",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TieBreak
// ---------------------------------------------------------------------------

/// Which element wins when two candidates compare equal during a selection fold.
///
/// Applies to both the article balancer (equal profile counts) and the lineage
/// resolver (equal `response_at`). Candidates are always visited in insertion
/// order, so `Earliest` keeps the first one seen and `Latest` the last one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    #[default]
    Earliest,
    Latest,
}

impl TieBreak {
    /// Whether a later-visited candidate replaces the current pick on a tie.
    #[must_use]
    pub const fn replaces_on_tie(self) -> bool {
        matches!(self, Self::Latest)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Earliest => "earliest",
            Self::Latest => "latest",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_type_serializes_as_snake_case() {
        let json = serde_json::to_string(&EntityType::Milestone).unwrap();
        assert_eq!(json, "\"milestone\"");
        assert_eq!(EntityType::Milestone.to_string(), "milestone");
    }

    #[test]
    fn tie_break_defaults_to_earliest() {
        assert_eq!(TieBreak::default(), TieBreak::Earliest);
        assert!(!TieBreak::Earliest.replaces_on_tie());
        assert!(TieBreak::Latest.replaces_on_tie());
    }

    #[test]
    fn tie_break_parses_from_json() {
        let parsed: TieBreak = serde_json::from_str("\"latest\"").unwrap();
        assert_eq!(parsed, TieBreak::Latest);
    }
}
