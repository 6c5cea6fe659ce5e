//! Composite response types returned as JSON by `cq` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `cq take create`, `cq milestone renew`, `cq take suggestions`, and
//! `cq user register`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Article, Milestone, Profile, Response, Take, User};

/// A milestone with its responses attached, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MilestoneDetail {
    pub milestone: Milestone,
    pub responses: Vec<Response>,
}

/// A take with every milestone it owns, in creation order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TakeDetail {
    pub take: Take,
    pub milestones: Vec<MilestoneDetail>,
}

/// Response from `cq user register`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Registration {
    pub user: User,
    pub profile: Profile,
    pub article: Article,
}

/// Response from `cq take suggestions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuggestionsResponse {
    pub take_id: String,
    /// The sibling milestone the suggestions come from, if any.
    pub source_milestone_id: Option<String>,
    pub responses: Vec<Response>,
}
