//! Cross-cutting error types for cq.
//!
//! This module defines errors that can originate from any crate in the system.
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`) live
//! in their own crates and wrap `CoreError` where a domain rule is violated.

use thiserror::Error;

use crate::enums::EntityType;

/// Errors that can be raised by any cq crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: EntityType, id: String },

    /// Input failed validation (ownership, shape, cross-entity constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// An operation that picks one element was given an empty collection.
    #[error("Empty collection: {owner} has no {collection}")]
    EmptyCollection { collection: String, owner: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`].
    pub fn not_found(entity_type: EntityType, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let err = CoreError::not_found(EntityType::Take, "tak-0000beef");
        assert_eq!(err.to_string(), "Entity not found: take tak-0000beef");
    }

    #[test]
    fn empty_collection_message() {
        let err = CoreError::EmptyCollection {
            collection: "articles".into(),
            owner: "research rsc-00000001".into(),
        };
        assert_eq!(
            err.to_string(),
            "Empty collection: research rsc-00000001 has no articles"
        );
    }
}
