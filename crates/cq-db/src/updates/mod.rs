//! Partial-update structs for entities with editable fields.
//!
//! `Option<T>` means "leave unchanged when `None`"; `Option<Option<T>>` lets
//! callers clear a nullable column with `Some(None)`.

pub mod milestone;
pub mod research;
