//! # cq-core
//!
//! Core types, ID prefixes, and error types for cq.
//!
//! This crate provides the foundational types shared across all cq crates:
//! - Entity structs for the survey schema (researches, articles, takes, milestones, ...)
//! - Entity-type and tie-break enums
//! - ID prefix constants
//! - Cross-cutting error types
//! - The acting-user identity passed into every mutation
//! - Pure article-assignment and milestone-lineage algorithms
//! - CLI response envelopes

pub mod assignment;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod lineage;
pub mod responses;
