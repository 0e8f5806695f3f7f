//! Core types shared across Recipefy crates
//!
//! This crate provides foundational types used by the diff engine,
//! the orchestration layer and the logging facility:
//!
//! - **Identifiers**: CommitId, AuthorId
//! - **Schema constants**: Canonical field keys and event names

pub mod ids;
pub mod schema;

pub use ids::{AuthorId, CommitId};
