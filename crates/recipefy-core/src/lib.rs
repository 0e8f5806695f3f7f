//! Recipefy Core - recipe snapshot model and diff engine
//!
//! This crate provides the pure, synchronous heart of Recipefy:
//! - Snapshot model (serving size, ingredients, steps) and commit metadata
//! - Snapshot diff engine: equality rules, matcher, classifier, aggregator
//!   and first-commit handling
//! - Non-fatal snapshot anomaly checks
//! - Human-readable change summaries
//! - Error and logging facilities shared with the engine and CLI

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

#[doc(hidden)]
pub use recipefy_core_types as core_types;

// Re-export commonly used types
pub use diff::{compute_changes, try_compute_changes, ChangeResult, ChangeSummary};
pub use errors::{ExError, ExErrorKind, RecipefyError};
pub use model::{CommitMetadata, Ingredient, Snapshot, Step};
