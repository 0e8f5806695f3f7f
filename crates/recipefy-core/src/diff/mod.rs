//! Recipe snapshot diff engine.
//!
//! Compares a parent and a child snapshot and produces a classified,
//! deterministic change set suitable for history lists and before/after
//! views alike.
//!
//! ## Entry point
//!
//! ```
//! use recipefy_core::diff::compute_changes;
//! use recipefy_core::model::{Ingredient, Snapshot, Step};
//!
//! let old = Snapshot::new(4, vec![Ingredient::new("flour", "cups", 2.0)], vec![Step::new(1, "Mix")]);
//! let new = Snapshot::new(4, vec![Ingredient::new("flour", "cups", 3.0)], vec![Step::new(1, "Mix")]);
//!
//! let changes = compute_changes(Some(&old), &new);
//! assert_eq!(changes.ingredient_diff.modified.len(), 1);
//! assert_eq!(changes.summary().modifications, 1);
//! ```
//!
//! ## Pipeline
//!
//! `(old | none, new)` -> [`matcher`] -> [`classifier`] -> [`aggregate`].
//! A root commit (`old = None`) skips the matcher entirely.
//!
//! ## Guarantees
//!
//! - **Totality**: every old record is removed, modified, repositioned or
//!   unchanged; every new record is added, modified, repositioned or
//!   unchanged; never two of these.
//! - **Determinism**: identical inputs produce identical results.
//! - **Purity**: no I/O, no logging, no shared state. Results may be cached
//!   indefinitely by commit pair.

pub mod aggregate;
pub mod classifier;
pub mod engine;
pub mod equality;
pub mod human_summary;
pub mod matcher;
pub mod model;

pub use aggregate::summarize;
pub use engine::{compute_changes, try_compute_changes, Lineage};
pub use human_summary::render_human_summary;
pub use model::{
    Change, ChangeResult, ChangeSummary, CollectionDiff, ServingSizeDiff, Side, SnapshotAnomaly,
};
