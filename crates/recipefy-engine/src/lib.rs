//! Recipefy Engine - Orchestration layer
//!
//! Connects the pure diff engine to a version-control collaborator:
//! resolves parents, computes and caches per-commit changes, and walks a
//! branch's history. Owns lifecycle logging for these operations.

#![allow(clippy::result_large_err)]

pub mod cache;
pub mod commands;
pub mod memory_vcs;
pub mod settings;
pub mod vcs;

pub use cache::ChangeCache;
pub use commands::changes::{commit_changes, CommitChanges};
pub use commands::history::branch_history;
pub use memory_vcs::{BranchRecord, CommitRecord, HistoryDocument, MemoryVersionControl, MAIN_BRANCH};
pub use settings::{HistorySettings, LoggingSettings, Settings};
pub use vcs::VersionControl;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, recipefy_core::ExError>;
