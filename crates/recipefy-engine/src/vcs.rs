//! Version-control collaborator seam.
//!
//! The diff engine never reads history itself. Everything it needs about
//! commits comes through this trait, so any backing store (in-memory,
//! database, remote service) can drive it.

use crate::Result;
use recipefy_core::{CommitMetadata, Snapshot};
use recipefy_core_types::CommitId;
use std::sync::Arc;

/// Read access to commits and branches.
///
/// Implementations must be safe to share across threads: history
/// computation fans out over commits in parallel.
pub trait VersionControl: Send + Sync {
    /// Snapshot recorded by a commit.
    ///
    /// # Errors
    ///
    /// - `NotFound`: unknown commit
    fn snapshot(&self, commit: &CommitId) -> Result<Arc<Snapshot>>;

    /// Parent of a commit, `None` for a root commit.
    ///
    /// # Errors
    ///
    /// - `NotFound`: unknown commit
    fn parent(&self, commit: &CommitId) -> Result<Option<CommitId>>;

    /// Commit metadata.
    ///
    /// # Errors
    ///
    /// - `NotFound`: unknown commit
    fn metadata(&self, commit: &CommitId) -> Result<CommitMetadata>;

    /// Commit a branch currently points at.
    ///
    /// # Errors
    ///
    /// - `NotFound`: unknown branch
    fn branch_head(&self, branch: &str) -> Result<CommitId>;
}
