//! Changes introduced by a single commit.

use crate::cache::ChangeCache;
use crate::vcs::VersionControl;
use crate::Result;
use recipefy_core::{compute_changes, log_op_end, log_op_error, log_op_start};
use recipefy_core::{ChangeResult, ChangeSummary, CommitMetadata, Snapshot};
use recipefy_core_types::CommitId;
use serde::Serialize;
use std::sync::Arc;

/// One commit together with what it changed relative to its parent, plus
/// both snapshots for before/after views
#[derive(Debug, Clone, Serialize)]
pub struct CommitChanges {
    pub metadata: CommitMetadata,
    /// Parent snapshot; `None` for a root commit
    pub old: Option<Arc<Snapshot>>,
    pub new: Arc<Snapshot>,
    pub changes: Arc<ChangeResult>,
    pub summary: ChangeSummary,
}

/// Compute the changes `commit_id` introduced.
///
/// A commit without a parent is diffed as a root commit. With a cache, the
/// result is looked up by `(parent, commit)` first and stored on a miss.
///
/// # Errors
///
/// - `NotFound`: unknown commit, or its parent is missing
pub fn commit_changes(
    vcs: &dyn VersionControl,
    commit_id: &CommitId,
    cache: Option<&ChangeCache>,
) -> Result<CommitChanges> {
    log_op_start!("commit_changes", commit_id = commit_id.as_str());
    let start = std::time::Instant::now();

    let result = resolve_commit_changes(vcs, commit_id, cache).map_err(|e| {
        log_op_error!(
            "commit_changes",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            commit_id = commit_id.as_str()
        );
        e.with_op("commit_changes")
    })?;

    log_op_end!(
        "commit_changes",
        duration_ms = start.elapsed().as_millis() as u64,
        commit_id = commit_id.as_str(),
        first_commit = result.changes.first_commit
    );

    Ok(result)
}

/// Unlogged core of [`commit_changes`], shared with history traversal.
pub(crate) fn resolve_commit_changes(
    vcs: &dyn VersionControl,
    commit_id: &CommitId,
    cache: Option<&ChangeCache>,
) -> Result<CommitChanges> {
    let metadata = vcs.metadata(commit_id)?;
    let parent = vcs.parent(commit_id)?;
    let new = vcs.snapshot(commit_id)?;
    let old = parent.as_ref().map(|p| vcs.snapshot(p)).transpose()?;

    let compute = || compute_changes(old.as_deref(), &new);
    let changes = match cache {
        Some(cache) => cache.get_or_compute((parent, commit_id.clone()), compute),
        None => Arc::new(compute()),
    };

    let summary = changes.summary();
    Ok(CommitChanges {
        metadata,
        old,
        new,
        changes,
        summary,
    })
}
