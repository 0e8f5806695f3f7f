//! Per-commit changes along a branch.
//!
//! The lineage is walked sequentially (each step needs the previous parent
//! link); the per-commit diffs are independent and may run on the rayon
//! pool. Output is newest-first either way.

use crate::cache::ChangeCache;
use crate::commands::changes::{resolve_commit_changes, CommitChanges};
use crate::settings::HistorySettings;
use crate::vcs::VersionControl;
use crate::Result;
use rayon::prelude::*;
use recipefy_core::errors::RecipefyError;
use recipefy_core::{log_op_end, log_op_error, log_op_start};
use recipefy_core_types::CommitId;
use std::collections::HashSet;

/// Changes of every commit reachable from `branch`'s head, newest first.
///
/// The cache is consulted only when `settings.cache` is set.
///
/// # Errors
///
/// - `NotFound`: unknown branch, or a commit in the lineage is missing
/// - `CycleDetected`: parent links loop
/// - `HistoryTooDeep`: lineage longer than `settings.max_depth`
pub fn branch_history(
    vcs: &dyn VersionControl,
    branch: &str,
    settings: &HistorySettings,
    cache: Option<&ChangeCache>,
) -> Result<Vec<CommitChanges>> {
    log_op_start!("branch_history", branch = branch, parallel = settings.parallel);
    let start = std::time::Instant::now();
    let hits_before = cache.map_or(0, ChangeCache::hits);

    let result = branch_history_impl(vcs, branch, settings, cache).map_err(|e| {
        log_op_error!(
            "branch_history",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            branch = branch
        );
        e.with_op("branch_history")
    })?;

    log_op_end!(
        "branch_history",
        duration_ms = start.elapsed().as_millis() as u64,
        branch = branch,
        history_len = result.len() as u64,
        cache_hits = cache.map_or(0, ChangeCache::hits) - hits_before
    );

    Ok(result)
}

fn branch_history_impl(
    vcs: &dyn VersionControl,
    branch: &str,
    settings: &HistorySettings,
    cache: Option<&ChangeCache>,
) -> Result<Vec<CommitChanges>> {
    let head = vcs.branch_head(branch)?;
    let lineage = walk_lineage(vcs, head, settings.max_depth)?;
    tracing::debug!(branch = branch, history_len = lineage.len(), "lineage resolved");

    let cache = cache.filter(|_| settings.cache);

    if settings.parallel {
        lineage
            .par_iter()
            .map(|commit| resolve_commit_changes(vcs, commit, cache))
            .collect()
    } else {
        lineage
            .iter()
            .map(|commit| resolve_commit_changes(vcs, commit, cache))
            .collect()
    }
}

/// Commits from `head` back to the root, newest first.
fn walk_lineage(
    vcs: &dyn VersionControl,
    head: CommitId,
    max_depth: usize,
) -> Result<Vec<CommitId>> {
    let mut seen = HashSet::new();
    let mut lineage = Vec::new();
    let mut current = Some(head);

    while let Some(commit) = current {
        if !seen.insert(commit.clone()) {
            return Err(RecipefyError::HistoryCycle {
                commit_id: commit.to_string(),
            }
            .into());
        }
        if lineage.len() == max_depth {
            return Err(RecipefyError::HistoryTooDeep { max_depth }.into());
        }
        current = vcs.parent(&commit)?;
        lineage.push(commit);
    }

    Ok(lineage)
}
