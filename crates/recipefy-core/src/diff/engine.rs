//! Snapshot change computation.
//!
//! The core entry point is [`compute_changes`], which accepts the parent
//! snapshot (or `None` for a root commit) and the child snapshot and
//! produces a [`ChangeResult`].

use crate::diff::classifier::{classify, classify_serving_size};
use crate::diff::matcher::match_records;
use crate::diff::model::{ChangeResult, CollectionDiff, ServingSizeDiff, Side};
use crate::errors::{ExError, RecipefyError};
use crate::model::Snapshot;
use crate::rules::inspect_snapshot;

/// Whether the child commit has a parent snapshot to diff against.
///
/// A root commit is not the same as a commit whose parent is blank: a blank
/// parent is diffed normally.
#[derive(Debug, Clone, Copy)]
pub enum Lineage<'a> {
    Root,
    HasParent(&'a Snapshot),
}

impl<'a> From<Option<&'a Snapshot>> for Lineage<'a> {
    fn from(parent: Option<&'a Snapshot>) -> Self {
        match parent {
            Some(snapshot) => Lineage::HasParent(snapshot),
            None => Lineage::Root,
        }
    }
}

/// Compute the classified changes from `old` to `new`.
///
/// `old` is `None` exactly when `new` belongs to a root commit. The function
/// is deterministic and never mutates its inputs.
pub fn compute_changes(old: Option<&Snapshot>, new: &Snapshot) -> ChangeResult {
    match Lineage::from(old) {
        Lineage::Root => first_commit_changes(new),
        Lineage::HasParent(parent) => parent_changes(parent, new),
    }
}

/// Fallible form of [`compute_changes`] for callers that hold optional
/// snapshots on both sides.
///
/// # Errors
///
/// - `Precondition`: `new` is `None`
pub fn try_compute_changes(
    old: Option<&Snapshot>,
    new: Option<&Snapshot>,
) -> Result<ChangeResult, ExError> {
    let new = new.ok_or_else(|| ExError::from(RecipefyError::MissingNewSnapshot))?;
    Ok(compute_changes(old, new))
}

/// Root commit: everything in `new` is an addition. No matcher pass runs.
fn first_commit_changes(new: &Snapshot) -> ChangeResult {
    let mut ingredient_diff = CollectionDiff::empty();
    ingredient_diff.added = new.ingredients.clone();

    let mut step_diff = CollectionDiff::empty();
    step_diff.added = new.steps.clone();

    ChangeResult {
        first_commit: true,
        serving_size_diff: Some(ServingSizeDiff {
            old: None,
            new: new.serving_size,
        }),
        ingredient_diff,
        step_diff,
        anomalies: inspect_snapshot(Side::New, new),
    }
}

fn parent_changes(old: &Snapshot, new: &Snapshot) -> ChangeResult {
    let ingredient_matches = match_records(&old.ingredients, &new.ingredients);
    let step_matches = match_records(&old.steps, &new.steps);

    let mut anomalies = inspect_snapshot(Side::Old, old);
    anomalies.extend(inspect_snapshot(Side::New, new));

    ChangeResult {
        first_commit: false,
        serving_size_diff: classify_serving_size(old.serving_size, new.serving_size),
        ingredient_diff: classify(&old.ingredients, &new.ingredients, &ingredient_matches),
        step_diff: classify(&old.steps, &new.steps, &step_matches),
        anomalies,
    }
}
