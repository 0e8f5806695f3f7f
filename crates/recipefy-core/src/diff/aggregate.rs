//! Summary counts for compact display (e.g. one line per commit in a
//! history list).

use crate::diff::model::{ChangeResult, ChangeSummary};

/// Reduce a [`ChangeResult`] to its summary counts.
///
/// - additions: added ingredients and steps, plus the serving size of a
///   first commit
/// - deletions: removed ingredients and steps
/// - modifications: modified ingredients and steps, plus a serving size
///   change between two commits
/// - repositions: repositioned ingredients and steps, counted nowhere else
pub fn summarize(result: &ChangeResult) -> ChangeSummary {
    let ingredients = &result.ingredient_diff;
    let steps = &result.step_diff;

    let mut summary = ChangeSummary {
        additions: ingredients.added.len() + steps.added.len(),
        deletions: ingredients.removed.len() + steps.removed.len(),
        modifications: ingredients.modified.len() + steps.modified.len(),
        repositions: ingredients.repositioned.len() + steps.repositioned.len(),
    };

    if let Some(serving) = &result.serving_size_diff {
        if serving.old.is_none() {
            summary.additions += 1;
        } else {
            summary.modifications += 1;
        }
    }

    summary
}
