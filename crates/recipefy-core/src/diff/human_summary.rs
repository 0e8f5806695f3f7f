//! Human-readable summary renderer for snapshot changes.

use crate::diff::model::{ChangeResult, CollectionDiff, SnapshotAnomaly};
use std::fmt::Display;

/// Render a Markdown summary of a [`ChangeResult`].
///
/// Intended for commit detail views. It is informational only and does not
/// affect the structured result.
pub fn render_human_summary(result: &ChangeResult) -> String {
    let mut out = String::new();

    out.push_str("## Recipe Changes\n\n");

    if result.first_commit {
        out.push_str("_Initial commit_\n\n");
    }

    let summary = result.summary();
    out.push_str(&format!(
        "**Additions**: {}  \n**Deletions**: {}  \n**Modifications**: {}  \n**Reordered**: {}\n\n",
        summary.additions, summary.deletions, summary.modifications, summary.repositions
    ));

    if result.has_changes() {
        if let Some(serving) = &result.serving_size_diff {
            out.push_str("### Serving Size\n\n");
            match serving.old {
                Some(old) => out.push_str(&format!("- {} -> {}\n\n", old, serving.new)),
                None => out.push_str(&format!("- {}\n\n", serving.new)),
            }
        }

        render_collection(&mut out, "Ingredients", &result.ingredient_diff);
        render_collection(&mut out, "Steps", &result.step_diff);
    } else {
        out.push_str("_No changes._\n\n");
    }

    // Warnings are listed whether or not anything changed
    if !result.anomalies.is_empty() {
        out.push_str("### Data Warnings\n\n");
        for anomaly in &result.anomalies {
            out.push_str(&format!("- {}\n", describe_anomaly(anomaly)));
        }
        out.push('\n');
    }

    out
}

fn render_collection<T: Display>(out: &mut String, title: &str, diff: &CollectionDiff<T>) {
    if !diff.has_changes() {
        return;
    }

    out.push_str(&format!("### {title}\n\n"));

    if diff.pure_reposition {
        out.push_str("- _Reordered_\n\n");
        return;
    }

    for record in &diff.added {
        out.push_str(&format!("- **Added**: {record}\n"));
    }
    for record in &diff.removed {
        out.push_str(&format!("- **Removed**: {record}\n"));
    }
    for change in &diff.modified {
        out.push_str(&format!("- **Changed**: {} -> {}\n", change.old, change.new));
    }
    for change in &diff.repositioned {
        out.push_str(&format!("- **Moved**: {}\n", change.new));
    }
    out.push('\n');
}

fn describe_anomaly(anomaly: &SnapshotAnomaly) -> String {
    match anomaly {
        SnapshotAnomaly::ServingSizeZero { side } => {
            format!("{side:?} snapshot has a serving size of zero")
        }
        SnapshotAnomaly::StepOrderZero { side, details } => {
            format!("{side:?} snapshot step `{details}` has no order")
        }
        SnapshotAnomaly::DuplicateStepOrder { side, order, count } => {
            format!("{side:?} snapshot has {count} steps numbered {order}")
        }
        SnapshotAnomaly::InvalidAmount { side, name } => {
            format!("{side:?} snapshot ingredient `{name}` has an invalid amount")
        }
    }
}
