//! Non-fatal snapshot checks.
//!
//! The diff engine never rejects a snapshot. These checks only report data
//! that breaks the model's documented ranges so callers can surface it.

use crate::diff::model::{Side, SnapshotAnomaly};
use crate::model::Snapshot;
use std::collections::BTreeMap;

/// Inspect one snapshot and return its anomalies in a deterministic order:
/// serving size, then steps by order, then ingredients in list order.
pub fn inspect_snapshot(side: Side, snapshot: &Snapshot) -> Vec<SnapshotAnomaly> {
    let mut anomalies = Vec::new();

    if snapshot.serving_size == 0 {
        anomalies.push(SnapshotAnomaly::ServingSizeZero { side });
    }

    let mut order_counts: BTreeMap<u32, usize> = BTreeMap::new();
    for step in &snapshot.steps {
        *order_counts.entry(step.order).or_default() += 1;
    }
    for step in snapshot.steps.iter().filter(|s| s.order == 0) {
        anomalies.push(SnapshotAnomaly::StepOrderZero {
            side,
            details: step.details.clone(),
        });
    }
    for (order, count) in order_counts {
        if count > 1 {
            anomalies.push(SnapshotAnomaly::DuplicateStepOrder { side, order, count });
        }
    }

    for ingredient in &snapshot.ingredients {
        if !ingredient.amount.is_finite() || ingredient.amount < 0.0 {
            anomalies.push(SnapshotAnomaly::InvalidAmount {
                side,
                name: ingredient.name.clone(),
            });
        }
    }

    anomalies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ingredient, Step};

    #[test]
    fn test_well_formed_snapshot_has_no_anomalies() {
        let snapshot = Snapshot::new(
            4,
            vec![Ingredient::new("flour", "cups", 2.0)],
            vec![Step::new(1, "Mix"), Step::new(2, "Bake")],
        );
        assert!(inspect_snapshot(Side::New, &snapshot).is_empty());
    }

    #[test]
    fn test_reports_each_anomaly_kind() {
        let snapshot = Snapshot::new(
            0,
            vec![Ingredient::new("salt", "tsp", -1.0)],
            vec![Step::new(0, "Mix"), Step::new(2, "Bake"), Step::new(2, "Cool")],
        );
        let anomalies = inspect_snapshot(Side::Old, &snapshot);

        assert_eq!(
            anomalies,
            vec![
                SnapshotAnomaly::ServingSizeZero { side: Side::Old },
                SnapshotAnomaly::StepOrderZero {
                    side: Side::Old,
                    details: "Mix".to_string()
                },
                SnapshotAnomaly::DuplicateStepOrder {
                    side: Side::Old,
                    order: 2,
                    count: 2
                },
                SnapshotAnomaly::InvalidAmount {
                    side: Side::Old,
                    name: "salt".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_malformed_counts_surface_as_anomalies() {
        let json = r#"{
            "servingSize": -1,
            "steps": [{"order": 1.5, "details": "Mix"}, {"order": 2, "details": "Bake"}]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();

        assert_eq!(
            inspect_snapshot(Side::New, &snapshot),
            vec![
                SnapshotAnomaly::ServingSizeZero { side: Side::New },
                SnapshotAnomaly::StepOrderZero {
                    side: Side::New,
                    details: "Mix".to_string()
                },
            ]
        );
    }
}
