//! Classifier: turns a [`MatchSet`] into a [`CollectionDiff`].
//!
//! Each matched pair lands in exactly one category:
//!
//! | pair kind | content equal | anchored | category |
//! |---|---|---|---|
//! | exact | yes | yes | unchanged |
//! | exact | yes | no | repositioned |
//! | identity | no | any | modified |
//! | identity | yes | yes | unchanged (renumbered only) |
//! | identity | yes | no | repositioned |
//! | position | no | any | modified |
//!
//! Content edits win over movement: a record that changed and moved is
//! reported as modified. Unpaired records are added or removed.

use crate::diff::equality::Record;
use crate::diff::matcher::{MatchKind, MatchSet, Pairing};
use crate::diff::model::{Change, CollectionDiff, ServingSizeDiff};

/// Outcome category of one matched pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    Unchanged,
    Modified,
    Repositioned,
}

/// Decide the category of one pair.
pub fn pair_outcome<T: Record>(old: &T, new: &T, pairing: &Pairing) -> PairOutcome {
    let content_changed = match pairing.kind {
        MatchKind::Exact => false,
        MatchKind::Identity => !old.same_content(new),
        MatchKind::Position => true,
    };

    if content_changed {
        PairOutcome::Modified
    } else if pairing.anchored {
        PairOutcome::Unchanged
    } else {
        PairOutcome::Repositioned
    }
}

/// Build the collection diff for `old` -> `new` from their match set.
///
/// Added records are listed in new-list order, removed records in old-list
/// order, modified and repositioned pairs in new-list order.
pub fn classify<T: Record + Clone>(old: &[T], new: &[T], matches: &MatchSet) -> CollectionDiff<T> {
    let mut diff = CollectionDiff::empty();

    for pairing in &matches.pairs {
        let old_record = &old[pairing.old_index];
        let new_record = &new[pairing.new_index];
        match pair_outcome(old_record, new_record, pairing) {
            PairOutcome::Unchanged => diff.unchanged += 1,
            PairOutcome::Modified => diff.modified.push(Change {
                old: old_record.clone(),
                new: new_record.clone(),
            }),
            PairOutcome::Repositioned => diff.repositioned.push(Change {
                old: old_record.clone(),
                new: new_record.clone(),
            }),
        }
    }

    diff.added = matches
        .unmatched_new
        .iter()
        .map(|&idx| new[idx].clone())
        .collect();
    diff.removed = matches
        .unmatched_old
        .iter()
        .map(|&idx| old[idx].clone())
        .collect();

    diff.pure_reposition = diff.added.is_empty()
        && diff.removed.is_empty()
        && diff.modified.is_empty()
        && !diff.repositioned.is_empty();

    diff
}

/// Scalar diff for the serving size.
pub fn classify_serving_size(old: u32, new: u32) -> Option<ServingSizeDiff> {
    (old != new).then_some(ServingSizeDiff {
        old: Some(old),
        new,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::matcher::match_records;
    use crate::model::{Ingredient, Step};

    fn diff_steps(old: &[Step], new: &[Step]) -> CollectionDiff<Step> {
        classify(old, new, &match_records(old, new))
    }

    fn diff_ingredients(old: &[Ingredient], new: &[Ingredient]) -> CollectionDiff<Ingredient> {
        classify(old, new, &match_records(old, new))
    }

    #[test]
    fn test_step_edit_in_place_is_modified() {
        let diff = diff_steps(&[Step::new(2, "Mix")], &[Step::new(2, "Stir")]);

        assert_eq!(diff.modified.len(), 1);
        assert_eq!(diff.modified[0].old.details, "Mix");
        assert_eq!(diff.modified[0].new.details, "Stir");
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
    }

    #[test]
    fn test_step_swap_repositions_one_step() {
        let old = [Step::new(1, "Mix"), Step::new(2, "Bake")];
        let new = [Step::new(1, "Bake"), Step::new(2, "Mix")];
        let diff = diff_steps(&old, &new);

        assert_eq!(diff.repositioned.len(), 1);
        assert_eq!(diff.unchanged, 1);
        assert!(diff.pure_reposition);
        assert!(diff.modified.is_empty());
    }

    #[test]
    fn test_step_renumbering_after_insert_is_not_a_move() {
        let old = [Step::new(1, "Mix"), Step::new(2, "Bake")];
        let new = [
            Step::new(1, "Preheat"),
            Step::new(2, "Mix"),
            Step::new(3, "Bake"),
        ];
        let diff = diff_steps(&old, &new);

        assert_eq!(diff.added, vec![Step::new(1, "Preheat")]);
        assert!(diff.repositioned.is_empty());
        assert_eq!(diff.unchanged, 2);
        assert!(!diff.pure_reposition);
    }

    #[test]
    fn test_ingredient_changed_and_moved_is_modified() {
        let old = [
            Ingredient::new("flour", "cups", 2.0),
            Ingredient::new("sugar", "cups", 1.0),
        ];
        let new = [
            Ingredient::new("sugar", "cups", 1.0),
            Ingredient::new("flour", "cups", 3.0),
        ];
        let diff = diff_ingredients(&old, &new);

        assert_eq!(diff.modified.len(), 1);
        assert_eq!(diff.modified[0].new.amount, 3.0);
        assert!(diff.repositioned.is_empty());
        assert_eq!(diff.unchanged, 1);
        assert!(!diff.pure_reposition);
    }

    #[test]
    fn test_mirrored_swap_with_edit_classifies_the_same() {
        let forward = diff_ingredients(
            &[
                Ingredient::new("salt", "tsp", 1.0),
                Ingredient::new("flour", "cups", 2.0),
            ],
            &[
                Ingredient::new("flour", "cups", 3.0),
                Ingredient::new("salt", "tsp", 1.0),
            ],
        );
        let mirrored = diff_ingredients(
            &[
                Ingredient::new("flour", "cups", 2.0),
                Ingredient::new("salt", "tsp", 1.0),
            ],
            &[
                Ingredient::new("salt", "tsp", 1.0),
                Ingredient::new("flour", "cups", 3.0),
            ],
        );

        for diff in [&forward, &mirrored] {
            assert_eq!(diff.modified.len(), 1);
            assert!(diff.repositioned.is_empty());
            assert_eq!(diff.unchanged, 1);
        }
        assert_eq!(forward.modified, mirrored.modified);
    }

    #[test]
    fn test_renamed_ingredient_is_added_and_removed() {
        let diff = diff_ingredients(
            &[Ingredient::new("caster sugar", "g", 100.0)],
            &[Ingredient::new("sugar", "g", 100.0)],
        );

        assert_eq!(diff.added.len(), 1);
        assert_eq!(diff.removed.len(), 1);
        assert!(diff.modified.is_empty());
    }

    #[test]
    fn test_serving_size() {
        assert_eq!(classify_serving_size(4, 4), None);
        assert_eq!(
            classify_serving_size(4, 6),
            Some(ServingSizeDiff {
                old: Some(4),
                new: 6
            })
        );
    }
}
