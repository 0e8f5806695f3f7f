//! Record matcher.
//!
//! Pairs records of an old and a new collection using the equality rules in
//! priority order:
//!
//! 1. exact record matches,
//! 2. identity matches among what is left,
//! 3. position matches among what is left (only for records that carry an
//!    explicit position).
//!
//! Within each pass new records are visited in list order and each takes the
//! first still-unpaired old record that satisfies the rule, so duplicates
//! pair up by order inside their duplicate group.
//!
//! Movement is then decided on the content-anchored pairs: exact pairs and
//! identity pairs whose content is unchanged. The longest chain of those
//! pairs whose old and new sequence ranks both increase has not moved. Pairs
//! off that chain are the ones that moved. Edited pairs are always reported
//! as modified, so they take no part in the chain.

use crate::diff::equality::Record;

/// Which rule produced a pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Identity,
    Position,
}

/// One old record paired with one new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub old_index: usize,
    pub new_index: usize,
    pub kind: MatchKind,
    /// False when the pair moved relative to the other content-anchored
    /// pairs. Position pairs and edited identity pairs are always anchored.
    pub anchored: bool,
}

/// Output of [`match_records`]. Indices refer to the input slices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    /// Sorted by `new_index`
    pub pairs: Vec<Pairing>,
    /// Old records with no counterpart, ascending
    pub unmatched_old: Vec<usize>,
    /// New records with no counterpart, ascending
    pub unmatched_new: Vec<usize>,
}

/// Pair the records of `old` and `new`.
pub fn match_records<T: Record>(old: &[T], new: &[T]) -> MatchSet {
    let passes: [(MatchKind, fn(&T, &T) -> bool); 3] = [
        (MatchKind::Exact, T::same_record as fn(&T, &T) -> bool),
        (MatchKind::Identity, T::same_identity as fn(&T, &T) -> bool),
        (MatchKind::Position, T::same_position as fn(&T, &T) -> bool),
    ];

    let mut old_taken = vec![false; old.len()];
    let mut new_pairs: Vec<Option<(usize, MatchKind)>> = vec![None; new.len()];

    for (kind, rule) in passes {
        for (new_index, new_record) in new.iter().enumerate() {
            if new_pairs[new_index].is_some() {
                continue;
            }
            let candidate = old
                .iter()
                .enumerate()
                .find(|(old_index, old_record)| {
                    !old_taken[*old_index] && rule(*old_record, new_record)
                })
                .map(|(old_index, _)| old_index);
            if let Some(old_index) = candidate {
                old_taken[old_index] = true;
                new_pairs[new_index] = Some((old_index, kind));
            }
        }
    }

    let mut pairs: Vec<Pairing> = new_pairs
        .iter()
        .enumerate()
        .filter_map(|(new_index, pair)| {
            pair.map(|(old_index, kind)| Pairing {
                old_index,
                new_index,
                kind,
                anchored: true,
            })
        })
        .collect();

    mark_moved(old, new, &mut pairs);

    let unmatched_old = old_taken
        .iter()
        .enumerate()
        .filter(|(_, taken)| !**taken)
        .map(|(idx, _)| idx)
        .collect();
    let unmatched_new = new_pairs
        .iter()
        .enumerate()
        .filter(|(_, pair)| pair.is_none())
        .map(|(idx, _)| idx)
        .collect();

    MatchSet {
        pairs,
        unmatched_old,
        unmatched_new,
    }
}

/// Clear `anchored` on every content-anchored pair that is not on the
/// longest order-preserving chain.
fn mark_moved<T: Record>(old: &[T], new: &[T], pairs: &mut [Pairing]) {
    let old_ranks = sequence_ranks(old);
    let new_ranks = sequence_ranks(new);

    // (new rank, old rank, index into pairs)
    let mut anchors: Vec<(usize, usize, usize)> = pairs
        .iter()
        .enumerate()
        .filter(|(_, p)| match p.kind {
            MatchKind::Exact => true,
            MatchKind::Identity => old[p.old_index].same_content(&new[p.new_index]),
            MatchKind::Position => false,
        })
        .map(|(idx, p)| (new_ranks[p.new_index], old_ranks[p.old_index], idx))
        .collect();
    anchors.sort_unstable();

    let chain = lis_indices(&anchors, |a| a.1);
    let mut on_chain = vec![false; anchors.len()];
    for idx in chain {
        on_chain[idx] = true;
    }

    for (anchor, stays) in anchors.iter().zip(on_chain) {
        pairs[anchor.2].anchored = stays;
    }
}

/// Rank of each record in display order: by explicit position when the
/// record has one (ties broken by list index), by list index otherwise.
pub fn sequence_ranks<T: Record>(items: &[T]) -> Vec<usize> {
    let mut by_position: Vec<usize> = (0..items.len()).collect();
    by_position.sort_by_key(|&idx| (items[idx].sequence_key(), idx));

    let mut ranks = vec![0; items.len()];
    for (rank, idx) in by_position.into_iter().enumerate() {
        ranks[idx] = rank;
    }
    ranks
}

/// Indices of one longest strictly increasing subsequence of `key`.
fn lis_indices<T, F>(items: &[T], key: F) -> Vec<usize>
where
    F: Fn(&T) -> usize,
{
    let mut piles: Vec<usize> = Vec::new();
    let mut predecessors: Vec<Option<usize>> = vec![None; items.len()];

    for (idx, item) in items.iter().enumerate() {
        let k = key(item);
        let pos = piles
            .binary_search_by_key(&k, |&pile_idx| key(&items[pile_idx]))
            .unwrap_or_else(|insert_pos| insert_pos);

        if pos > 0 {
            predecessors[idx] = Some(piles[pos - 1]);
        }

        if pos == piles.len() {
            piles.push(idx);
        } else {
            piles[pos] = idx;
        }
    }

    let Some(&last) = piles.last() else {
        return Vec::new();
    };

    let mut result = vec![last];
    let mut current = last;
    while let Some(prev) = predecessors[current] {
        result.push(prev);
        current = prev;
    }
    result.reverse();
    result
}
