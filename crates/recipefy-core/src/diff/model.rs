//! Change result types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq` and
//! serialize with camelCase field names.
//! Every collection diff is populated even when nothing changed (empty
//! vectors, `pure_reposition: false`) so consumers can process results
//! uniformly.

use crate::model::{Ingredient, Step};
use serde::{Deserialize, Serialize};

/// The classified difference between a parent and a child snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeResult {
    /// True when the child has no parent; everything in it is an addition
    pub first_commit: bool,
    /// Present only when the serving size differs (always present for a
    /// first commit, with `old: None`)
    pub serving_size_diff: Option<ServingSizeDiff>,
    pub ingredient_diff: CollectionDiff<Ingredient>,
    pub step_diff: CollectionDiff<Step>,
    /// Non-fatal data anomalies found in either snapshot
    #[serde(default)]
    pub anomalies: Vec<SnapshotAnomaly>,
}

impl ChangeResult {
    /// True if any category in any collection is non-empty or the serving
    /// size changed.
    pub fn has_changes(&self) -> bool {
        self.serving_size_diff.is_some()
            || self.ingredient_diff.has_changes()
            || self.step_diff.has_changes()
    }

    /// Summary counts for compact display.
    pub fn summary(&self) -> ChangeSummary {
        crate::diff::aggregate::summarize(self)
    }
}

/// Old and new serving size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServingSizeDiff {
    /// `None` only for a first commit
    pub old: Option<u32>,
    pub new: u32,
}

/// A record paired across the two snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Change<T> {
    pub old: T,
    pub new: T,
}

/// Classified difference of one ordered collection.
///
/// Every old record is in exactly one of `removed`, `modified[..].old`,
/// `repositioned[..].old` or the unchanged count; every new record is in
/// exactly one of `added`, `modified[..].new`, `repositioned[..].new` or the
/// unchanged count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDiff<T> {
    pub added: Vec<T>,
    pub removed: Vec<T>,
    /// Same logical record with edited content
    pub modified: Vec<Change<T>>,
    /// Same content, moved relative to the records around it
    pub repositioned: Vec<Change<T>>,
    /// Number of records matched with neither an edit nor a move
    pub unchanged: usize,
    /// The only difference in this collection is ordering
    pub pure_reposition: bool,
}

impl<T> CollectionDiff<T> {
    pub fn empty() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
            modified: Vec::new(),
            repositioned: Vec::new(),
            unchanged: 0,
            pure_reposition: false,
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.added.is_empty()
            || !self.removed.is_empty()
            || !self.modified.is_empty()
            || !self.repositioned.is_empty()
    }
}

impl<T> Default for CollectionDiff<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Summary counts derived from a [`ChangeResult`].
///
/// Repositions are counted separately and never contribute to the other
/// three counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeSummary {
    pub additions: usize,
    pub deletions: usize,
    pub modifications: usize,
    pub repositions: usize,
}

/// Which snapshot an anomaly was found in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Old,
    New,
}

/// A non-fatal data anomaly. Anomalies never affect classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum SnapshotAnomaly {
    /// Serving size is zero (absent or invalid in the source)
    ServingSizeZero { side: Side },
    /// A step has order zero (absent or invalid in the source)
    StepOrderZero { side: Side, details: String },
    /// Two or more steps share an order value
    DuplicateStepOrder { side: Side, order: u32, count: usize },
    /// An ingredient has a negative or non-finite amount
    InvalidAmount { side: Side, name: String },
}
