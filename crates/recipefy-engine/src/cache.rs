//! Memoized change results.
//!
//! Commits are immutable, so the changes between a given parent and child
//! never change either. Results are shared as `Arc<ChangeResult>` between
//! the cache and its readers. The cache is unbounded; dropping or clearing
//! it is the owner's call.

use recipefy_core::ChangeResult;
use recipefy_core_types::CommitId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// `(parent, child)`; the parent is `None` for a root commit
pub type CacheKey = (Option<CommitId>, CommitId);

/// Thread-safe map from commit pair to computed changes
#[derive(Debug, Default)]
pub struct ChangeCache {
    entries: RwLock<HashMap<CacheKey, Arc<ChangeResult>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ChangeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a result. Counts a hit or a miss.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<ChangeResult>> {
        let found = self
            .entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned());
        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Store a result, returning the one now held for `key`. If another
    /// thread stored the same key first, its result is kept.
    pub fn insert(&self, key: CacheKey, result: ChangeResult) -> Arc<ChangeResult> {
        let result = Arc::new(result);
        match self.entries.write() {
            Ok(mut entries) => Arc::clone(entries.entry(key).or_insert(result)),
            Err(_) => result,
        }
    }

    /// Return the cached result for `key`, computing and storing it on a
    /// miss. `compute` runs outside the lock.
    pub fn get_or_compute<F>(&self, key: CacheKey, compute: F) -> Arc<ChangeResult>
    where
        F: FnOnce() -> ChangeResult,
    {
        if let Some(found) = self.get(&key) {
            return found;
        }
        self.insert(key, compute())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipefy_core::{compute_changes, Snapshot};
    use std::sync::atomic::AtomicUsize;

    fn key(parent: Option<&str>, child: &str) -> CacheKey {
        (parent.map(CommitId::from), CommitId::from(child))
    }

    #[test]
    fn test_get_or_compute_runs_once() {
        let cache = ChangeCache::new();
        let calls = AtomicUsize::new(0);
        let snapshot = Snapshot::new(2, Vec::new(), Vec::new());

        for _ in 0..3 {
            cache.get_or_compute(key(None, "c1"), || {
                calls.fetch_add(1, Ordering::Relaxed);
                compute_changes(None, &snapshot)
            });
        }

        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 2);
    }

    #[test]
    fn test_root_and_child_keys_are_distinct() {
        let cache = ChangeCache::new();
        let snapshot = Snapshot::new(2, Vec::new(), Vec::new());

        let root = cache.insert(key(None, "c1"), compute_changes(None, &snapshot));
        let child = cache.insert(key(Some("c0"), "c1"), compute_changes(Some(&snapshot), &snapshot));

        assert!(root.first_commit);
        assert!(!child.first_commit);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_first_insert_wins() {
        let cache = ChangeCache::new();
        let snapshot = Snapshot::new(2, Vec::new(), Vec::new());

        let first = cache.insert(key(None, "c1"), compute_changes(None, &snapshot));
        let second = cache.insert(key(None, "c1"), compute_changes(Some(&snapshot), &snapshot));

        assert!(Arc::ptr_eq(&first, &second));
    }
}
