//! In-memory version-control collaborator.
//!
//! Holds commits and branch pointers in maps. Used by the CLI (loaded from a
//! JSON history document) and by tests. Nothing is persisted.
//!
//! ## History document
//!
//! ```json
//! {
//!   "commits": [
//!     { "id": "c1", "parent": null, "message": "Initial", "author_id": "u1",
//!       "created_at": "2026-01-01T00:00:00Z",
//!       "snapshot": { "servingSize": 4, "ingredients": [], "steps": [] } }
//!   ],
//!   "branches": [ { "name": "main", "head": "c1" } ]
//! }
//! ```
//!
//! Commits may appear in any order. Parent links are not checked on load; a
//! dangling parent surfaces as `NotFound` when history reaches it.

use crate::vcs::VersionControl;
use crate::Result;
use chrono::Utc;
use recipefy_core::errors::{ExError, RecipefyError};
use recipefy_core::{CommitMetadata, Snapshot};
use recipefy_core_types::{AuthorId, CommitId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Top-level history file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryDocument {
    #[serde(default)]
    pub commits: Vec<CommitRecord>,
    #[serde(default)]
    pub branches: Vec<BranchRecord>,
}

/// One commit in a history document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    #[serde(flatten)]
    pub metadata: CommitMetadata,
    #[serde(default)]
    pub snapshot: Snapshot,
}

/// Branch created by [`MemoryVersionControl::copy_branch`]
pub const MAIN_BRANCH: &str = "main";

/// One branch pointer in a history document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRecord {
    pub name: String,
    pub head: CommitId,
}

#[derive(Debug, Clone)]
struct StoredCommit {
    metadata: CommitMetadata,
    snapshot: Arc<Snapshot>,
}

/// HashMap-backed [`VersionControl`] implementation
#[derive(Debug, Clone, Default)]
pub struct MemoryVersionControl {
    commits: HashMap<CommitId, StoredCommit>,
    branches: BTreeMap<String, CommitId>,
}

impl MemoryVersionControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parsed history document.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists`: duplicate commit id or branch name
    /// - `NotFound`: a branch points at a commit not in the document
    pub fn from_document(document: HistoryDocument) -> Result<Self> {
        let mut vcs = Self::new();
        for record in document.commits {
            vcs.insert_commit(record)?;
        }
        for branch in document.branches {
            vcs.create_branch(&branch.name, &branch.head)?;
        }
        Ok(vcs)
    }

    /// Parse a JSON history document.
    ///
    /// # Errors
    ///
    /// - `Serialization`: malformed JSON
    /// - see [`MemoryVersionControl::from_document`]
    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: HistoryDocument =
            serde_json::from_str(content).map_err(|e| ExError::from(RecipefyError::from(e)))?;
        Self::from_document(document)
    }

    /// Read and parse a JSON history file.
    ///
    /// # Errors
    ///
    /// - `Io`: file cannot be read
    /// - see [`MemoryVersionControl::from_json_str`]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ExError::from(RecipefyError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        Self::from_json_str(&content).map_err(|e| e.with_op("load_history"))
    }

    /// Export the current state as a history document, commits sorted by id.
    pub fn to_document(&self) -> HistoryDocument {
        let mut commits: Vec<CommitRecord> = self
            .commits
            .values()
            .map(|stored| CommitRecord {
                metadata: stored.metadata.clone(),
                snapshot: (*stored.snapshot).clone(),
            })
            .collect();
        commits.sort_by(|a, b| a.metadata.id.cmp(&b.metadata.id));

        let branches = self
            .branches
            .iter()
            .map(|(name, head)| BranchRecord {
                name: name.clone(),
                head: head.clone(),
            })
            .collect();

        HistoryDocument { commits, branches }
    }

    /// Add a fully specified commit.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists`: commit id taken
    pub fn insert_commit(&mut self, record: CommitRecord) -> Result<()> {
        let id = record.metadata.id.clone();
        if self.commits.contains_key(&id) {
            return Err(RecipefyError::CommitAlreadyExists {
                commit_id: id.to_string(),
            }
            .into());
        }
        self.commits.insert(
            id,
            StoredCommit {
                metadata: record.metadata,
                snapshot: Arc::new(record.snapshot),
            },
        );
        Ok(())
    }

    /// Start a new recipe: record a root commit and point `branch` at it.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists`: branch name taken
    pub fn init_recipe(
        &mut self,
        branch: &str,
        snapshot: Snapshot,
        message: impl Into<String>,
        author: AuthorId,
    ) -> Result<CommitId> {
        if self.branches.contains_key(branch) {
            return Err(RecipefyError::BranchAlreadyExists {
                branch: branch.to_string(),
            }
            .into());
        }
        let id = self.record_commit(None, snapshot, message.into(), author)?;
        self.branches.insert(branch.to_string(), id.clone());
        Ok(id)
    }

    /// Record a commit on top of `branch` and advance the branch.
    ///
    /// # Errors
    ///
    /// - `NotFound`: unknown branch
    pub fn commit(
        &mut self,
        branch: &str,
        snapshot: Snapshot,
        message: impl Into<String>,
        author: AuthorId,
    ) -> Result<CommitId> {
        let parent = self.branch_head(branch)?;
        let id = self.record_commit(Some(parent), snapshot, message.into(), author)?;
        self.branches.insert(branch.to_string(), id.clone());
        Ok(id)
    }

    /// Create a branch pointing at an existing commit.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists`: branch name taken
    /// - `NotFound`: unknown commit
    pub fn create_branch(&mut self, name: &str, from: &CommitId) -> Result<()> {
        if self.branches.contains_key(name) {
            return Err(RecipefyError::BranchAlreadyExists {
                branch: name.to_string(),
            }
            .into());
        }
        self.stored(from)?;
        self.branches.insert(name.to_string(), from.clone());
        Ok(())
    }

    /// Copy `branch` into a fresh store for a new recipe: every commit on its
    /// lineage is carried over unchanged and a `main` branch points at the
    /// same head. Other branches and unrelated commits are left behind.
    ///
    /// # Errors
    ///
    /// - `NotFound`: unknown branch, or a commit on its lineage is missing
    /// - `CycleDetected`: parent links loop
    pub fn copy_branch(&self, branch: &str) -> Result<Self> {
        let head = self.branch_head(branch)?;

        let mut copy = Self::new();
        let mut seen = HashSet::new();
        let mut current = Some(head.clone());
        while let Some(commit) = current {
            if !seen.insert(commit.clone()) {
                return Err(ExError::from(RecipefyError::HistoryCycle {
                    commit_id: commit.to_string(),
                })
                .with_op("copy_branch"));
            }
            let stored = self.stored(&commit).map_err(|e| e.with_op("copy_branch"))?;
            current = stored.metadata.parent.clone();
            copy.commits.insert(commit, stored.clone());
        }
        copy.branches.insert(MAIN_BRANCH.to_string(), head);
        Ok(copy)
    }

    /// Branch names in lexical order
    pub fn branches(&self) -> Vec<&str> {
        self.branches.keys().map(String::as_str).collect()
    }

    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    fn record_commit(
        &mut self,
        parent: Option<CommitId>,
        snapshot: Snapshot,
        message: String,
        author_id: AuthorId,
    ) -> Result<CommitId> {
        let id = CommitId::new();
        self.insert_commit(CommitRecord {
            metadata: CommitMetadata {
                id: id.clone(),
                parent,
                message,
                author_id,
                created_at: Utc::now(),
            },
            snapshot,
        })?;
        Ok(id)
    }

    fn stored(&self, commit: &CommitId) -> Result<&StoredCommit> {
        self.commits.get(commit).ok_or_else(|| {
            ExError::from(RecipefyError::CommitNotFound {
                commit_id: commit.to_string(),
            })
        })
    }
}

impl VersionControl for MemoryVersionControl {
    fn snapshot(&self, commit: &CommitId) -> Result<Arc<Snapshot>> {
        self.stored(commit)
            .map(|stored| Arc::clone(&stored.snapshot))
            .map_err(|e| e.with_op("snapshot"))
    }

    fn parent(&self, commit: &CommitId) -> Result<Option<CommitId>> {
        self.stored(commit)
            .map(|stored| stored.metadata.parent.clone())
            .map_err(|e| e.with_op("parent"))
    }

    fn metadata(&self, commit: &CommitId) -> Result<CommitMetadata> {
        self.stored(commit)
            .map(|stored| stored.metadata.clone())
            .map_err(|e| e.with_op("metadata"))
    }

    fn branch_head(&self, branch: &str) -> Result<CommitId> {
        self.branches.get(branch).cloned().ok_or_else(|| {
            ExError::from(RecipefyError::BranchNotFound {
                branch: branch.to_string(),
            })
            .with_op("branch_head")
        })
    }
}
