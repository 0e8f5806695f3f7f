use chrono::{DateTime, Utc};
use recipefy_core_types::{AuthorId, CommitId};
use serde::{Deserialize, Serialize};

/// Metadata of one commit as supplied by the version-control collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMetadata {
    pub id: CommitId,
    /// `None` for the root commit of a recipe
    #[serde(default)]
    pub parent: Option<CommitId>,
    #[serde(default)]
    pub message: String,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
}

impl CommitMetadata {
    /// True when this commit has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_commit_has_no_parent() {
        let json = r#"{
            "id": "c1",
            "message": "Initial commit",
            "author_id": "u1",
            "created_at": "2026-01-01T00:00:00Z"
        }"#;
        let meta: CommitMetadata = serde_json::from_str(json).unwrap();
        assert!(meta.is_root());
        assert_eq!(meta.id.as_str(), "c1");
    }
}
