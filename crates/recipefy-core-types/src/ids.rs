//! Identifier newtypes
//!
//! Commit and author identifiers are opaque strings supplied by the
//! version-control collaborator. Fresh identifiers use UUIDv7 so that
//! lexical order follows creation order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of an immutable commit
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    /// Generate a new random CommitId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for CommitId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for CommitId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the user who authored a commit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AuthorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_id_generation() {
        let id1 = CommitId::new();
        let id2 = CommitId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_commit_id_display() {
        let id = CommitId::from("c-001");
        assert_eq!(format!("{}", id), "c-001");
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let commit = CommitId::from("c-001");
        let author = AuthorId::from("alice");

        assert_eq!(serde_json::to_string(&commit).unwrap(), "\"c-001\"");
        assert_eq!(serde_json::to_string(&author).unwrap(), "\"alice\"");

        let parsed: CommitId = serde_json::from_str("\"c-002\"").unwrap();
        assert_eq!(parsed.as_str(), "c-002");
    }
}
