use thiserror::Error;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// tests and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    NotFound,
    AlreadyExists,
    /// A caller broke an operation's contract (e.g. a diff without a "new" side)
    Precondition,

    // History traversal
    CycleDetected,
    HistoryTooDeep,

    // Integration/IO
    Io,
    Serialization,
    InvalidSettings,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Precondition => "ERR_PRECONDITION",
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ExErrorKind::HistoryTooDeep => "ERR_HISTORY_TOO_DEEP",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::InvalidSettings => "ERR_INVALID_SETTINGS",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus context for
/// debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (commit id, branch name, file path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for Recipefy operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecipefyError {
    /// A diff was requested without the "new" snapshot
    #[error("Cannot compute changes without a new snapshot")]
    MissingNewSnapshot,

    /// Commit not known to the version-control collaborator
    #[error("Commit not found: {commit_id}")]
    CommitNotFound { commit_id: String },

    /// Branch name not known to the version-control collaborator
    #[error("Branch not found: {branch}")]
    BranchNotFound { branch: String },

    /// Branch name already taken
    #[error("Branch already exists: {branch}")]
    BranchAlreadyExists { branch: String },

    /// Commit id already taken
    #[error("Commit already exists: {commit_id}")]
    CommitAlreadyExists { commit_id: String },

    /// Parent links loop back onto an already visited commit
    #[error("Parent chain cycles back to commit {commit_id}")]
    HistoryCycle { commit_id: String },

    /// Parent chain is longer than the configured limit
    #[error("History exceeds maximum depth of {max_depth} commits")]
    HistoryTooDeep { max_depth: usize },

    /// Settings file could not be parsed or holds invalid values
    #[error("Invalid settings: {reason}")]
    InvalidSettings { reason: String },

    /// Filesystem failure
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// JSON or TOML (de)serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from RecipefyError to ExError
impl From<RecipefyError> for ExError {
    fn from(err: RecipefyError) -> Self {
        match err {
            RecipefyError::MissingNewSnapshot => ExError::new(ExErrorKind::Precondition)
                .with_op("compute_changes")
                .with_message("a diff always has a new snapshot"),

            RecipefyError::CommitNotFound { commit_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(commit_id)
                .with_message("Commit not found"),

            RecipefyError::BranchNotFound { branch } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(branch)
                .with_message("Branch not found"),

            RecipefyError::BranchAlreadyExists { branch } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_id(branch)
                    .with_message("Branch already exists")
            }

            RecipefyError::CommitAlreadyExists { commit_id } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_id(commit_id)
                    .with_message("Commit already exists")
            }

            RecipefyError::HistoryCycle { commit_id } => ExError::new(ExErrorKind::CycleDetected)
                .with_entity_id(commit_id)
                .with_message("Parent chain contains a cycle"),

            RecipefyError::HistoryTooDeep { max_depth } => {
                ExError::new(ExErrorKind::HistoryTooDeep)
                    .with_message(format!("History exceeds {} commits", max_depth))
            }

            RecipefyError::InvalidSettings { reason } => {
                ExError::new(ExErrorKind::InvalidSettings)
                    .with_message(format!("Invalid settings: {}", reason))
            }

            RecipefyError::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_entity_id(path)
                .with_message(message),

            RecipefyError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to RecipefyError
impl From<serde_json::Error> for RecipefyError {
    fn from(err: serde_json::Error) -> Self {
        RecipefyError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::Precondition, "ERR_PRECONDITION"),
            (ExErrorKind::CycleDetected, "ERR_CYCLE_DETECTED"),
            (ExErrorKind::HistoryTooDeep, "ERR_HISTORY_TOO_DEEP"),
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
            (ExErrorKind::AlreadyExists, "ERR_ALREADY_EXISTS"),
            (ExErrorKind::InvalidSettings, "ERR_INVALID_SETTINGS"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_missing_new_snapshot_is_precondition() {
        let err: ExError = RecipefyError::MissingNewSnapshot.into();
        assert_eq!(err.kind(), ExErrorKind::Precondition);
        assert_eq!(err.op(), Some("compute_changes"));
    }

    #[test]
    fn test_commit_not_found_carries_entity_id() {
        let err: ExError = RecipefyError::CommitNotFound {
            commit_id: "c-9".to_string(),
        }
        .into();
        assert_eq!(err.code(), "ERR_NOT_FOUND");
        assert_eq!(err.entity_id(), Some("c-9"));
        assert!(err.to_string().contains("c-9"));
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::Io)
            .with_op("load_history")
            .with_entity_id("history.json")
            .with_message("disk gone");
        assert_eq!(
            err.to_string(),
            "[ERR_IO] in operation 'load_history': disk gone (entity_id: history.json)"
        );
    }

    #[test]
    fn test_branch_not_found_carries_branch_name() {
        let err: ExError = RecipefyError::BranchNotFound {
            branch: "vegan".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.entity_id(), Some("vegan"));
    }
}
