//! Engine settings.
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! or missing file is valid.
//!
//! ```toml
//! [logging]
//! profile = "development"
//!
//! [history]
//! parallel = true
//! cache = true
//! max_depth = 10000
//! ```

use crate::Result;
use recipefy_core::errors::{ExError, RecipefyError};
use recipefy_core::logging_facility::Profile;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default cap on commits walked by a history request
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub history: HistorySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    pub profile: Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistorySettings {
    /// Compute per-commit changes on the rayon pool
    pub parallel: bool,
    /// Reuse results through a [`crate::ChangeCache`]
    pub cache: bool,
    /// Longest parent chain a history request will walk
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            parallel: true,
            cache: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    ///
    /// # Errors
    ///
    /// - `InvalidSettings`: malformed TOML, unknown keys, or `max_depth = 0`
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content).map_err(|e| {
            ExError::from(RecipefyError::InvalidSettings {
                reason: e.to_string(),
            })
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file.
    ///
    /// # Errors
    ///
    /// - `Io`: file cannot be read
    /// - see [`Settings::from_toml_str`]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ExError::from(RecipefyError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        Self::from_toml_str(&content).map_err(|e| e.with_entity_id(path.display().to_string()))
    }

    /// Settings from `path` when given, defaults otherwise.
    ///
    /// # Errors
    ///
    /// See [`Settings::load`]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    fn validate(&self) -> Result<()> {
        if self.history.max_depth == 0 {
            return Err(RecipefyError::InvalidSettings {
                reason: "history.max_depth must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
