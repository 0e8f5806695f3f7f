//! CLI subcommands

pub mod copy;
pub mod diff;
pub mod history;
pub mod show;

use clap::ValueEnum;
use recipefy_core::errors::{ExError, RecipefyError};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Output rendering shared by all subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Human-readable Markdown summary
    Summary,
}

/// Read and parse a JSON file, keeping the path in the error.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ExError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ExError::from(RecipefyError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    serde_json::from_str(&content).map_err(|e| {
        ExError::from(RecipefyError::from(e)).with_entity_id(path.display().to_string())
    })
}
