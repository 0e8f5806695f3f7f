//! Copy command
//!
//! Usage: recipefy copy --history <FILE> --branch <NAME> [--output <FILE>]
//!
//! Writes a new history document whose `main` branch starts from the copied
//! branch's head, for forking a recipe.

use clap::Args;
use recipefy_core::errors::{ExError, RecipefyError};
use recipefy_engine::MemoryVersionControl;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CopyArgs {
    /// History document (JSON)
    #[arg(long)]
    pub history: PathBuf,

    /// Branch to copy
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Where to write the new document; stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Execute copy command
pub fn execute(args: CopyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let vcs = MemoryVersionControl::load(&args.history)?;
    let copy = vcs.copy_branch(&args.branch)?;
    let json = serde_json::to_string_pretty(&copy.to_document())?;

    match args.output {
        Some(path) => std::fs::write(&path, json).map_err(|e| {
            ExError::from(RecipefyError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?,
        None => println!("{json}"),
    }

    Ok(())
}
