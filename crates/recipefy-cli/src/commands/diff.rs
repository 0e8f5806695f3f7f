//! Diff command
//!
//! Usage: recipefy diff [--old <FILE>] --new <FILE> [--format json|summary]
//!        recipefy diff --pair <FILE> [--format json|summary]
//!
//! Without `--old` the new snapshot is treated as a recipe's first commit.

use super::{read_json, OutputFormat};
use clap::Args;
use recipefy_core::diff::{render_human_summary, try_compute_changes};
use recipefy_core::Snapshot;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Parent snapshot (omit for a first commit)
    #[arg(long, conflicts_with = "pair")]
    pub old: Option<PathBuf>,

    /// Child snapshot
    #[arg(long, conflicts_with = "pair")]
    pub new: Option<PathBuf>,

    /// Single file holding `{ "old": ..., "new": ... }`
    #[arg(long)]
    pub pair: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Both sides of a comparison; either may be null
#[derive(Debug, Deserialize)]
struct SnapshotPair {
    #[serde(default)]
    old: Option<Snapshot>,
    #[serde(default)]
    new: Option<Snapshot>,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let pair = match &args.pair {
        Some(path) => read_json::<SnapshotPair>(path)?,
        None => SnapshotPair {
            old: args.old.as_deref().map(read_json::<Snapshot>).transpose()?,
            new: args.new.as_deref().map(read_json::<Snapshot>).transpose()?,
        },
    };

    let changes = try_compute_changes(pair.old.as_ref(), pair.new.as_ref())?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&changes)?),
        OutputFormat::Summary => print!("{}", render_human_summary(&changes)),
    }

    Ok(())
}
