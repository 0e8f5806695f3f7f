//! History command
//!
//! Usage: recipefy history --history <FILE> --branch <NAME>
//!        [--format json|summary] [--sequential] [--no-cache]

use super::OutputFormat;
use clap::Args;
use recipefy_engine::{branch_history, ChangeCache, CommitChanges, MemoryVersionControl, Settings};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// History document (JSON)
    #[arg(long)]
    pub history: PathBuf,

    /// Branch to walk from its head
    #[arg(long, default_value = "main")]
    pub branch: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Compute commits one at a time
    #[arg(long)]
    pub sequential: bool,

    /// Do not memoize per-commit results
    #[arg(long)]
    pub no_cache: bool,
}

/// Execute history command
pub fn execute(args: HistoryArgs, settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let mut history_settings = settings.history;
    if args.sequential {
        history_settings.parallel = false;
    }
    if args.no_cache {
        history_settings.cache = false;
    }

    let vcs = MemoryVersionControl::load(&args.history)?;
    let cache = ChangeCache::new();

    let entries = branch_history(&vcs, &args.branch, &history_settings, Some(&cache))?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Summary => {
            for entry in &entries {
                println!("{}", summary_line(entry));
            }
        }
    }

    Ok(())
}

/// `<id>  +adds -dels ~mods ^moves  <message>`
fn summary_line(entry: &CommitChanges) -> String {
    let s = &entry.summary;
    let mut line = format!(
        "{}  +{} -{} ~{} ^{}",
        entry.metadata.id, s.additions, s.deletions, s.modifications, s.repositions
    );
    if entry.changes.first_commit {
        line.push_str("  (initial)");
    }
    if !entry.metadata.message.is_empty() {
        line.push_str("  ");
        line.push_str(&entry.metadata.message);
    }
    line
}
