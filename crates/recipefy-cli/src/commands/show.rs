//! Show command
//!
//! Usage: recipefy show --history <FILE> --commit <ID> [--format json|summary]

use super::OutputFormat;
use clap::Args;
use recipefy_core::diff::render_human_summary;
use recipefy_core_types::CommitId;
use recipefy_engine::{commit_changes, MemoryVersionControl};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// History document (JSON)
    #[arg(long)]
    pub history: PathBuf,

    /// Commit to show
    #[arg(long)]
    pub commit: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Execute show command
pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let vcs = MemoryVersionControl::load(&args.history)?;
    let commit_id = CommitId::from_string(args.commit);

    let result = commit_changes(&vcs, &commit_id, None)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Summary => {
            let meta = &result.metadata;
            println!(
                "commit {} by {} at {}",
                meta.id,
                meta.author_id,
                meta.created_at.to_rfc3339()
            );
            if !meta.message.is_empty() {
                println!("\n    {}\n", meta.message);
            }
            print!("{}", render_human_summary(&result.changes));
        }
    }

    Ok(())
}
