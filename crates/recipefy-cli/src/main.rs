//! Recipefy CLI
//!
//! Command-line interface for recipe change history

use clap::{Parser, Subcommand};
use recipefy_core::logging_facility::{self, Profile};
use recipefy_engine::Settings;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "recipefy")]
#[command(about = "Recipefy - Recipe version history and change summaries", long_about = None)]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Logging profile: development, production or test
    #[arg(long, global = true)]
    log: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two snapshot files
    Diff(commands::diff::DiffArgs),
    /// Show the changes introduced by one commit
    Show(commands::show::ShowArgs),
    /// List per-commit changes along a branch
    History(commands::history::HistoryArgs),
    /// Fork a branch into a new recipe history
    Copy(commands::copy::CopyArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::load_or_default(cli.config.as_deref())?;
    if let Some(profile) = cli.log {
        settings.logging.profile = profile;
    }
    logging_facility::init(settings.logging.profile);

    match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Show(args) => commands::show::execute(args),
        Commands::History(args) => commands::history::execute(args, settings),
        Commands::Copy(args) => commands::copy::execute(args),
    }
}
