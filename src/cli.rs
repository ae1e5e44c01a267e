use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI. Running without a subcommand creates the skeleton.
#[derive(Parser, Debug)]
#[command(
    name = "appskel",
    version,
    about = "Create the lib/ skeleton of the feature-module mobile client"
)]
pub struct Cli {
    /// Change to this directory before doing anything else.
    #[arg(short = 'C', long = "chdir", global = true)]
    pub chdir: Option<PathBuf>,
    /// Report what would be ensured without touching the disk.
    #[arg(short = 'n', long = "dry-run", global = true)]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Create every directory and empty file of the skeleton (the default).
    Init,
    /// Print every path of the skeleton in creation order.
    List {
        #[arg(long = "json")]
        json: bool,
    },
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
