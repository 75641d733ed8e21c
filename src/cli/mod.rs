//! CLI interface for commit-forge

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod commit;
pub mod message;
pub mod status;

pub use analyze::AnalyzeCommand;
pub use commit::CommitCommand;
pub use message::MessageCommand;
pub use status::StatusCommand;

/// commit-forge: conventional commit message toolkit
#[derive(Parser)]
#[command(name = "commit-forge")]
#[command(
    about = "Analyze staged changes and generate conventional commit messages",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// The main command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Reports repository status with porcelain-style file codes.
    Status(StatusCommand),
    /// Analyzes staged changes and suggests a commit message.
    Analyze(AnalyzeCommand),
    /// Generates a conventional commit message from explicit parts.
    Message(MessageCommand),
    /// Commits staged changes with the provided message.
    Commit(CommitCommand),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Status(cmd) => cmd.execute(),
            Commands::Analyze(cmd) => cmd.execute(),
            Commands::Message(cmd) => cmd.execute(),
            Commands::Commit(cmd) => cmd.execute(),
        }
    }
}
