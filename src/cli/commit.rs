//! Commit command: records staged changes with a caller-supplied message.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Commit command options.
#[derive(Parser)]
pub struct CommitCommand {
    /// Commit message to record verbatim.
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Path to the repository to commit in.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub repo_path: PathBuf,
}

impl CommitCommand {
    /// Executes the commit command.
    pub fn execute(self) -> Result<()> {
        use crate::data::{to_json, CommitView};
        use crate::git::GitRepository;

        crate::utils::check_git_repository(&self.repo_path)?;

        let repo = GitRepository::open_at(&self.repo_path)?;
        crate::utils::check_staged_changes(&repo)?;

        let hash = repo.commit_staged(&self.message)?;

        let view = CommitView {
            success: true,
            message: format!("Successfully committed with message: '{}'", self.message),
            commit: hash,
        };
        println!("{}", to_json(&view)?);

        Ok(())
    }
}
