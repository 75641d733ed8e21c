//! Status command: outputs repository status in JSON format.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Status command options.
#[derive(Parser)]
pub struct StatusCommand {
    /// Path to the repository to inspect.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub repo_path: PathBuf,
}

impl StatusCommand {
    /// Executes the status command.
    pub fn execute(self) -> Result<()> {
        use crate::data::{to_json, StatusView};
        use crate::git::GitRepository;

        crate::utils::check_git_repository(&self.repo_path)?;

        let repo = GitRepository::open_at(&self.repo_path)?;
        let view = StatusView::from(repo.status()?);

        println!("{}", to_json(&view)?);

        Ok(())
    }
}
