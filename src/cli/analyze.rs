//! Analyze command: classifies pending changes and suggests a message.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Analyze command options.
#[derive(Parser)]
pub struct AnalyzeCommand {
    /// Path to the repository to inspect.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub repo_path: PathBuf,

    /// Analyze the working-tree diff instead of the staged diff.
    #[arg(long)]
    pub unstaged: bool,
}

impl AnalyzeCommand {
    /// Executes the analyze command.
    pub fn execute(self) -> Result<()> {
        use crate::analysis::analyze_changes;
        use crate::data::{to_json, AnalysisView};
        use crate::git::GitRepository;

        crate::utils::check_git_repository(&self.repo_path)?;

        let repo = GitRepository::open_at(&self.repo_path)?;
        let diff = if self.unstaged {
            repo.unstaged_diff()?
        } else {
            repo.staged_diff()?
        };

        if diff.is_empty() {
            let kind = if self.unstaged { "unstaged" } else { "staged" };
            let payload = serde_json::json!({ "message": format!("No {kind} changes found") });
            println!("{}", to_json(&payload)?);
            return Ok(());
        }

        let view = AnalysisView::from_analysis(analyze_changes(&diff));
        println!("{}", to_json(&view)?);

        Ok(())
    }
}
