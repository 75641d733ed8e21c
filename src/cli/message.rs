//! Message command: composes a conventional commit message.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Message command options.
#[derive(Parser)]
pub struct MessageCommand {
    /// Conventional commit type token (feat, fix, docs, style, refactor,
    /// perf, test, chore).
    #[arg(long, value_name = "TYPE", default_value = "feat")]
    pub commit_type: String,

    /// Scope token; empty for an unscoped message.
    #[arg(long, value_name = "SCOPE", default_value = "")]
    pub scope: String,

    /// Commit description; empty selects a default derived from the staged
    /// files.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub description: String,

    /// Path to the repository supplying staged-change context.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub repo_path: PathBuf,
}

impl MessageCommand {
    /// Executes the message command.
    pub fn execute(self) -> Result<()> {
        use crate::analysis::{analyze_changes, compose_message, CommitType};
        use crate::data::{to_json, MessageView};
        use crate::git::GitRepository;

        // Validate the type before touching the repository so a bad token
        // fails with the valid vocabulary even outside a repo.
        let commit_type: CommitType = self.commit_type.parse()?;

        crate::utils::check_git_repository(&self.repo_path)?;

        let repo = GitRepository::open_at(&self.repo_path)?;
        let diff = repo.staged_diff()?;
        let current_changes = if diff.is_empty() {
            None
        } else {
            Some(analyze_changes(&diff))
        };

        let files = current_changes
            .as_ref()
            .map(|a| a.files.clone())
            .unwrap_or_default();
        let commit_message = compose_message(commit_type, &self.scope, &self.description, &files);

        let view = MessageView {
            commit_message,
            type_description: commit_type.description().to_string(),
            current_changes,
        };
        println!("{}", to_json(&view)?);

        Ok(())
    }
}
