//! Diff analysis and commit message classification.
//!
//! The pipeline is a pure function over unified-diff text: [`diff`] parses
//! the text into change facts, [`classify`] and [`scope`] map those facts to
//! a commit type and scope, and [`message`] composes the final
//! `type(scope): description` string. No step performs I/O or keeps state
//! between calls, so identical input always produces identical output.

pub mod classify;
pub mod diff;
pub mod message;
pub mod scope;

use serde::{Deserialize, Serialize};

pub use classify::{classify_changes, CommitType, UnknownCommitType};
pub use diff::{parse_diff, ChangeSet};
pub use message::compose_message;
pub use scope::infer_scope;

/// Structured classification of one diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeAnalysis {
    /// Detected conventional commit type.
    #[serde(rename = "type")]
    pub change_type: CommitType,
    /// Inferred scope token; empty when none or ambiguous.
    pub scope: String,
    /// Changed file paths, in diff appearance order.
    pub files: Vec<String>,
    /// Count of added lines.
    pub additions: usize,
    /// Count of removed lines.
    pub deletions: usize,
    /// One-line human summary of the change volume.
    pub summary: String,
}

impl ChangeAnalysis {
    /// Composes the suggested commit message for this analysis.
    ///
    /// An empty `description` falls back to a default body derived from the
    /// changed files.
    pub fn suggested_message(&self, description: &str) -> String {
        compose_message(self.change_type, &self.scope, description, &self.files)
    }
}

/// Runs the full analysis pipeline over raw unified-diff text.
///
/// Total over arbitrary input: empty or malformed diffs classify as `chore`
/// with the summary `"No changes detected"`.
pub fn analyze_changes(diff_text: &str) -> ChangeAnalysis {
    let change_set = parse_diff(diff_text);
    let change_type = classify_changes(&change_set, diff_text);
    let scope = infer_scope(&change_set.files);

    let summary = if change_set.files.is_empty() {
        "No changes detected".to_string()
    } else {
        format!(
            "{} files changed, +{} -{}",
            change_set.files.len(),
            change_set.additions,
            change_set.deletions
        )
    };

    ChangeAnalysis {
        change_type,
        scope,
        files: change_set.files,
        additions: change_set.additions,
        deletions: change_set.deletions,
        summary,
    }
}
