//! Data processing and serialization.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::analysis::{ChangeAnalysis, CommitType};
use crate::git::RepoStatus;

/// Repository status output structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusView {
    /// Current branch name; empty when HEAD is detached or unborn.
    pub branch: String,
    /// Per-file status entries.
    pub files: Vec<FileStatusInfo>,
    /// Whether any file has changes recorded in the index.
    pub has_staged: bool,
    /// Whether any file has working-tree changes not yet staged.
    pub has_unstaged: bool,
}

/// File status information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStatusInfo {
    /// Two-character porcelain-style status code.
    pub status: String,
    /// Path to the file relative to repository root.
    pub file: String,
}

impl From<RepoStatus> for StatusView {
    fn from(status: RepoStatus) -> Self {
        Self {
            branch: status.branch,
            files: status
                .files
                .into_iter()
                .map(|f| FileStatusInfo {
                    status: f.status,
                    file: f.file,
                })
                .collect(),
            has_staged: status.has_staged,
            has_unstaged: status.has_unstaged,
        }
    }
}

/// Staged-change analysis output structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisView {
    /// Structured classification of the staged diff.
    pub analysis: ChangeAnalysis,
    /// Composed conventional commit message for the staged diff.
    pub suggested_message: String,
    /// The commit type catalog (token to one-line description).
    pub conventional_types: BTreeMap<String, String>,
}

impl AnalysisView {
    /// Builds the view from an analysis, composing the default message.
    pub fn from_analysis(analysis: ChangeAnalysis) -> Self {
        let suggested_message = analysis.suggested_message("");
        Self {
            analysis,
            suggested_message,
            conventional_types: commit_type_catalog(),
        }
    }
}

/// Generated-message output structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageView {
    /// The composed commit message.
    pub commit_message: String,
    /// Catalog description of the chosen commit type.
    pub type_description: String,
    /// Analysis of the currently staged changes, when any exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_changes: Option<ChangeAnalysis>,
}

/// Commit execution output structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitView {
    /// Whether the commit was created.
    pub success: bool,
    /// Human confirmation line naming the commit message used.
    pub message: String,
    /// Hash of the created commit.
    pub commit: String,
}

/// Structured error payload returned across the tool boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorView {
    /// Error description.
    pub error: String,
}

impl ErrorView {
    /// Builds an error payload from any displayable error.
    pub fn new(error: impl std::fmt::Display) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// The commit type catalog as an owned map for serialization.
pub fn commit_type_catalog() -> BTreeMap<String, String> {
    CommitType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.description().to_string()))
        .collect()
}

/// Serialize data structure to pretty-printed JSON.
pub fn to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize to JSON")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::analysis::analyze_changes;

    #[test]
    fn catalog_has_all_eight_types() {
        let catalog = commit_type_catalog();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog["feat"], "A new feature");
        assert_eq!(catalog["chore"], "Changes to the build process or auxiliary tools");
    }

    #[test]
    fn analysis_view_composes_default_message() {
        let view = AnalysisView::from_analysis(analyze_changes(""));
        assert_eq!(view.suggested_message, "chore: update 0 files");
        assert_eq!(view.conventional_types.len(), 8);
    }

    #[test]
    fn message_view_omits_absent_changes() {
        let view = MessageView {
            commit_message: "feat: x".to_string(),
            type_description: "A new feature".to_string(),
            current_changes: None,
        };
        let json = to_json(&view).unwrap();
        assert!(!json.contains("current_changes"));
    }

    #[test]
    fn error_view_serializes_single_key() {
        let json = to_json(&ErrorView::new("boom")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "boom");
        assert_eq!(value.as_object().unwrap().len(), 1);
    }
}
