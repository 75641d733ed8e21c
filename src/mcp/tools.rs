//! Tool implementations for the commit-forge MCP server.
//!
//! Four tools are exposed: `git_status`, `analyze_staged_changes`,
//! `generate_commit_message`, and `commit_with_message`. Each resolves an
//! optional caller-supplied repository path against the server's configured
//! root and returns JSON via `CallToolResult`. Domain errors (invalid commit
//! type, nothing staged) come back as an `{"error": ...}` payload; only
//! repository-access and serialization failures surface as protocol errors.

use std::path::PathBuf;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars, tool, tool_router, ErrorData as McpError,
};
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_changes, compose_message, CommitType};
use crate::data::{AnalysisView, CommitView, ErrorView, MessageView, StatusView};
use crate::git::GitRepository;

/// MCP server exposing commit-forge analysis tools.
#[derive(Clone)]
pub struct CommitForgeServer {
    pub(crate) repo_path: PathBuf,
    pub(crate) tool_router: ToolRouter<Self>,
}

// --- Parameter structs ---

/// Parameters for the `git_status` tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GitStatusParams {
    /// Repository path (default: server's configured path).
    pub repo_path: Option<String>,
}

/// Parameters for the `analyze_staged_changes` tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeStagedParams {
    /// Repository path (default: server's configured path).
    pub repo_path: Option<String>,
}

/// Parameters for the `generate_commit_message` tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateMessageParams {
    /// Conventional commit type token (default: "feat").
    pub commit_type: Option<String>,
    /// Scope token; omit for an unscoped message.
    pub scope: Option<String>,
    /// Commit description; omit to derive a default from the staged files.
    pub description: Option<String>,
    /// Repository path (default: server's configured path).
    pub repo_path: Option<String>,
}

/// Parameters for the `commit_with_message` tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CommitParams {
    /// Commit message to record verbatim.
    pub message: String,
    /// Repository path (default: server's configured path).
    pub repo_path: Option<String>,
}

fn mcp_err(msg: impl Into<String>) -> McpError {
    McpError::internal_error(msg.into(), None)
}

#[tool_router]
impl CommitForgeServer {
    /// Create a new server with the given default repository path.
    pub fn new(repo_path: PathBuf) -> Self {
        Self {
            repo_path,
            tool_router: Self::tool_router(),
        }
    }

    fn resolve_path(&self, path: &Option<String>) -> PathBuf {
        match path {
            Some(p) => {
                let input_path = PathBuf::from(p);
                if input_path.is_absolute() {
                    input_path
                } else {
                    self.repo_path.join(input_path)
                }
            }
            None => self.repo_path.clone(),
        }
    }

    fn open_repo(&self, path: &Option<String>) -> Result<GitRepository, McpError> {
        let repo_path = self.resolve_path(path);
        GitRepository::open_at(&repo_path).map_err(|e| {
            mcp_err(format!(
                "Failed to open repository at {}: {e}",
                repo_path.display()
            ))
        })
    }

    fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let json = crate::data::to_json(value).map_err(|e| mcp_err(e.to_string()))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Reports repository status as JSON.
    #[tool(
        name = "git_status",
        description = "Get current git repository status: branch name, porcelain-style per-file codes, and whether staged or unstaged changes exist."
    )]
    pub fn git_status(
        &self,
        Parameters(params): Parameters<GitStatusParams>,
    ) -> Result<CallToolResult, McpError> {
        let repo = self.open_repo(&params.repo_path)?;
        let status = repo.status().map_err(|e| mcp_err(e.to_string()))?;

        Self::json_result(&StatusView::from(status))
    }

    /// Classifies the staged diff and suggests a commit message.
    #[tool(
        name = "analyze_staged_changes",
        description = "Analyze staged changes and suggest a conventional commit message. Parses the staged diff, classifies it into a commit type, infers a scope, and returns the analysis with a suggested message and the commit type catalog."
    )]
    pub fn analyze_staged_changes(
        &self,
        Parameters(params): Parameters<AnalyzeStagedParams>,
    ) -> Result<CallToolResult, McpError> {
        let repo = self.open_repo(&params.repo_path)?;
        let diff = repo.staged_diff().map_err(|e| mcp_err(e.to_string()))?;

        if diff.is_empty() {
            return Self::json_result(&serde_json::json!({
                "message": "No staged changes found"
            }));
        }

        Self::json_result(&AnalysisView::from_analysis(analyze_changes(&diff)))
    }

    /// Composes a conventional commit message from explicit parts.
    #[tool(
        name = "generate_commit_message",
        description = "Generate a conventional commit message from an explicit type, scope, and description. An unknown commit type returns an error naming the valid vocabulary. Includes an analysis of the currently staged changes as context when any exist."
    )]
    pub fn generate_commit_message(
        &self,
        Parameters(params): Parameters<GenerateMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        let token = params.commit_type.as_deref().unwrap_or("feat");
        let commit_type = match token.parse::<CommitType>() {
            Ok(commit_type) => commit_type,
            Err(e) => return Self::json_result(&ErrorView::new(e)),
        };

        let repo = self.open_repo(&params.repo_path)?;
        let diff = repo.staged_diff().map_err(|e| mcp_err(e.to_string()))?;
        let current_changes = if diff.is_empty() {
            None
        } else {
            Some(analyze_changes(&diff))
        };

        let files = current_changes
            .as_ref()
            .map(|a| a.files.clone())
            .unwrap_or_default();
        let commit_message = compose_message(
            commit_type,
            params.scope.as_deref().unwrap_or(""),
            params.description.as_deref().unwrap_or(""),
            &files,
        );

        Self::json_result(&MessageView {
            commit_message,
            type_description: commit_type.description().to_string(),
            current_changes,
        })
    }

    /// Commits staged changes with the caller-supplied message.
    #[tool(
        name = "commit_with_message",
        description = "Commit staged changes with the provided message. Fails with a structured error when nothing is staged."
    )]
    pub fn commit_with_message(
        &self,
        Parameters(params): Parameters<CommitParams>,
    ) -> Result<CallToolResult, McpError> {
        let repo = self.open_repo(&params.repo_path)?;
        let has_staged = repo
            .has_staged_changes()
            .map_err(|e| mcp_err(e.to_string()))?;

        if !has_staged {
            return Self::json_result(&ErrorView::new("No staged changes to commit"));
        }

        match repo.commit_staged(&params.message) {
            Ok(hash) => Self::json_result(&CommitView {
                success: true,
                message: format!("Successfully committed with message: '{}'", params.message),
                commit: hash,
            }),
            Err(e) => Self::json_result(&ErrorView::new(format!("Git commit failed: {e}"))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn resolve_path_defaults_to_server_root() {
        let server = CommitForgeServer::new(PathBuf::from("/repos/main"));
        assert_eq!(server.resolve_path(&None), PathBuf::from("/repos/main"));
    }

    #[test]
    fn resolve_path_joins_relative() {
        let server = CommitForgeServer::new(PathBuf::from("/repos"));
        assert_eq!(
            server.resolve_path(&Some("project".to_string())),
            PathBuf::from("/repos/project")
        );
    }

    #[test]
    fn resolve_path_keeps_absolute() {
        let server = CommitForgeServer::new(PathBuf::from("/repos"));
        assert_eq!(
            server.resolve_path(&Some("/elsewhere/project".to_string())),
            PathBuf::from("/elsewhere/project")
        );
    }
}
