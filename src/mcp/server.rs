//! MCP server setup and lifecycle.
//!
//! Provides [`run_server`] which starts the stdio-based MCP server,
//! registering all commit-forge tools and blocking until the client
//! disconnects.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rmcp::{model::*, tool_handler, transport::stdio, ServerHandler, ServiceExt};

use crate::mcp::tools::CommitForgeServer;

const SERVER_INSTRUCTIONS: &str = "\
commit-forge analyzes git changes and generates conventional commit messages. Tools:\n\
- git_status: branch, per-file porcelain codes, staged/unstaged flags\n\
- analyze_staged_changes: classify the staged diff and suggest a commit message\n\
- generate_commit_message: compose a message from explicit type/scope/description\n\
- commit_with_message: commit staged changes with the provided message";

#[tool_handler]
impl ServerHandler for CommitForgeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "commit-forge".to_string(),
                title: Some("Commit Forge".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "Conventional commit message analysis and generation".to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
        }
    }
}

/// Start the MCP server on stdio transport.
///
/// This is the body of the `commit-forge-mcp` binary. It blocks until the
/// client closes stdin.
pub async fn run_server(repo_path: PathBuf) -> Result<()> {
    let server = CommitForgeServer::new(repo_path);
    let service = server
        .serve(stdio())
        .await
        .context("MCP server failed to start")?;

    service.waiting().await.context("MCP server error")?;

    Ok(())
}
