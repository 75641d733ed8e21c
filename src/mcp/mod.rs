//! MCP server interface exposing commit-forge tools to IDEs and agents.
//!
//! Implements a Model Context Protocol server using rmcp that exposes
//! `git_status`, `analyze_staged_changes`, `generate_commit_message`, and
//! `commit_with_message` tools over stdio transport.

pub mod server;
pub mod tools;
