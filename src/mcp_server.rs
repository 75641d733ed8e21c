use std::path::PathBuf;
use std::process;

use clap::Parser;

/// Standalone MCP server exposing commit-forge tools over stdio.
#[derive(Parser)]
#[command(name = "commit-forge-mcp")]
#[command(about = "MCP server for conventional commit analysis", long_about = None)]
#[command(version)]
struct McpCli {
    /// Repository path the server operates on by default.
    #[arg(long, value_name = "PATH", default_value = ".")]
    repo_path: PathBuf,
}

#[tokio::main]
async fn main() {
    // Log to stderr; stdout carries the MCP stdio transport.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = McpCli::parse();

    if let Err(e) = commit_forge::mcp::server::run_server(cli.repo_path).await {
        eprintln!("Error: {e}");

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("  Caused by: {err}");
            source = err.source();
        }

        process::exit(1);
    }
}
