//! Toast Notifications MCP Server
//!
//! # Usage
//!
//! ```bash
//! GITHUB_OWNER=acme GITHUB_REPO=toast-demo toast-mcp [--root <path>]
//! ```
//!
//! # Environment Variables
//!
//! - `GITHUB_TOKEN`, `GITHUB_OWNER`, `GITHUB_REPO`, `GITHUB_API_BASE`: GitHub access
//! - `RUST_LOG`: Control log verbosity (default: `toast_mcp=info`)
//!
//! # Protocol
//!
//! JSON-RPC 2.0 over stdio. Responses go to stdout, logs to stderr.

use clap::Parser;
use toast_mcp::{ServerConfig, ToastMcpServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout is reserved for the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("toast_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::parse();

    tracing::info!(
        owner = config.github_owner.as_deref().unwrap_or("NOT SET"),
        repo = config.github_repo.as_deref().unwrap_or("NOT SET"),
        token = if config.github_token.is_some() { "SET" } else { "NOT SET" },
        root = ?config.root,
        "Starting toast-mcp server"
    );

    let server = ToastMcpServer::new(config)?;
    server.run().await?;

    Ok(())
}
