//! Error types for the MCP server

use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error on the stdio transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// GitHub client could not be built or a setting is missing
    #[error("GitHub error: {0}")]
    GitHub(#[from] toast_github::Error),

    /// Unknown tool requested
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Invalid argument provided
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
