//! Error types for the GitHub client

use thiserror::Error;

/// Result type alias for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`GitHubClient`](crate::GitHubClient)
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure or undecodable response body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the API
    #[error("GitHub API Error: {message}")]
    Api { status: u16, message: String },

    /// File content was not valid base64
    #[error("failed to decode file content: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Response had an unexpected shape
    #[error("unexpected response for {endpoint}: {source}")]
    Unexpected {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Requested path lies under a restricted prefix
    #[error("Access to {prefix} directory is restricted")]
    Restricted { prefix: String },

    /// A required setting has no value
    #[error("{0} is not set")]
    MissingSetting(&'static str),
}
