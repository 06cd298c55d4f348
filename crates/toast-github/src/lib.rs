//! GitHub access for the toast configurator
//!
//! A thin, read-only client over the GitHub REST API: repository metadata,
//! directory listings and file contents. Paths under restricted prefixes are
//! refused before any request is made and hidden from listings.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_API_BASE, GitHubClient, GitHubSettings};
pub use error::{Error, Result};
pub use types::{ContentEntry, ContentListing, FileContents, RepositoryInfo};
