//! Response types
//!
//! `Raw*` structs mirror the GitHub payloads; the public types are the
//! trimmed shapes handed to MCP clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub language: Option<String>,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRepository {
    name: String,
    description: Option<String>,
    stargazers_count: u64,
    forks_count: u64,
    open_issues_count: u64,
    language: Option<String>,
    html_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RawRepository> for RepositoryInfo {
    fn from(raw: RawRepository) -> Self {
        Self {
            name: raw.name,
            description: raw.description,
            stars: raw.stargazers_count,
            forks: raw.forks_count,
            open_issues: raw.open_issues_count,
            language: raw.language,
            url: raw.html_url,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

/// One file or directory in a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    /// `file`, `dir`, `symlink` or `submodule`
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u64,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawContentEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    size: u64,
    html_url: Option<String>,
}

impl From<RawContentEntry> for ContentEntry {
    fn from(raw: RawContentEntry) -> Self {
        Self {
            name: raw.name,
            path: raw.path,
            kind: raw.kind,
            size: raw.size,
            url: raw.html_url,
        }
    }
}

/// Result of listing a path: a directory's entries or a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentListing {
    Directory(Vec<ContentEntry>),
    File(ContentEntry),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawListing {
    Directory(Vec<RawContentEntry>),
    File(RawContentEntry),
}

/// A decoded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContents {
    pub path: String,
    pub name: String,
    pub size: u64,
    pub content: String,
    pub sha: String,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFile {
    pub(crate) name: String,
    pub(crate) path: String,
    #[serde(default)]
    pub(crate) size: u64,
    pub(crate) sha: String,
    pub(crate) html_url: Option<String>,
    #[serde(default)]
    pub(crate) content: String,
}
