//! GitHub REST client

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::types::{
    ContentEntry, ContentListing, FileContents, RawFile, RawListing, RawRepository, RepositoryInfo,
};
use crate::{Error, Result};

/// Public GitHub API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const GITHUB_API_VERSION: &str = "2022-11-28";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Connection settings for one repository
#[derive(Debug, Clone)]
pub struct GitHubSettings {
    pub api_base: String,
    pub token: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    /// Path prefixes that may not be read and are hidden from listings
    pub restricted_prefixes: Vec<String>,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
            owner: None,
            repo: None,
            restricted_prefixes: vec!["cdd-toast".to_string()],
        }
    }
}

/// Read-only client bound to a single repository
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    settings: GitHubSettings,
}

impl GitHubClient {
    pub fn new(settings: GitHubSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("toast-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, settings })
    }

    pub fn settings(&self) -> &GitHubSettings {
        &self.settings
    }

    /// Owner and repository name, both of which must be configured.
    pub fn repository(&self) -> Result<(&str, &str)> {
        let owner = self
            .settings
            .owner
            .as_deref()
            .ok_or(Error::MissingSetting("GITHUB_OWNER"))?;
        let repo = self
            .settings
            .repo
            .as_deref()
            .ok_or(Error::MissingSetting("GITHUB_REPO"))?;
        Ok((owner, repo))
    }

    /// Refuse paths under a restricted prefix.
    pub fn check_access(&self, path: &str) -> Result<()> {
        let path = path.trim_start_matches('/');
        match self
            .settings
            .restricted_prefixes
            .iter()
            .find(|prefix| path.starts_with(prefix.as_str()))
        {
            Some(prefix) => Err(Error::Restricted {
                prefix: prefix.clone(),
            }),
            None => Ok(()),
        }
    }

    fn is_hidden(&self, entry: &ContentEntry) -> bool {
        self.settings.restricted_prefixes.iter().any(|prefix| {
            entry.name.starts_with(prefix.as_str()) || entry.path.starts_with(prefix.as_str())
        })
    }

    /// Fetch repository metadata.
    pub async fn repository_info(&self) -> Result<RepositoryInfo> {
        let (owner, repo) = self.repository()?;
        let raw: RawRepository = self.get(&format!("/repos/{owner}/{repo}"), None).await?;
        Ok(raw.into())
    }

    /// List a directory, or describe a single file, at `branch`.
    pub async fn list_contents(&self, path: &str, branch: &str) -> Result<ContentListing> {
        self.check_access(path)?;
        let raw: RawListing = self.get(&self.contents_endpoint(path)?, Some(branch)).await?;

        Ok(match raw {
            RawListing::Directory(entries) => ContentListing::Directory(
                entries
                    .into_iter()
                    .map(ContentEntry::from)
                    .filter(|entry| !self.is_hidden(entry))
                    .collect(),
            ),
            RawListing::File(entry) => ContentListing::File(entry.into()),
        })
    }

    /// Fetch and decode one file at `branch`.
    pub async fn file_contents(&self, path: &str, branch: &str) -> Result<FileContents> {
        self.check_access(path)?;
        let raw: RawFile = self.get(&self.contents_endpoint(path)?, Some(branch)).await?;

        // The API wraps base64 content at 60 columns.
        let encoded: String = raw.content.split_whitespace().collect();
        let bytes = STANDARD.decode(encoded)?;

        Ok(FileContents {
            path: raw.path,
            name: raw.name,
            size: raw.size,
            content: String::from_utf8_lossy(&bytes).into_owned(),
            sha: raw.sha,
            url: raw.html_url,
        })
    }

    fn contents_endpoint(&self, path: &str) -> Result<String> {
        let (owner, repo) = self.repository()?;
        Ok(format!(
            "/repos/{owner}/{repo}/contents/{}",
            path.trim_start_matches('/')
        ))
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, branch: Option<&str>) -> Result<T> {
        let url = format!("{}{}", self.settings.api_base.trim_end_matches('/'), endpoint);
        debug!(%url, "GitHub request");

        let mut request = self
            .http
            .get(&url)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);
        if let Some(branch) = branch {
            request = request.query(&[("ref", branch)]);
        }
        if let Some(token) = &self.settings.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
            warn!(status = status.as_u16(), %message, %endpoint, "GitHub API error");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: serde_json::Value = response.json().await?;
        serde_json::from_value(body).map_err(|source| Error::Unexpected {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}
