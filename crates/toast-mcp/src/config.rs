//! Server settings from command-line flags and the environment

use std::path::PathBuf;

use clap::Parser;
use toast_github::{DEFAULT_API_BASE, GitHubSettings};

/// MCP server for the Angular toast notifications library
#[derive(Debug, Clone, Parser)]
#[command(name = "toast-mcp")]
#[command(about = "MCP server that configures and verifies angular-toast-notifications")]
#[command(version)]
pub struct ServerConfig {
    /// GitHub token used for API requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Owner of the library repository
    #[arg(long, env = "GITHUB_OWNER")]
    pub github_owner: Option<String>,

    /// Name of the library repository
    #[arg(long, env = "GITHUB_REPO")]
    pub github_repo: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Workspace searched by cdd-verify_config
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration document read by cdd-configure_angular_app
    #[arg(long, default_value = "doc/configuration.md")]
    pub config_doc: String,

    /// Branch the configuration document is read from
    #[arg(long, default_value = "main")]
    pub branch: String,
}

impl ServerConfig {
    /// Settings for the GitHub client. Blank values count as unset.
    pub fn github_settings(&self) -> GitHubSettings {
        GitHubSettings {
            api_base: self.api_base.clone(),
            token: non_blank(&self.github_token),
            owner: non_blank(&self.github_owner),
            repo: non_blank(&self.github_repo),
            ..GitHubSettings::default()
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServerConfig {
        let mut argv = vec!["toast-mcp"];
        argv.extend_from_slice(args);
        ServerConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--github-owner",
            "acme",
            "--github-repo",
            "toast-demo",
            "--root",
            "/work/app",
            "--branch",
            "develop",
        ]);
        assert_eq!(config.github_owner.as_deref(), Some("acme"));
        assert_eq!(config.github_repo.as_deref(), Some("toast-demo"));
        assert_eq!(config.root, PathBuf::from("/work/app"));
        assert_eq!(config.branch, "develop");
        assert_eq!(config.config_doc, "doc/configuration.md");
    }

    #[test]
    fn github_settings_drop_blank_values() {
        let config = ServerConfig {
            github_token: Some("  ".to_string()),
            github_owner: Some("acme".to_string()),
            github_repo: None,
            api_base: "http://localhost:9000".to_string(),
            root: PathBuf::from("."),
            config_doc: "doc/configuration.md".to_string(),
            branch: "main".to_string(),
        };
        let settings = config.github_settings();
        assert!(settings.token.is_none());
        assert_eq!(settings.owner.as_deref(), Some("acme"));
        assert!(settings.repo.is_none());
        assert_eq!(settings.api_base, "http://localhost:9000");
        assert_eq!(settings.restricted_prefixes, vec!["cdd-toast".to_string()]);
    }
}
