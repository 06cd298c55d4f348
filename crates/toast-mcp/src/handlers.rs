//! MCP Tool Handlers
//!
//! Repository tools delegate to `toast-github`; failures there are reported
//! inside the tool payload as `{"error": ...}` so the client sees them as
//! ordinary results. Argument errors and unknown tools surface as `Err` and
//! become `isError` results in the server.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use toast_core::{DocumentSource, Validator, extract};
use toast_github::GitHubClient;
use tracing::{debug, warn};

use crate::tools::{
    CONFIGURE_ANGULAR_APP, GET_FILE_CONTENTS, GET_REPOSITORY_INFO, LIST_CONTENTS, VERIFY_CONFIG,
};
use crate::{Error, Result};

/// Everything a tool call needs, built once at startup
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub github: GitHubClient,
    pub validator: Validator,
    /// Repository path of the configuration document
    pub config_doc: String,
    /// Branch the configuration document is read from
    pub branch: String,
}

/// Handle a tool call by dispatching to the appropriate handler
pub async fn handle_tool_call(ctx: &ToolContext, tool_name: &str, arguments: Value) -> Result<Value> {
    match tool_name {
        GET_REPOSITORY_INFO => handle_get_repository_info(ctx).await,
        LIST_CONTENTS => handle_list_contents(ctx, arguments).await,
        GET_FILE_CONTENTS => handle_get_file_contents(ctx, arguments).await,
        CONFIGURE_ANGULAR_APP => handle_configure_angular_app(ctx).await,
        VERIFY_CONFIG => handle_verify_config(ctx, arguments).await,
        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

fn default_branch() -> String {
    "main".to_string()
}

#[derive(Debug, Deserialize)]
struct ListContentsArgs {
    #[serde(default)]
    path: String,
    #[serde(default = "default_branch")]
    branch: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileContentsArgs {
    file_path: String,
    #[serde(default = "default_branch")]
    branch: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyConfigArgs {
    #[serde(default)]
    app_config_path: Option<String>,
    #[serde(default)]
    toast_config_path: Option<String>,
}

/// Deserialize tool arguments; a missing `arguments` member is an empty object.
fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    let arguments = match arguments {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| Error::InvalidArgument(e.to_string()))
}

fn github_error(err: toast_github::Error) -> Value {
    warn!(error = %err, "GitHub request failed");
    json!({ "error": err.to_string() })
}

async fn handle_get_repository_info(ctx: &ToolContext) -> Result<Value> {
    match ctx.github.repository_info().await {
        Ok(info) => Ok(serde_json::to_value(info)?),
        Err(e) => Ok(github_error(e)),
    }
}

async fn handle_list_contents(ctx: &ToolContext, arguments: Value) -> Result<Value> {
    let args: ListContentsArgs = parse_args(arguments)?;
    debug!(path = %args.path, branch = %args.branch, "Listing contents");

    match ctx.github.list_contents(&args.path, &args.branch).await {
        Ok(listing) => Ok(serde_json::to_value(listing)?),
        Err(e) => Ok(github_error(e)),
    }
}

async fn handle_get_file_contents(ctx: &ToolContext, arguments: Value) -> Result<Value> {
    let args: FileContentsArgs = parse_args(arguments)?;
    if args.file_path.is_empty() {
        return Err(Error::InvalidArgument("filePath must not be empty".to_string()));
    }
    debug!(path = %args.file_path, branch = %args.branch, "Fetching file");

    match ctx.github.file_contents(&args.file_path, &args.branch).await {
        Ok(file) => Ok(serde_json::to_value(file)?),
        Err(e) => Ok(github_error(e)),
    }
}

/// Fetch the configuration document and extract setup guidance from it.
async fn handle_configure_angular_app(ctx: &ToolContext) -> Result<Value> {
    let doc = match ctx.github.file_contents(&ctx.config_doc, &ctx.branch).await {
        Ok(doc) => doc,
        Err(e) => {
            warn!(error = %e, path = %ctx.config_doc, "Configuration document unavailable");
            return Ok(json!({
                "error": format!("Could not fetch configuration file: {e}"),
                "success": false,
            }));
        }
    };

    let (owner, repo) = ctx.github.repository()?;
    let source = DocumentSource::new(owner, repo, &ctx.branch, &ctx.config_doc);
    let result = extract(&doc.content, &source);

    Ok(json!({
        "success": true,
        "configuration": {
            "interface": result.interface,
            "descriptions": result.descriptions,
            "implementation": result.implementation,
        },
        "instructions": result.instructions,
        "configurationTemplate": result.configuration_template,
        "usageExamples": result.usage_examples,
        "documentationUrl": result.documentation_url,
    }))
}

async fn handle_verify_config(ctx: &ToolContext, arguments: Value) -> Result<Value> {
    let args: VerifyConfigArgs = parse_args(arguments)?;
    let report = ctx
        .validator
        .verify(args.app_config_path.as_deref(), args.toast_config_path.as_deref());
    debug!(success = report.success, issues = report.issues.len(), "Verification finished");
    Ok(serde_json::to_value(report)?)
}
