//! MCP Server implementation
//!
//! Reads one JSON-RPC message per line from stdin and writes each response
//! as a single line on stdout.

use std::io::{BufRead, Write};

use serde_json::{Value, json};
use toast_core::Validator;
use toast_github::GitHubClient;

use crate::config::ServerConfig;
use crate::handlers::{ToolContext, handle_tool_call};
use crate::protocol::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION, ServerCapabilities,
    ServerInfo, ToolCallParams, ToolsCapability, codes,
};
use crate::tools::{ToolDefinition, ToolResult, get_tool_definitions};
use crate::{Error, Result};

/// MCP Server for the toast notifications library
///
/// # Example
///
/// ```ignore
/// use clap::Parser;
/// use toast_mcp::{ServerConfig, ToastMcpServer};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let server = ToastMcpServer::new(ServerConfig::parse())?;
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct ToastMcpServer {
    context: ToolContext,
    tools: Vec<ToolDefinition>,
}

impl ToastMcpServer {
    /// Create a server from startup settings
    pub fn new(config: ServerConfig) -> Result<Self> {
        let github = GitHubClient::new(config.github_settings())?;
        Ok(Self::with_context(ToolContext {
            github,
            validator: Validator::new(config.root),
            config_doc: config.config_doc,
            branch: config.branch,
        }))
    }

    /// Create a server around an existing tool context
    pub fn with_context(context: ToolContext) -> Self {
        Self {
            context,
            tools: get_tool_definitions(),
        }
    }

    /// Run the MCP server
    ///
    /// Processes messages from stdin until it is closed.
    pub async fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        tracing::info!("MCP server ready, listening on stdio");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            match self.handle_message(&line).await {
                Ok(response) if !response.is_empty() => {
                    writeln!(stdout, "{}", response)?;
                    stdout.flush()?;
                }
                Ok(_) => {} // Notification
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to handle message");
                    let error_response = JsonRpcResponse::error(
                        None,
                        codes::INTERNAL_ERROR,
                        format!("Internal error: {}", e),
                    );
                    writeln!(stdout, "{}", serde_json::to_string(&error_response)?)?;
                    stdout.flush()?;
                }
            }
        }

        tracing::info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Returns the serialized response, or an empty string for notifications.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let request: JsonRpcRequest = serde_json::from_str(message)?;

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id)?,
            "initialized" | "notifications/initialized" => return Ok(String::new()),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            _ => JsonRpcResponse::error(
                request.id,
                codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: "toast-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        tracing::info!("Client initialized");
        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let tools: Vec<Value> = self
            .tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect();

        JsonRpcResponse::success(id, json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = serde_json::from_value(params)?;
        tracing::debug!(tool = %tool_params.name, "Tool call");

        let tool_result =
            match handle_tool_call(&self.context, &tool_params.name, tool_params.arguments).await {
                Ok(result) => ToolResult::text(serde_json::to_string_pretty(&result)?),
                Err(e) => {
                    tracing::warn!(tool = %tool_params.name, error = %e, "Tool call failed");
                    ToolResult::error(e.to_string())
                }
            };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(tool_result)?))
    }

    /// Tool context shared by all calls
    pub fn context(&self) -> &ToolContext {
        &self.context
    }

    /// Get available tools
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}
