//! MCP tool definitions
//!
//! ## Repository (read-only)
//! - `cdd-get_repository_info` - name, description, stars, last update
//! - `cdd-list_contents` - browse directories, restricted folders hidden
//! - `cdd-get_file_contents` - read a single file
//!
//! ## Setup
//! - `cdd-configure_angular_app` - instructions and templates from the docs
//! - `cdd-verify_config` - validate the local project's configuration

use serde::{Deserialize, Serialize};
use serde_json::json;

pub const GET_REPOSITORY_INFO: &str = "cdd-get_repository_info";
pub const LIST_CONTENTS: &str = "cdd-list_contents";
pub const GET_FILE_CONTENTS: &str = "cdd-get_file_contents";
pub const CONFIGURE_ANGULAR_APP: &str = "cdd-configure_angular_app";
pub const VERIFY_CONFIG: &str = "cdd-verify_config";

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: GET_REPOSITORY_INFO.to_string(),
            description: "Gets basic information about the Angular Toast Notifications demo repository including name, description, stars, and last update time.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: LIST_CONTENTS.to_string(),
            description: "Lists files and directories in the Angular Toast Notifications demo repository from GitHub. Use this to browse the remote repository structure, documentation, sample components, and configuration files. Excludes internal MCP server folder (cdd-toast).".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "default": "",
                        "description": "Path to directory or file to list"
                    },
                    "branch": {
                        "type": "string",
                        "default": "main",
                        "description": "Git branch to browse"
                    }
                }
            }),
        },
        ToolDefinition {
            name: GET_FILE_CONTENTS.to_string(),
            description: "Retrieves the complete contents of a specific file from the Angular Toast Notifications repository. Use this to read documentation, sample components, configuration examples, or type definitions.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filePath": {
                        "type": "string",
                        "minLength": 1,
                        "description": "Relative path to the file in the repository"
                    },
                    "branch": {
                        "type": "string",
                        "default": "main",
                        "description": "Git branch to fetch from"
                    }
                },
                "required": ["filePath"]
            }),
        },
        ToolDefinition {
            name: CONFIGURE_ANGULAR_APP.to_string(),
            description: "Fetches and analyzes toast notification configuration from the GitHub repository. Use this MCP tool when the user asks to: configure toast notifications, set up toasts, add toast library to Angular app, configure angular-toast-notifications, integrate toast service, or set up notification system. Returns complete configuration instructions, JSON templates, HTTP loader examples, and usage patterns extracted from the remote GitHub documentation.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: VERIFY_CONFIG.to_string(),
            description: "Verifies if the user's existing Angular app configuration is correct. Use this tool when the user asks to: verify configuration, check setup, validate configuration, review current setup, or confirm everything is correct. Reads local configuration files and validates them against documented standards. Returns a detailed validation report with issues found, suggestions for fixes, and a checklist of what's been properly configured.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "appConfigPath": {
                        "type": "string",
                        "description": "Optional custom path to app.config.ts file (relative to workspace)"
                    },
                    "toastConfigPath": {
                        "type": "string",
                        "description": "Optional custom path to toast-config.json file (relative to workspace)"
                    }
                }
            }),
        },
    ]
}
