//! MCP server for the Angular toast notifications library
//!
//! Exposes the library's GitHub repository and a local configuration checker
//! to agentic IDEs over the Model Context Protocol.
//!
//! ```text
//! [ MCP Client (IDE) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ toast-mcp ]
//!        |
//!        +--> [ toast-github ] --> GitHub REST API
//!        +--> [ toast-core ]   --> extract / verify
//!                   |
//!                   +--> [ toast-fs ] --> app.config.ts, toast-config.json
//! ```
//!
//! # Tools
//!
//! - `cdd-get_repository_info` - repository metadata
//! - `cdd-list_contents` - browse the repository
//! - `cdd-get_file_contents` - read one file
//! - `cdd-configure_angular_app` - setup instructions extracted from the docs
//! - `cdd-verify_config` - validate the local Angular project

pub mod config;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use handlers::ToolContext;
pub use server::ToastMcpServer;
pub use tools::{ToolContent, ToolDefinition, ToolResult, get_tool_definitions};
