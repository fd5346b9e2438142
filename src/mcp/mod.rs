//! MCP protocol surface
//!
//! Stdio JSON-RPC server, message types, and the tool registry that maps
//! the protocol onto the notification router.

pub mod protocol;
pub mod server;
pub mod tools;

pub use protocol::{McpError, McpRequest, McpResponse};
pub use server::McpServer;
pub use tools::{tool_definitions, McpTool};
