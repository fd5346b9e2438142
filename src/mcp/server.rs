//! MCP server over stdio
//!
//! Newline-delimited JSON-RPC 2.0: one request per line on stdin, one
//! response per line on stdout. Everything diagnostic goes to stderr so the
//! protocol stream stays clean.

use anyhow::Result;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::application::NotifyRouter;

use super::protocol::{McpRequest, McpResponse, METHOD_NOT_FOUND};
use super::tools::tool_definitions;

/// The MCP protocol revision this server speaks
const PROTOCOL_VERSION: &str = "2024-11-05";

/// Stdio MCP server wrapping the notification router
pub struct McpServer {
    router: NotifyRouter,
}

impl McpServer {
    /// Create a server over a ready-made router
    pub fn new(router: NotifyRouter) -> Self {
        Self { router }
    }

    /// Run the request loop until stdin closes.
    pub async fn run(&self) -> Result<()> {
        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut reader = BufReader::new(stdin);
        let mut line = String::new();

        eprintln!("agent-notify MCP server started (stdio)");

        loop {
            line.clear();
            let bytes_read = reader.read_line(&mut line).await?;

            if bytes_read == 0 {
                break; // EOF
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<McpRequest>(line) {
                Ok(request) => {
                    // Client-to-server notifications get no response frame
                    if request.id.is_none() && request.method.starts_with("notifications/") {
                        continue;
                    }

                    let response = self.handle_request(request).await;
                    let response_json = serde_json::to_string(&response)?;
                    stdout.write_all(response_json.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                    stdout.flush().await?;
                }
                Err(e) => {
                    eprintln!("Failed to parse request: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Dispatch one protocol request
    pub async fn handle_request(&self, request: McpRequest) -> McpResponse {
        match request.method.as_str() {
            "initialize" => McpResponse::success(request.id, self.initialize_result()),
            "tools/list" => {
                McpResponse::success(request.id, json!({ "tools": tool_definitions() }))
            }
            "tools/call" => {
                let params = request.params.unwrap_or_else(|| json!({}));
                let name = params["name"].as_str().unwrap_or("");
                let arguments = params
                    .get("arguments")
                    .cloned()
                    .unwrap_or_else(|| json!({}));

                let ack = self.router.handle(name, &arguments).await;

                McpResponse::success(
                    request.id,
                    json!({
                        "content": [{
                            "type": "text",
                            "text": ack
                        }]
                    }),
                )
            }
            method => McpResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", method),
            ),
        }
    }

    fn initialize_result(&self) -> serde_json::Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }
}
