//! Tool registry
//!
//! The closed operation set exposed over `tools/list`, one JSON schema per
//! operation. Built once at startup and immutable afterwards.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// MCP tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpTool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Definitions for every routable operation
pub fn tool_definitions() -> Vec<McpTool> {
    vec![
        McpTool {
            name: "notify".to_string(),
            description: "Send a system notification to the user. Use this to alert the user \
                          about something important, such as task completion, errors, or when \
                          user input is required. The notification appears in the system \
                          notification center with a sound."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "Short title for the notification"
                    },
                    "message": {
                        "type": "string",
                        "description": "Body text of the notification"
                    },
                    "type": {
                        "type": "string",
                        "enum": ["info", "success", "warning", "error"],
                        "description": "Type of notification: info (general), success (task completed), warning (attention needed), error (problem occurred)",
                        "default": "info"
                    },
                    "sound": {
                        "type": "boolean",
                        "description": "Whether to play a notification sound",
                        "default": true
                    }
                },
                "required": ["title", "message"]
            }),
        },
        McpTool {
            name: "ask_user".to_string(),
            description: "Notify the user that an agent needs their input, with optional \
                          answer choices and repo/branch context."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "Short title for the question"
                    },
                    "question": {
                        "type": "string",
                        "description": "The question to show the user"
                    },
                    "options": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Ordered answer choices, shown bracketed in the body"
                    },
                    "urgency": {
                        "type": "string",
                        "enum": ["low", "normal", "high"],
                        "description": "How urgently input is needed",
                        "default": "normal"
                    },
                    "repo": {"type": "string", "description": "Repository name"},
                    "branch": {"type": "string", "description": "Branch name"},
                    "agent": {"type": "string", "description": "Asking agent's name"},
                    "task": {"type": "string", "description": "Current task name or number"}
                },
                "required": ["title", "question"]
            }),
        },
        McpTool {
            name: "notify_commit".to_string(),
            description: "Notify the user that a commit was created on a branch.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "branch": {"type": "string", "description": "Branch the commit landed on"},
                    "message": {"type": "string", "description": "Commit message"},
                    "files": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Changed file names (first 5 are listed)"
                    },
                    "hash": {"type": "string", "description": "Commit hash"},
                    "agent": {"type": "string", "description": "Committing agent's name"}
                },
                "required": ["branch", "message"]
            }),
        },
        McpTool {
            name: "notify_merge".to_string(),
            description: "Notify the user that a branch was merged into main.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "source_branch": {"type": "string", "description": "Branch that was merged"},
                    "commits_count": {"type": "integer", "description": "Number of commits merged"},
                    "files_count": {"type": "integer", "description": "Number of files changed"},
                    "version": {"type": "string", "description": "Version released by the merge"},
                    "repo": {"type": "string", "description": "Repository name"},
                    "agent": {"type": "string", "description": "Merging agent's name"}
                },
                "required": ["source_branch"]
            }),
        },
        McpTool {
            name: "notify_sync".to_string(),
            description: "Notify the user that worktrees were synced from a source branch, \
                          with any merge conflicts."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "worktrees": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Updated worktree names"
                    },
                    "source": {
                        "type": "string",
                        "description": "Branch the worktrees were updated from",
                        "default": "main"
                    },
                    "repo": {"type": "string", "description": "Repository name"},
                    "conflicts": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Files with merge conflicts"
                    }
                },
                "required": ["worktrees"]
            }),
        },
    ]
}
