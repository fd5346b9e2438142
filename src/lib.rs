//! AgentNotify - desktop notification MCP server for coding agents
//!
//! This crate exposes a closed set of notification operations (plain notify,
//! user questions, commit/merge/worktree-sync events) over MCP and renders
//! each one as a native desktop notification on the host OS.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: The notification model, severity tables, and configuration
//! - **Application**: The message composer, request router, and port traits
//! - **Infrastructure**: Per-OS delivery adapters and the config store
//! - **MCP**: Stdio JSON-RPC server and the tool registry
//! - **CLI**: Command-line interface and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod mcp;
