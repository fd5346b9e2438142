//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the native presentation mechanisms of each OS.

pub mod config;
pub mod notification;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{
    create_notifier, LinuxNotifier, MacosNotifier, WindowsNotifier, COMMAND_TIMEOUT,
};
