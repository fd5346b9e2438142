//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::notification::Severity;

/// Valid config keys for `config set`/`config get`
pub const VALID_CONFIG_KEYS: [&str; 4] = [
    "app_name",
    "sound",
    "display_seconds",
    "linux.sound_theme_dir",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// AgentNotify - desktop notification MCP server for coding agents
#[derive(Parser, Debug)]
#[command(name = "agent-notify")]
#[command(version)]
#[command(about = "Desktop notification MCP server for coding agents")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP server on stdio (the default when no command is given)
    Serve,
    /// Send a desktop notification directly
    Send {
        /// Notification title
        title: String,
        /// Notification body
        message: String,
        /// Notification kind
        #[arg(short = 'k', long, value_enum, default_value_t = KindArg::Info)]
        kind: KindArg,
        /// Suppress the notification sound
        #[arg(short = 's', long)]
        silent: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Notification kind for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Info,
    Success,
    Warning,
    Error,
}

impl KindArg {
    /// Wire value of the kind, as the `notify` operation expects it
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl From<KindArg> for Severity {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Info => Severity::Info,
            KindArg::Success => Severity::Success,
            KindArg::Warning => Severity::Warning,
            KindArg::Error => Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_keys_are_recognized() {
        for key in VALID_CONFIG_KEYS {
            assert!(is_valid_config_key(key));
        }
        assert!(!is_valid_config_key("api_key"));
        assert!(!is_valid_config_key(""));
    }

    #[test]
    fn kind_arg_wire_values_parse_as_severity() {
        for kind in [
            KindArg::Info,
            KindArg::Success,
            KindArg::Warning,
            KindArg::Error,
        ] {
            let severity = Severity::parse_or_default(kind.as_str());
            assert_eq!(severity, Severity::from(kind));
        }
    }
}
