//! Notification delivery adapters
//!
//! One adapter per supported OS, each driving an external presentation
//! mechanism. All adapters are compiled on every platform (they shell out
//! rather than bind), so selection happens at runtime from the OS
//! identifier.

mod linux;
mod macos;
mod windows;

pub use linux::LinuxNotifier;
pub use macos::MacosNotifier;
pub use windows::WindowsNotifier;

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::config::AppConfig;

/// Upper bound on any external presentation command
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// Create the delivery adapter for an OS identifier.
///
/// Unsupported identifiers yield `None`; the router reports that as an
/// ordinary delivery failure. Call with `std::env::consts::OS` for the
/// running host.
pub fn create_notifier(host_os: &str, config: &AppConfig) -> Option<Box<dyn Notifier>> {
    match host_os {
        "macos" => Some(Box::new(MacosNotifier::new(config.app_name_or_default()))),
        "linux" => Some(Box::new(LinuxNotifier::new(
            config.sound_theme_dir_or_default(),
        ))),
        "windows" => Some(Box::new(WindowsNotifier::new(config.app_name_or_default()))),
        _ => None,
    }
}

/// Check if a tool binary is available using `which`
pub(crate) async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run an external command with a bounded wait.
///
/// "binary not found", "non-zero exit" and "timed out" all come back as
/// `NotificationError` variants; nothing escapes as a panic.
pub(crate) async fn run_presentation_command(
    tool: &str,
    command: &mut Command,
) -> Result<(), NotificationError> {
    let status = timeout(
        COMMAND_TIMEOUT,
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status(),
    )
    .await
    .map_err(|_| NotificationError::Timeout(tool.to_string()))?
    .map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            NotificationError::ToolNotFound(tool.to_string())
        } else {
            NotificationError::SendFailed(e.to_string())
        }
    })?;

    if !status.success() {
        return Err(NotificationError::CommandFailed {
            tool: tool.to_string(),
            status: status.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_maps_each_supported_os() {
        let config = AppConfig::defaults();
        assert_eq!(create_notifier("macos", &config).unwrap().name(), "macos");
        assert_eq!(create_notifier("linux", &config).unwrap().name(), "linux");
        assert_eq!(
            create_notifier("windows", &config).unwrap().name(),
            "windows"
        );
    }

    #[test]
    fn selector_yields_none_for_unsupported_os() {
        let config = AppConfig::defaults();
        assert!(create_notifier("freebsd", &config).is_none());
        assert!(create_notifier("", &config).is_none());
        assert!(create_notifier("Darwin", &config).is_none());
    }

    #[tokio::test]
    async fn missing_binary_is_not_available() {
        assert!(!is_tool_available("definitely-not-a-real-tool-xyz").await);
    }

    #[tokio::test]
    async fn run_presentation_command_maps_missing_binary() {
        let mut cmd = Command::new("definitely-not-a-real-tool-xyz");
        let err = run_presentation_command("definitely-not-a-real-tool-xyz", &mut cmd)
            .await
            .unwrap_err();
        assert!(matches!(err, NotificationError::ToolNotFound(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn run_presentation_command_maps_nonzero_exit() {
        let mut cmd = Command::new("false");
        let err = run_presentation_command("false", &mut cmd).await.unwrap_err();
        assert!(matches!(err, NotificationError::CommandFailed { .. }));
    }
}
