//! macOS notification adapter
//!
//! Two delivery tiers tried in order: the rich notify-rust API first, then
//! an `osascript` invocation. The first tier that presents wins; only when
//! both fail does the adapter report an error.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::notification::Notification;

use super::{run_presentation_command, COMMAND_TIMEOUT};

/// macOS notifier with a native tier and a scripting fallback
pub struct MacosNotifier {
    /// Application name for notifications
    app_name: String,
}

impl MacosNotifier {
    /// Create a new macOS notifier
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Tier 1: rich native presentation via notify-rust.
    ///
    /// The subtitle gets its own field here, so it stays out of the body
    /// prefix.
    async fn deliver_native(&self, notification: &Notification) -> Result<(), NotificationError> {
        let app_name = self.app_name.clone();
        let title = notification.decorated_title();
        let body = notification.formatted_body(false);
        let sound = notification
            .play_sound
            .then(|| notification.severity.macos_sound().to_string());
        #[cfg(target_os = "macos")]
        let subtitle = notification.subtitle.clone();

        bounded_native_call(COMMAND_TIMEOUT, move || {
            let mut builder = notify_rust::Notification::new();
            builder.appname(&app_name).summary(&title).body(&body);

            #[cfg(target_os = "macos")]
            if let Some(subtitle) = &subtitle {
                builder.subtitle(subtitle);
            }
            if let Some(sound) = &sound {
                builder.sound_name(sound);
            }

            builder
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError::SendFailed(e.to_string()))
        })
        .await
    }

    /// Tier 2: `display notification` via osascript
    async fn deliver_osascript(
        &self,
        notification: &Notification,
    ) -> Result<(), NotificationError> {
        let title = escape_applescript(&notification.decorated_title());
        let body = escape_applescript(&notification.formatted_body(true));

        let mut script = format!(
            "display notification \"{}\" with title \"{}\"",
            body, title
        );
        if notification.play_sound {
            script.push_str(&format!(
                " sound name \"{}\"",
                notification.severity.macos_sound()
            ));
        }

        let mut cmd = Command::new("osascript");
        cmd.arg("-e").arg(script);
        run_presentation_command("osascript", &mut cmd).await
    }
}

/// Run a blocking native notification call with a bounded wait.
///
/// The call runs on the blocking pool; if it has not returned within
/// `limit` the wait is abandoned and `Timeout` comes back, so the caller
/// can move on to the next tier.
async fn bounded_native_call<F>(limit: Duration, call: F) -> Result<(), NotificationError>
where
    F: FnOnce() -> Result<(), NotificationError> + Send + 'static,
{
    timeout(limit, tokio::task::spawn_blocking(call))
        .await
        .map_err(|_| NotificationError::Timeout("notify-rust".to_string()))?
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
}

/// Try the native tier, then the scripting tier on any failure. The first
/// tier that presents wins; when both fail, the scripting tier's error is
/// the one reported.
async fn deliver_with_fallback<N, NFut, S, SFut>(
    native: N,
    script: S,
) -> Result<(), NotificationError>
where
    N: FnOnce() -> NFut,
    NFut: Future<Output = Result<(), NotificationError>>,
    S: FnOnce() -> SFut,
    SFut: Future<Output = Result<(), NotificationError>>,
{
    match native().await {
        Ok(()) => Ok(()),
        Err(_) => script().await,
    }
}

/// Escape embedded quotes for an AppleScript string literal
fn escape_applescript(text: &str) -> String {
    text.replace('"', "\\\"")
}

#[async_trait]
impl Notifier for MacosNotifier {
    fn name(&self) -> &str {
        "macos"
    }

    async fn deliver(&self, notification: &Notification) -> Result<(), NotificationError> {
        deliver_with_fallback(
            || self.deliver_native(notification),
            || self.deliver_osascript(notification),
        )
        .await
    }
}
