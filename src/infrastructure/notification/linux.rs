//! Linux notification adapter using notify-send
//!
//! Requires `notify-send` on the search path; severity maps to urgency and
//! `display_seconds` to the expire time. Sound is played out-of-band with
//! `paplay` or `aplay`.

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::notification::{Notification, Severity};

use super::{is_tool_available, run_presentation_command};

/// notify-send notification adapter
pub struct LinuxNotifier {
    notify_send_cmd: String,
    sound_players: Vec<String>,
    sound_theme_dir: String,
}

impl LinuxNotifier {
    /// Create a new notify-send notifier
    pub fn new(sound_theme_dir: impl Into<String>) -> Self {
        Self {
            notify_send_cmd: "notify-send".to_string(),
            sound_players: vec!["paplay".to_string(), "aplay".to_string()],
            sound_theme_dir: sound_theme_dir.into(),
        }
    }

    /// Create with custom command names (for tests)
    pub fn with_commands(
        notify_send_cmd: impl Into<String>,
        sound_players: Vec<String>,
        sound_theme_dir: impl Into<String>,
    ) -> Self {
        Self {
            notify_send_cmd: notify_send_cmd.into(),
            sound_players,
            sound_theme_dir: sound_theme_dir.into(),
        }
    }

    /// Play the severity sound with the first available player.
    ///
    /// Fire-and-forget: playback failure never influences the delivery
    /// verdict, so this returns nothing.
    async fn play_sound(&self, severity: Severity) {
        let sound_file = format!("{}/{}", self.sound_theme_dir, severity.linux_sound_file());

        for player in &self.sound_players {
            if !is_tool_available(player).await {
                continue;
            }
            let mut cmd = Command::new(player);
            cmd.arg(&sound_file);
            if run_presentation_command(player, &mut cmd).await.is_ok() {
                break;
            }
        }
    }
}

#[async_trait]
impl Notifier for LinuxNotifier {
    fn name(&self) -> &str {
        "linux"
    }

    async fn deliver(&self, notification: &Notification) -> Result<(), NotificationError> {
        // Bail out before building the command when the tool is absent
        if !is_tool_available(&self.notify_send_cmd).await {
            return Err(NotificationError::ToolNotFound(
                self.notify_send_cmd.clone(),
            ));
        }

        let expire_ms = notification.display_seconds.saturating_mul(1000).to_string();
        let title = notification.decorated_title();
        let body = notification.formatted_body(true);

        let mut cmd = Command::new(&self.notify_send_cmd);
        cmd.args([
            "--urgency",
            notification.severity.linux_urgency(),
            "--expire-time",
            expire_ms.as_str(),
            title.as_str(),
            body.as_str(),
        ]);
        run_presentation_command(&self.notify_send_cmd, &mut cmd).await?;

        if notification.play_sound {
            self.play_sound(notification.severity).await;
        }

        Ok(())
    }
}
