//! Windows notification adapter
//!
//! Builds a toast XML payload and hands it to PowerShell. No native binding:
//! absence of PowerShell is an ordinary delivery failure.

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::notification::Notification;

use super::run_presentation_command;

/// PowerShell toast notification adapter
pub struct WindowsNotifier {
    /// Toast notifier id shown by the Action Center
    app_name: String,
}

impl WindowsNotifier {
    /// Create a new PowerShell toast notifier
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Build the PowerShell script that loads and shows the toast
    fn toast_script(&self, notification: &Notification) -> String {
        let title = notification.decorated_title();
        let body = notification.formatted_body(true);
        // <audio silent="true"/> suppresses the toast sound
        let silent = (!notification.play_sound).to_string();

        format!(
            r#"
[Windows.UI.Notifications.ToastNotificationManager, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null
[Windows.Data.Xml.Dom.XmlDocument, Windows.Data.Xml.Dom.XmlDocument, ContentType = WindowsRuntime] | Out-Null

$template = @"
<toast duration="short">
    <visual>
        <binding template="ToastText02">
            <text id="1">{title}</text>
            <text id="2">{body}</text>
        </binding>
    </visual>
    <audio silent="{silent}"/>
</toast>
"@

$xml = New-Object Windows.Data.Xml.Dom.XmlDocument
$xml.LoadXml($template)
$toast = [Windows.UI.Notifications.ToastNotification]::new($xml)
[Windows.UI.Notifications.ToastNotificationManager]::CreateToastNotifier("{app_name}").Show($toast)
"#,
            title = title,
            body = body,
            silent = silent,
            app_name = self.app_name,
        )
    }
}

#[async_trait]
impl Notifier for WindowsNotifier {
    fn name(&self) -> &str {
        "windows"
    }

    async fn deliver(&self, notification: &Notification) -> Result<(), NotificationError> {
        let script = self.toast_script(notification);

        let mut cmd = Command::new("powershell");
        cmd.args(["-NoProfile", "-Command", &script]);
        run_presentation_command("powershell", &mut cmd).await
    }
}
