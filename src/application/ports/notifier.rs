//! Notification delivery port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::Notification;

/// Notification delivery errors.
///
/// The router collapses every variant into the same failure acknowledgement;
/// the distinction only matters for stderr diagnostics.
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("{0} not found")]
    ToolNotFound(String),

    #[error("{tool} exited with status: {status}")]
    CommandFailed { tool: String, status: String },

    #[error("{0} timed out")]
    Timeout(String),

    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Port for desktop notification delivery
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Adapter name (used for logs)
    fn name(&self) -> &str;

    /// Deliver a notification to the desktop.
    ///
    /// Delivery is all-or-nothing per attempt: the adapter either presents
    /// the notification or returns an error. Sound playback is best-effort
    /// and never influences the result.
    async fn deliver(&self, notification: &Notification) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    async fn deliver(&self, notification: &Notification) -> Result<(), NotificationError> {
        self.as_ref().deliver(notification).await
    }
}
