//! Request router use case
//!
//! Maps a named operation plus untyped arguments onto the composer and the
//! delivery adapter, and renders the acknowledgement text returned to the
//! caller. The router never fails the call itself: every outcome, including
//! "no backend for this OS", comes back as a string.

use serde_json::Value;

use crate::application::compose::{compose, ComposeDefaults, Operation};
use crate::application::ports::Notifier;
use crate::domain::notification::Notification;

/// Acknowledgement for every delivery failure. The caller is never told
/// whether the platform had no backend or the backend could not present.
pub const DELIVERY_FAILED_ACK: &str =
    "Failed to deliver notification. Platform may be unsupported or notifications not permitted.";

/// Routes operations to the composer and the delivery adapter
pub struct NotifyRouter {
    notifier: Option<Box<dyn Notifier>>,
    defaults: ComposeDefaults,
}

impl NotifyRouter {
    /// Create a router over the selected delivery adapter (None on
    /// unsupported platforms)
    pub fn new(notifier: Option<Box<dyn Notifier>>, defaults: ComposeDefaults) -> Self {
        Self { notifier, defaults }
    }

    /// Handle one routed request end-to-end and return the acknowledgement.
    pub async fn handle(&self, operation_name: &str, args: &Value) -> String {
        let Some(operation) = Operation::parse(operation_name) else {
            return format!("Unknown operation: {}", operation_name);
        };

        let notification = compose(operation, args, &self.defaults);

        let delivered = match &self.notifier {
            Some(notifier) => match notifier.deliver(&notification).await {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("{}: {}", notifier.name(), e);
                    false
                }
            },
            None => false,
        };

        if delivered {
            success_ack(operation, &notification)
        } else {
            DELIVERY_FAILED_ACK.to_string()
        }
    }
}

/// Terse success acknowledgement carrying the severity glyph and the
/// identifying field of the request
fn success_ack(operation: Operation, notification: &Notification) -> String {
    let glyph = notification.severity.glyph();
    match operation {
        Operation::AskUser => match &notification.agent {
            Some(agent) => format!("{} Question sent: [{}] {}", glyph, agent, notification.title),
            None => format!("{} Question sent: {}", glyph, notification.title),
        },
        _ => format!("{} Notification sent: {}", glyph, notification.title),
    }
}
