//! Outbound notification port.

use crate::workspace::domain::AuditAction;
use serde::Serialize;

/// Human-readable notice emitted after a command has been committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    action: AuditAction,
    message: String,
}

impl Notification {
    /// Creates a notification for `action`.
    #[must_use]
    pub fn new(action: AuditAction, message: impl Into<String>) -> Self {
        Self {
            action,
            message: message.into(),
        }
    }

    /// Returns the action that triggered the notification.
    #[must_use]
    pub const fn action(&self) -> AuditAction {
        self.action
    }

    /// Returns the notification text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Delivery channel for post-commit notifications.
///
/// Delivery is fire-and-forget: a committed command is never rolled back
/// because a notification could not be delivered.
pub trait Notifier: Send + Sync {
    /// Delivers a notification.
    fn notify(&self, notification: &Notification);
}
