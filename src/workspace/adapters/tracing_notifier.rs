//! Notifier that forwards notifications to `tracing`.

use crate::workspace::ports::{Notification, Notifier};

/// Emits each notification as an `info` event on the `taskdeck::notify`
/// target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        tracing::info!(
            target: "taskdeck::notify",
            action = %notification.action(),
            "{}",
            notification.message()
        );
    }
}
