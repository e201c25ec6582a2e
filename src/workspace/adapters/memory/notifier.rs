//! Notifier that keeps delivered notifications in memory.

use std::sync::{Arc, Mutex};

use crate::workspace::ports::{Notification, Notifier};

/// Thread-safe notifier that records every delivered notification.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    delivered: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates a notifier with no recorded notifications.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notifications delivered so far, oldest first.
    ///
    /// A poisoned lock yields the notifications recorded before the panic.
    #[must_use]
    pub fn delivered(&self) -> Vec<Notification> {
        match self.delivered.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        match self.delivered.lock() {
            Ok(mut guard) => guard.push(notification.clone()),
            Err(poisoned) => poisoned.into_inner().push(notification.clone()),
        }
    }
}
