//! User-facing notifications.
//!
//! The controller reports transient messages (the toasts of a UI frontend)
//! through the [`Notifier`] trait instead of any ambient global, so hosts
//! decide how to surface them.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Destructive,
}

/// A transient user-facing message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, message)
    }

    pub fn destructive(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Destructive, title, message)
    }
}

/// Sink for notifications emitted by the form controller.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that forwards messages over an unbounded channel.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Creates a notifier and the receiving end for the host to drain.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        // Receiver may already be gone; dropping the message is fine.
        let _ = self.tx.send(notification);
    }
}

/// Notifier that discards everything.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}
