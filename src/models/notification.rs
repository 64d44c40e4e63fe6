use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// A message the host should surface to the user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub text: String,
    pub kind: NotificationKind,
}

/// The host's user-facing notification channel.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Drops every notification. Used when the host offers no channel.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notification: Notification) {}
}
