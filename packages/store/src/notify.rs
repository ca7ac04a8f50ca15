//! Notification side channel used by editors and forms.

use std::cell::RefCell;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
    Info,
}

impl fmt::Display for NotifyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotifyKind::Success => "success",
            NotifyKind::Error => "error",
            NotifyKind::Info => "info",
        })
    }
}

/// Fire-and-forget user-facing notifications.
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotifyKind);
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Notifier for Silent {
    fn notify(&self, _message: &str, _kind: NotifyKind) {}
}

/// Keeps notifications in memory, in order. Handy for headless sessions and tests.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: RefCell<Vec<(String, NotifyKind)>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(String, NotifyKind)> {
        self.entries.borrow().clone()
    }

    pub fn last(&self) -> Option<(String, NotifyKind)> {
        self.entries.borrow().last().cloned()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, message: &str, kind: NotifyKind) {
        self.entries.borrow_mut().push((message.to_string(), kind));
    }
}
