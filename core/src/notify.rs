//! User-facing notifications (toasts).
//!
//! The page never talks to a global toast channel; it is handed a `Notifier`.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};

pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Emits every notification as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "todo_core::toast", "{message}");
    }

    fn error(&self, message: &str) {
        warn!(target: "todo_core::toast", "{message}");
    }
}

/// In-order queue of notifications for the UI to drain.
///
/// Clones share the same queue, so one handle can be given to the controller
/// while another is kept by whoever renders the toasts.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Rc<RefCell<Vec<Notification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Notification> {
        self.entries.borrow().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.entries.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Take every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }

    fn push(&self, notification: Notification) {
        self.entries.borrow_mut().push(notification);
    }
}

impl Notifier for NotificationLog {
    fn success(&self, message: &str) {
        self.push(Notification::success(message));
    }

    fn error(&self, message: &str) {
        self.push(Notification::error(message));
    }
}
