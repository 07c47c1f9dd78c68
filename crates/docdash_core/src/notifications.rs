use std::time::Duration;

pub type NotificationId = u64;

/// How long a notification stays visible unless dismissed earlier.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Error => "x-circle",
            Severity::Info => "info",
            Severity::Warning => "alert-triangle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

/// Transient messages shown to the user. Duplicates are allowed; removal is
/// driven by `dismiss`, either from the user or from the expiry timer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationQueue {
    next_id: NotificationId,
    visible: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification and returns its id so the caller can schedule
    /// its expiry.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        self.visible.push(Notification {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// Removes a notification. Returns false when it was already gone, which
    /// happens when the user dismissed it before the timer fired.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.visible.len();
        self.visible.retain(|n| n.id != id);
        self.visible.len() != before
    }

    pub fn visible(&self) -> &[Notification] {
        &self.visible
    }
}
