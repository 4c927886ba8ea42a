//! Notification sink seam
//!
//! Outbound and fire-and-forget: the engine never retries or awaits
//! delivery. Real delivery (LINE, mail, in-app) is wired in by the
//! surrounding application; the default sink writes to the log.

use std::sync::Mutex;

use shared::notification::Notification;

/// Receiver of engine notifications
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Sink that writes notifications to the tracing log
#[derive(Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, n: Notification) {
        tracing::info!(
            recipient_id = n.recipient_id,
            subject_kind = %n.subject_kind,
            subject_id = n.subject_id,
            notification_type = %n.notification_type,
            title = %n.title,
            "notification dispatched"
        );
    }
}

/// Sink that records notifications in memory, for tests and previews
#[derive(Debug, Default)]
pub struct MemorySink {
    sent: Mutex<Vec<Notification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().expect("sink poisoned").clone()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: Notification) {
        self.sent.lock().expect("sink poisoned").push(notification);
    }
}
