//! Notification Surface
//!
//! Transient success/error messages emitted by admin screens. How the
//! messages reach the operator (terminal, toast bar, status line) is a
//! sink concern; screens only talk to the trait.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient user-facing message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: String,
    pub level: NoticeLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

/// Notification sink trait
pub trait NotificationSink: Send + Sync {
    /// Deliver a notice to the surface
    fn notify(&self, notice: Notice);

    /// Deliver a success message
    fn success(&self, message: &str) {
        self.notify(Notice::success(message));
    }

    /// Deliver an error message
    fn error(&self, message: &str) {
        self.notify(Notice::error(message));
    }
}

/// No-op sink for contexts without a notification surface
pub struct NoOpSink;

impl NotificationSink for NoOpSink {
    fn notify(&self, _notice: Notice) {}
}

/// Sink that buffers notices until a UI shell drains and renders them
#[derive(Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all pending notices, oldest first
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock())
    }

    /// Number of notices waiting to be drained
    pub fn pending_count(&self) -> usize {
        self.notices.lock().len()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_buffers_in_order() {
        let sink = RecordingSink::new();
        sink.success("saved");
        sink.error("boom");

        assert_eq!(sink.pending_count(), 2);
        let notices = sink.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(notices[0].message, "saved");
        assert_eq!(notices[1].level, NoticeLevel::Error);
        assert_eq!(sink.pending_count(), 0);
    }

    #[test]
    fn test_no_op_sink_discards() {
        let sink = NoOpSink;
        sink.success("ignored");
    }
}
