//! Shared types for the back-office admin console.

pub mod logging;
pub mod notify;

pub use notify::{NoOpSink, Notice, NoticeLevel, NotificationSink, RecordingSink};
