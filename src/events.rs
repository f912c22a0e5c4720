// Editor events for view notification
// Defines event payloads and emission trait for testability

use serde::Serialize;

/// Event names as constants for consistency
pub mod bang_events {
    pub const BANGS_UPDATED: &str = "bangs_updated";
    pub const NOTIFICATION: &str = "notification";
}

/// Payload for bangs_updated event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BangsUpdatedPayload {
    /// Operation that changed the table: "add", "rename", "import", ...
    pub action: String,
    /// Trigger of the affected entry, for single-entry operations
    pub trigger: Option<String>,
    /// Number of entries after the change
    pub entry_count: usize,
    /// Whether the table now has unsaved changes
    pub dirty: bool,
}

/// Severity of a user notification
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Payload for notification event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub level: NotificationLevel,
    /// Message shown to the user
    pub message: String,
    /// ISO 8601 timestamp when the notification was raised
    pub timestamp: String,
}

impl NotificationPayload {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: current_timestamp(),
        }
    }
}

/// Get current timestamp in ISO 8601 format
pub fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Trait for emitting editor events
/// Allows mocking in tests while a real view adapter is used in production
pub trait BangEventEmitter: Send + Sync {
    /// Emit bangs_updated event
    fn emit_bangs_updated(&self, payload: BangsUpdatedPayload);

    /// Emit notification event
    fn emit_notification(&self, payload: NotificationPayload);
}

/// Emitter that forwards events to the log, for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventEmitter;

impl BangEventEmitter for LogEventEmitter {
    fn emit_bangs_updated(&self, payload: BangsUpdatedPayload) {
        crate::debug!(
            "{}: action={} entries={} dirty={}",
            bang_events::BANGS_UPDATED,
            payload.action,
            payload.entry_count,
            payload.dirty
        );
    }

    fn emit_notification(&self, payload: NotificationPayload) {
        match payload.level {
            NotificationLevel::Success => {
                crate::info!("{}: {}", bang_events::NOTIFICATION, payload.message)
            }
            NotificationLevel::Error => {
                crate::warn!("{}: {}", bang_events::NOTIFICATION, payload.message)
            }
        }
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
