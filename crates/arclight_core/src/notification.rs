//! Status notifications emitted toward the presentation layer.

use serde::{Deserialize, Serialize};

/// Severity of a notification.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationLevel {
    /// An operation completed
    Success,
    /// Advisory status
    Info,
    /// Something degraded but recoverable
    Warning,
    /// An external operation failed; the engine recovered
    Error,
}

/// A human-readable status message for the presentation layer.
///
/// The engine emits these on successful reorders and on completed insight or
/// suggestion passes; it never renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity level
    pub level: NotificationLevel,
    /// Primary message line
    pub message: String,
    /// Optional secondary detail line
    pub detail: Option<String>,
}

impl Notification {
    /// Create a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            detail: None,
        }
    }

    /// Create an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
            detail: None,
        }
    }

    /// Create a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
            detail: None,
        }
    }

    /// Create an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            detail: None,
        }
    }

    /// Attach a secondary detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
