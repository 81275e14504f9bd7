//! Structural insight types.

use serde::{Deserialize, Serialize};

/// Severity of a structural insight.
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
pub enum InsightLevel {
    /// Structural problem worth attention
    Warning,
    /// The structure meets a recommended pattern
    Success,
    /// Advisory observation
    Info,
}

/// A human-readable structural observation about the arc.
///
/// # Examples
///
/// ```
/// use arclight_core::{Insight, InsightLevel};
///
/// let insight = Insight::new(InsightLevel::Warning, "The Setup act is currently empty.");
/// assert_eq!(insight.level, InsightLevel::Warning);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Severity level
    pub level: InsightLevel,
    /// Message text
    pub message: String,
}

impl Insight {
    /// Create a new insight.
    pub fn new(level: InsightLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}
