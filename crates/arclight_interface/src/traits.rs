//! Trait definitions for the engine's external collaborators.

use arclight_core::{ActStructure, Notification, StructureKind};
use arclight_error::{StructureError, SuggestionError};
use async_trait::async_trait;

/// Receives status messages for presentation.
///
/// The engine emits a notification on every completed reorder gesture and
/// every finished insight or suggestion pass. Rendering is the consumer's
/// concern; implementations must not block.
pub trait NotificationSink: Send + Sync {
    /// Deliver a notification to the presentation layer.
    fn notify(&self, notification: Notification);
}

/// Supplies act templates for narrative structures.
///
/// Templates are read-only during a session. Providers hand ranges through
/// as given; malformed templates (gaps, overlaps) are not rejected here and
/// degrade metrics silently downstream.
pub trait StructureProvider: Send + Sync {
    /// The ordered act list for a structure.
    fn acts(&self, kind: StructureKind) -> Result<Vec<ActStructure>, StructureError>;

    /// All structures this provider can supply.
    fn available(&self) -> Vec<StructureKind>;
}

/// An opaque asynchronous text-generation backend.
///
/// Failures are recoverable: callers report them to the notification sink
/// and leave the block list untouched.
#[async_trait]
pub trait SuggestionBackend: Send + Sync {
    /// Generate text for a prompt against the named provider.
    async fn complete(&self, prompt: &str, provider: &str) -> Result<String, SuggestionError>;

    /// Backend name for logging and notifications.
    fn backend_name(&self) -> &'static str;
}
