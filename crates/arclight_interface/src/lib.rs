//! Boundary traits for the Arclight story-planning engine.
//!
//! Everything the engine consumes from or exposes to the outside world goes
//! through the contracts in this crate: drag input events, the notification
//! sink, the structure template provider, and the opaque suggestion backend.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod events;
mod traits;

pub use events::{DragEvent, PointerBox};
pub use traits::{NotificationSink, StructureProvider, SuggestionBackend};
