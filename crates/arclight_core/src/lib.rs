//! Core data types for the Arclight story-planning engine.
//!
//! This crate provides the foundation data types used across all Arclight
//! interfaces: content blocks and their closed kind enumeration, narrative
//! structure templates, derived story metrics, insights, and notifications.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod block;
mod insight;
mod metrics;
mod notification;
mod structure;

pub use block::{
    AiProvider, BlockId, BlockKind, BlockStatus, ContentBlock, ContentBlockBuilder,
    ContentBlockBuilderError, StoryBlock, DEFAULT_BLOCK_DURATION,
};
pub use insight::{Insight, InsightLevel};
pub use metrics::StoryMetrics;
pub use notification::{Notification, NotificationLevel};
pub use structure::{ActStructure, StructureKind};
