//! Arclight - the ordered content-block engine behind a video-production
//! planning tool.
//!
//! Arclight owns the algorithmic core of episode planning: a strictly
//! ordered board of content blocks that users drag, drop, and reorder, plus
//! the analytics derived from that order: timeline layout, pacing/balance/
//! engagement scores, per-act time distribution, structural insights, and
//! advisory narrative segment labels.
//!
//! # Quick Start
//!
//! ```
//! use arclight::{BlockBoard, BlockKind, ContentBlock, StructureKind, StructureLibrary};
//! use arclight::{compute_metrics, StructureProvider};
//!
//! let mut board = BlockBoard::new();
//! board.add(
//!     ContentBlock::builder()
//!         .title("Opening interview")
//!         .kind(BlockKind::Interview)
//!         .duration(4.0)
//!         .in_story_arc(true)
//!         .build()
//!         .unwrap(),
//! );
//!
//! let library = StructureLibrary::bundled().unwrap();
//! let acts = library.acts(StructureKind::ThreeAct).unwrap();
//! let metrics = compute_metrics(&board.story_blocks(), &acts);
//! assert!(metrics.pacing > 0.0);
//! ```
//!
//! # Architecture
//!
//! Arclight is organized as a workspace with focused crates:
//!
//! - `arclight_core` - core data types (blocks, templates, metrics)
//! - `arclight_error` - error types
//! - `arclight_interface` - boundary traits and drag events
//! - `arclight_board` - the block board, reorder engine, and drag session
//! - `arclight_timeline` - timeline track layout
//! - `arclight_story` - metrics, insights, and the suggestion passes
//!
//! This crate (`arclight`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod telemetry;

pub use arclight_board::*;
pub use arclight_core::*;
pub use arclight_error::*;
pub use arclight_interface::*;
pub use arclight_story::*;
pub use arclight_timeline::*;
pub use telemetry::init_telemetry;
