//! Ordered content-block board and drag reordering engine.
//!
//! The [`BlockBoard`] owns the canonical block collection and its ordering;
//! the [`reorder`] module holds the pure insertion-index calculations for the
//! three drop variants; [`DragSession`] turns the raw drag event stream into
//! committed reorders, throttling continuous hover commits.
//!
//! The board is single-writer and single-threaded by design: one user
//! interaction maps to one synchronous mutation-and-recompute pass.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod board;
mod drag;
pub mod reorder;

pub use board::{BlockBoard, BlockField};
pub use drag::{DragConfig, DragSession, DragState, DEFAULT_HOVER_DEBOUNCE};
