//! Story metrics, structural insights, and segment suggestions.
//!
//! Everything in this crate derives from the ordered arc: the metrics engine
//! scores pacing, balance, and engagement; the insight generator walks a
//! fixed rule table; the segment heuristic assigns advisory narrative
//! labels. The [`StoryAnalyst`] wraps the heuristics in the asynchronous
//! pass contract: snapshot in, wholesale result out, stale results
//! superseded.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyst;
mod insight;
mod library;
mod metrics;
mod segment;

pub use analyst::{
    ScriptedBackend, StoryAnalyst, SuggestionOutcome, DEFAULT_PROCESSING_DELAY,
};
pub use insight::generate_insights;
pub use library::StructureLibrary;
pub use metrics::compute_metrics;
pub use segment::{suggest_segment, suggest_segments};
