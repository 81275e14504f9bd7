//! Derived story metrics.

use crate::BlockKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Heuristic scores and distributions derived from the ordered arc.
///
/// Fully recomputed on every relevant mutation; holds no independent
/// identity. Scores are coarse and deterministic: identical
/// inputs always yield identical output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoryMetrics {
    /// Pacing score in `[0, 10]`
    pub pacing: f64,
    /// Balance score in `[0, 10]`
    pub balance: f64,
    /// Engagement score in `[0, 10]`
    pub engagement: f64,
    /// Accumulated duration per act name
    pub act_distribution: HashMap<String, f64>,
    /// Block count per content kind
    pub content_type_count: HashMap<BlockKind, usize>,
}
