//! Story metrics engine.

use std::collections::HashMap;

use arclight_core::{ActStructure, StoryBlock, StoryMetrics};

/// Starting pacing score before penalties.
const PACING_BASELINE: f64 = 8.2;
/// Starting balance score before penalties.
const BALANCE_BASELINE: f64 = 7.5;
/// Starting engagement score before penalties.
const ENGAGEMENT_BASELINE: f64 = 9.1;
/// Scores never drop below this floor.
const SCORE_FLOOR: f64 = 5.0;
/// Pacing penalty when some acts have no content.
const EMPTY_ACT_PACING_PENALTY: f64 = 1.5;
/// Engagement penalty when some acts have no content.
const EMPTY_ACT_ENGAGEMENT_PENALTY: f64 = 1.0;
/// Balance penalty when one content kind dominates.
const DOMINANT_KIND_BALANCE_PENALTY: f64 = 2.0;
/// Share of total blocks above which a single kind counts as dominant.
const DOMINANT_KIND_SHARE: f64 = 0.6;
/// Duration credited to a block with no usable duration when accumulating
/// act distribution.
const FALLBACK_ACT_DURATION: f64 = 3.0;

/// Duration a block contributes to its act's bucket.
pub(crate) fn act_duration(block: &StoryBlock) -> f64 {
    if block.duration() > 0.0 {
        block.duration()
    } else {
        FALLBACK_ACT_DURATION
    }
}

/// Index of the first act whose closed range contains the position.
pub(crate) fn classify_index(acts: &[ActStructure], position: f64) -> Option<usize> {
    acts.iter().position(|act| act.contains(position))
}

/// Derive metrics from the ordered arc and the chosen act template.
///
/// Pure and total: identical inputs always yield identical output, and a
/// full recompute runs on every relevant mutation. Blocks whose position
/// falls in no act's range (malformed template) are silently excluded from
/// the distribution. An empty arc yields zeroed metrics.
pub fn compute_metrics(blocks: &[StoryBlock], acts: &[ActStructure]) -> StoryMetrics {
    if blocks.is_empty() {
        return StoryMetrics::default();
    }

    let mut content_type_count = HashMap::new();
    for block in blocks {
        *content_type_count.entry(block.kind()).or_insert(0) += 1;
    }

    let mut act_distribution: HashMap<String, f64> = HashMap::new();
    for block in blocks {
        if let Some(index) = classify_index(acts, block.position) {
            *act_distribution.entry(acts[index].name.clone()).or_insert(0.0) +=
                act_duration(block);
        }
    }

    let mut pacing = PACING_BASELINE;
    let mut balance = BALANCE_BASELINE;
    let mut engagement = ENGAGEMENT_BASELINE;

    if act_distribution.len() < acts.len() {
        pacing = (pacing - EMPTY_ACT_PACING_PENALTY).max(SCORE_FLOOR);
        engagement = (engagement - EMPTY_ACT_ENGAGEMENT_PENALTY).max(SCORE_FLOOR);
    }

    let max_kind_count = content_type_count.values().copied().max().unwrap_or(0);
    if max_kind_count as f64 > blocks.len() as f64 * DOMINANT_KIND_SHARE {
        balance = (balance - DOMINANT_KIND_BALANCE_PENALTY).max(SCORE_FLOOR);
    }

    StoryMetrics {
        pacing,
        balance,
        engagement,
        act_distribution,
        content_type_count,
    }
}
