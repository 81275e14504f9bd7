//! Timeline track layout calculator.
//!
//! Maps an ordered sequence of block durations onto horizontal percentages
//! of a fixed-width track, plus the time-axis markers for the chosen scale.
//! Layout is a pure function of durations and scale; the presentation layer
//! turns percentages into pixels.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use arclight_core::{BlockId, ContentBlock};
use serde::{Deserialize, Serialize};

/// The track never represents less than this many minutes of content.
pub const MIN_TRACK_MINUTES: f64 = 10.0;

/// Every segment renders at least this share of the track width so it stays
/// interactable regardless of true duration.
pub const MIN_SEGMENT_WIDTH_PERCENT: f64 = 8.0;

/// Horizontal placement of one block on the track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSegment {
    /// Block this segment renders, when known
    pub id: Option<BlockId>,
    /// Left edge as a percentage of track width, never negative
    pub start_percent: f64,
    /// Width as a percentage of track width, floored at the minimum
    pub width_percent: f64,
}

/// Computed layout for a full track.
///
/// # Examples
///
/// ```
/// use arclight_timeline::TrackLayout;
///
/// let layout = TrackLayout::compute(&[5.0, 5.0, 5.0], 10.0);
/// assert_eq!(*layout.effective_scale(), 15.0);
/// assert_eq!(layout.markers(), &[0.0, 5.0, 10.0, 15.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TrackLayout {
    /// Minutes represented by the full track width
    effective_scale: f64,
    /// Per-block placements in sequence order
    segments: Vec<TrackSegment>,
    /// Time-axis marker values in minutes, from 0 up to the scale
    markers: Vec<f64>,
}

impl TrackLayout {
    /// Compute the layout for durations in sequence order.
    ///
    /// The effective scale is the requested `time_scale` widened to fit the
    /// actual total duration, and never below [`MIN_TRACK_MINUTES`].
    pub fn compute(durations: &[f64], time_scale: f64) -> Self {
        let total: f64 = durations.iter().sum();
        let effective_scale = time_scale.max(total).max(MIN_TRACK_MINUTES);

        let mut elapsed = 0.0;
        let segments = durations
            .iter()
            .map(|duration| {
                let start_percent = (elapsed / effective_scale * 100.0).max(0.0);
                let width_percent =
                    (duration / effective_scale * 100.0).max(MIN_SEGMENT_WIDTH_PERCENT);
                elapsed += duration;
                TrackSegment {
                    id: None,
                    start_percent,
                    width_percent,
                }
            })
            .collect();

        let markers = Self::markers_for(effective_scale);

        Self {
            effective_scale,
            segments,
            markers,
        }
    }

    /// Compute the layout for blocks in sequence order, carrying their ids.
    pub fn for_blocks(blocks: &[ContentBlock], time_scale: f64) -> Self {
        let durations: Vec<f64> = blocks.iter().map(|b| b.duration).collect();
        let mut layout = Self::compute(&durations, time_scale);
        for (segment, block) in layout.segments.iter_mut().zip(blocks) {
            segment.id = Some(block.id);
        }
        layout
    }

    /// Marker spacing in minutes for a given scale.
    ///
    /// Denser scales get finer markers: 5-minute steps up to half an hour,
    /// 10 up to an hour, 15 beyond.
    pub fn marker_interval(effective_scale: f64) -> f64 {
        if effective_scale <= 30.0 {
            5.0
        } else if effective_scale <= 60.0 {
            10.0
        } else {
            15.0
        }
    }

    fn markers_for(effective_scale: f64) -> Vec<f64> {
        let interval = Self::marker_interval(effective_scale);
        (0..)
            .map(|i| i as f64 * interval)
            .take_while(|m| *m <= effective_scale)
            .collect()
    }
}
