//! Drag session input events.

use arclight_core::BlockId;
use serde::{Deserialize, Serialize};

/// Vertical pointer geometry within a hovered item's bounding box.
///
/// The input layer reports raw coordinates; the engine resolves them against
/// the item midpoint. No particular input device is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerBox {
    /// Pointer y coordinate
    pub y: f64,
    /// Top edge of the hovered item's bounding box
    pub top: f64,
    /// Height of the hovered item's bounding box
    pub height: f64,
}

impl PointerBox {
    /// Whether the pointer sits above the item midpoint.
    pub fn is_upper_half(&self) -> bool {
        self.y < self.top + self.height / 2.0
    }
}

/// One event in the ordered drag input stream.
///
/// The engine treats these as an ordered stream from the input layer. Any
/// terminal event (`Drop*`, `End`) resets the drag state so no stale source
/// survives a cancelled gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragEvent {
    /// A drag gesture began on the given block
    Start {
        /// The dragged block
        source: BlockId,
    },
    /// The pointer is over the item at `index`, with live reordering
    Over {
        /// Index of the hovered item in the current ordering
        index: usize,
        /// Pointer geometry within the hovered item
        pointer: PointerBox,
    },
    /// The pointer left all drop zones
    Leave,
    /// The source was released on the discrete drop zone `zone`
    ///
    /// Zones number `0..=N` around `N` items: zone `k` sits before item `k`,
    /// zone `N` after the last item.
    Drop {
        /// Drop zone index
        zone: usize,
    },
    /// The source was released on the timeline track
    DropOnTimeline {
        /// Horizontal drop coordinate as a percentage of total duration
        position: f64,
    },
    /// The gesture ended without a matching drop
    End,
}
