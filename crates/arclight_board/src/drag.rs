//! Event-driven drag session state machine.

use std::time::Duration;

use arclight_core::{BlockId, Notification};
use arclight_interface::{DragEvent, NotificationSink};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use tracing::{debug, warn};

use crate::reorder::{drop_zone_insertion, hover_zone, timeline_insertion};
use crate::BlockBoard;

type CommitLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Default minimum interval between live hover commits.
pub const DEFAULT_HOVER_DEBOUNCE: Duration = Duration::from_millis(150);

/// Drag session tuning.
#[derive(Debug, Clone)]
pub struct DragConfig {
    /// Minimum interval between accepted hover commits. Zero disables the
    /// throttle entirely.
    pub hover_debounce: Duration,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            hover_debounce: DEFAULT_HOVER_DEBOUNCE,
        }
    }
}

/// Observable state of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress
    Idle,
    /// A block is being dragged, not currently over a drop zone
    Dragging {
        /// The dragged block
        source: BlockId,
    },
    /// A block is being dragged over a candidate drop zone
    HoveringAt {
        /// The dragged block
        source: BlockId,
        /// Candidate drop zone index
        zone: usize,
    },
}

/// Turns the raw drag event stream into committed reorders.
///
/// The session models the transient interaction state (dragged id, hover
/// zone, commit throttle) as an explicit state machine. Every terminal
/// event resets to [`DragState::Idle`], so a stale source can never act on a
/// later unrelated drop. Live hover commits are throttled through a GCRA
/// limiter over a monotonic clock; the first commit of a fresh gesture is
/// always allowed.
pub struct DragSession {
    state: DragState,
    config: DragConfig,
    throttle: Option<CommitLimiter>,
    /// Whether any hover commit landed during the current gesture.
    hover_committed: bool,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSession {
    /// Create a session with the default 150 ms hover debounce.
    pub fn new() -> Self {
        Self::with_config(DragConfig::default())
    }

    /// Create a session with explicit tuning.
    pub fn with_config(config: DragConfig) -> Self {
        Self {
            state: DragState::Idle,
            config,
            throttle: None,
            hover_committed: false,
        }
    }

    /// Current gesture state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// The drop zone currently highlighted, when hovering.
    pub fn active_zone(&self) -> Option<usize> {
        match self.state {
            DragState::HoveringAt { zone, .. } => Some(zone),
            _ => None,
        }
    }

    /// Feed one event from the input layer through the state machine.
    ///
    /// Mutations land on `board`; gesture-completion messages go to `sink`.
    pub fn handle(&mut self, board: &mut BlockBoard, event: DragEvent, sink: &dyn NotificationSink) {
        match event {
            DragEvent::Start { source } => self.start(board, source),
            DragEvent::Over { index, pointer } => {
                let zone = hover_zone(index, &pointer);
                self.hover(board, zone);
            }
            DragEvent::Leave => self.leave(),
            DragEvent::Drop { zone } => self.drop_at_zone(board, zone, sink),
            DragEvent::DropOnTimeline { position } => {
                self.drop_on_timeline(board, position, sink)
            }
            DragEvent::End => self.reset(),
        }
    }

    fn start(&mut self, board: &BlockBoard, source: BlockId) {
        if board.get(source).is_none() {
            warn!(block = %source, "Ignoring drag start for unknown block");
            return;
        }
        debug!(block = %source, "Drag started");
        self.state = DragState::Dragging { source };
        self.hover_committed = false;
        self.throttle = Quota::with_period(self.config.hover_debounce)
            .map(GovernorRateLimiter::direct);
    }

    fn source(&self) -> Option<BlockId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { source } | DragState::HoveringAt { source, .. } => Some(source),
        }
    }

    fn hover(&mut self, board: &mut BlockBoard, zone: usize) {
        let Some(source) = self.source() else {
            return;
        };
        self.state = DragState::HoveringAt { source, zone };

        let ordered = board.list();
        let Some(dragged_index) = ordered.iter().position(|b| b.id == source) else {
            return;
        };
        let Some(insert) = drop_zone_insertion(ordered.len(), dragged_index, zone) else {
            return;
        };
        if !self.throttle_allows() {
            return;
        }
        if board.update_order(source, insert) {
            self.hover_committed = true;
        }
    }

    fn leave(&mut self) {
        if let DragState::HoveringAt { source, .. } = self.state {
            self.state = DragState::Dragging { source };
        }
    }

    fn drop_at_zone(&mut self, board: &mut BlockBoard, zone: usize, sink: &dyn NotificationSink) {
        let Some(source) = self.source() else {
            return;
        };
        let ordered = board.list();
        let mut moved_to = None;
        if let Some(dragged_index) = ordered.iter().position(|b| b.id == source) {
            if let Some(insert) = drop_zone_insertion(ordered.len(), dragged_index, zone) {
                if board.update_order(source, insert) {
                    moved_to = Some(insert);
                }
            }
        }
        match moved_to {
            Some(insert) => sink.notify(Notification::success(format!(
                "Moved \"{}\" to position {}",
                self.title_of(board, source),
                insert + 1
            ))),
            // Live hover already placed the block; the gesture still moved it.
            None if self.hover_committed => sink.notify(Notification::success(format!(
                "Moved \"{}\"",
                self.title_of(board, source)
            ))),
            None => {}
        }
        self.reset();
    }

    fn drop_on_timeline(
        &mut self,
        board: &mut BlockBoard,
        position: f64,
        sink: &dyn NotificationSink,
    ) {
        let Some(source) = self.source() else {
            return;
        };
        let story = board.story_blocks();
        let positions: Vec<f64> = story.iter().map(|s| s.position).collect();
        let target = timeline_insertion(&positions, position);
        if board.update_order(source, target) {
            let title = self.title_of(board, source);
            sink.notify(Notification::success(format!("Repositioned \"{}\"", title)));
        }
        self.reset();
    }

    fn title_of(&self, board: &BlockBoard, id: BlockId) -> String {
        board
            .get(id)
            .map(|b| b.title.clone())
            .unwrap_or_else(|| "block".to_string())
    }

    fn throttle_allows(&self) -> bool {
        match &self.throttle {
            Some(limiter) => limiter.check().is_ok(),
            None => true,
        }
    }

    fn reset(&mut self) {
        if self.state != DragState::Idle {
            debug!("Drag state reset");
        }
        self.state = DragState::Idle;
        self.throttle = None;
        self.hover_committed = false;
    }
}
