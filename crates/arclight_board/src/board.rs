//! The canonical content-block collection.

use arclight_core::{
    AiProvider, BlockId, BlockKind, BlockStatus, ContentBlock, StoryBlock, DEFAULT_BLOCK_DURATION,
};
use tracing::debug;

/// A typed field mutation for [`BlockBoard::set_field`].
#[derive(Debug, Clone, PartialEq)]
pub enum BlockField {
    /// Replace the working title
    Title(String),
    /// Replace the description
    Description(String),
    /// Replace the production notes
    Notes(Option<String>),
    /// Replace the production status
    Status(BlockStatus),
    /// Replace the planned duration in minutes; negative values clamp to zero
    Duration(f64),
    /// Replace the content kind
    Kind(BlockKind),
    /// Record which assistant proposed the block
    AiSource(Option<AiProvider>),
    /// Move the block into or out of the story arc
    InStoryArc(bool),
    /// Replace the advisory segment label
    SuggestedSegment(Option<String>),
}

/// Owns the canonical collection of content blocks and their ordering.
///
/// `sequence` values induce a total order among blocks sharing the same
/// arc membership; the board renumbers each membership set densely `0..N-1`
/// after every committed mutation. Mutating an unknown id is a no-op;
/// callers are expected to have validated existence against the last listing.
///
/// # Examples
///
/// ```
/// use arclight_board::BlockBoard;
/// use arclight_core::{BlockKind, ContentBlock};
///
/// let mut board = BlockBoard::new();
/// let id = board.add(
///     ContentBlock::builder()
///         .title("Cold open")
///         .kind(BlockKind::PieceToCamera)
///         .in_story_arc(true)
///         .build()
///         .unwrap(),
/// );
///
/// assert_eq!(board.list()[0].id, id);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockBoard {
    /// Blocks in insertion order; `sequence` carries the display order.
    blocks: Vec<ContentBlock>,
    /// Bumped on any committed mutation.
    version: u64,
}

impl BlockBoard {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current version. Bumped on every committed mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of blocks on the board, arc members and pool alike.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the board holds no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Look up a block by id.
    pub fn get(&self, id: BlockId) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Story-arc members in display order.
    ///
    /// Stable sort by `sequence`; ties (which only arise transiently) break
    /// by insertion order.
    pub fn list(&self) -> Vec<ContentBlock> {
        self.ordered(true)
    }

    /// Blocks not yet promoted into the story arc, in display order.
    pub fn pool(&self) -> Vec<ContentBlock> {
        self.ordered(false)
    }

    /// Total planned duration of the story arc in minutes.
    pub fn total_duration(&self) -> f64 {
        self.blocks
            .iter()
            .filter(|b| b.in_story_arc)
            .map(|b| b.duration)
            .sum()
    }

    /// Arc members paired with their derived positions.
    ///
    /// Position of block *i* is the cumulative duration of all blocks before
    /// it divided by total arc duration, as a percentage. With a zero total
    /// every position is 0.
    pub fn story_blocks(&self) -> Vec<StoryBlock> {
        let ordered = self.list();
        let total: f64 = ordered.iter().map(|b| b.duration).sum();
        let mut elapsed = 0.0;
        ordered
            .into_iter()
            .map(|block| {
                let position = if total > 0.0 {
                    elapsed / total * 100.0
                } else {
                    0.0
                };
                elapsed += block.duration;
                StoryBlock::new(block, position)
            })
            .collect()
    }

    /// Add a block to the board.
    ///
    /// The block keeps the caller's arc membership flag and is appended to
    /// the end of its membership set. Non-finite or negative durations
    /// normalize to the default.
    pub fn add(&mut self, mut draft: ContentBlock) -> BlockId {
        if !draft.duration.is_finite() || draft.duration < 0.0 {
            draft.duration = DEFAULT_BLOCK_DURATION;
        }
        draft.sequence = self.count_in(draft.in_story_arc);
        let id = draft.id;
        debug!(block = %id, title = %draft.title, "Adding content block");
        self.blocks.push(draft);
        self.version += 1;
        id
    }

    /// Remove a block from the board. Unknown ids are a no-op.
    pub fn remove(&mut self, id: BlockId) {
        let Some(idx) = self.blocks.iter().position(|b| b.id == id) else {
            return;
        };
        let removed = self.blocks.remove(idx);
        debug!(block = %id, "Removing content block");
        self.renumber(removed.in_story_arc);
        self.version += 1;
    }

    /// Move a block to `target_index` within its membership set.
    ///
    /// All other blocks keep their relative order; the set is renumbered
    /// densely `0..N-1`. Out-of-range targets clamp to the last index.
    /// Returns `true` when the order actually changed; moving a block onto
    /// its own index (or an unknown id) is a no-op and performs no
    /// renumbering.
    pub fn update_order(&mut self, id: BlockId, target_index: usize) -> bool {
        let Some(block) = self.get(id) else {
            return false;
        };
        let in_arc = block.in_story_arc;
        let mut ids: Vec<BlockId> = self.ordered(in_arc).iter().map(|b| b.id).collect();
        // ordered() always contains `id`, so the position lookup cannot fail
        let current = ids.iter().position(|b| *b == id).unwrap_or(0);
        let target = target_index.min(ids.len().saturating_sub(1));
        if target == current {
            return false;
        }
        ids.remove(current);
        ids.insert(target, id);
        debug!(block = %id, from = current, to = target, "Reordering content block");
        self.write_sequences(&ids);
        self.version += 1;
        true
    }

    /// Mutate a single field of a block. Unknown ids are a no-op.
    ///
    /// Changing arc membership moves the block to the end of its new
    /// membership set and renumbers the set it left; id and kind are
    /// untouched.
    pub fn set_field(&mut self, id: BlockId, field: BlockField) {
        if let BlockField::InStoryArc(in_arc) = field {
            self.set_membership(id, in_arc);
            return;
        }
        let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) else {
            return;
        };
        match field {
            BlockField::Title(title) => block.title = title,
            BlockField::Description(description) => block.description = description,
            BlockField::Notes(notes) => block.notes = notes,
            BlockField::Status(status) => block.status = status,
            BlockField::Duration(duration) => {
                block.duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 }
            }
            BlockField::Kind(kind) => block.kind = kind,
            BlockField::AiSource(source) => block.ai_source = source,
            BlockField::SuggestedSegment(segment) => block.suggested_segment = segment,
            BlockField::InStoryArc(_) => unreachable!("handled above"),
        }
        self.version += 1;
    }

    /// Promote a block into the story arc. Already-promoted and unknown ids
    /// are a no-op.
    pub fn promote(&mut self, id: BlockId) {
        self.set_membership(id, true);
    }

    /// Demote a block out of the story arc, removing it from ordering and
    /// metrics views without altering its id or kind.
    pub fn demote(&mut self, id: BlockId) {
        self.set_membership(id, false);
    }

    /// Apply suggestion-pass results wholesale.
    ///
    /// Labels for ids no longer on the board are skipped; the board is never
    /// left partially updated relative to what the pass produced.
    pub fn apply_segments(&mut self, labels: &[(BlockId, String)]) {
        let mut changed = false;
        for (id, label) in labels {
            if let Some(block) = self.blocks.iter_mut().find(|b| b.id == *id) {
                block.suggested_segment = Some(label.clone());
                changed = true;
            }
        }
        if changed {
            self.version += 1;
        }
    }

    fn set_membership(&mut self, id: BlockId, in_arc: bool) {
        let Some(block) = self.get(id) else {
            return;
        };
        if block.in_story_arc == in_arc {
            return;
        }
        let new_seq = self.count_in(in_arc);
        let left = !in_arc;
        // lookup above guarantees the block is present
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) {
            block.in_story_arc = in_arc;
            block.sequence = new_seq;
        }
        debug!(block = %id, in_story_arc = in_arc, "Changing arc membership");
        self.renumber(left);
        self.version += 1;
    }

    fn count_in(&self, in_arc: bool) -> usize {
        self.blocks.iter().filter(|b| b.in_story_arc == in_arc).count()
    }

    fn ordered(&self, in_arc: bool) -> Vec<ContentBlock> {
        let mut set: Vec<ContentBlock> = self
            .blocks
            .iter()
            .filter(|b| b.in_story_arc == in_arc)
            .cloned()
            .collect();
        set.sort_by_key(|b| b.sequence);
        set
    }

    fn renumber(&mut self, in_arc: bool) {
        let ids: Vec<BlockId> = self.ordered(in_arc).iter().map(|b| b.id).collect();
        self.write_sequences(&ids);
    }

    fn write_sequences(&mut self, ids: &[BlockId]) {
        for (seq, id) in ids.iter().enumerate() {
            if let Some(block) = self.blocks.iter_mut().find(|b| b.id == *id) {
                block.sequence = seq;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arclight_core::ContentBlock;

    fn arc_block(title: &str, duration: f64) -> ContentBlock {
        ContentBlock::builder()
            .title(title)
            .duration(duration)
            .in_story_arc(true)
            .build()
            .unwrap()
    }

    #[test]
    fn add_appends_to_membership_set() {
        let mut board = BlockBoard::new();
        let a = board.add(arc_block("A", 5.0));
        let b = board.add(arc_block("B", 5.0));
        let pooled = board.add(ContentBlock::builder().title("idea").build().unwrap());

        let arc: Vec<_> = board.list().iter().map(|b| b.id).collect();
        assert_eq!(arc, vec![a, b]);
        assert_eq!(board.pool()[0].id, pooled);
        assert_eq!(board.pool()[0].sequence, 0);
    }

    #[test]
    fn unknown_id_mutations_are_no_ops() {
        let mut board = BlockBoard::new();
        board.add(arc_block("A", 5.0));
        let before = board.version();

        let stale = BlockId::new();
        assert!(!board.update_order(stale, 0));
        board.set_field(stale, BlockField::Title("ghost".into()));
        board.remove(stale);
        board.promote(stale);

        assert_eq!(board.version(), before);
    }

    #[test]
    fn remove_renumbers_densely() {
        let mut board = BlockBoard::new();
        let a = board.add(arc_block("A", 5.0));
        let b = board.add(arc_block("B", 5.0));
        let c = board.add(arc_block("C", 5.0));

        board.remove(b);
        let arc = board.list();
        assert_eq!(arc.iter().map(|x| x.id).collect::<Vec<_>>(), vec![a, c]);
        assert_eq!(arc.iter().map(|x| x.sequence).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn demote_keeps_id_and_kind() {
        let mut board = BlockBoard::new();
        let a = board.add(arc_block("A", 5.0));
        let b = board.add(arc_block("B", 5.0));

        board.demote(a);
        assert_eq!(board.list().len(), 1);
        assert_eq!(board.list()[0].id, b);
        assert_eq!(board.list()[0].sequence, 0);

        let demoted = board.get(a).unwrap();
        assert_eq!(demoted.id, a);
        assert!(!demoted.in_story_arc);
    }

    #[test]
    fn positions_follow_cumulative_duration() {
        let mut board = BlockBoard::new();
        board.add(arc_block("demo", 5.0));
        board.add(arc_block("interview", 5.0));

        let story = board.story_blocks();
        assert_eq!(story[0].position, 0.0);
        assert_eq!(story[1].position, 50.0);
    }

    #[test]
    fn zero_total_duration_yields_zero_positions() {
        let mut board = BlockBoard::new();
        let a = board.add(arc_block("A", 5.0));
        let b = board.add(arc_block("B", 5.0));
        board.set_field(a, BlockField::Duration(0.0));
        board.set_field(b, BlockField::Duration(0.0));

        for story in board.story_blocks() {
            assert_eq!(story.position, 0.0);
        }
    }

    #[test]
    fn apply_segments_skips_unknown_ids() {
        let mut board = BlockBoard::new();
        let a = board.add(arc_block("A", 5.0));
        let stale = BlockId::new();

        board.apply_segments(&[(a, "Setup".into()), (stale, "Resolution".into())]);
        assert_eq!(
            board.get(a).unwrap().suggested_segment.as_deref(),
            Some("Setup")
        );
    }
}
