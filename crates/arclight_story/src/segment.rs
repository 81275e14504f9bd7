//! Segment suggestion heuristic.
//!
//! Deterministic mapping from a block's kind and normalized position to an
//! advisory narrative label, conditioned on the chosen structure. The async
//! wrapper lives in [`crate::StoryAnalyst`]; this module is the pure core.

use arclight_core::{BlockId, BlockKind, StoryBlock, StructureKind};

/// Suggest a narrative segment label for one block.
///
/// Under the Aristotelian template the mapping keys on both kind and
/// position; every other template uses the plain three-phase split.
///
/// # Examples
///
/// ```
/// use arclight_core::{BlockKind, StructureKind};
/// use arclight_story::suggest_segment;
///
/// let label = suggest_segment(BlockKind::Interview, 10.0, StructureKind::Aristotelian);
/// assert_eq!(label, "Setup");
///
/// let label = suggest_segment(BlockKind::Demo, 50.0, StructureKind::ThreeAct);
/// assert_eq!(label, "Confrontation");
/// ```
pub fn suggest_segment(kind: BlockKind, position: f64, structure: StructureKind) -> &'static str {
    if structure == StructureKind::Aristotelian {
        if kind == BlockKind::Interview && position < 20.0 {
            "Setup"
        } else if kind == BlockKind::Demo && position > 20.0 && position < 40.0 {
            "Inciting Incident"
        } else if kind == BlockKind::BRoll && position > 40.0 && position < 60.0 {
            "Rising Action"
        } else if position > 60.0 && position < 80.0 {
            "Crisis"
        } else if position > 80.0 {
            "Resolution"
        } else {
            "Rising Action"
        }
    } else if position < 25.0 {
        "Setup"
    } else if position < 75.0 {
        "Confrontation"
    } else {
        "Resolution"
    }
}

/// Suggest labels for every block in the arc.
pub fn suggest_segments(
    blocks: &[StoryBlock],
    structure: StructureKind,
) -> Vec<(BlockId, String)> {
    blocks
        .iter()
        .map(|block| {
            let label = suggest_segment(block.kind(), block.position, structure);
            (block.id(), label.to_string())
        })
        .collect()
}
