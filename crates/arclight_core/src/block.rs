//! Content block types.

use serde::{Deserialize, Serialize};

/// Default duration in minutes assigned to a block created without one.
pub const DEFAULT_BLOCK_DURATION: f64 = 5.0;

/// Stable unique identifier for a content block.
///
/// Assigned at creation and never reassigned, even when a block leaves the
/// story arc.
///
/// # Examples
///
/// ```
/// use arclight_core::BlockId;
///
/// let a = BlockId::new();
/// let b = BlockId::new();
/// assert_ne!(a, b);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct BlockId(uuid::Uuid);

impl BlockId {
    /// Generate a fresh random identifier.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

/// The closed enumeration of planned content kinds.
///
/// Kinds are the same across planning stages; the wire form is the
/// kebab-case string (`"piece-to-camera"`, `"b-roll"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BlockKind {
    /// A sit-down or on-location interview
    Interview,
    /// Presenter speaking directly to camera
    PieceToCamera,
    /// Supplementary footage cut over narration
    BRoll,
    /// Product or process demonstration
    Demo,
    /// Establishing or scenic location footage
    Location,
    /// Voice-over narration
    Narration,
    /// Motion graphics or overlays
    Graphics,
    /// Transitional beat between segments
    Transition,
    /// Opening title card
    Title,
    /// Closing credits
    Credits,
}

impl BlockKind {
    /// Human-readable label for presentation surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Interview => "Interview",
            Self::PieceToCamera => "Piece to Camera",
            Self::BRoll => "B-Roll",
            Self::Demo => "Demo",
            Self::Location => "Location",
            Self::Narration => "Narration",
            Self::Graphics => "Graphics",
            Self::Transition => "Transition",
            Self::Title => "Title",
            Self::Credits => "Credits",
        }
    }
}

/// Production status of a content block.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BlockStatus {
    /// Initial state for newly-ideated blocks
    #[default]
    Draft,
    /// Awaiting editorial review
    NeedsReview,
    /// Approved for production
    Approved,
    /// Scheduled in the production timeline
    Planned,
    /// In the edit suite
    InEdit,
    /// Footage captured
    Filmed,
}

/// The assistant that proposed a block during ideation, when any.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AiProvider {
    /// OpenAI ChatGPT
    Chatgpt,
    /// Anthropic Claude
    Claude,
    /// Google Gemini
    Gemini,
    /// Perplexity
    Perplexity,
}

/// An atomic unit of planned video content.
///
/// `sequence` defines total order among blocks sharing the same
/// `in_story_arc` value; the board renumbers densely `0..N-1` after every
/// committed mutation. Position along the duration axis is derived, never
/// stored here.
///
/// # Examples
///
/// ```
/// use arclight_core::{BlockKind, ContentBlock};
///
/// let block = ContentBlock::builder()
///     .title("Opening interview")
///     .kind(BlockKind::Interview)
///     .duration(4.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(block.kind, BlockKind::Interview);
/// assert!(!block.in_story_arc);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct ContentBlock {
    /// Stable identifier, immutable after creation
    pub id: BlockId,
    /// Working title
    pub title: String,
    /// Content kind
    pub kind: BlockKind,
    /// Longer free-text description
    pub description: String,
    /// Production notes
    pub notes: Option<String>,
    /// Production status
    pub status: BlockStatus,
    /// Planned duration in minutes, non-negative
    pub duration: f64,
    /// Which assistant proposed this block, when any
    pub ai_source: Option<AiProvider>,
    /// Whether the block has been promoted into the story arc
    pub in_story_arc: bool,
    /// Order index among blocks with the same arc membership
    pub sequence: usize,
    /// Advisory narrative segment label from the suggestion pass
    pub suggested_segment: Option<String>,
}

impl Default for ContentBlock {
    fn default() -> Self {
        Self {
            id: BlockId::new(),
            title: String::new(),
            kind: BlockKind::BRoll,
            description: String::new(),
            notes: None,
            status: BlockStatus::Draft,
            duration: DEFAULT_BLOCK_DURATION,
            ai_source: None,
            in_story_arc: false,
            sequence: 0,
            suggested_segment: None,
        }
    }
}

impl ContentBlock {
    /// Creates a new content block builder.
    pub fn builder() -> ContentBlockBuilder {
        ContentBlockBuilder::default()
    }
}

/// A content block paired with its derived position along the arc.
///
/// `position` is the percentage of total arc duration elapsed before the
/// block, in `[0, 100]`. It is recomputed whenever ordering or durations
/// change and is used only for act classification and segment suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct StoryBlock {
    /// The underlying content block
    pub block: ContentBlock,
    /// Percentage of total duration elapsed before this block
    pub position: f64,
}

impl StoryBlock {
    /// Stable identifier of the underlying block.
    pub fn id(&self) -> BlockId {
        self.block.id
    }

    /// Kind of the underlying block.
    pub fn kind(&self) -> BlockKind {
        self.block.kind
    }

    /// Duration of the underlying block in minutes.
    pub fn duration(&self) -> f64 {
        self.block.duration
    }
}
