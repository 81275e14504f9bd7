//! Asynchronous suggestion and analysis passes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use arclight_core::{ActStructure, Insight, Notification, StoryBlock, StructureKind};
use arclight_error::SuggestionError;
use arclight_interface::{NotificationSink, SuggestionBackend};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::insight::generate_insights;
use crate::segment::suggest_segment;

/// Default artificial processing delay modeling a remote AI call.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// Result of a suggestion pass.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    /// The pass completed and its labels apply
    Applied(Vec<StoryBlock>),
    /// A newer pass started before this one finished; result discarded
    Superseded,
    /// The backend failed; the original blocks come back unchanged
    Failed(Vec<StoryBlock>),
}

impl SuggestionOutcome {
    /// The block list carried by this outcome, when any.
    pub fn into_blocks(self) -> Option<Vec<StoryBlock>> {
        match self {
            Self::Applied(blocks) | Self::Failed(blocks) => Some(blocks),
            Self::Superseded => None,
        }
    }
}

/// Runs the heuristic passes under the asynchronous external contract.
///
/// Each pass closes over the block snapshot taken at invocation and applies
/// its result wholesale on completion; nothing streams. A pass whose
/// generation has been superseded by a newer request discards its result
/// silently. Backend failures are reported to the sink and never leave the
/// snapshot partially labeled.
pub struct StoryAnalyst<B> {
    backend: B,
    sink: Arc<dyn NotificationSink>,
    provider: String,
    processing_delay: Duration,
    generation: AtomicU64,
}

impl<B: SuggestionBackend> StoryAnalyst<B> {
    /// Create an analyst over a backend and notification sink.
    pub fn new(backend: B, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            backend,
            sink,
            provider: "claude".to_string(),
            processing_delay: DEFAULT_PROCESSING_DELAY,
            generation: AtomicU64::new(0),
        }
    }

    /// Override the provider name handed to the backend.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Override the artificial processing delay.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Assign a suggested narrative segment to every block in the snapshot.
    ///
    /// The computation is deterministic given its inputs; the asynchronous
    /// shape (delay, backend round-trip, supersession) models the external
    /// contract of a remote AI call.
    #[tracing::instrument(skip(self, blocks), fields(block_count = blocks.len(), structure = %structure))]
    pub async fn suggest_segments(
        &self,
        blocks: Vec<StoryBlock>,
        structure: StructureKind,
    ) -> SuggestionOutcome {
        let pass = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.processing_delay).await;

        let prompt = format!(
            "Assign narrative segments to {} content blocks under the {} structure",
            blocks.len(),
            structure.label()
        );
        let response = self.backend.complete(&prompt, &self.provider).await;

        if self.generation.load(Ordering::SeqCst) != pass {
            debug!(pass, "Discarding superseded suggestion pass");
            return SuggestionOutcome::Superseded;
        }

        match response {
            Err(err) => {
                warn!(backend = self.backend.backend_name(), %err, "Suggestion backend failed");
                self.sink
                    .notify(Notification::error("Failed to generate AI suggestions"));
                SuggestionOutcome::Failed(blocks)
            }
            Ok(_) => {
                let updated: Vec<StoryBlock> = blocks
                    .into_iter()
                    .map(|mut story| {
                        let label = suggest_segment(story.kind(), story.position, structure);
                        story.block.suggested_segment = Some(label.to_string());
                        story
                    })
                    .collect();
                self.sink.notify(
                    Notification::success(format!(
                        "Generated AI suggestions for {} blocks",
                        updated.len()
                    ))
                    .with_detail(format!("Based on {} structure analysis", structure.label())),
                );
                SuggestionOutcome::Applied(updated)
            }
        }
    }

    /// Produce structural insights for the snapshot.
    ///
    /// Runs the fixed rule table after the modeled processing delay and
    /// reports completion to the sink.
    #[tracing::instrument(skip(self, blocks, acts), fields(block_count = blocks.len()))]
    pub async fn analyze(&self, blocks: Vec<StoryBlock>, acts: Vec<ActStructure>) -> Vec<Insight> {
        tokio::time::sleep(self.processing_delay).await;
        let insights = generate_insights(&blocks, &acts);
        self.sink.notify(Notification::info(format!(
            "Story analysis complete: {} insights",
            insights.len()
        )));
        insights
    }
}

/// The deterministic stand-in for a remote suggestion service.
///
/// Real inference is a non-goal; this backend acknowledges the prompt so the
/// pass exercises the full asynchronous contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedBackend;

#[async_trait]
impl SuggestionBackend for ScriptedBackend {
    async fn complete(&self, prompt: &str, provider: &str) -> Result<String, SuggestionError> {
        debug!(provider, "Scripted suggestion backend invoked");
        Ok(format!("ack: {prompt}"))
    }

    fn backend_name(&self) -> &'static str {
        "scripted"
    }
}
