//! Shared fixtures for story engine tests.

#![allow(dead_code)]

use std::sync::Mutex;

use arclight_core::{
    ActStructure, BlockKind, ContentBlock, Notification, StoryBlock, StructureKind,
};
use arclight_error::SuggestionError;
use arclight_interface::{NotificationSink, StructureProvider, SuggestionBackend};
use arclight_story::StructureLibrary;
use async_trait::async_trait;

/// Build arc blocks with duration-derived positions, like the board does.
pub fn story_blocks(entries: &[(BlockKind, f64)]) -> Vec<StoryBlock> {
    let total: f64 = entries.iter().map(|(_, duration)| duration).sum();
    let mut elapsed = 0.0;
    entries.iter()
        .enumerate()
        .map(|(index, (kind, duration))| {
            let block = ContentBlock::builder()
                .title(format!("block-{index}"))
                .kind(*kind)
                .duration(*duration)
                .in_story_arc(true)
                .sequence(index)
                .build()
                .unwrap();
            let position = if total > 0.0 { elapsed / total * 100.0 } else { 0.0 };
            elapsed += duration;
            StoryBlock::new(block, position)
        })
        .collect()
}

/// Acts for a bundled structure.
pub fn acts_for(kind: StructureKind) -> Vec<ActStructure> {
    StructureLibrary::bundled().unwrap().acts(kind).unwrap()
}

/// Notification sink that records everything it receives.
#[derive(Default)]
pub struct MemorySink(pub Mutex<Vec<Notification>>);

impl MemorySink {
    pub fn notifications(&self) -> Vec<Notification> {
        self.0.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().iter().map(|n| n.message.clone()).collect()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: Notification) {
        self.0.lock().unwrap().push(notification);
    }
}

/// Backend that always reports failure.
pub struct FailingBackend;

#[async_trait]
impl SuggestionBackend for FailingBackend {
    async fn complete(&self, _prompt: &str, provider: &str) -> Result<String, SuggestionError> {
        Err(SuggestionError::backend(provider, "service unreachable"))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
