//! Structural insight generator.
//!
//! An ordered table of independent rules, each producing zero or more
//! messages, evaluated in fixed sequence. Rule order is part of the
//! contract; consumers and tests rely on reproducible output.

use std::collections::HashMap;

use arclight_core::{ActStructure, BlockKind, Insight, InsightLevel, StoryBlock};

use crate::metrics::{act_duration, classify_index};

/// An act is "short" below this share of its expected duration.
const SHORT_ACT_SHARE: f64 = 0.5;
/// An act is "overlong" above this share of its expected duration.
const OVERLONG_ACT_SHARE: f64 = 1.5;

/// Precomputed inputs shared by every rule.
struct InsightContext<'a> {
    blocks: &'a [StoryBlock],
    acts: &'a [ActStructure],
    /// Classified block count per act, aligned with `acts`.
    act_counts: Vec<usize>,
    /// Accumulated duration per act, aligned with `acts`.
    act_durations: Vec<f64>,
    /// Total arc duration in minutes.
    total_duration: f64,
    /// Block count per content kind.
    kind_counts: HashMap<BlockKind, usize>,
}

impl<'a> InsightContext<'a> {
    fn build(blocks: &'a [StoryBlock], acts: &'a [ActStructure]) -> Self {
        let mut act_counts = vec![0usize; acts.len()];
        let mut act_durations = vec![0.0f64; acts.len()];
        for block in blocks {
            if let Some(index) = classify_index(acts, block.position) {
                act_counts[index] += 1;
                act_durations[index] += act_duration(block);
            }
        }

        let total_duration = blocks.iter().map(|b| b.duration()).sum();

        let mut kind_counts = HashMap::new();
        for block in blocks {
            *kind_counts.entry(block.kind()).or_insert(0) += 1;
        }

        Self {
            blocks,
            acts,
            act_counts,
            act_durations,
            total_duration,
            kind_counts,
        }
    }

    fn expected_duration(&self, act: &ActStructure) -> f64 {
        self.total_duration * act.expected_share()
    }

    fn act_is_short(&self, index: usize) -> bool {
        let actual = self.act_durations[index];
        let expected = self.expected_duration(&self.acts[index]);
        actual < expected * SHORT_ACT_SHARE && actual > 0.0
    }

    fn act_is_overlong(&self, index: usize) -> bool {
        let actual = self.act_durations[index];
        let expected = self.expected_duration(&self.acts[index]);
        actual > expected * OVERLONG_ACT_SHARE
    }
}

/// One entry in the ordered rule table.
struct InsightRule {
    apply: fn(&InsightContext) -> Vec<Insight>,
}

/// The rule table. Evaluation order is fixed and load-bearing.
const RULES: &[InsightRule] = &[
    InsightRule { apply: empty_acts },
    InsightRule { apply: short_acts },
    InsightRule { apply: overlong_acts },
    InsightRule { apply: well_balanced },
    InsightRule { apply: low_variety },
    InsightRule { apply: good_variety },
    InsightRule { apply: missing_interviews },
    InsightRule { apply: missing_b_roll },
];

fn empty_acts(ctx: &InsightContext) -> Vec<Insight> {
    ctx.acts
        .iter()
        .zip(&ctx.act_counts)
        .filter(|(_, count)| **count == 0)
        .map(|(act, _)| {
            Insight::new(
                InsightLevel::Warning,
                format!(
                    "The {} act is currently empty. Consider adding content to maintain narrative flow.",
                    act.name
                ),
            )
        })
        .collect()
}

fn short_acts(ctx: &InsightContext) -> Vec<Insight> {
    (0..ctx.acts.len())
        .filter(|index| ctx.act_is_short(*index))
        .map(|index| {
            Insight::new(
                InsightLevel::Info,
                format!(
                    "The {} act seems short relative to its importance. Consider expanding content here.",
                    ctx.acts[index].name
                ),
            )
        })
        .collect()
}

fn overlong_acts(ctx: &InsightContext) -> Vec<Insight> {
    (0..ctx.acts.len())
        .filter(|index| ctx.act_is_overlong(*index))
        .map(|index| {
            Insight::new(
                InsightLevel::Info,
                format!(
                    "The {} act is much longer than typical. Consider tightening content or moving some to adjacent acts.",
                    ctx.acts[index].name
                ),
            )
        })
        .collect()
}

fn well_balanced(ctx: &InsightContext) -> Vec<Insight> {
    let imbalanced =
        (0..ctx.acts.len()).any(|index| ctx.act_is_short(index) || ctx.act_is_overlong(index));
    if !imbalanced && ctx.blocks.len() > 2 {
        vec![Insight::new(
            InsightLevel::Success,
            "Act structure is well-balanced! The content distribution across your story follows recommended patterns.",
        )]
    } else {
        Vec::new()
    }
}

fn low_variety(ctx: &InsightContext) -> Vec<Insight> {
    if ctx.kind_counts.len() <= 2 && ctx.blocks.len() > 3 {
        vec![Insight::new(
            InsightLevel::Warning,
            "Consider adding more variety in content types. Using multiple formats keeps viewers engaged.",
        )]
    } else {
        Vec::new()
    }
}

fn good_variety(ctx: &InsightContext) -> Vec<Insight> {
    if ctx.kind_counts.len() >= 4 {
        vec![Insight::new(
            InsightLevel::Success,
            "Good content variety! Using multiple formats creates a dynamic viewing experience.",
        )]
    } else {
        Vec::new()
    }
}

fn missing_interviews(ctx: &InsightContext) -> Vec<Insight> {
    if !ctx.kind_counts.contains_key(&BlockKind::Interview) && ctx.blocks.len() > 2 {
        vec![Insight::new(
            InsightLevel::Info,
            "Adding expert interviews could strengthen credibility and provide authoritative perspectives.",
        )]
    } else {
        Vec::new()
    }
}

fn missing_b_roll(ctx: &InsightContext) -> Vec<Insight> {
    if !ctx.kind_counts.contains_key(&BlockKind::BRoll) && ctx.blocks.len() > 2 {
        vec![Insight::new(
            InsightLevel::Info,
            "Consider adding B-roll footage to create visual interest and context for your narrative.",
        )]
    } else {
        Vec::new()
    }
}

/// Run every rule in table order against the arc and template.
pub fn generate_insights(blocks: &[StoryBlock], acts: &[ActStructure]) -> Vec<Insight> {
    let ctx = InsightContext::build(blocks, acts);
    RULES.iter().flat_map(|rule| (rule.apply)(&ctx)).collect()
}
