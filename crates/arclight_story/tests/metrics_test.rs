mod test_utils;

use arclight_core::{ActStructure, BlockKind, StructureKind};
use arclight_story::compute_metrics;
use test_utils::{acts_for, story_blocks};

#[test]
fn demo_and_interview_classify_into_setup_and_confrontation() {
    let blocks = story_blocks(&[(BlockKind::Demo, 5.0), (BlockKind::Interview, 5.0)]);
    assert_eq!(blocks[0].position, 0.0);
    assert_eq!(blocks[1].position, 50.0);

    let metrics = compute_metrics(&blocks, &acts_for(StructureKind::ThreeAct));
    assert_eq!(metrics.act_distribution.get("Setup"), Some(&5.0));
    assert_eq!(metrics.act_distribution.get("Confrontation"), Some(&5.0));
    assert_eq!(metrics.act_distribution.get("Resolution"), None);
}

#[test]
fn uncovered_acts_penalize_pacing_and_engagement() {
    let blocks = story_blocks(&[(BlockKind::Demo, 5.0), (BlockKind::Interview, 5.0)]);
    let metrics = compute_metrics(&blocks, &acts_for(StructureKind::ThreeAct));

    // Resolution is empty: pacing 8.2 - 1.5, engagement 9.1 - 1.0
    assert_eq!(metrics.pacing, 6.7);
    assert_eq!(metrics.engagement, 8.1);
    assert_eq!(metrics.balance, 7.5);
}

#[test]
fn full_coverage_keeps_baseline_scores() {
    let blocks = story_blocks(&[
        (BlockKind::Interview, 2.0),
        (BlockKind::Demo, 3.0),
        (BlockKind::BRoll, 3.0),
        (BlockKind::Narration, 2.0),
    ]);
    // Positions 0, 20, 50, 80 cover all three acts.
    let metrics = compute_metrics(&blocks, &acts_for(StructureKind::ThreeAct));

    assert_eq!(metrics.pacing, 8.2);
    assert_eq!(metrics.engagement, 9.1);
    assert_eq!(metrics.balance, 7.5);
}

#[test]
fn dominant_kind_penalizes_balance() {
    let blocks = story_blocks(&[
        (BlockKind::BRoll, 5.0),
        (BlockKind::BRoll, 5.0),
        (BlockKind::BRoll, 5.0),
        (BlockKind::BRoll, 5.0),
        (BlockKind::Interview, 5.0),
    ]);
    let metrics = compute_metrics(&blocks, &acts_for(StructureKind::ThreeAct));

    // 4 of 5 blocks share a kind: 4 > 5 * 0.6
    assert_eq!(metrics.balance, 5.5);
    assert_eq!(metrics.content_type_count.get(&BlockKind::BRoll), Some(&4));
}

#[test]
fn zero_duration_blocks_accumulate_the_fallback() {
    let mut blocks = story_blocks(&[(BlockKind::Demo, 5.0), (BlockKind::Interview, 5.0)]);
    blocks[0].block.duration = 0.0;

    let metrics = compute_metrics(&blocks, &acts_for(StructureKind::ThreeAct));
    assert_eq!(metrics.act_distribution.get("Setup"), Some(&3.0));
}

#[test]
fn positions_in_template_gaps_are_silently_excluded() {
    let gapped = vec![
        ActStructure {
            name: "Open".into(),
            start: 0.0,
            end: 40.0,
            color: "bg-blue-500".into(),
            description: None,
        },
        ActStructure {
            name: "Close".into(),
            start: 60.0,
            end: 100.0,
            color: "bg-green-500".into(),
            description: None,
        },
    ];
    let blocks = story_blocks(&[(BlockKind::Demo, 5.0), (BlockKind::Interview, 5.0)]);
    // Second block sits at 50%, inside the gap.
    let metrics = compute_metrics(&blocks, &gapped);

    assert_eq!(metrics.act_distribution.get("Open"), Some(&5.0));
    assert_eq!(metrics.act_distribution.get("Close"), None);
    assert_eq!(metrics.act_distribution.len(), 1);
}

#[test]
fn metrics_are_deterministic() {
    let blocks = story_blocks(&[
        (BlockKind::Interview, 4.0),
        (BlockKind::BRoll, 2.0),
        (BlockKind::Demo, 6.0),
    ]);
    let acts = acts_for(StructureKind::Aristotelian);

    let first = compute_metrics(&blocks, &acts);
    let second = compute_metrics(&blocks, &acts);
    assert_eq!(first, second);
}

#[test]
fn empty_arc_yields_zeroed_metrics() {
    let metrics = compute_metrics(&[], &acts_for(StructureKind::ThreeAct));
    assert_eq!(metrics.pacing, 0.0);
    assert!(metrics.act_distribution.is_empty());
    assert!(metrics.content_type_count.is_empty());
}
