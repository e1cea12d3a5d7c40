//! Position adjuster invariants under arbitrary drag sequences.

mod common;

use std::time::{Duration, Instant};

use afterglow::error::AdjustError;
use afterglow::models::GradientCustomizationSettings;
use afterglow::services::position_adjuster::equal_spacing;
use afterglow::services::{synthesize, DragState, PositionAdjuster, MIN_GAP};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEBOUNCE: Duration = Duration::from_millis(50);

#[test]
fn test_random_drags_keep_gaps() {
    let mut rng = StdRng::seed_from_u64(0xa77e_4910);

    for n in 2..=12 {
        let mut adjuster =
            PositionAdjuster::new(n, GradientCustomizationSettings::new(50), DEBOUNCE);
        let start = Instant::now();
        let mut clock = Duration::ZERO;

        for _ in 0..200 {
            let index = rng.gen_range(0..n);
            adjuster.start_drag(index).unwrap();

            for _ in 0..rng.gen_range(1..8) {
                clock += Duration::from_millis(rng.gen_range(0..80));
                let pointer = rng.gen_range(-50.0..150.0);
                let step = adjuster.update_drag_at(pointer, start + clock).unwrap();
                common::assert_gapped_layout(&step.positions, MIN_GAP);
            }

            let ended = adjuster.end_drag().unwrap();
            common::assert_gapped_layout(&ended.positions, MIN_GAP);
            if let Some(settings) = ended.settings {
                let published: Vec<u8> = settings
                    .custom_color_positions
                    .unwrap()
                    .iter()
                    .map(|&p| p as u8)
                    .collect();
                assert_eq!(published, ended.positions);
            }
        }
    }
}

#[test]
fn test_adjuster_round_trips_published_settings() {
    let mut adjuster = PositionAdjuster::new(4, GradientCustomizationSettings::new(30), DEBOUNCE);
    adjuster.start_drag(2).unwrap();
    adjuster.update_drag(80.0).unwrap();
    let settings = adjuster.end_drag().unwrap().settings.unwrap();

    // A fresh adjuster (e.g. after reopening) picks the positions back up
    let json = serde_json::to_string(&settings).unwrap();
    let restored: GradientCustomizationSettings = serde_json::from_str(&json).unwrap();
    let reopened = PositionAdjuster::new(4, restored, DEBOUNCE);

    assert_eq!(reopened.positions(), &[0, 33, 80, 100]);
    assert_eq!(reopened.settings().blend_hardness, 30);
}

#[test]
fn test_reopen_with_different_palette_size_uses_equal_spacing() {
    let settings = GradientCustomizationSettings::new(50).with_positions(vec![0.0, 10.0, 100.0]);
    let adjuster = PositionAdjuster::new(5, settings, DEBOUNCE);
    assert_eq!(adjuster.positions(), equal_spacing(5).as_slice());
    assert_eq!(
        adjuster.settings().custom_color_positions,
        Some(vec![0.0, 25.0, 50.0, 75.0, 100.0])
    );
}

#[test]
fn test_crowded_saved_positions_render_as_equal_spacing() {
    // 99.5 rounds to 100 and collides with the pinned last position
    let saved = GradientCustomizationSettings::new(50).with_positions(vec![0.0, 99.5, 100.0]);
    let mut adjuster = PositionAdjuster::new(3, saved, DEBOUNCE);
    let settings = adjuster.set_blend_hardness(40);

    let palette = common::fixtures::palette(&["#ff0000", "#00ff00", "#0000ff"]);
    let gradients = synthesize(&palette, &settings);
    assert_eq!(
        gradients[0].css,
        "linear-gradient(to bottom, #ff0000 0%, #00ff00 50%, #0000ff 100%)"
    );
    let published: Vec<u8> = settings
        .custom_color_positions
        .unwrap()
        .iter()
        .map(|&p| p as u8)
        .collect();
    assert_eq!(published, adjuster.positions());
}

#[test]
fn test_drag_session_lifecycle() {
    let mut adjuster = PositionAdjuster::new(3, GradientCustomizationSettings::new(50), DEBOUNCE);
    assert_eq!(adjuster.state(), DragState::Idle);

    adjuster.start_drag(1).unwrap();
    assert_eq!(adjuster.state(), DragState::Dragging { index: 1 });
    assert_eq!(adjuster.reset().unwrap_err(), AdjustError::DragInProgress);

    adjuster.update_drag(20.0).unwrap();
    adjuster.end_drag().unwrap();
    assert_eq!(adjuster.positions(), &[0, 20, 100]);
    assert_eq!(adjuster.segment_heights(), vec![20, 80]);

    let reset = adjuster.reset().unwrap();
    assert_eq!(reset.positions, vec![0, 50, 100]);
}
