//! End-to-end choreography flows exercised through the pure core: gesture
//! signals feed the focus machine, the selector picks the centred entity,
//! and the blender carries transforms to their targets.

use bevy::prelude::*;
use constants::focus::{CENTER_ALIGNMENT_THRESHOLD, FOCUS_SCALE};
use constants::motion::PLACARD_ZOOM_RATE;
use constants::tree::PLACARD_COUNT;
use memory_tree_engine::choreography::attributes::generate_placards;
use memory_tree_engine::choreography::blend::{approach, approach_f32};
use memory_tree_engine::choreography::focus::{
    FocusInputs, FocusPhase, advance, focus_world_target,
};
use memory_tree_engine::choreography::rng::ChoreographyRng;
use memory_tree_engine::choreography::selector::select_centered;
use memory_tree_engine::gesture::signals::{GestureCategory, GestureFrame, GestureSignals};

const DT: f32 = 1.0 / 60.0;

fn frame(category: GestureCategory, hand_x: f32) -> GestureFrame {
    GestureFrame {
        category,
        confidence: 0.9,
        hand_x,
    }
}

fn step(phase: FocusPhase, signals: &GestureSignals, selected: Option<usize>) -> FocusPhase {
    advance(
        phase,
        &FocusInputs {
            formed: signals.is_formed(),
            selected,
            zoom_request: signals.zoom_request,
            rotation_speed: signals.rotation_speed,
        },
    )
}

/// Three entities at 0, 30 and 90 degrees off the view axis: only the
/// on-axis one clears the 0.92 alignment threshold.
#[test]
fn selection_picks_only_the_centred_entity() {
    let camera = Vec3::new(0.0, 0.0, 10.0);
    let forward = Vec3::NEG_Z;
    let angle_30 = 30.0_f32.to_radians();
    let positions = vec![
        Vec3::new(0.0, 0.0, 0.0),
        camera + Vec3::new(angle_30.sin(), 0.0, -angle_30.cos()) * 10.0,
        camera + Vec3::new(10.0, 0.0, 0.0),
    ];

    let selected = select_centered(camera, forward, &positions, CENTER_ALIGNMENT_THRESHOLD);
    assert_eq!(selected, Some(0));

    // With the centred entity gone, nothing else qualifies.
    let selected = select_centered(camera, forward, &positions[1..], CENTER_ALIGNMENT_THRESHOLD);
    assert_eq!(selected, None);
}

/// Scatter, arm, confirm: the zoomed placard converges monotonically on the
/// focus pose in front of the camera and on the focus scale.
#[test]
fn zoom_flow_converges_on_the_focus_pose() {
    let mut signals = GestureSignals::default();
    let mut phase = FocusPhase::Idle;

    // Open palm scatters the scene with the hand centred.
    signals.apply(Some(&frame(GestureCategory::OpenPalm, 0.5)));
    phase = step(phase, &signals, Some(4));
    assert_eq!(phase, FocusPhase::Armed(4));

    // Holding a confirm gesture enters zoom on the armed placard.
    signals.apply(Some(&frame(GestureCategory::Victory, 0.5)));
    phase = step(phase, &signals, Some(4));
    assert_eq!(phase, FocusPhase::Zooming(4));

    let camera_position = Vec3::new(0.0, 8.0, 60.0);
    let target = focus_world_target(camera_position, Vec3::NEG_Z);
    assert!((target - Vec3::new(0.0, 10.0, 45.0)).length() < 1e-5);

    // Translation and scale both close in without overshoot.
    let mut position = Vec3::new(12.0, -3.0, 4.0);
    let mut scale = 1.0;
    let mut last_distance = (position - target).length();
    let mut last_scale_gap = FOCUS_SCALE - scale;
    for _ in 0..240 {
        position = approach(position, target, PLACARD_ZOOM_RATE, DT);
        scale = approach_f32(scale, FOCUS_SCALE, PLACARD_ZOOM_RATE, DT);

        let distance = (position - target).length();
        let scale_gap = FOCUS_SCALE - scale;
        assert!(distance <= last_distance);
        assert!(scale_gap <= last_scale_gap && scale_gap >= 0.0);
        last_distance = distance;
        last_scale_gap = scale_gap;
    }
    assert!(last_distance < 1e-2);
    assert!(last_scale_gap < 1e-2);
}

/// Losing hand detection mid-zoom must not release the photo: stale signals
/// carry no new information.
#[test]
fn absent_hand_holds_an_active_zoom() {
    let mut signals = GestureSignals::default();
    signals.apply(Some(&frame(GestureCategory::OpenPalm, 0.5)));
    let mut phase = step(FocusPhase::Idle, &signals, Some(2));
    signals.apply(Some(&frame(GestureCategory::ThumbUp, 0.5)));
    phase = step(phase, &signals, Some(2));
    assert_eq!(phase, FocusPhase::Zooming(2));

    for _ in 0..5 {
        signals.apply(None);
        phase = step(phase, &signals, Some(2));
        assert_eq!(phase, FocusPhase::Zooming(2));
    }

    // A closed fist is an explicit release: formed drops the focus at once.
    signals.apply(Some(&frame(GestureCategory::ClosedFist, 0.5)));
    phase = step(phase, &signals, Some(2));
    assert_eq!(phase, FocusPhase::Idle);
}

/// Scatter/reform round trips land every placard back on the same formed
/// target; the targets themselves never drift.
#[test]
fn formed_toggle_is_idempotent() {
    let mut rng = ChoreographyRng::seeded(11);
    let placards = generate_placards(&mut rng.0, PLACARD_COUNT);

    let mut positions: Vec<Vec3> = placards.iter().map(|p| p.formed_target).collect();
    for round in 0..3 {
        // Blend out to chaos, then back to formed.
        for _ in 0..600 {
            for (position, attributes) in positions.iter_mut().zip(&placards) {
                *position = approach(*position, attributes.chaos_target, 2.0, DT);
            }
        }
        for _ in 0..600 {
            for (position, attributes) in positions.iter_mut().zip(&placards) {
                *position = approach(*position, attributes.formed_target, 2.0, DT);
            }
        }
        for (position, attributes) in positions.iter().zip(&placards) {
            assert!(
                (*position - attributes.formed_target).length() < 1e-2,
                "placard drifted on round {round}"
            );
        }
    }

    // Same seed, same population.
    let mut rng = ChoreographyRng::seeded(11);
    let again = generate_placards(&mut rng.0, PLACARD_COUNT);
    for (a, b) in placards.iter().zip(&again) {
        assert_eq!(a.formed_target, b.formed_target);
        assert_eq!(a.chaos_target, b.chaos_target);
    }
}
