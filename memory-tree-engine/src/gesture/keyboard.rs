use bevy::prelude::*;

use crate::gesture::signals::{GestureCategory, GestureFrame, GestureSignals};

/// Synthesize gesture frames from held keys so the whole signal pipeline is
/// exercised without a camera:
///
///   O — open palm (scatter / browse)
///   F — closed fist (assemble the tree)
///   Z — confirm gesture (hold to zoom the centred placard)
///   ← / → — sway the hand left/right (orbit rotation)
///
/// Releasing every key reports "no hand", which intentionally freezes the
/// last phase and zoom request instead of resetting them.
pub fn keyboard_gesture_bridge(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut signals: ResMut<GestureSignals>,
) {
    let category = if keyboard.pressed(KeyCode::KeyZ) {
        Some(GestureCategory::Victory)
    } else if keyboard.pressed(KeyCode::KeyO) {
        Some(GestureCategory::OpenPalm)
    } else if keyboard.pressed(KeyCode::KeyF) {
        Some(GestureCategory::ClosedFist)
    } else if keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::ArrowRight) {
        // A swaying hand with no classified gesture.
        None
    } else {
        signals.apply(None);
        return;
    };

    let hand_x = if keyboard.pressed(KeyCode::ArrowLeft) {
        0.85
    } else if keyboard.pressed(KeyCode::ArrowRight) {
        0.15
    } else {
        0.5
    };

    let frame = GestureFrame {
        // An unclassified sway frame reuses the last phase by reporting low
        // confidence, which apply() ignores for state changes.
        category: category.unwrap_or(GestureCategory::OpenPalm),
        confidence: if category.is_some() { 1.0 } else { 0.0 },
        hand_x,
    };
    signals.apply(Some(&frame));
}
