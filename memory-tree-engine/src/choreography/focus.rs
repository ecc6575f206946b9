use bevy::prelude::*;
use constants::focus::{FOCUS_DISTANCE, FOCUS_LIFT, STEADY_HAND_DEADBAND};

use crate::choreography::selector::SelectionState;
use crate::gesture::signals::GestureSignals;

/// Zoom focus lifecycle for the placard population.
///
/// `Armed` means a placard is screen-centred with a steady hand; `Zooming`
/// adds the externally latched zoom request. Only one placard can hold focus
/// at a time, and only while the scene is scattered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPhase {
    #[default]
    Idle,
    Armed(usize),
    Zooming(usize),
}

#[derive(Resource, Default, Debug)]
pub struct FocusState {
    pub phase: FocusPhase,
}

impl FocusState {
    pub fn armed_index(&self) -> Option<usize> {
        match self.phase {
            FocusPhase::Armed(index) => Some(index),
            _ => None,
        }
    }

    pub fn zoomed_index(&self) -> Option<usize> {
        match self.phase {
            FocusPhase::Zooming(index) => Some(index),
            _ => None,
        }
    }
}

/// Published once per frame for dependent systems (orbit lockout, HUD fade,
/// post-processing). Read-only information outside the core.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct ZoomSignal {
    pub is_zoomed: bool,
}

/// Frame inputs to the focus machine, bundled so the transition function
/// stays a pure, testable map.
#[derive(Debug, Clone, Copy)]
pub struct FocusInputs {
    pub formed: bool,
    pub selected: Option<usize>,
    pub zoom_request: bool,
    pub rotation_speed: f32,
}

/// One transition step. Formed unconditionally drops focus in the same
/// frame. Arming requires a steady hand so a sweep across the scene cannot
/// trigger an accidental zoom; a selection switch disarms for one frame.
/// Releasing the zoom request re-evaluates against the current selection.
pub fn advance(phase: FocusPhase, inputs: &FocusInputs) -> FocusPhase {
    use FocusPhase::*;

    if inputs.formed {
        return Idle;
    }
    let steady = inputs.rotation_speed.abs() <= STEADY_HAND_DEADBAND;

    match phase {
        Idle => match inputs.selected {
            Some(index) if steady => Armed(index),
            _ => Idle,
        },
        Armed(index) => {
            if inputs.selected != Some(index) || !steady {
                Idle
            } else if inputs.zoom_request {
                Zooming(index)
            } else {
                Armed(index)
            }
        }
        Zooming(index) => {
            if inputs.zoom_request {
                Zooming(index)
            } else {
                match inputs.selected {
                    Some(next) => Armed(next),
                    None => Idle,
                }
            }
        }
    }
}

/// World-space point a zoomed placard converges to: a fixed distance ahead
/// of the camera, lifted slightly for framing.
pub fn focus_world_target(camera_position: Vec3, camera_forward: Vec3) -> Vec3 {
    camera_position + camera_forward.normalize_or_zero() * FOCUS_DISTANCE + Vec3::Y * FOCUS_LIFT
}

/// Per-frame focus update. Writes only on change so downstream systems can
/// react via resource change detection.
pub fn advance_focus(
    signals: Res<GestureSignals>,
    selection: Res<SelectionState>,
    mut focus: ResMut<FocusState>,
    mut zoom: ResMut<ZoomSignal>,
) {
    let inputs = FocusInputs {
        formed: signals.is_formed(),
        selected: selection.selected,
        zoom_request: signals.zoom_request,
        rotation_speed: signals.rotation_speed,
    };
    let next = advance(focus.phase, &inputs);
    if next != focus.phase {
        if let FocusPhase::Zooming(index) = next {
            info!("Zoom locked on placard {index}");
        }
        focus.phase = next;
    }

    let is_zoomed = matches!(next, FocusPhase::Zooming(_));
    if zoom.is_zoomed != is_zoomed {
        zoom.is_zoomed = is_zoomed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chaos(selected: Option<usize>, zoom_request: bool, rotation_speed: f32) -> FocusInputs {
        FocusInputs {
            formed: false,
            selected,
            zoom_request,
            rotation_speed,
        }
    }

    #[test]
    fn arms_on_steady_selection_only() {
        assert_eq!(
            advance(FocusPhase::Idle, &chaos(Some(3), false, 0.0)),
            FocusPhase::Armed(3)
        );
        // A moving hand keeps the machine idle even with a selection.
        assert_eq!(
            advance(FocusPhase::Idle, &chaos(Some(3), false, 0.05)),
            FocusPhase::Idle
        );
        assert_eq!(
            advance(FocusPhase::Idle, &chaos(None, false, 0.0)),
            FocusPhase::Idle
        );
    }

    #[test]
    fn selection_switch_disarms_for_a_frame() {
        assert_eq!(
            advance(FocusPhase::Armed(3), &chaos(Some(5), false, 0.0)),
            FocusPhase::Idle
        );
        assert_eq!(
            advance(FocusPhase::Armed(3), &chaos(None, false, 0.0)),
            FocusPhase::Idle
        );
    }

    #[test]
    fn hand_motion_breaks_the_arm() {
        assert_eq!(
            advance(FocusPhase::Armed(3), &chaos(Some(3), false, 0.01)),
            FocusPhase::Idle
        );
    }

    #[test]
    fn zoom_requires_an_armed_index() {
        // Request while idle does nothing on its own...
        assert_eq!(
            advance(FocusPhase::Idle, &chaos(None, true, 0.0)),
            FocusPhase::Idle
        );
        // ...but an armed index plus the request enters zoom.
        assert_eq!(
            advance(FocusPhase::Armed(2), &chaos(Some(2), true, 0.0)),
            FocusPhase::Zooming(2)
        );
    }

    #[test]
    fn zoom_holds_while_requested_and_releases_to_selection() {
        let held = advance(FocusPhase::Zooming(2), &chaos(Some(2), true, 0.0));
        assert_eq!(held, FocusPhase::Zooming(2));

        // Release with a live selection re-arms; without one, idles.
        assert_eq!(
            advance(FocusPhase::Zooming(2), &chaos(Some(4), false, 0.0)),
            FocusPhase::Armed(4)
        );
        assert_eq!(
            advance(FocusPhase::Zooming(2), &chaos(None, false, 0.0)),
            FocusPhase::Idle
        );
    }

    #[test]
    fn formed_drops_focus_in_the_same_frame() {
        let formed = FocusInputs {
            formed: true,
            selected: Some(2),
            zoom_request: true,
            rotation_speed: 0.0,
        };
        assert_eq!(advance(FocusPhase::Zooming(2), &formed), FocusPhase::Idle);
        assert_eq!(advance(FocusPhase::Armed(2), &formed), FocusPhase::Idle);
    }

    #[test]
    fn focus_target_sits_ahead_of_the_camera() {
        let target = focus_world_target(Vec3::new(0.0, 8.0, 60.0), Vec3::NEG_Z);
        assert!((target - Vec3::new(0.0, 10.0, 45.0)).length() < 1e-5);
    }
}
