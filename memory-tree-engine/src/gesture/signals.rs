use bevy::prelude::*;
use constants::gesture::{CONFIDENCE_THRESHOLD, HAND_SWAY_DEADBAND, HAND_SWAY_GAIN};

/// The two global choreography states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenePhase {
    /// Assembled tree shape. The session opens formed.
    #[default]
    Formed,
    /// Scattered cloud; selection and zoom are available here only.
    Chaos,
}

/// Discrete gesture classes the recognizer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureCategory {
    OpenPalm,
    ClosedFist,
    Victory,
    ThumbUp,
    PointingUp,
    ILoveYou,
}

/// One processed recognizer frame: gesture class, its confidence, and the
/// normalized horizontal hand position in the camera image (0..1).
#[derive(Debug, Clone, Copy)]
pub struct GestureFrame {
    pub category: GestureCategory,
    pub confidence: f32,
    pub hand_x: f32,
}

/// Last-known gesture-derived control signals, one set for the whole scene.
///
/// Absence of a detected hand freezes rather than resets: the phase and the
/// zoom request hold their previous values so a flickering detection cannot
/// snap a zoomed photo away. Only the sway speed drops to zero.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct GestureSignals {
    pub phase: ScenePhase,
    /// Near zero means "hand steady"; also drives ambient orbit rotation.
    pub rotation_speed: f32,
    /// Externally latched; true only while a confirm gesture is held.
    pub zoom_request: bool,
}

impl GestureSignals {
    pub fn is_formed(&self) -> bool {
        self.phase == ScenePhase::Formed
    }

    /// Fold one recognizer frame (or its absence) into the signal set.
    pub fn apply(&mut self, frame: Option<&GestureFrame>) {
        let Some(frame) = frame else {
            self.rotation_speed = 0.0;
            return;
        };

        if frame.confidence > CONFIDENCE_THRESHOLD {
            match frame.category {
                GestureCategory::OpenPalm => {
                    self.phase = ScenePhase::Chaos;
                    self.zoom_request = false;
                }
                GestureCategory::ClosedFist => {
                    self.phase = ScenePhase::Formed;
                    self.zoom_request = false;
                }
                // All confirm gestures zoom, and keep the scene scattered so
                // the selection they confirm stays meaningful.
                GestureCategory::Victory
                | GestureCategory::ThumbUp
                | GestureCategory::PointingUp
                | GestureCategory::ILoveYou => {
                    self.phase = ScenePhase::Chaos;
                    self.zoom_request = true;
                }
            }
        }

        let sway = (0.5 - frame.hand_x) * HAND_SWAY_GAIN;
        self.rotation_speed = if sway.abs() > HAND_SWAY_DEADBAND {
            sway
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(category: GestureCategory, confidence: f32, hand_x: f32) -> GestureFrame {
        GestureFrame {
            category,
            confidence,
            hand_x,
        }
    }

    #[test]
    fn palm_scatters_and_fist_reforms() {
        let mut signals = GestureSignals::default();
        assert_eq!(signals.phase, ScenePhase::Formed);

        signals.apply(Some(&frame(GestureCategory::OpenPalm, 0.9, 0.5)));
        assert_eq!(signals.phase, ScenePhase::Chaos);
        assert!(!signals.zoom_request);

        signals.apply(Some(&frame(GestureCategory::ClosedFist, 0.9, 0.5)));
        assert_eq!(signals.phase, ScenePhase::Formed);
    }

    #[test]
    fn confirm_gestures_latch_the_zoom_request() {
        let mut signals = GestureSignals::default();
        signals.apply(Some(&frame(GestureCategory::Victory, 0.8, 0.5)));
        assert_eq!(signals.phase, ScenePhase::Chaos);
        assert!(signals.zoom_request);

        // An open palm releases it.
        signals.apply(Some(&frame(GestureCategory::OpenPalm, 0.8, 0.5)));
        assert!(!signals.zoom_request);
    }

    #[test]
    fn low_confidence_frames_still_drive_sway_but_not_state() {
        let mut signals = GestureSignals::default();
        signals.apply(Some(&frame(GestureCategory::OpenPalm, 0.3, 0.1)));
        assert_eq!(signals.phase, ScenePhase::Formed);
        assert!(signals.rotation_speed > 0.0);
    }

    #[test]
    fn centered_hand_lands_in_the_deadband() {
        let mut signals = GestureSignals::default();
        signals.apply(Some(&frame(GestureCategory::OpenPalm, 0.9, 0.52)));
        assert_eq!(signals.rotation_speed, 0.0);
    }

    #[test]
    fn absent_hand_freezes_rather_than_resets() {
        let mut signals = GestureSignals::default();
        signals.apply(Some(&frame(GestureCategory::Victory, 0.9, 0.2)));
        assert!(signals.zoom_request);
        assert!(signals.rotation_speed != 0.0);

        // Five frames of no detection: zoom request and phase survive, only
        // the sway speed drops out.
        for _ in 0..5 {
            signals.apply(None);
        }
        assert!(signals.zoom_request);
        assert_eq!(signals.phase, ScenePhase::Chaos);
        assert_eq!(signals.rotation_speed, 0.0);
    }
}
