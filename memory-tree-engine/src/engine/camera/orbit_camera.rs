use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::motion::AUTO_ROTATE_SPEED;

use crate::choreography::focus::ZoomSignal;
use crate::gesture::signals::GestureSignals;

/// Orbit rig around the tree. Yaw is driven by three sources: mouse drag,
/// the gesture sway signal, and a slow ambient spin while formed with a
/// steady hand. All input is locked out while a placard is zoomed so the
/// camera cannot fight the billboard.
#[derive(Resource)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub focus_point: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Matches the opening framing: eye at roughly (0, 8, 60).
        Self {
            yaw: 0.0,
            pitch: 0.13,
            distance: 60.5,
            focus_point: Vec3::ZERO,
        }
    }
}

impl OrbitCamera {
    const MIN_DISTANCE: f32 = 30.0;
    const MAX_DISTANCE: f32 = 120.0;
    // Keep the camera from diving under the ground plane.
    const MIN_PITCH: f32 = -0.27;
    const MAX_PITCH: f32 = 1.5;

    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        let eye = self.focus_point + rotation * Vec3::Z * self.distance;
        Transform::from_translation(eye).looking_at(self.focus_point, Vec3::Y)
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    signals: Res<GestureSignals>,
    zoom: Res<ZoomSignal>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    if !zoom.is_zoomed {
        // Mouse drag orbit.
        if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
            let yaw_sens = 0.0035;
            let pitch_sens = 0.0030;
            orbit.yaw -= mouse_delta.x * yaw_sens;
            orbit.pitch += mouse_delta.y * pitch_sens;
            orbit.pitch = orbit
                .pitch
                .clamp(OrbitCamera::MIN_PITCH, OrbitCamera::MAX_PITCH);
        }

        // Dolly along the view axis.
        if scroll_accum.abs() > f32::EPSILON {
            orbit.distance = (orbit.distance - scroll_accum * 3.0)
                .clamp(OrbitCamera::MIN_DISTANCE, OrbitCamera::MAX_DISTANCE);
        }

        // Gesture sway, calibrated as radians-per-frame at 60 fps.
        orbit.yaw += signals.rotation_speed * 60.0 * time.delta_secs();

        // Ambient spin only while formed and the hand is still.
        if signals.is_formed() && signals.rotation_speed == 0.0 {
            orbit.yaw += AUTO_ROTATE_SPEED * time.delta_secs();
        }
    }

    *camera_transform = orbit.transform();
}
