use bevy::prelude::*;
use constants::motion::WOBBLE_AMPLITUDE;

/// Fraction of the remaining distance covered this frame. Clamped so an
/// oversized `dt` overshoots to the target instead of past it.
pub fn blend_fraction(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}

/// Exponential approach of a position toward its target. Never reaches the
/// target exactly; distance shrinks monotonically for any `rate * dt > 0`.
pub fn approach(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current.lerp(target, blend_fraction(rate, dt))
}

/// Scalar variant used for uniform scale blending.
pub fn approach_f32(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * blend_fraction(rate, dt)
}

/// Free chaos tumble: accumulate per-axis rotation in the entity's local
/// frame at its static angular velocity.
pub fn tumble(rotation: Quat, rate: Vec3, dt: f32) -> Quat {
    rotation * Quat::from_euler(EulerRot::XYZ, rate.x * dt, rate.y * dt, rate.z * dt)
}

/// Point a formed placard looks toward: its own position pushed outward and
/// slightly up, so every placard faces away from the trunk.
pub fn outward_look_target(position: Vec3) -> Vec3 {
    Vec3::new(position.x * 2.0, position.y + 0.5, position.z * 2.0)
}

/// Small two-axis sinusoidal tilt layered over the formed orientation.
/// Phase is denormalised per entity so the canopy never moves in lockstep.
pub fn wobble_tilt(time: f32, phase_offset: f32, phase_speed: f32) -> (f32, f32) {
    let x = (time * phase_speed + phase_offset).sin() * WOBBLE_AMPLITUDE;
    let z = (time * phase_speed * 0.8 + phase_offset).cos() * WOBBLE_AMPLITUDE;
    (x, z)
}

/// Formed, non-focused orientation: face the outward look target (quad
/// front toward the viewer side) with the wobble tilt applied on top.
pub fn formed_orientation(position: Vec3, time: f32, phase_offset: f32, phase_speed: f32) -> Quat {
    let look = outward_look_target(position);
    // looking_at points -Z at the target; the quad face is +Z, so flip.
    let facing = Transform::from_translation(position)
        .looking_at(look, Vec3::Y)
        .rotation
        * Quat::from_rotation_y(std::f32::consts::PI);
    let (tilt_x, tilt_z) = wobble_tilt(time, phase_offset, phase_speed);
    facing * Quat::from_euler(EulerRot::XYZ, tilt_x, 0.0, tilt_z)
}
