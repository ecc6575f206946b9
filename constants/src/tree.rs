use bevy::math::Vec3;

/// Tree body dimensions. The foliage volume is a cone with its apex at
/// `+HEIGHT/2` and its base circle of `BASE_RADIUS` at `-HEIGHT/2`.
pub const TREE_HEIGHT: f32 = 22.0;
pub const TREE_BASE_RADIUS: f32 = 9.0;

/// All choreographed populations hang under a rig entity at this offset so
/// the tree sits slightly below the camera's natural eye line.
pub const RIG_OFFSET: Vec3 = Vec3::new(0.0, -6.0, 0.0);

// Population sizes, fixed for the session.
pub const PLACARD_COUNT: usize = 20;
pub const BAUBLE_COUNT: usize = 500;
pub const FAIRY_LIGHT_COUNT: usize = 400;
pub const GROUND_GIFT_COUNT: usize = 12;

/// Foliage needle count shown on the HUD. The foliage mass itself is static
/// dressing, not a choreographed population.
pub const FOLIAGE_COUNT: usize = 15_000;

/// Cross-section radius of the cone at height `y` (linear taper, `BASE_RADIUS`
/// at the base down to zero at the apex).
pub fn cone_radius_at(y: f32) -> f32 {
    let normalized = (y + TREE_HEIGHT / 2.0) / TREE_HEIGHT;
    TREE_BASE_RADIUS * (1.0 - normalized)
}
