//! Blend rates are exponential-approach coefficients: per frame the live pose
//! moves `rate * dt` of the remaining distance toward its target. Tuned
//! empirically; any value in the same order of magnitude reads fine.

// Photo placards.
pub const PLACARD_CHAOS_RATE: f32 = 0.5;
pub const PLACARD_FORMED_RATE: f32 = 0.8;
pub const PLACARD_ZOOM_RATE: f32 = 4.0;

// Decorative baubles, fairy lights and ground figures.
pub const BAUBLE_RATE: f32 = 1.5;
pub const FAIRY_LIGHT_RATE: f32 = 2.0;
pub const GROUND_GIFT_RATE: f32 = 2.0;
pub const FIGURINE_RATE: f32 = 1.5;
pub const FIGURINE_UPRIGHT_RATE: f32 = 3.0;

/// Uniform-scale approach rate (hover boost, focus enlargement, release).
pub const SCALE_RATE: f32 = 4.0;

/// Billboard slerp rate while a placard is camera locked.
pub const BILLBOARD_RATE: f32 = 10.0;

/// Two-axis sinusoidal wobble applied to formed placards.
pub const WOBBLE_AMPLITUDE: f32 = 0.05;

// Chaos cloud half-extents per class (axis-aligned cube, per-axis uniform).
pub const PLACARD_CHAOS_EXTENT: f32 = 35.0;
pub const BAUBLE_CHAOS_EXTENT: f32 = 30.0;
pub const FAIRY_LIGHT_CHAOS_EXTENT: f32 = 30.0;
pub const GROUND_CHAOS_EXTENT: f32 = 40.0;

/// Slow ambient orbit while formed and the hand is still, radians per second.
pub const AUTO_ROTATE_SPEED: f32 = 0.3;
