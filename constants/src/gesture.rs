/// Minimum recognizer confidence before a gesture frame is acted on.
pub const CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Horizontal hand offset to orbit speed: `(0.5 - hand_x) * GAIN`, zeroed
/// inside the deadband so a centred hand holds the scene still.
pub const HAND_SWAY_GAIN: f32 = 0.15;
pub const HAND_SWAY_DEADBAND: f32 = 0.01;
