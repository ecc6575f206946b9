/// Cosine acceptance threshold for the camera-relative selector. 0.92 keeps a
/// placard within roughly 23 degrees of screen centre.
pub const CENTER_ALIGNMENT_THRESHOLD: f32 = 0.92;

/// Rotation-speed deadband: below this the hand counts as "steady" and an
/// armed selection survives the frame.
pub const STEADY_HAND_DEADBAND: f32 = 0.002;

/// Focus pose: distance in front of the camera, vertical framing lift, and
/// the unified on-screen scale every zoomed placard converges to.
pub const FOCUS_DISTANCE: f32 = 15.0;
pub const FOCUS_LIFT: f32 = 2.0;
pub const FOCUS_SCALE: f32 = 4.0;

/// Hover boost applied to an armed-but-not-zoomed placard's base scale.
pub const HOVER_SCALE_BOOST: f32 = 1.3;

/// Highlight emissive intensities for the armed and zoomed states.
pub const ARMED_EMISSIVE: f32 = 1.0;
pub const ZOOM_EMISSIVE: f32 = 2.0;

/// Depth bias pushed onto the focused placard's materials so it renders over
/// nearer scattered placards. Explicit per-entity override, reset on release.
pub const FOCUS_DEPTH_BIAS: f32 = 1000.0;
