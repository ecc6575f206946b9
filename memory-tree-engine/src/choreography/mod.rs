//! The choreography core: per-entity attribute generation, dual-target
//! motion blending, camera-relative selection and the zoom focus state
//! machine. Everything here is pure data and math; the scene layer wires it
//! into Bevy systems.

/// Procedural generation of per-entity spatial and visual attributes.
pub mod attributes;

/// Exponential dual-target interpolation and idle rotation helpers.
pub mod blend;

/// Zoom focus state machine driven by selection persistence and the
/// external zoom request.
pub mod focus;

/// Seedable randomness source for all attribute generation.
pub mod rng;

/// Camera-relative "what is the viewer looking at" scan.
pub mod selector;
