//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions
//! and plugin initialisation.

/// Application setup and plugin configuration for the Bevy engine.
pub mod app_setup;

/// Application state machine: manifest loading, then the running scene.
pub mod app_state;

/// HUD text: counts, gesture status, FPS readout.
pub mod hud;

/// Window configuration.
pub mod window_config;
