//! External gesture signal model. The recognizer itself is an external
//! collaborator; the core only sees its last-known output signals and must
//! tolerate them going stale without resetting state.

/// Desktop stand-in that synthesizes gesture frames from the keyboard.
pub mod keyboard;

/// Last-known-value gesture signals and per-frame application.
pub mod signals;
