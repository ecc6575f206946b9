use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Resolving the photo manifest; the scene is not yet populated.
    #[default]
    Loading,
    /// Populations spawned, choreography running.
    Running,
}
