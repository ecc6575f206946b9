//! Scene composition: the populations that share the choreography
//! primitives with class-specific parameters, all hanging under one rig.

use bevy::prelude::*;
use constants::tree::RIG_OFFSET;

pub mod baubles;
pub mod fairy_lights;
pub mod ground;
pub mod placards;

/// Parent of every choreographed population. The rig carries the scene
/// offset, so entity targets stay in rig-local coordinates and world-space
/// focus points must be converted through its transform.
#[derive(Component)]
pub struct ChoreographyRig;

pub fn spawn_rig(mut commands: Commands) {
    commands.spawn((
        ChoreographyRig,
        Transform::from_translation(RIG_OFFSET),
        Visibility::default(),
    ));
}
