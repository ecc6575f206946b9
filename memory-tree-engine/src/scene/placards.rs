use bevy::prelude::*;
use constants::focus::{
    ARMED_EMISSIVE, CENTER_ALIGNMENT_THRESHOLD, FOCUS_DEPTH_BIAS, FOCUS_SCALE, HOVER_SCALE_BOOST,
    ZOOM_EMISSIVE,
};
use constants::motion::{
    BILLBOARD_RATE, PLACARD_CHAOS_RATE, PLACARD_FORMED_RATE, PLACARD_ZOOM_RATE, SCALE_RATE,
};
use constants::palette;
use constants::tree::PLACARD_COUNT;

use crate::choreography::attributes::{OrnamentAttributes, generate_placards};
use crate::choreography::blend::{approach, approach_f32, formed_orientation, tumble};
use crate::choreography::focus::{FocusState, focus_world_target};
use crate::choreography::rng::ChoreographyRng;
use crate::choreography::selector::{SelectionState, select_centered};
use crate::engine::loading::photo_manifest::PhotoSlots;
use crate::engine::loading::placeholder::blank_paper_image;
use crate::gesture::signals::GestureSignals;
use crate::scene::ChoreographyRig;

#[derive(Component)]
pub struct Placard;

/// Position in the population; the selector reports this index.
#[derive(Component)]
pub struct PlacardIndex(pub usize);

/// Per-placard owned material handles. Only the highlight and photo-apply
/// systems write through these; nothing else touches the materials.
#[derive(Component)]
pub struct PlacardSurface {
    pub photo: Handle<StandardMaterial>,
    pub border: Handle<StandardMaterial>,
    pub slot: Option<usize>,
    pub photo_ready: bool,
}

/// Spawn the photo placard population under the rig: a photo quad over a
/// polaroid border quad, both double sided so the back of a tumbling card
/// still reads.
pub fn spawn_placards(
    mut commands: Commands,
    rig_query: Query<Entity, With<ChoreographyRig>>,
    mut rng: ResMut<ChoreographyRng>,
    slots: Res<PhotoSlots>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let Ok(rig) = rig_query.single() else {
        return;
    };

    let placeholder = images.add(blank_paper_image(&mut rng.0));
    let photo_mesh = meshes.add(Rectangle::new(1.0, 1.0));
    let border_mesh = meshes.add(Rectangle::new(1.2, 1.5));

    let population = generate_placards(&mut rng.0, PLACARD_COUNT);
    println!("Spawned {} photo placards", population.len());

    commands.entity(rig).with_children(|parent| {
        for (index, attributes) in population.into_iter().enumerate() {
            let photo = materials.add(StandardMaterial {
                base_color_texture: Some(placeholder.clone()),
                emissive: LinearRgba::WHITE * 0.1,
                emissive_texture: Some(placeholder.clone()),
                perceptual_roughness: 0.5,
                metallic: 0.0,
                double_sided: true,
                cull_mode: None,
                ..default()
            });
            let border = materials.add(StandardMaterial {
                base_color: palette::srgb(attributes.color),
                perceptual_roughness: 0.9,
                metallic: 0.0,
                double_sided: true,
                cull_mode: None,
                ..default()
            });

            let slot = (!slots.handles.is_empty()).then(|| index % slots.handles.len());

            parent
                .spawn((
                    Placard,
                    PlacardIndex(index),
                    PlacardSurface {
                        photo: photo.clone(),
                        border: border.clone(),
                        slot,
                        photo_ready: false,
                    },
                    Transform {
                        translation: attributes.chaos_target,
                        rotation: attributes.chaos_rotation,
                        scale: Vec3::splat(attributes.base_scale),
                    },
                    Visibility::default(),
                    attributes,
                ))
                .with_children(|placard| {
                    placard.spawn((
                        Mesh3d(photo_mesh.clone()),
                        MeshMaterial3d(photo),
                        Transform::from_xyz(0.0, 0.0, 0.015),
                    ));
                    placard.spawn((
                        Mesh3d(border_mesh.clone()),
                        MeshMaterial3d(border),
                        Transform::from_xyz(0.0, -0.15, 0.005),
                    ));
                });
        }
    });
}

/// CHAOS-only scan for the placard the viewer is centred on. The scan is
/// skipped while a zoom is locked so position changes during the zoom
/// cannot flicker the selection away.
pub fn update_placard_selection(
    signals: Res<GestureSignals>,
    focus: Res<FocusState>,
    camera_query: Query<&Transform, (With<Camera3d>, Without<Placard>)>,
    placards: Query<(&PlacardIndex, &GlobalTransform), With<Placard>>,
    mut selection: ResMut<SelectionState>,
) {
    if signals.is_formed() {
        if selection.selected.is_some() {
            selection.selected = None;
        }
        return;
    }
    if focus.zoomed_index().is_some() {
        return;
    }
    let Ok(camera) = camera_query.single() else {
        return;
    };

    let count = placards.iter().count();
    let mut positions = vec![Vec3::ZERO; count];
    for (index, global) in &placards {
        if let Some(slot) = positions.get_mut(index.0) {
            *slot = global.translation();
        }
    }

    let picked = select_centered(
        camera.translation,
        camera.forward().as_vec3(),
        &positions,
        CENTER_ALIGNMENT_THRESHOLD,
    );
    if selection.selected != picked {
        selection.selected = picked;
    }
}

/// Per-frame placard choreography: dual-target position blending, the three
/// orientation branches (outward-facing wobble / free tumble / camera
/// billboard) and scale blending with hover and focus overrides.
pub fn animate_placards(
    time: Res<Time>,
    signals: Res<GestureSignals>,
    focus: Res<FocusState>,
    camera_query: Query<&Transform, (With<Camera3d>, Without<Placard>)>,
    rig_query: Query<&GlobalTransform, (With<ChoreographyRig>, Without<Placard>)>,
    mut placards: Query<(&PlacardIndex, &OrnamentAttributes, &mut Transform), With<Placard>>,
) {
    let Ok(camera) = camera_query.single() else {
        return;
    };
    let Ok(rig) = rig_query.single() else {
        return;
    };

    let dt = time.delta_secs();
    let now = time.elapsed_secs();
    let formed = signals.is_formed();

    for (index, attributes, mut transform) in &mut placards {
        let zoomed = focus.zoomed_index() == Some(index.0);
        let armed = focus.armed_index() == Some(index.0);

        let (target, rate, target_scale) = if zoomed {
            let world = focus_world_target(camera.translation, camera.forward().as_vec3());
            let local = rig.affine().inverse().transform_point3(world);
            (local, PLACARD_ZOOM_RATE, FOCUS_SCALE)
        } else if formed {
            (
                attributes.formed_target,
                PLACARD_FORMED_RATE * attributes.weight,
                attributes.base_scale,
            )
        } else {
            let scale = if armed {
                attributes.base_scale * HOVER_SCALE_BOOST
            } else {
                attributes.base_scale
            };
            (attributes.chaos_target, PLACARD_CHAOS_RATE, scale)
        };

        transform.translation = approach(transform.translation, target, rate, dt);

        if zoomed {
            // Continuous billboard, not just on transition.
            transform.rotation = transform
                .rotation
                .slerp(camera.rotation, (BILLBOARD_RATE * dt).min(1.0));
        } else if formed {
            transform.rotation = formed_orientation(
                transform.translation,
                now,
                attributes.phase_offset,
                attributes.phase_speed,
            );
        } else {
            transform.rotation = tumble(transform.rotation, attributes.rotation_rate, dt);
        }

        let scale = approach_f32(transform.scale.x, target_scale, SCALE_RATE, dt);
        transform.scale = Vec3::splat(scale);
    }
}

/// Drive the border glow and the depth override from the focus phase.
/// Armed placards glow softly; the zoomed placard glows hard and renders
/// over everything nearer. Runs on focus changes only.
pub fn update_placard_highlight(
    focus: Res<FocusState>,
    placards: Query<(&PlacardIndex, &OrnamentAttributes, &PlacardSurface), With<Placard>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (index, attributes, surface) in &placards {
        let zoomed = focus.zoomed_index() == Some(index.0);
        let armed = focus.armed_index() == Some(index.0);

        let (emissive, depth_bias) = if zoomed {
            (ZOOM_EMISSIVE, FOCUS_DEPTH_BIAS)
        } else if armed {
            (ARMED_EMISSIVE, 0.0)
        } else {
            (0.0, 0.0)
        };

        if let Some(border) = materials.get_mut(&surface.border) {
            border.emissive = palette::srgb(attributes.color).to_linear() * emissive;
            border.depth_bias = depth_bias;
        }
        if let Some(photo) = materials.get_mut(&surface.photo) {
            photo.depth_bias = depth_bias;
        }
    }
}

/// Swap real photos in as their textures finish loading. Failed loads leave
/// the blank paper in place; nothing here blocks a frame.
pub fn apply_loaded_photos(
    slots: Res<PhotoSlots>,
    images: Res<Assets<Image>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut placards: Query<&mut PlacardSurface, With<Placard>>,
) {
    if slots.handles.is_empty() {
        return;
    }
    for mut surface in &mut placards {
        if surface.photo_ready {
            continue;
        }
        let Some(slot) = surface.slot else {
            continue;
        };
        let handle = &slots.handles[slot];
        if images.get(handle).is_none() {
            continue;
        }
        let Some(material) = materials.get_mut(&surface.photo) else {
            continue;
        };
        material.base_color_texture = Some(handle.clone());
        material.emissive_texture = Some(handle.clone());
        material.emissive = LinearRgba::WHITE * 0.5;
        surface.photo_ready = true;
        info!("Photo slot {slot} applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choreography::focus::FocusPhase;
    use crate::gesture::signals::ScenePhase;
    use bevy::ecs::system::RunSystemOnce;

    // Camera at (0, 0, 10) looking at the origin; placard 0 sits dead
    // centre, placard 1 far off axis.
    fn selection_world(phase: ScenePhase, focus: FocusPhase, selected: Option<usize>) -> World {
        let mut world = World::new();
        world.insert_resource(GestureSignals {
            phase,
            rotation_speed: 0.0,
            zoom_request: false,
        });
        world.insert_resource(FocusState { phase: focus });
        world.insert_resource(SelectionState { selected });
        world.spawn((
            Camera3d::default(),
            Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        ));
        world.spawn((
            Placard,
            PlacardIndex(0),
            GlobalTransform::from_translation(Vec3::ZERO),
        ));
        world.spawn((
            Placard,
            PlacardIndex(1),
            GlobalTransform::from_translation(Vec3::new(40.0, 0.0, 0.0)),
        ));
        world
    }

    #[test]
    fn chaos_scan_picks_the_centred_placard() {
        let mut world = selection_world(ScenePhase::Chaos, FocusPhase::Idle, None);
        world
            .run_system_once(update_placard_selection)
            .expect("system runs");
        assert_eq!(world.resource::<SelectionState>().selected, Some(0));
    }

    #[test]
    fn formed_clears_any_previous_selection() {
        let mut world = selection_world(ScenePhase::Formed, FocusPhase::Idle, Some(0));
        world
            .run_system_once(update_placard_selection)
            .expect("system runs");
        assert_eq!(world.resource::<SelectionState>().selected, None);
    }

    #[test]
    fn locked_zoom_skips_the_rescan() {
        // The scan would pick placard 0, but the zoom lock on 1 holds.
        let mut world = selection_world(ScenePhase::Chaos, FocusPhase::Zooming(1), Some(1));
        world
            .run_system_once(update_placard_selection)
            .expect("system runs");
        assert_eq!(world.resource::<SelectionState>().selected, Some(1));
    }
}
