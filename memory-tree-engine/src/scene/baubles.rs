use bevy::prelude::*;
use constants::motion::BAUBLE_RATE;
use constants::palette;
use constants::tree::BAUBLE_COUNT;
use std::collections::HashMap;

use crate::choreography::attributes::{BaubleKind, OrnamentAttributes, generate_baubles};
use crate::choreography::blend::{approach, tumble};
use crate::choreography::rng::ChoreographyRng;
use crate::gesture::signals::GestureSignals;
use crate::scene::ChoreographyRig;

#[derive(Component)]
pub struct Bauble;

/// Owned material table keyed by bauble colour. Baubles of the same colour
/// share one handle; the table is built once at spawn and never written
/// afterwards.
#[derive(Resource, Default)]
pub struct BaubleMaterialTable {
    pub by_color: HashMap<u32, Handle<StandardMaterial>>,
}

pub fn spawn_baubles(
    mut commands: Commands,
    rig_query: Query<Entity, With<ChoreographyRig>>,
    mut rng: ResMut<ChoreographyRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok(rig) = rig_query.single() else {
        return;
    };

    let gift_mesh = meshes.add(Cuboid::new(0.8, 0.8, 0.8));
    let ball_mesh = meshes.add(Sphere::new(0.5).mesh().uv(16, 16));
    let cane_mesh = meshes.add(Cylinder::new(0.15, 1.2));

    let mut table = BaubleMaterialTable::default();
    let population = generate_baubles(&mut rng.0, BAUBLE_COUNT);
    println!("Spawned {} baubles", population.len());

    commands.entity(rig).with_children(|parent| {
        for (kind, attributes) in population {
            let material = table
                .by_color
                .entry(attributes.color)
                .or_insert_with(|| {
                    let color = palette::srgb(attributes.color);
                    materials.add(StandardMaterial {
                        base_color: color,
                        emissive: color.to_linear() * 0.2,
                        perceptual_roughness: 0.3,
                        metallic: 0.4,
                        ..default()
                    })
                })
                .clone();
            let mesh = match kind {
                BaubleKind::GiftBox => gift_mesh.clone(),
                BaubleKind::Ball => ball_mesh.clone(),
                BaubleKind::CandyCane => cane_mesh.clone(),
            };

            parent.spawn((
                Bauble,
                kind,
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform {
                    translation: attributes.chaos_target,
                    rotation: attributes.chaos_rotation,
                    scale: Vec3::splat(attributes.base_scale),
                },
                attributes,
            ));
        }
    });

    commands.insert_resource(table);
}

/// Baubles blend toward whichever target is active and keep tumbling in
/// both modes; the tumble reads as gentle sway once they settle on the tree.
pub fn animate_baubles(
    time: Res<Time>,
    signals: Res<GestureSignals>,
    mut baubles: Query<(&OrnamentAttributes, &mut Transform), With<Bauble>>,
) {
    let dt = time.delta_secs();
    let formed = signals.is_formed();

    for (attributes, mut transform) in &mut baubles {
        let target = if formed {
            attributes.formed_target
        } else {
            attributes.chaos_target
        };
        transform.translation = approach(transform.translation, target, BAUBLE_RATE, dt);
        transform.rotation = tumble(transform.rotation, attributes.rotation_rate, dt);
    }
}
