use bevy::prelude::*;
use constants::motion::FAIRY_LIGHT_RATE;
use constants::palette;
use constants::tree::FAIRY_LIGHT_COUNT;

use crate::choreography::attributes::{OrnamentAttributes, generate_fairy_lights};
use crate::choreography::blend::approach;
use crate::choreography::rng::ChoreographyRng;
use crate::gesture::signals::GestureSignals;
use crate::scene::ChoreographyRig;

#[derive(Component)]
pub struct FairyLight;

/// Each bulb owns its material so the flicker can drive emissive intensity
/// per entity.
#[derive(Component)]
pub struct BulbMaterial(pub Handle<StandardMaterial>);

pub fn spawn_fairy_lights(
    mut commands: Commands,
    rig_query: Query<Entity, With<ChoreographyRig>>,
    mut rng: ResMut<ChoreographyRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok(rig) = rig_query.single() else {
        return;
    };

    let bulb_mesh = meshes.add(Sphere::new(0.8).mesh().uv(8, 8));
    let population = generate_fairy_lights(&mut rng.0, FAIRY_LIGHT_COUNT);
    println!("Spawned {} fairy lights", population.len());

    commands.entity(rig).with_children(|parent| {
        for attributes in population {
            let color = palette::srgb(attributes.color);
            let material = materials.add(StandardMaterial {
                base_color: color,
                emissive: LinearRgba::BLACK,
                ..default()
            });
            parent.spawn((
                FairyLight,
                BulbMaterial(material.clone()),
                Mesh3d(bulb_mesh.clone()),
                MeshMaterial3d(material),
                Transform {
                    translation: attributes.chaos_target,
                    scale: Vec3::splat(attributes.base_scale),
                    ..default()
                },
                attributes,
            ));
        }
    });
}

/// Blend bulbs toward the active target and pulse their glow. The base
/// intensity is brighter while formed so the assembled tree sparkles, but
/// never drops to zero in chaos.
pub fn animate_fairy_lights(
    time: Res<Time>,
    signals: Res<GestureSignals>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut lights: Query<(&OrnamentAttributes, &BulbMaterial, &mut Transform), With<FairyLight>>,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs();
    let formed = signals.is_formed();
    let (base, gain) = if formed { (3.0, 4.0) } else { (1.5, 2.0) };

    for (attributes, bulb, mut transform) in &mut lights {
        let target = if formed {
            attributes.formed_target
        } else {
            attributes.chaos_target
        };
        transform.translation = approach(transform.translation, target, FAIRY_LIGHT_RATE, dt);

        let pulse =
            ((now * attributes.phase_speed + attributes.phase_offset).sin() + 1.0) / 2.0;
        if let Some(material) = materials.get_mut(&bulb.0) {
            material.emissive =
                palette::srgb(attributes.color).to_linear() * (base + pulse * gain);
        }
    }
}
