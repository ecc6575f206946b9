use bevy::prelude::*;
use constants::motion::{FIGURINE_RATE, FIGURINE_UPRIGHT_RATE, GROUND_GIFT_RATE};
use constants::palette;

use crate::choreography::attributes::{
    FigurineKind, OrnamentAttributes, figurine_poses, generate_ground_gifts,
};
use crate::choreography::blend::{approach, blend_fraction, tumble};
use crate::choreography::rng::ChoreographyRng;
use crate::gesture::signals::GestureSignals;
use crate::scene::ChoreographyRig;

#[derive(Component)]
pub struct GroundGift;

/// A figurine eases back to this standing yaw when the tree forms.
#[derive(Component)]
pub struct Figurine {
    pub upright_yaw: f32,
}

pub fn spawn_ground(
    mut commands: Commands,
    rig_query: Query<Entity, With<ChoreographyRig>>,
    mut rng: ResMut<ChoreographyRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok(rig) = rig_query.single() else {
        return;
    };

    let gift_mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let gifts = generate_ground_gifts(&mut rng.0);
    println!("Spawned {} ground gifts and 2 figurines", gifts.len());

    commands.entity(rig).with_children(|parent| {
        for attributes in gifts {
            let material = materials.add(StandardMaterial {
                base_color: palette::srgb(attributes.color),
                perceptual_roughness: 0.3,
                ..default()
            });
            parent.spawn((
                GroundGift,
                Mesh3d(gift_mesh.clone()),
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

    for pose in figurine_poses() {
        let root = commands
            .spawn((
                Figurine {
                    upright_yaw: pose.upright_yaw,
                },
                OrnamentAttributes {
                    chaos_target: pose.chaos_target,
                    formed_target: pose.formed_target,
                    base_scale: pose.scale,
                    weight: 1.0,
                    color: palette::WHITE,
                    rotation_rate: Vec3::new(0.0, 1.0, 0.5),
                    phase_offset: 0.0,
                    phase_speed: 0.0,
                    chaos_rotation: Quat::IDENTITY,
                },
                Transform {
                    translation: pose.chaos_target,
                    scale: Vec3::splat(pose.scale),
                    ..default()
                },
                Visibility::default(),
                ChildOf(rig),
            ))
            .id();
        match pose.kind {
            FigurineKind::Snowman => {
                spawn_snowman(&mut commands, root, &mut meshes, &mut materials)
            }
            FigurineKind::Soldier => {
                spawn_soldier(&mut commands, root, &mut meshes, &mut materials)
            }
        }
    }
}

/// Gifts tumble end over end while scattered and freeze in place once the
/// ring has formed.
pub fn animate_ground_gifts(
    time: Res<Time>,
    signals: Res<GestureSignals>,
    mut gifts: Query<(&OrnamentAttributes, &mut Transform), With<GroundGift>>,
) {
    let dt = time.delta_secs();
    let formed = signals.is_formed();

    for (attributes, mut transform) in &mut gifts {
        let target = if formed {
            attributes.formed_target
        } else {
            attributes.chaos_target
        };
        transform.translation = approach(transform.translation, target, GROUND_GIFT_RATE, dt);
        if !formed {
            transform.rotation = tumble(transform.rotation, attributes.rotation_rate, dt);
        }
    }
}

/// Figurines cartwheel through the chaos cloud and ease upright to their
/// standing yaw as they land by the trunk.
pub fn animate_figurines(
    time: Res<Time>,
    signals: Res<GestureSignals>,
    mut figurines: Query<(&Figurine, &OrnamentAttributes, &mut Transform)>,
) {
    let dt = time.delta_secs();
    let formed = signals.is_formed();

    for (figurine, attributes, mut transform) in &mut figurines {
        let target = if formed {
            attributes.formed_target
        } else {
            attributes.chaos_target
        };
        transform.translation = approach(transform.translation, target, FIGURINE_RATE, dt);

        if formed {
            let upright = Quat::from_rotation_y(figurine.upright_yaw);
            transform.rotation = transform
                .rotation
                .slerp(upright, blend_fraction(FIGURINE_UPRIGHT_RATE, dt));
        } else {
            transform.rotation = tumble(transform.rotation, attributes.rotation_rate, dt);
        }
    }
}

fn spawn_snowman(
    commands: &mut Commands,
    root: Entity,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let snow = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.8,
        ..default()
    });
    let coal = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.2, 0.2),
        ..default()
    });
    let carrot = materials.add(StandardMaterial {
        base_color: palette::srgb(0xFFA500),
        ..default()
    });
    let scarf = materials.add(StandardMaterial {
        base_color: palette::srgb(palette::RED),
        ..default()
    });

    let parts: [(Handle<Mesh>, Handle<StandardMaterial>, Transform); 6] = [
        (
            meshes.add(Sphere::new(0.6).mesh().uv(16, 16)),
            snow.clone(),
            Transform::from_xyz(0.0, 0.6, 0.0),
        ),
        (
            meshes.add(Sphere::new(0.45).mesh().uv(16, 16)),
            snow.clone(),
            Transform::from_xyz(0.0, 1.5, 0.0),
        ),
        (
            meshes.add(Sphere::new(0.3).mesh().uv(16, 16)),
            snow,
            Transform::from_xyz(0.0, 2.2, 0.0),
        ),
        (
            meshes.add(Cylinder::new(0.2, 0.5)),
            coal,
            Transform::from_xyz(0.0, 2.5, 0.0),
        ),
        (
            meshes.add(Cone {
                radius: 0.05,
                height: 0.3,
            }),
            carrot,
            Transform::from_xyz(0.0, 2.2, 0.25)
                .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
        ),
        (
            meshes.add(Torus {
                minor_radius: 0.1,
                major_radius: 0.35,
            }),
            scarf,
            Transform::from_xyz(0.0, 1.9, 0.0).with_rotation(Quat::from_rotation_x(0.1)),
        ),
    ];

    for (mesh, material, transform) in parts {
        commands.spawn((Mesh3d(mesh), MeshMaterial3d(material), transform, ChildOf(root)));
    }
}

fn spawn_soldier(
    commands: &mut Commands,
    root: Entity,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let coat = materials.add(StandardMaterial {
        base_color: palette::srgb(palette::RED),
        ..default()
    });
    let black = materials.add(StandardMaterial {
        base_color: Color::srgb(0.1, 0.1, 0.1),
        ..default()
    });
    let belt = materials.add(StandardMaterial {
        base_color: palette::srgb(palette::GOLD),
        metallic: 0.8,
        ..default()
    });
    let skin = materials.add(StandardMaterial {
        base_color: palette::srgb(0xF0D5A0),
        ..default()
    });

    let parts: [(Handle<Mesh>, Handle<StandardMaterial>, Transform); 8] = [
        (
            meshes.add(Cuboid::new(0.25, 1.0, 0.25)),
            black.clone(),
            Transform::from_xyz(-0.2, 0.5, 0.0),
        ),
        (
            meshes.add(Cuboid::new(0.25, 1.0, 0.25)),
            black.clone(),
            Transform::from_xyz(0.2, 0.5, 0.0),
        ),
        (
            meshes.add(Cuboid::new(0.7, 1.0, 0.4)),
            coat.clone(),
            Transform::from_xyz(0.0, 1.5, 0.0),
        ),
        (
            meshes.add(Cuboid::new(0.72, 0.15, 0.42)),
            belt,
            Transform::from_xyz(0.0, 1.05, 0.0),
        ),
        (
            meshes.add(Cuboid::new(0.5, 0.6, 0.5)),
            skin,
            Transform::from_xyz(0.0, 2.3, 0.0),
        ),
        (
            meshes.add(Cylinder::new(0.35, 0.7)),
            black,
            Transform::from_xyz(0.0, 2.8, 0.0),
        ),
        (
            meshes.add(Cuboid::new(0.2, 0.8, 0.2)),
            coat.clone(),
            Transform::from_xyz(-0.45, 1.6, 0.0).with_rotation(Quat::from_rotation_z(0.1)),
        ),
        (
            meshes.add(Cuboid::new(0.2, 0.8, 0.2)),
            coat,
            Transform::from_xyz(0.45, 1.6, 0.0).with_rotation(Quat::from_rotation_z(-0.1)),
        ),
    ];

    for (mesh, material, transform) in parts {
        commands.spawn((Mesh3d(mesh), MeshMaterial3d(material), transform, ChildOf(root)));
    }
}
