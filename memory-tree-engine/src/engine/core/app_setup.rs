use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::palette;
use constants::tree::{RIG_OFFSET, TREE_BASE_RADIUS, TREE_HEIGHT};
use rand::Rng;

use crate::choreography::focus::{FocusState, ZoomSignal, advance_focus};
use crate::choreography::rng::ChoreographyRng;
use crate::choreography::selector::SelectionState;
use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller};
use crate::engine::core::app_state::AppState;
use crate::engine::core::hud::{fps_text_update_system, spawn_hud, status_text_update_system};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::photo_manifest::{
    ManifestLoader, PhotoManifest, poll_photo_manifest, start_manifest_load,
};
use crate::gesture::keyboard::keyboard_gesture_bridge;
use crate::gesture::signals::GestureSignals;
use crate::scene::baubles::{animate_baubles, spawn_baubles};
use crate::scene::fairy_lights::{animate_fairy_lights, spawn_fairy_lights};
use crate::scene::ground::{animate_figurines, animate_ground_gifts, spawn_ground};
use crate::scene::placards::{
    animate_placards, apply_loaded_photos, spawn_placards, update_placard_highlight,
    update_placard_selection,
};
use crate::scene::{ChoreographyRig, spawn_rig};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers PhotoManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<PhotoManifest>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<GestureSignals>()
        .init_resource::<SelectionState>()
        .init_resource::<FocusState>()
        .init_resource::<ZoomSignal>()
        .init_resource::<OrbitCamera>()
        .init_resource::<ChoreographyRng>()
        .init_resource::<ManifestLoader>()
        .insert_resource(ClearColor(Color::srgb_u8(0x00, 0x03, 0x00)))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 120.0,
            ..default()
        });

    // State-based system scheduling
    app.add_systems(
        Startup,
        (spawn_rig, setup, spawn_backdrop, start_manifest_load).chain(),
    )
    .add_systems(
        Update,
        poll_photo_manifest.run_if(in_state(AppState::Loading)),
    )
    .add_systems(
        OnEnter(AppState::Running),
        (spawn_placards, spawn_baubles, spawn_fairy_lights, spawn_ground),
    );

    // The control path is ordered: signals feed the camera, the camera pose
    // feeds selection, selection feeds the focus machine, and the placards
    // read the settled focus the same frame.
    app.add_systems(
        Update,
        (
            keyboard_gesture_bridge,
            camera_controller,
            update_placard_selection,
            advance_focus,
            animate_placards,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    let runtime_systems = (
        animate_baubles,
        animate_fairy_lights,
        animate_ground_gifts,
        animate_figurines,
        apply_loaded_photos,
        status_text_update_system,
        update_placard_highlight.run_if(resource_changed::<FocusState>),
    );
    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app.add_systems(Update, fps_text_update_system);

    app
}

/// Startup system: camera, lighting, foliage silhouette and HUD. The rig is
/// already spawned by this point so the foliage can hang under it.
fn setup(
    mut commands: Commands,
    orbit: Res<OrbitCamera>,
    rig_query: Query<Entity, With<ChoreographyRig>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 45.0_f32.to_radians(),
            ..default()
        }),
        orbit.transform(),
    ));

    spawn_lighting(&mut commands);
    spawn_foliage(&mut commands, &rig_query, &mut meshes, &mut materials);
    spawn_hud(commands);
    println!("✓ Scene dressing ready");
}

fn spawn_lighting(commands: &mut Commands) {
    let warm = palette::srgb(palette::WARM_LIGHT);
    commands.spawn((
        PointLight {
            color: warm,
            intensity: 2_000_000.0,
            range: 120.0,
            ..default()
        },
        Transform::from_xyz(10.0, 15.0, 10.0),
    ));
    commands.spawn((
        PointLight {
            color: warm,
            intensity: 1_200_000.0,
            range: 120.0,
            ..default()
        },
        Transform::from_xyz(-12.0, 8.0, -10.0),
    ));
    // Crown light just above the tree tip.
    commands.spawn((
        PointLight {
            color: palette::srgb(palette::GOLD),
            intensity: 800_000.0,
            range: 60.0,
            ..default()
        },
        Transform::from_translation(RIG_OFFSET + Vec3::Y * (TREE_HEIGHT / 2.0 + 2.0)),
    ));
}

/// Dark emerald cone behind the ornament shell. Static dressing only, it
/// never joins the choreography.
fn spawn_foliage(
    commands: &mut Commands,
    rig_query: &Query<Entity, With<ChoreographyRig>>,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let Ok(rig) = rig_query.single() else {
        return;
    };

    let foliage = materials.add(StandardMaterial {
        base_color: palette::srgb(palette::EMERALD),
        perceptual_roughness: 0.9,
        ..default()
    });
    let cone = meshes.add(Cone {
        radius: TREE_BASE_RADIUS * 0.92,
        height: TREE_HEIGHT,
    });
    commands.spawn((Mesh3d(cone), MeshMaterial3d(foliage), ChildOf(rig)));
}

/// The gold star crowning the apex.
#[derive(Component)]
pub struct TreeTopper;

/// One distant backdrop star.
#[derive(Component)]
pub struct BackdropStar;

const STARFIELD_COUNT: usize = 200;
const STARFIELD_RADIUS: f32 = 320.0;

/// Night sky dressing: an emissive topper star on the rig at the apex and a
/// far shell of unlit stars above the horizon. Static, never choreographed.
pub fn spawn_backdrop(
    mut commands: Commands,
    rig_query: Query<Entity, With<ChoreographyRig>>,
    mut rng: ResMut<ChoreographyRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok(rig) = rig_query.single() else {
        return;
    };

    let gold = palette::srgb(palette::GOLD);
    let topper = materials.add(StandardMaterial {
        base_color: gold,
        emissive: gold.to_linear() * 4.0,
        ..default()
    });
    commands.spawn((
        TreeTopper,
        Mesh3d(meshes.add(Sphere::new(0.6).mesh().uv(16, 16))),
        MeshMaterial3d(topper),
        Transform::from_xyz(0.0, TREE_HEIGHT / 2.0 + 0.8, 0.0),
        ChildOf(rig),
    ));

    let star_mesh = meshes.add(Sphere::new(1.0).mesh().uv(6, 6));
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });
    for _ in 0..STARFIELD_COUNT {
        let theta = rng.0.r#gen::<f32>() * std::f32::consts::TAU;
        // Mostly above the horizon, a few dipping slightly below.
        let height = rng.0.r#gen::<f32>() * 1.05 - 0.05;
        let planar = (1.0 - height * height).max(0.0).sqrt();
        let direction = Vec3::new(planar * theta.cos(), height, planar * theta.sin());
        let scale = 0.3 + rng.0.r#gen::<f32>() * 0.6;
        commands.spawn((
            BackdropStar,
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(direction * STARFIELD_RADIUS)
                .with_scale(Vec3::splat(scale)),
        ));
    }
    println!("Spawned topper star and {STARFIELD_COUNT} backdrop stars");
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn backdrop_spawns_topper_and_starfield() {
        let mut world = World::new();
        world.insert_resource(ChoreographyRng::seeded(17));
        world.insert_resource(Assets::<Mesh>::default());
        world.insert_resource(Assets::<StandardMaterial>::default());
        world.spawn((
            ChoreographyRig,
            Transform::default(),
            Visibility::default(),
        ));

        world.run_system_once(spawn_backdrop).expect("system runs");

        let mut toppers = world.query_filtered::<(), With<TreeTopper>>();
        assert_eq!(toppers.iter(&world).count(), 1);
        let mut stars = world.query_filtered::<&Transform, With<BackdropStar>>();
        assert_eq!(stars.iter(&world).count(), STARFIELD_COUNT);
        for transform in stars.iter(&world) {
            // Every star sits on the far shell, none inside the scene.
            assert!((transform.translation.length() - STARFIELD_RADIUS).abs() < 1e-3);
        }
    }
}
