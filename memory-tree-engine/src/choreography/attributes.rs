use bevy::prelude::*;
use constants::motion::{
    BAUBLE_CHAOS_EXTENT, FAIRY_LIGHT_CHAOS_EXTENT, GROUND_CHAOS_EXTENT, PLACARD_CHAOS_EXTENT,
};
use constants::palette::{CANDY_COLORS, FAIRY_LIGHT_COLORS, GIFT_COLORS, PLACARD_BORDER_COLORS};
use constants::tree::{GROUND_GIFT_COUNT, TREE_HEIGHT, cone_radius_at};
use rand::Rng;
use std::f32::consts::{FRAC_PI_4, PI, TAU};

/// Static per-entity attributes fixed at population creation. The two target
/// positions never change afterwards; the live pose lives in the entity's
/// `Transform` and is the only thing the motion blender mutates.
#[derive(Component, Clone, Debug)]
pub struct OrnamentAttributes {
    /// Random position inside the chaos cloud cube.
    pub chaos_target: Vec3,
    /// Position on (or just outside) the tree cone surface.
    pub formed_target: Vec3,
    pub base_scale: f32,
    /// Desynchronises formed convergence: heavier entities settle faster.
    pub weight: f32,
    /// Packed sRGB colour class (border, bulb or wrap colour).
    pub color: u32,
    /// Per-axis angular velocity for the chaos tumble.
    pub rotation_rate: Vec3,
    /// Phase scalars for periodic wobble / flicker.
    pub phase_offset: f32,
    pub phase_speed: f32,
    /// Initial scattered orientation.
    pub chaos_rotation: Quat,
}

/// Uniform sample inside an axis-aligned cube of the given half-extent.
/// Deliberately non-spherical; reads as "scattered" from any viewpoint.
pub fn chaos_position(rng: &mut impl Rng, half_extent: f32) -> Vec3 {
    Vec3::new(
        (rng.r#gen::<f32>() - 0.5) * 2.0 * half_extent,
        (rng.r#gen::<f32>() - 0.5) * 2.0 * half_extent,
        (rng.r#gen::<f32>() - 0.5) * 2.0 * half_extent,
    )
}

/// Sample a point on the tree cone surface. `radial_scale` tucks a population
/// inside the foliage (e.g. 0.95); `surface_offset` pushes it outward so it
/// hangs clear of the needles (placards, lights).
pub fn formed_surface_position(
    rng: &mut impl Rng,
    radial_scale: f32,
    surface_offset: f32,
) -> Vec3 {
    let y = rng.r#gen::<f32>() * TREE_HEIGHT - TREE_HEIGHT / 2.0;
    let radius = cone_radius_at(y) * radial_scale + surface_offset;
    let theta = rng.r#gen::<f32>() * TAU;
    Vec3::new(radius * theta.cos(), y, radius * theta.sin())
}

fn random_tumble_rate(rng: &mut impl Rng, magnitude: f32) -> Vec3 {
    Vec3::new(
        (rng.r#gen::<f32>() - 0.5) * magnitude,
        (rng.r#gen::<f32>() - 0.5) * magnitude,
        (rng.r#gen::<f32>() - 0.5) * magnitude,
    )
}

fn random_orientation(rng: &mut impl Rng) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        rng.r#gen::<f32>() * PI,
        rng.r#gen::<f32>() * PI,
        rng.r#gen::<f32>() * PI,
    )
}

fn pick(rng: &mut impl Rng, pool: &[u32]) -> u32 {
    pool[rng.gen_range(0..pool.len())]
}

/// Photo placard attributes. Roughly one in five is a "big" placard; the
/// rest vary in a narrow band. Placards hang half a unit off the foliage.
pub fn generate_placards(rng: &mut impl Rng, count: usize) -> Vec<OrnamentAttributes> {
    (0..count)
        .map(|_| {
            let is_big = rng.r#gen::<f32>() < 0.2;
            let base_scale = if is_big {
                2.2
            } else {
                0.8 + rng.r#gen::<f32>() * 0.6
            };
            OrnamentAttributes {
                chaos_target: chaos_position(rng, PLACARD_CHAOS_EXTENT),
                formed_target: formed_surface_position(rng, 1.0, 0.5),
                base_scale,
                weight: 0.8 + rng.r#gen::<f32>() * 1.2,
                color: pick(rng, PLACARD_BORDER_COLORS),
                rotation_rate: random_tumble_rate(rng, 1.0),
                phase_offset: rng.r#gen::<f32>() * 10.0,
                phase_speed: 0.5 + rng.r#gen::<f32>() * 0.5,
                chaos_rotation: random_orientation(rng),
            }
        })
        .collect()
}

/// Bauble shape classes sharing the same choreography primitives.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaubleKind {
    GiftBox,
    Ball,
    CandyCane,
}

/// Decorative bauble attributes. Baubles sit slightly inside the foliage
/// surface and tumble in both modes.
pub fn generate_baubles(rng: &mut impl Rng, count: usize) -> Vec<(BaubleKind, OrnamentAttributes)> {
    (0..count)
        .map(|_| {
            let (kind, color, base_scale) = match rng.gen_range(0..3u8) {
                0 => (
                    BaubleKind::GiftBox,
                    pick(rng, GIFT_COLORS),
                    0.8 + rng.r#gen::<f32>() * 0.4,
                ),
                1 => (
                    BaubleKind::Ball,
                    pick(rng, GIFT_COLORS),
                    0.6 + rng.r#gen::<f32>() * 0.4,
                ),
                _ => (
                    BaubleKind::CandyCane,
                    pick(rng, CANDY_COLORS),
                    0.7 + rng.r#gen::<f32>() * 0.3,
                ),
            };
            let attributes = OrnamentAttributes {
                chaos_target: chaos_position(rng, BAUBLE_CHAOS_EXTENT),
                formed_target: formed_surface_position(rng, 0.95, 0.0),
                base_scale,
                weight: 1.0,
                color,
                rotation_rate: random_tumble_rate(rng, 2.0),
                phase_offset: 0.0,
                phase_speed: 0.0,
                chaos_rotation: random_orientation(rng),
            };
            (kind, attributes)
        })
        .collect()
}

/// Fairy light attributes. `phase_speed`/`phase_offset` drive the emissive
/// flicker rather than a wobble; lights never tumble.
pub fn generate_fairy_lights(rng: &mut impl Rng, count: usize) -> Vec<OrnamentAttributes> {
    (0..count)
        .map(|_| OrnamentAttributes {
            chaos_target: chaos_position(rng, FAIRY_LIGHT_CHAOS_EXTENT),
            formed_target: formed_surface_position(rng, 1.0, 0.3),
            base_scale: 0.15,
            weight: 1.0,
            color: pick(rng, FAIRY_LIGHT_COLORS),
            rotation_rate: Vec3::ZERO,
            phase_offset: rng.r#gen::<f32>() * 100.0,
            phase_speed: 2.0 + rng.r#gen::<f32>() * 3.0,
            chaos_rotation: Quat::IDENTITY,
        })
        .collect()
}

/// Ground gifts ring the trunk on the floor plane of the rig. The formed
/// target keeps each box resting on the ground (`y = scale/2 - H/2`).
pub fn generate_ground_gifts(rng: &mut impl Rng) -> Vec<OrnamentAttributes> {
    (0..GROUND_GIFT_COUNT)
        .map(|i| {
            let angle =
                (i as f32 / GROUND_GIFT_COUNT as f32) * TAU + rng.r#gen::<f32>() * 0.5;
            let radius = 6.0 + rng.r#gen::<f32>() * 4.0;
            let scale = 1.0 + rng.r#gen::<f32>() * 1.5;
            OrnamentAttributes {
                chaos_target: chaos_position(rng, GROUND_CHAOS_EXTENT),
                formed_target: Vec3::new(
                    angle.cos() * radius,
                    scale / 2.0 - TREE_HEIGHT / 2.0,
                    angle.sin() * radius,
                ),
                base_scale: scale,
                weight: 1.0,
                color: pick(rng, GIFT_COLORS),
                rotation_rate: Vec3::new(1.0, 1.0, 0.0),
                phase_offset: 0.0,
                phase_speed: 0.0,
                chaos_rotation: Quat::from_rotation_y(rng.r#gen::<f32>() * PI),
            }
        })
        .collect()
}

/// Figurine classes standing at the tree base.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FigurineKind {
    Snowman,
    Soldier,
}

/// Fixed figurine placements: scattered high in chaos, standing by the trunk
/// when formed, each facing slightly toward the viewer.
#[derive(Clone, Debug)]
pub struct FigurinePose {
    pub kind: FigurineKind,
    pub chaos_target: Vec3,
    pub formed_target: Vec3,
    pub upright_yaw: f32,
    pub scale: f32,
}

pub fn figurine_poses() -> [FigurinePose; 2] {
    let floor = -TREE_HEIGHT / 2.0;
    [
        FigurinePose {
            kind: FigurineKind::Snowman,
            chaos_target: Vec3::new(30.0, 40.0, 30.0),
            formed_target: Vec3::new(5.0, floor, 5.0),
            upright_yaw: -FRAC_PI_4,
            scale: 1.5,
        },
        FigurinePose {
            kind: FigurineKind::Soldier,
            chaos_target: Vec3::new(-30.0, 40.0, 30.0),
            formed_target: Vec3::new(-5.0, floor, 5.0),
            upright_yaw: FRAC_PI_4,
            scale: 1.5,
        },
    ]
}
