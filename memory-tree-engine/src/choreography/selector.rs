use bevy::prelude::*;

/// Placard the viewer is currently centred on, recomputed every chaos frame.
/// `None` whenever nothing clears the alignment threshold or the scene is
/// formed.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: Option<usize>,
}

/// Score every entity by how close it sits to the camera's forward axis and
/// return the best index above `threshold` (cosine of the acceptance cone).
///
/// O(N) over current world positions; a pure function of the frame's inputs,
/// so re-running it with the same camera pose picks the same entity. Ties
/// resolve to the lower index; entities at the camera position are skipped.
pub fn select_centered(
    camera_position: Vec3,
    camera_forward: Vec3,
    world_positions: &[Vec3],
    threshold: f32,
) -> Option<usize> {
    let forward = camera_forward.normalize_or_zero();
    if forward == Vec3::ZERO {
        return None;
    }

    let mut best: Option<(usize, f32)> = None;
    for (index, position) in world_positions.iter().enumerate() {
        let direction = (*position - camera_position).normalize_or_zero();
        if direction == Vec3::ZERO {
            continue;
        }
        let score = direction.dot(forward);
        if score > threshold && best.is_none_or(|(_, s)| score > s) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::focus::CENTER_ALIGNMENT_THRESHOLD;

    fn ring_position(angle_deg: f32, distance: f32) -> Vec3 {
        // Camera at origin looking down -Z; positions offset in the XZ plane.
        let rad = angle_deg.to_radians();
        Vec3::new(rad.sin() * distance, 0.0, -rad.cos() * distance)
    }

    #[test]
    fn on_axis_entity_wins_over_off_axis() {
        let positions = vec![ring_position(45.0, 20.0), ring_position(0.0, 20.0)];
        let picked = select_centered(
            Vec3::ZERO,
            Vec3::NEG_Z,
            &positions,
            CENTER_ALIGNMENT_THRESHOLD,
        );
        assert_eq!(picked, Some(1));

        // Population order must not matter.
        let swapped = vec![ring_position(0.0, 20.0), ring_position(45.0, 20.0)];
        let picked = select_centered(
            Vec3::ZERO,
            Vec3::NEG_Z,
            &swapped,
            CENTER_ALIGNMENT_THRESHOLD,
        );
        assert_eq!(picked, Some(0));
    }

    #[test]
    fn thirty_degrees_misses_the_acceptance_cone() {
        // cos(30°) ≈ 0.866 < 0.92, so even the best off-axis entity is
        // rejected when nothing sits near centre.
        let positions = vec![ring_position(30.0, 20.0), ring_position(90.0, 20.0)];
        let picked = select_centered(
            Vec3::ZERO,
            Vec3::NEG_Z,
            &positions,
            CENTER_ALIGNMENT_THRESHOLD,
        );
        assert_eq!(picked, None);
    }

    #[test]
    fn scan_is_deterministic_for_a_fixed_frame() {
        let positions: Vec<Vec3> = (0..64)
            .map(|i| ring_position(i as f32 * 5.7, 10.0 + i as f32))
            .collect();
        let first = select_centered(
            Vec3::ZERO,
            Vec3::NEG_Z,
            &positions,
            CENTER_ALIGNMENT_THRESHOLD,
        );
        for _ in 0..10 {
            let again = select_centered(
                Vec3::ZERO,
                Vec3::NEG_Z,
                &positions,
                CENTER_ALIGNMENT_THRESHOLD,
            );
            assert_eq!(first, again);
        }
    }

    #[test]
    fn empty_population_and_degenerate_camera_select_nothing() {
        assert_eq!(
            select_centered(Vec3::ZERO, Vec3::NEG_Z, &[], CENTER_ALIGNMENT_THRESHOLD),
            None
        );
        assert_eq!(
            select_centered(
                Vec3::ZERO,
                Vec3::ZERO,
                &[Vec3::NEG_Z],
                CENTER_ALIGNMENT_THRESHOLD
            ),
            None
        );
        // Entity exactly at the camera position is skipped, not selected.
        assert_eq!(
            select_centered(
                Vec3::ZERO,
                Vec3::NEG_Z,
                &[Vec3::ZERO],
                CENTER_ALIGNMENT_THRESHOLD
            ),
            None
        );
    }
}
