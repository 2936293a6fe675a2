//! Character pose operations
//!
//! Characters walk along their facing vector, which points down -Z at
//! heading zero. Every step is clamped to the world bounds.

use super::pose_data::{CharacterPose, MotionDirection, WorldBounds};
use crate::camera::wrap_angle;
use glam::{Mat4, Vec3};

/// Unit vector a character walks along when moving forward
pub fn facing_vector(heading: f32) -> Vec3 {
    -Vec3::new(heading.sin(), 0.0, heading.cos())
}

/// Square bounds for a world of half extent `world_size`, shrunk by `margin`
pub fn world_bounds(world_size: f32, margin: f32) -> WorldBounds {
    let limit = (world_size - margin).max(0.0);
    WorldBounds {
        min_x: -limit,
        max_x: limit,
        min_z: -limit,
        max_z: limit,
    }
}

/// Clamp a position into the bounds, leaving height untouched
pub fn clamp_to_bounds(position: Vec3, bounds: &WorldBounds) -> Vec3 {
    Vec3::new(
        position.x.clamp(bounds.min_x, bounds.max_x),
        position.y,
        position.z.clamp(bounds.min_z, bounds.max_z),
    )
}

/// Move along the facing vector by `distance`
pub fn step_pose(
    pose: &mut CharacterPose,
    direction: MotionDirection,
    distance: f32,
    bounds: &WorldBounds,
) {
    let sign = match direction {
        MotionDirection::Forward => 1.0,
        MotionDirection::Backward => -1.0,
    };
    let target = pose.position + facing_vector(pose.heading) * (sign * distance);
    pose.position = clamp_to_bounds(target, bounds);
}

/// Turn by `delta` radians (positive turns left)
pub fn turn_pose(pose: &mut CharacterPose, delta: f32) {
    pose.heading = wrap_angle(pose.heading + delta);
}

/// Root model matrix: translate to the position, then face the heading
pub fn pose_matrix(pose: &CharacterPose) -> Mat4 {
    Mat4::from_translation(pose.position) * Mat4::from_rotation_y(pose.heading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    const TOLERANCE: f32 = 1e-4;

    fn pose_at(x: f32, z: f32, heading: f32) -> CharacterPose {
        CharacterPose {
            position: Vec3::new(x, 0.0, z),
            heading,
        }
    }

    #[test]
    fn test_forward_at_zero_heading_goes_negative_z() {
        let bounds = world_bounds(105.0, 3.0);
        let mut pose = pose_at(0.0, 0.0, 0.0);
        step_pose(&mut pose, MotionDirection::Forward, 2.0, &bounds);
        assert!((pose.position - Vec3::new(0.0, 0.0, -2.0)).length() < TOLERANCE);

        step_pose(&mut pose, MotionDirection::Backward, 5.0, &bounds);
        assert!((pose.position - Vec3::new(0.0, 0.0, 3.0)).length() < TOLERANCE);
    }

    #[test]
    fn test_step_is_clamped_to_world() {
        let bounds = world_bounds(105.0, 3.0);
        let mut pose = pose_at(100.0, -100.0, -FRAC_PI_2);
        // Heading -π/2 faces +X
        step_pose(&mut pose, MotionDirection::Forward, 50.0, &bounds);
        assert_eq!(pose.position.x, 102.0);
        assert!((pose.position.z + 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_turn_wraps_heading() {
        let mut pose = pose_at(0.0, 0.0, 0.1);
        turn_pose(&mut pose, -0.2);
        assert!(pose.heading >= 0.0 && pose.heading < TAU);
        assert!((pose.heading - (TAU - 0.1)).abs() < TOLERANCE);

        turn_pose(&mut pose, 3.0 * PI);
        assert!(pose.heading >= 0.0 && pose.heading < TAU);
    }

    #[test]
    fn test_pose_matrix_places_origin_at_position() {
        let pose = pose_at(4.0, -7.0, 1.2);
        let origin = pose_matrix(&pose).transform_point3(Vec3::ZERO);
        assert!((origin - pose.position).length() < TOLERANCE);
    }

    #[test]
    fn test_pose_matrix_maps_local_forward_to_facing() {
        let pose = pose_at(0.0, 0.0, 0.8);
        let forward = pose_matrix(&pose).transform_vector3(Vec3::NEG_Z);
        assert!((forward - facing_vector(0.8)).length() < TOLERANCE);
    }
}
