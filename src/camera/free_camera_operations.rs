//! Free camera operations - DOP functions
//!
//! Yaw/pitch navigation for the free-fly mode, plus the first-person
//! derivation from a character's heading.

use super::free_camera_data::{FreeCameraData, FreeCameraMotion};
use crate::character::CharacterPose;
use crate::constants::free;
use glam::{Mat4, Vec3};

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize free camera at a position, looking along yaw/pitch
pub fn init_free_camera(position: Vec3, yaw: f32, pitch: f32) -> FreeCameraData {
    let mut camera = FreeCameraData {
        position,
        yaw_radians: yaw,
        pitch_radians: pitch.clamp(-free::PITCH_LIMIT, free::PITCH_LIMIT),
        view_matrix: Mat4::IDENTITY,
        movement_speed: free::MOVE_SPEED,
        turn_speed: free::TURN_SPEED_DEGREES.to_radians(),
    };
    update_view_matrix(&mut camera);
    camera
}

// ============================================================================
// VIEW MATRIX
// ============================================================================

/// Rebuild the view matrix from position and orientation
pub fn update_view_matrix(camera: &mut FreeCameraData) {
    let forward = calculate_forward_vector(camera.yaw_radians, camera.pitch_radians);
    camera.view_matrix = Mat4::look_at_rh(camera.position, camera.position + forward, Vec3::Y);
}

pub fn look_at_point(camera: &FreeCameraData) -> Vec3 {
    camera.position + calculate_forward_vector(camera.yaw_radians, camera.pitch_radians)
}

// ============================================================================
// MOVEMENT
// ============================================================================

/// Move camera forward by distance (in camera's forward direction)
pub fn move_forward(camera: &mut FreeCameraData, distance: f32) {
    camera.position += calculate_forward_vector(camera.yaw_radians, camera.pitch_radians) * distance;
    update_view_matrix(camera);
}

/// Move camera right by distance (in camera's right direction)
pub fn move_right(camera: &mut FreeCameraData, distance: f32) {
    camera.position += calculate_right_vector(camera.yaw_radians) * distance;
    update_view_matrix(camera);
}

/// Move camera up by distance (in world up direction)
pub fn move_up(camera: &mut FreeCameraData, distance: f32) {
    camera.position.y += distance;
    update_view_matrix(camera);
}

/// Rotate camera by yaw/pitch deltas (radians)
pub fn rotate(camera: &mut FreeCameraData, yaw_delta: f32, pitch_delta: f32) {
    camera.yaw_radians += yaw_delta;
    camera.pitch_radians =
        (camera.pitch_radians + pitch_delta).clamp(-free::PITCH_LIMIT, free::PITCH_LIMIT);
    update_view_matrix(camera);
}

/// Apply one update's worth of motion, scaled by delta time
pub fn apply_motion(camera: &mut FreeCameraData, motion: &FreeCameraMotion, delta_time: f32) {
    let turn = camera.turn_speed * delta_time;
    rotate(camera, motion.yaw_delta * turn, motion.pitch_delta * turn);

    let step = camera.movement_speed * delta_time;
    move_forward(camera, motion.forward_delta * step);
    move_right(camera, motion.right_delta * step);
    move_up(camera, motion.up_delta * step);
}

// ============================================================================
// FIRST PERSON
// ============================================================================

/// Ride on a character: eye above its origin, looking where it walks
pub fn follow_character(camera: &mut FreeCameraData, pose: &CharacterPose, eye_height: f32) {
    // Rotating a purely vertical offset about Y leaves it unchanged.
    camera.position = pose.position + Vec3::new(0.0, eye_height, 0.0);

    let facing = crate::character::facing_vector(pose.heading);
    camera.yaw_radians = facing.z.atan2(facing.x);
    camera.pitch_radians = 0.0;
    update_view_matrix(camera);
}

/// Aim the camera at a point, keeping its position
///
/// A target at the camera position leaves the orientation unchanged.
pub fn look_toward(camera: &mut FreeCameraData, target: Vec3) {
    if let Some(direction) = (target - camera.position).try_normalize() {
        camera.yaw_radians = direction.z.atan2(direction.x);
        camera.pitch_radians = direction
            .y
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-free::PITCH_LIMIT, free::PITCH_LIMIT);
        update_view_matrix(camera);
    }
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Calculate forward vector from yaw and pitch
pub fn calculate_forward_vector(yaw: f32, pitch: f32) -> Vec3 {
    Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
}

/// Calculate right vector from yaw
pub fn calculate_right_vector(yaw: f32) -> Vec3 {
    Vec3::new(
        (yaw + std::f32::consts::FRAC_PI_2).cos(),
        0.0,
        (yaw + std::f32::consts::FRAC_PI_2).sin(),
    )
    .normalize()
}
