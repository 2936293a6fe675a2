//! Free camera data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! Used both for free-fly navigation and for the first-person view that
//! rides on a character. All transformations happen in free_camera_operations.rs

use glam::{Mat4, Vec3};

/// Free camera - pure data, no methods
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeCameraData {
    /// Camera position in world space
    pub position: Vec3,

    /// Yaw rotation (radians, around Y axis)
    pub yaw_radians: f32,

    /// Pitch rotation (radians, around the camera's right axis)
    pub pitch_radians: f32,

    /// Derived view matrix
    pub view_matrix: Mat4,

    /// Movement speed (units per second)
    pub movement_speed: f32,

    /// Turn speed (radians per second)
    pub turn_speed: f32,
}

/// Motion requested for one update, in units (or radians) per second
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FreeCameraMotion {
    /// Forward/backward movement (+1 forward)
    pub forward_delta: f32,

    /// Left/right movement (+1 right)
    pub right_delta: f32,

    /// Up/down movement (+1 up)
    pub up_delta: f32,

    /// Yaw rotation (+1 turns right)
    pub yaw_delta: f32,

    /// Pitch rotation (+1 looks up)
    pub pitch_delta: f32,
}
