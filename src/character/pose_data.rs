//! Character pose data - Pure DOP
//!
//! NO METHODS. Just data.

use glam::Vec3;

/// Where a character stands and which way it faces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterPose {
    pub position: Vec3,

    /// Yaw around +Y in radians, kept in [0, 2π)
    pub heading: f32,
}

/// Direction of the last motion step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionDirection {
    Forward,
    Backward,
}

/// Walkable rectangle on the XZ plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}
