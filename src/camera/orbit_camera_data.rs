//! Orbit camera data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in orbit_camera_operations.rs

use crate::constants::orbit;
use glam::{Mat4, Vec3};

/// Orbit (arcball) camera - pure data, no methods
///
/// `eye` and `view_matrix` are derived from the target and the spherical
/// offset. Every operation that changes an input rebuilds both before
/// returning, so they are never stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCameraData {
    /// Point the camera orbits around
    pub look_at: Vec3,

    /// Up vector passed to the look-at construction
    pub up: Vec3,

    /// Distance from target to eye
    pub radius: f32,

    /// Azimuth around the Y axis (radians, kept in [0, 2π))
    pub theta: f32,

    /// Polar angle from +Y (radians, kept in [ε, π − ε])
    pub phi: f32,

    /// Derived eye position
    pub eye: Vec3,

    /// Derived view matrix
    pub view_matrix: Mat4,

    /// Zoom limits
    pub min_radius: f32,
    pub max_radius: f32,
}

/// Orbit camera configuration for initialization
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct OrbitCameraConfig {
    pub radius: f32,
    pub theta_degrees: f32,
    pub phi_degrees: f32,
    pub min_radius: f32,
    pub max_radius: f32,
}

impl Default for OrbitCameraConfig {
    fn default() -> Self {
        Self {
            radius: orbit::DEFAULT_RADIUS,
            theta_degrees: orbit::DEFAULT_THETA_DEGREES,
            phi_degrees: orbit::DEFAULT_PHI_DEGREES,
            min_radius: orbit::MIN_RADIUS,
            max_radius: orbit::MAX_RADIUS,
        }
    }
}
