/// Camera Module - Data-Oriented Programming (DOP) style
///
/// This module follows DOP principles:
/// - *_data.rs: Pure data structures with NO methods
/// - *_operations.rs: Functions that operate on data
///
/// Three cameras live here: the orbit (arcball) camera, the free camera
/// (free-fly and first-person) and the keyframe playback camera.

pub mod free_camera_data;
pub mod free_camera_operations;
pub mod keyframe_data;
pub mod keyframe_operations;
pub mod orbit_camera_data;
pub mod orbit_camera_operations;

// Re-export data structures
pub use free_camera_data::{FreeCameraData, FreeCameraMotion};
pub use keyframe_data::{CameraKeyframe, KeyframePlayback, KeyframeTrack, PlaybackStep};
pub use orbit_camera_data::{OrbitCameraConfig, OrbitCameraData};

// Re-export orbit operations
pub use orbit_camera_operations::{
    init_orbit_camera, init_orbit_camera_from_view, log_orbit_context, set_camera_view,
    set_look_at_point, wrap_angle, zoom as orbit_zoom, rotate as orbit_rotate,
};

// Re-export free camera operations
pub use free_camera_operations::{
    apply_motion, calculate_forward_vector, calculate_right_vector, follow_character,
    init_free_camera, look_toward,
};

// Re-export keyframe operations
pub use keyframe_operations::{
    advance_playback, current_keyframe, init_playback, keyframe_view_matrix, load_keyframes,
    parse_keyframes, reset_playback,
};

use glam::Mat4;

/// Which camera drives the main viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Orbit around the selected character
    Arcball,
    /// Ride on the selected character
    FirstPerson,
    /// Fly freely with the movement keys
    FreeFly,
    /// Replay the loaded keyframe track
    Animation,
}

/// Build an OpenGL-style perspective projection
pub fn build_projection_matrix(fov_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_degrees.to_radians(), aspect_ratio, near, far)
}

/// Aspect ratio of a viewport, treating an empty height as square
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}
