//! Orbit camera operations - DOP functions
//!
//! Functions take the camera data and update it in place. Each mutator ends
//! with `update_view_matrix`, so eye and view matrix always agree with
//! (look_at, radius, theta, phi).

use super::orbit_camera_data::{OrbitCameraConfig, OrbitCameraData};
use crate::constants::orbit::POLAR_EPSILON;
use crate::error::{ViewerError, ViewerResult};
use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize orbit camera around the origin from spherical defaults
pub fn init_orbit_camera(config: &OrbitCameraConfig) -> OrbitCameraData {
    // An inverted range collapses to its lower bound so later clamps stay valid
    let min_radius = config.min_radius;
    let max_radius = config.max_radius.max(min_radius);

    let mut camera = OrbitCameraData {
        look_at: Vec3::ZERO,
        up: Vec3::Y,
        radius: config.radius.clamp(min_radius, max_radius),
        theta: wrap_angle(config.theta_degrees.to_radians()),
        phi: config.phi_degrees.to_radians(),
        eye: Vec3::ZERO,
        view_matrix: Mat4::IDENTITY,
        min_radius,
        max_radius,
    };
    update_view_matrix(&mut camera);
    camera
}

/// Initialize orbit camera from an explicit eye / look-at / up placement
pub fn init_orbit_camera_from_view(
    eye: Vec3,
    look_at: Vec3,
    up: Vec3,
    config: &OrbitCameraConfig,
) -> ViewerResult<OrbitCameraData> {
    let mut camera = init_orbit_camera(config);
    set_camera_view(&mut camera, eye, look_at, up)?;
    Ok(camera)
}

// ============================================================================
// VIEW MATRIX
// ============================================================================

/// Recompute eye and view matrix from target and spherical offset
///
/// Also re-applies the polar clamp so that no caller can leave phi at a pole.
pub fn update_view_matrix(camera: &mut OrbitCameraData) {
    camera.phi = camera.phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
    camera.eye = camera.look_at + spherical_offset(camera.radius, camera.theta, camera.phi);
    camera.view_matrix = Mat4::look_at_rh(camera.eye, camera.look_at, camera.up);
}

/// Cartesian offset for a spherical (radius, theta, phi) triple
pub fn spherical_offset(radius: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
        radius * phi.sin() * theta.cos(),
    )
}

// ============================================================================
// MUTATION
// ============================================================================

/// Rotate by a pointer delta in pixels
///
/// A full viewport width of horizontal motion is one full turn of azimuth;
/// a full viewport height of vertical motion is half a turn of polar angle.
pub fn rotate(
    camera: &mut OrbitCameraData,
    delta_x: f32,
    delta_y: f32,
    viewport_width: u32,
    viewport_height: u32,
) {
    if viewport_width == 0 || viewport_height == 0 {
        log::debug!(
            "[OrbitCamera::rotate] Ignoring rotate on empty viewport {}x{}",
            viewport_width,
            viewport_height
        );
        return;
    }

    let delta_angle_x = TAU / viewport_width as f32;
    let delta_angle_y = PI / viewport_height as f32;

    camera.theta = wrap_angle(camera.theta + delta_x * delta_angle_x);
    camera.phi = (camera.phi + delta_y * delta_angle_y).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

    update_view_matrix(camera);
}

/// Move the eye towards (negative) or away from (positive) the target
pub fn zoom(camera: &mut OrbitCameraData, amount: f32) {
    camera.radius = (camera.radius + amount).clamp(camera.min_radius, camera.max_radius);
    update_view_matrix(camera);
}

/// Place the camera explicitly and re-derive the spherical parameters
///
/// The distance is kept as given, even outside the zoom range; only `zoom`
/// clamps. Fails without touching the camera when `eye` and `look_at`
/// coincide, since the angles are undefined there.
pub fn set_camera_view(
    camera: &mut OrbitCameraData,
    eye: Vec3,
    look_at: Vec3,
    up: Vec3,
) -> ViewerResult<()> {
    let offset = eye - look_at;
    let radius = offset.length();
    if !radius.is_finite() || radius <= f32::EPSILON {
        log::warn!(
            "[OrbitCamera::set_camera_view] Rejecting placement with eye {:?} at look-at point",
            eye
        );
        return Err(ViewerError::DegenerateCameraPlacement { eye });
    }

    camera.look_at = look_at;
    camera.up = up;
    camera.radius = radius;
    camera.theta = wrap_angle(offset.x.atan2(offset.z));
    camera.phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

    update_view_matrix(camera);
    Ok(())
}

/// Move the orbit target, keeping radius and angles
pub fn set_look_at_point(camera: &mut OrbitCameraData, look_at: Vec3) {
    camera.look_at = look_at;
    update_view_matrix(camera);
}

// ============================================================================
// ACCESSORS
// ============================================================================

pub fn view_matrix(camera: &OrbitCameraData) -> Mat4 {
    camera.view_matrix
}

pub fn eye_position(camera: &OrbitCameraData) -> Vec3 {
    camera.eye
}

pub fn up_vector(camera: &OrbitCameraData) -> Vec3 {
    camera.up
}

pub fn look_at_point(camera: &OrbitCameraData) -> Vec3 {
    camera.look_at
}

/// Unit vector from eye to target
pub fn forward_vector(camera: &OrbitCameraData) -> Vec3 {
    (camera.look_at - camera.eye).normalize()
}

pub fn right_vector(camera: &OrbitCameraData) -> Vec3 {
    forward_vector(camera).cross(camera.up).normalize()
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Wrap an angle into [0, 2π)
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Log orbit state for debugging
pub fn log_orbit_context(camera: &OrbitCameraData) {
    log::debug!(
        "[OrbitCamera] Eye: ({:.1}, {:.1}, {:.1}) | Target: ({:.1}, {:.1}, {:.1}) | Radius: {:.2}",
        camera.eye.x,
        camera.eye.y,
        camera.eye.z,
        camera.look_at.x,
        camera.look_at.y,
        camera.look_at.z,
        camera.radius
    );
    log::debug!(
        "[OrbitCamera] Theta: {:.3}rad ({:.1}°) | Phi: {:.3}rad ({:.1}°)",
        camera.theta,
        camera.theta.to_degrees(),
        camera.phi,
        camera.phi.to_degrees()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-3;

    fn placed_camera() -> OrbitCameraData {
        init_orbit_camera_from_view(
            Vec3::new(0.0, 10.0, 20.0),
            Vec3::ZERO,
            Vec3::Y,
            &OrbitCameraConfig::default(),
        )
        .expect("valid placement")
    }

    /// Small deterministic sequence generator for property-style sweeps
    fn sweep(seed: u32, count: usize) -> Vec<f32> {
        let mut state = seed;
        (0..count)
            .map(|_| {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                (state >> 8) as f32 / (1u32 << 24) as f32 * 2.0 - 1.0
            })
            .collect()
    }

    fn assert_consistent(camera: &OrbitCameraData) {
        let expected = camera.look_at + spherical_offset(camera.radius, camera.theta, camera.phi);
        assert!((camera.eye - expected).length() < TOLERANCE);
        let expected_view = Mat4::look_at_rh(camera.eye, camera.look_at, camera.up);
        assert!(camera.view_matrix.abs_diff_eq(expected_view, TOLERANCE));
    }

    #[test]
    fn test_default_camera() {
        let camera = init_orbit_camera(&OrbitCameraConfig::default());
        assert_eq!(camera.radius, 50.0);
        assert!((camera.theta - 45f32.to_radians()).abs() < TOLERANCE);
        assert!((camera.phi - 45f32.to_radians()).abs() < TOLERANCE);
        assert!((camera.eye.length() - 50.0).abs() < TOLERANCE);
        assert_consistent(&camera);
    }

    #[test]
    fn test_zoom_scenario_moves_along_ray() {
        let mut camera = placed_camera();
        let original_eye = camera.eye;
        let original_radius = camera.radius;

        zoom(&mut camera, -5.0);

        assert!((camera.radius - (original_radius - 5.0)).abs() < TOLERANCE);
        let expected = original_eye.normalize() * camera.radius;
        assert!((camera.eye - expected).length() < TOLERANCE);
        assert_consistent(&camera);
    }

    #[test]
    fn test_zoom_clamps_to_limits() {
        let mut camera = placed_camera();
        zoom(&mut camera, -1000.0);
        assert_eq!(camera.radius, 1.0);
        assert!((camera.eye.distance(camera.look_at) - 1.0).abs() < TOLERANCE);

        zoom(&mut camera, 10_000.0);
        assert_eq!(camera.radius, 500.0);
        assert!((camera.eye.distance(camera.look_at) - 500.0).abs() < 0.05);
    }

    #[test]
    fn test_zoom_sequences_stay_in_range() {
        let mut camera = placed_camera();
        for amount in sweep(7, 500) {
            zoom(&mut camera, amount * 120.0);
            let distance = camera.eye.distance(camera.look_at);
            assert!(distance >= 1.0 - TOLERANCE && distance <= 500.0 + 0.05);
        }
    }

    #[test]
    fn test_rotate_sequences_keep_angles_in_range() {
        let mut camera = placed_camera();
        let deltas = sweep(42, 1000);
        for pair in deltas.chunks(2) {
            rotate(&mut camera, pair[0] * 3000.0, pair[1] * 3000.0, 1280, 720);
            assert!(camera.phi >= POLAR_EPSILON && camera.phi <= PI - POLAR_EPSILON);
            assert!(camera.theta >= 0.0 && camera.theta < TAU);
        }
        assert_consistent(&camera);
    }

    #[test]
    fn test_rotate_full_width_is_full_turn() {
        let mut camera = placed_camera();
        let theta_before = camera.theta;
        let eye_before = camera.eye;

        rotate(&mut camera, 1280.0, 0.0, 1280, 720);

        let diff = (camera.theta - theta_before).abs();
        assert!(diff < TOLERANCE || (TAU - diff) < TOLERANCE);
        assert!((camera.eye - eye_before).length() < 0.01);
    }

    #[test]
    fn test_rotate_clamps_at_poles() {
        let mut camera = placed_camera();
        rotate(&mut camera, 0.0, -10_000.0, 1280, 720);
        assert_eq!(camera.phi, POLAR_EPSILON);
        rotate(&mut camera, 0.0, 10_000.0, 1280, 720);
        assert_eq!(camera.phi, PI - POLAR_EPSILON);
        assert!(camera.view_matrix.is_finite());
    }

    #[test]
    fn test_rotate_ignores_empty_viewport() {
        let mut camera = placed_camera();
        let before = camera;
        rotate(&mut camera, 100.0, 100.0, 0, 720);
        assert_eq!(camera, before);
    }

    #[test]
    fn test_set_camera_view_round_trip() {
        let mut camera = init_orbit_camera(&OrbitCameraConfig::default());
        let placements = [
            (Vec3::new(0.0, 10.0, 20.0), Vec3::ZERO),
            (Vec3::new(-30.0, 5.0, -12.0), Vec3::new(3.0, 1.0, 2.0)),
            (Vec3::new(7.0, -4.0, 0.5), Vec3::new(-1.0, 0.0, 0.0)),
            (Vec3::new(0.0, 50.0, 100.0), Vec3::ZERO),
        ];
        for (eye, look_at) in placements {
            set_camera_view(&mut camera, eye, look_at, Vec3::Y).expect("valid placement");
            assert!((eye_position(&camera) - eye).length() < TOLERANCE);
            assert_eq!(look_at_point(&camera), look_at);
            assert_eq!(up_vector(&camera), Vec3::Y);
        }
    }

    #[test]
    fn test_set_camera_view_round_trip_outside_zoom_range() {
        let mut camera = init_orbit_camera(&OrbitCameraConfig::default());
        let placements = [
            (Vec3::new(0.0, 0.0, 0.5), Vec3::ZERO),
            (Vec3::new(0.0, 300.0, 600.0), Vec3::ZERO),
            (Vec3::new(2.0, 1.3, 2.4), Vec3::new(2.0, 1.0, 2.0)),
        ];
        for (eye, look_at) in placements {
            set_camera_view(&mut camera, eye, look_at, Vec3::Y).expect("valid placement");
            let tolerance = TOLERANCE * eye.distance(look_at).max(1.0);
            assert!((eye_position(&camera) - eye).length() < tolerance);
            assert!((camera.radius - eye.distance(look_at)).abs() < tolerance);
            assert_consistent(&camera);
        }

        // The next zoom pulls an out-of-range distance back inside the limits
        zoom(&mut camera, 0.0);
        assert_eq!(camera.radius, 1.0);
    }

    #[test]
    fn test_set_camera_view_rejects_degenerate_placement() {
        let mut camera = placed_camera();
        let before = camera;
        let point = Vec3::new(4.0, 4.0, 4.0);
        let result = set_camera_view(&mut camera, point, point, Vec3::Y);
        assert!(matches!(
            result,
            Err(ViewerError::DegenerateCameraPlacement { .. })
        ));
        assert_eq!(camera, before);
    }

    #[test]
    fn test_set_look_at_point_keeps_offset() {
        let mut camera = placed_camera();
        let offset = camera.eye - camera.look_at;
        set_look_at_point(&mut camera, Vec3::new(10.0, 2.0, -5.0));
        assert!((camera.eye - camera.look_at - offset).length() < TOLERANCE);
        assert_consistent(&camera);
    }

    #[test]
    fn test_forward_and_right_vectors() {
        let camera = placed_camera();
        let forward = forward_vector(&camera);
        assert!((forward - (-camera.eye.normalize())).length() < TOLERANCE);
        let right = right_vector(&camera);
        assert!(right.dot(forward).abs() < TOLERANCE);
        assert!((right - Vec3::X).length() < TOLERANCE);
    }

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(TAU + 1.0) - 1.0).abs() < TOLERANCE);
        assert!((wrap_angle(-1.0) - (TAU - 1.0)).abs() < TOLERANCE);
        assert!(wrap_angle(-1e-9) < TAU);
    }
}
