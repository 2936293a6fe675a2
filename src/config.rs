//! Viewer configuration
//!
//! Every field has a default, so an empty TOML file is a valid config.

use crate::camera::OrbitCameraConfig;
use crate::constants::{free, playback, projection, viewport, world};
use crate::error::{PathContext, ViewerError, ViewerResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Camera and projection settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub orbit: OrbitCameraConfig,
    pub fov_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,

    /// Radius change per pixel of vertical zoom drag
    pub zoom_sensitivity: f32,

    /// First-person eye height above the character origin
    pub eye_height: f32,

    pub free_move_speed: f32,
    pub free_turn_degrees_per_second: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            orbit: OrbitCameraConfig::default(),
            fov_degrees: projection::FOV_DEGREES,
            near_plane: projection::NEAR_PLANE,
            far_plane: projection::FAR_PLANE,
            zoom_sensitivity: 1.0,
            eye_height: free::EYE_HEIGHT,
            free_move_speed: free::MOVE_SPEED,
            free_turn_degrees_per_second: free::TURN_SPEED_DEGREES,
        }
    }
}

/// World extent and character movement
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    pub world_size: f32,
    pub edge_margin: f32,
    pub move_speed: f32,
    pub turn_degrees_per_second: f32,
    pub coin_pickup_distance: f32,
    pub zombie_spin_degrees_per_second: f32,
    pub zombie_drift_per_second: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            world_size: world::WORLD_SIZE,
            edge_margin: world::EDGE_MARGIN,
            move_speed: world::HERO_MOVE_SPEED,
            turn_degrees_per_second: world::HERO_TURN_DEGREES_PER_SECOND,
            coin_pickup_distance: world::COIN_PICKUP_DISTANCE,
            zombie_spin_degrees_per_second: world::ZOMBIE_SPIN_DEGREES_PER_SECOND,
            zombie_drift_per_second: world::ZOMBIE_DRIFT_PER_SECOND,
        }
    }
}

/// Keyframe playback
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Keyframe file to load at startup, relative paths resolved against the config file
    pub keyframe_path: Option<PathBuf>,
    pub frame_duration: f32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            keyframe_path: None,
            frame_duration: playback::FRAME_DURATION,
        }
    }
}

/// Picture-in-picture viewport
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub small_viewport_enabled: bool,
    pub small_viewport_divisor: u32,
    pub small_viewport_margin: u32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            small_viewport_enabled: false,
            small_viewport_divisor: viewport::SMALL_VIEWPORT_DIVISOR,
            small_viewport_margin: viewport::SMALL_VIEWPORT_MARGIN,
        }
    }
}

/// Main viewer configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub camera: CameraSettings,
    pub movement: MovementSettings,
    pub playback: PlaybackSettings,
    pub viewport: ViewportSettings,

    /// Key name -> action name overrides applied over the default layout
    pub bindings: BTreeMap<String, String>,
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ViewerError {
    ViewerError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn require_positive(field: &str, value: f32) -> ViewerResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be a positive number"))
    }
}

impl ViewerConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> ViewerResult<()> {
        let camera = &self.camera;
        let orbit = &camera.orbit;

        require_positive("camera.orbit.min_radius", orbit.min_radius)?;
        require_positive("camera.orbit.max_radius", orbit.max_radius)?;
        if orbit.min_radius > orbit.max_radius {
            return Err(invalid(
                "camera.orbit.min_radius",
                orbit.min_radius,
                "exceeds camera.orbit.max_radius",
            ));
        }
        require_positive("camera.orbit.radius", orbit.radius)?;

        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(invalid(
                "camera.fov_degrees",
                camera.fov_degrees,
                "must be between 0 and 180 degrees",
            ));
        }
        require_positive("camera.near_plane", camera.near_plane)?;
        if camera.far_plane <= camera.near_plane {
            return Err(invalid(
                "camera.far_plane",
                camera.far_plane,
                "must be greater than camera.near_plane",
            ));
        }
        require_positive("camera.free_move_speed", camera.free_move_speed)?;

        let movement = &self.movement;
        require_positive("movement.world_size", movement.world_size)?;
        if !(movement.edge_margin >= 0.0 && movement.edge_margin < movement.world_size) {
            return Err(invalid(
                "movement.edge_margin",
                movement.edge_margin,
                "must be non-negative and smaller than movement.world_size",
            ));
        }
        require_positive("movement.move_speed", movement.move_speed)?;
        require_positive("movement.coin_pickup_distance", movement.coin_pickup_distance)?;

        require_positive("playback.frame_duration", self.playback.frame_duration)?;

        if self.viewport.small_viewport_divisor < 2 {
            return Err(invalid(
                "viewport.small_viewport_divisor",
                self.viewport.small_viewport_divisor,
                "must be at least 2",
            ));
        }

        for (key, action) in &self.bindings {
            crate::input::canonical_key_name(key)?;
            crate::input::parse_action(action)?;
        }

        log::info!("[ViewerConfig] Configuration validated successfully");
        Ok(())
    }
}

/// Parse and validate TOML text
pub fn parse_config(text: &str) -> ViewerResult<ViewerConfig> {
    let config: ViewerConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Load a config file
///
/// A relative `playback.keyframe_path` is resolved against the file's directory.
pub fn load_config(path: &Path) -> ViewerResult<ViewerConfig> {
    let text = std::fs::read_to_string(path)
        .map_err(ViewerError::from)
        .with_path(path)?;
    let mut config = parse_config(&text).with_path(path)?;

    if let (Some(keyframes), Some(dir)) = (config.playback.keyframe_path.as_ref(), path.parent()) {
        if keyframes.is_relative() {
            config.playback.keyframe_path = Some(dir.join(keyframes));
        }
    }

    log::info!("[ViewerConfig::load] Loaded {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.movement.world_size, 105.0);
        assert_eq!(config.camera.orbit.max_radius, 500.0);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let text = r#"
            [camera]
            fov_degrees = 60.0

            [camera.orbit]
            max_radius = 200.0

            [bindings]
            Up = "move_forward"
        "#;
        let config = parse_config(text).unwrap();
        assert_eq!(config.camera.fov_degrees, 60.0);
        assert_eq!(config.camera.orbit.max_radius, 200.0);
        assert_eq!(config.camera.orbit.min_radius, 1.0);
        assert_eq!(config.camera.near_plane, 0.1);
        assert_eq!(config.bindings.get("Up").map(String::as_str), Some("move_forward"));
    }

    #[test]
    fn test_inverted_radius_range_is_rejected() {
        let text = "[camera.orbit]\nmin_radius = 50.0\nmax_radius = 10.0\n";
        let err = parse_config(text).unwrap_err();
        assert!(matches!(err, ViewerError::InvalidConfig { ref field, .. } if field == "camera.orbit.min_radius"));
    }

    #[test]
    fn test_bad_values_are_rejected() {
        for text in [
            "[camera]\nfov_degrees = 0.0\n",
            "[camera]\nfar_plane = 0.05\n",
            "[movement]\nworld_size = -1.0\n",
            "[movement]\nedge_margin = 200.0\n",
            "[playback]\nframe_duration = 0.0\n",
            "[viewport]\nsmall_viewport_divisor = 1\n",
        ] {
            assert!(
                matches!(parse_config(text), Err(ViewerError::InvalidConfig { .. })),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_bad_bindings_are_rejected() {
        assert!(matches!(
            parse_config("[bindings]\nHyper = \"quit\"\n"),
            Err(ViewerError::UnknownKey { .. })
        ));
        assert!(matches!(
            parse_config("[bindings]\nW = \"fly\"\n"),
            Err(ViewerError::UnknownAction { .. })
        ));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        assert!(matches!(
            parse_config("[camera\nfov = "),
            Err(ViewerError::ConfigParse { .. })
        ));
    }
}
