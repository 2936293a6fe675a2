//! Scene data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! Everything the viewer simulates lives in `SceneData`; scene_operations.rs
//! drives it from input and time and turns it into draw commands.

use crate::camera::{
    CameraMode, FreeCameraData, KeyframePlayback, KeyframeTrack, OrbitCameraData,
};
use crate::character::{CharacterData, WorldBounds};
use crate::config::ViewerConfig;
use crate::input::{InputState, KeyBindings};

/// A collectible coin
#[derive(Debug, Clone, PartialEq)]
pub struct CoinData {
    pub character: CharacterData,

    /// Cleared once picked up; inactive coins are neither drawn nor tested
    pub active: bool,
}

/// Complete viewer state
#[derive(Debug, Clone)]
pub struct SceneData {
    pub config: ViewerConfig,
    pub bindings: KeyBindings,
    pub input: InputState,
    pub bounds: WorldBounds,

    /// Selectable heroes; exactly one is driven by the movement keys
    pub heroes: Vec<CharacterData>,
    pub selected_hero: usize,

    /// Hero whose first-person view fills the small viewport
    pub viewport_hero: usize,

    pub coins: Vec<CoinData>,
    pub coins_collected: usize,
    pub zombies: Vec<CharacterData>,

    pub camera_mode: CameraMode,
    pub orbit_camera: OrbitCameraData,
    pub free_camera: FreeCameraData,

    /// Rides on the selected hero
    pub first_person_camera: FreeCameraData,

    /// Rides on the small-viewport hero
    pub viewport_camera: FreeCameraData,

    /// Present only when a keyframe file loaded successfully
    pub keyframes: Option<KeyframeTrack>,
    pub playback: KeyframePlayback,

    pub small_viewport_active: bool,
    pub quit_requested: bool,
}
