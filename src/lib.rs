// Hillside Viewer - Data-Oriented Programming (DOP) Architecture
//
// A scene viewer core: orbit / free / first-person / keyframe cameras,
// articulated characters described as data, and a scene that turns input and
// time into render passes for whatever backend implements `RenderSink`.
//
// Conventions:
// - *_data.rs modules hold plain structs, no methods
// - *_operations.rs modules hold the functions that transform them
// - Nothing here opens a window or talks to a GPU

// Constants module
pub mod constants;

// Core modules
pub mod config;
pub mod error;

// Essential systems
pub mod camera;
pub mod character;
pub mod input;
pub mod render;
pub mod scene;

// Re-export commonly used types
pub use camera::{
    CameraKeyframe, CameraMode, FreeCameraData, KeyframePlayback, KeyframeTrack,
    OrbitCameraConfig, OrbitCameraData, PlaybackStep,
};
pub use character::{CharacterData, CharacterPose, MotionDirection, RigData, RigState};
pub use config::{load_config, parse_config, ViewerConfig};
pub use error::{OptionExt, ViewerError, ViewerResult};
pub use input::{InputAction, InputState, KeyBindings};
pub use render::{
    DrawCommand, DrawList, DrawUniform, MaterialData, Primitive, RenderSink, ViewPass, Viewport,
};
pub use scene::{init_scene, SceneData};

// Re-export glam so backends share our math types
pub use glam;
