//! Keyframe camera data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! Parsing and playback happen in keyframe_operations.rs

use crate::constants::playback;
use glam::Vec3;

/// One recorded camera pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraKeyframe {
    pub eye: Vec3,

    /// Unit view direction
    pub direction: Vec3,

    pub up: Vec3,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,
}

/// Keyframes loaded from one source, immutable after loading
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack {
    pub frames: Vec<CameraKeyframe>,

    /// File path or label the frames came from
    pub source_name: String,
}

/// Playback cursor over a `KeyframeTrack`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframePlayback {
    pub frame_index: usize,

    /// Time accumulated towards the next frame (seconds)
    pub accumulated: f32,

    /// Seconds each frame stays on screen
    pub frame_duration: f32,
}

impl Default for KeyframePlayback {
    fn default() -> Self {
        Self {
            frame_index: 0,
            accumulated: 0.0,
            frame_duration: playback::FRAME_DURATION,
        }
    }
}

/// What one playback advance did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStep {
    /// Not enough time accumulated, same frame as before
    Holding,
    /// Moved forward to this frame index
    Advanced(usize),
    /// Ran past the last frame and restarted at frame zero
    Looped,
}
