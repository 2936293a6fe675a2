//! Articulated rig data - Pure DOP
//!
//! NO METHODS. Just data.
//! A rig is a flat list of parts. Each part's model matrix is built by
//! applying its transform steps, in order, to either the character root or
//! an earlier part's model matrix.

use super::animator_data::AnimatorData;
use super::pose_data::{CharacterPose, MotionDirection};
use crate::render::Primitive;
use glam::Vec3;

/// Angle used by a rotate step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleSource {
    /// Constant angle in radians
    Fixed(f32),

    /// `animator.value * factor + offset`
    Animator {
        name: &'static str,
        factor: f32,
        offset: f32,
    },
}

/// One step of a part's local transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformStep {
    Translate(Vec3),
    Rotate { axis: Vec3, angle: AngleSource },
    Scale(Vec3),
}

/// How a part picks its color each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartColor {
    Solid(Vec3),

    /// Blinks between `lit` and `unlit` while driving forward, shows `idle`
    /// otherwise
    Headlight {
        lit: Vec3,
        unlit: Vec3,
        idle: Vec3,
        blink: &'static str,
    },
}

/// One drawable piece of a rig
#[derive(Debug, Clone, PartialEq)]
pub struct PartDescriptor {
    pub name: &'static str,

    /// Index of an earlier part whose model matrix this part builds on
    pub parent: Option<usize>,

    pub steps: Vec<TransformStep>,
    pub primitive: Primitive,
    pub color: PartColor,
    pub shininess: f32,
}

/// Static description of a character
#[derive(Debug, Clone, PartialEq)]
pub struct RigData {
    pub name: &'static str,

    /// Applied after the pose transform, before any part
    pub root_steps: Vec<TransformStep>,

    pub parts: Vec<PartDescriptor>,

    /// Initial animator values; copied into `RigState`
    pub animators: Vec<AnimatorData>,
}

/// Mutable per-character animation state
#[derive(Debug, Clone, PartialEq)]
pub struct RigState {
    pub animators: Vec<AnimatorData>,

    /// None until the character has moved
    pub last_direction: Option<MotionDirection>,
}

/// A placed, animated character
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterData {
    pub pose: CharacterPose,
    pub rig: RigData,
    pub state: RigState,
}
