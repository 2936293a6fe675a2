//! Input data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! Keys are named by strings ("W", "LeftShift", "F1") so nothing here
//! depends on a windowing library's key codes.

use glam::Vec2;
use std::collections::{HashMap, HashSet};

/// Everything a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,

    /// Held to turn left-drag into zoom
    ZoomModifier,

    CameraArcball,
    CameraFirstPerson,
    CameraFreeFly,
    CameraAnimation,

    ToggleSmallViewport,
    PreviousViewportCharacter,
    NextViewportCharacter,

    /// Zero-based hero slot
    SelectCharacter(usize),

    Quit,
}

/// Key name to action table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyBindings {
    /// Canonical key name -> action
    pub actions: HashMap<String, InputAction>,
}

/// What a left-button drag does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Zoom,
}

/// Mouse tracking
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// None until the first cursor sample arrives
    pub position: Option<Vec2>,
    pub left_button: bool,
}

/// Current input state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputState {
    pub pressed: HashSet<InputAction>,
    pub pointer: PointerState,
}
