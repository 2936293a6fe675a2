//! Input operations
//!
//! Key name validation, action parsing, binding lookup and pointer tracking.

use super::input_data::{DragMode, InputAction, InputState, KeyBindings};
use crate::error::{ViewerError, ViewerResult};
use glam::Vec2;

/// Named keys beyond letters, digits and function keys
const NAMED_KEYS: &[&str] = &[
    "Escape",
    "Space",
    "Enter",
    "Tab",
    "Backspace",
    "LeftShift",
    "RightShift",
    "LeftControl",
    "RightControl",
    "LeftAlt",
    "RightAlt",
    "Left",
    "Right",
    "Up",
    "Down",
];

// ============================================================================
// KEY NAMES
// ============================================================================

/// Canonical spelling of a key name, or `UnknownKey`
///
/// Single letters and digits are upper-cased, function keys are `F1`..`F12`,
/// and named keys match case-insensitively.
pub fn canonical_key_name(name: &str) -> ViewerResult<String> {
    let trimmed = name.trim();
    let unknown = || ViewerError::UnknownKey {
        key: name.to_string(),
    };

    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return if c.is_ascii_alphanumeric() {
            Ok(c.to_ascii_uppercase().to_string())
        } else {
            Err(unknown())
        };
    }

    if let Some(number) = trimmed
        .strip_prefix('F')
        .or_else(|| trimmed.strip_prefix('f'))
    {
        return match number.parse::<u8>() {
            Ok(n) if (1..=12).contains(&n) => Ok(format!("F{}", n)),
            _ => Err(unknown()),
        };
    }

    NAMED_KEYS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(trimmed))
        .map(|known| known.to_string())
        .ok_or_else(unknown)
}

// ============================================================================
// ACTION NAMES
// ============================================================================

/// Parse a snake_case action name
pub fn parse_action(name: &str) -> ViewerResult<InputAction> {
    let action = match name.trim() {
        "move_forward" => InputAction::MoveForward,
        "move_backward" => InputAction::MoveBackward,
        "turn_left" => InputAction::TurnLeft,
        "turn_right" => InputAction::TurnRight,
        "zoom_modifier" => InputAction::ZoomModifier,
        "camera_arcball" => InputAction::CameraArcball,
        "camera_first_person" => InputAction::CameraFirstPerson,
        "camera_free_fly" => InputAction::CameraFreeFly,
        "camera_animation" => InputAction::CameraAnimation,
        "toggle_small_viewport" => InputAction::ToggleSmallViewport,
        "previous_viewport_character" => InputAction::PreviousViewportCharacter,
        "next_viewport_character" => InputAction::NextViewportCharacter,
        "quit" => InputAction::Quit,
        other => {
            // select_character_N, N counted from 1
            let slot = other
                .strip_prefix("select_character_")
                .and_then(|n| n.parse::<usize>().ok())
                .filter(|n| *n >= 1);
            match slot {
                Some(n) => InputAction::SelectCharacter(n - 1),
                None => {
                    return Err(ViewerError::UnknownAction {
                        name: name.to_string(),
                    })
                }
            }
        }
    };
    Ok(action)
}

// ============================================================================
// BINDINGS
// ============================================================================

/// The stock layout
pub fn default_bindings() -> KeyBindings {
    let pairs = [
        ("W", InputAction::MoveForward),
        ("S", InputAction::MoveBackward),
        ("A", InputAction::TurnLeft),
        ("D", InputAction::TurnRight),
        ("LeftShift", InputAction::ZoomModifier),
        ("RightShift", InputAction::ZoomModifier),
        ("Z", InputAction::CameraArcball),
        ("X", InputAction::CameraFirstPerson),
        ("C", InputAction::CameraFreeFly),
        ("V", InputAction::CameraAnimation),
        ("1", InputAction::ToggleSmallViewport),
        ("Left", InputAction::PreviousViewportCharacter),
        ("Right", InputAction::NextViewportCharacter),
        ("Escape", InputAction::Quit),
        ("Q", InputAction::Quit),
        ("F1", InputAction::SelectCharacter(0)),
        ("F2", InputAction::SelectCharacter(1)),
        ("F3", InputAction::SelectCharacter(2)),
        ("F4", InputAction::SelectCharacter(3)),
    ];

    KeyBindings {
        actions: pairs
            .into_iter()
            .map(|(key, action)| (key.to_string(), action))
            .collect(),
    }
}

/// Bind a key, replacing any previous binding for it
pub fn bind_key(bindings: &mut KeyBindings, key: &str, action: InputAction) -> ViewerResult<()> {
    let key = canonical_key_name(key)?;
    if let Some(previous) = bindings.actions.insert(key.clone(), action) {
        if previous != action {
            log::debug!(
                "[Input::bind_key] {} rebound from {:?} to {:?}",
                key,
                previous,
                action
            );
        }
    }
    Ok(())
}

/// Apply `key = "action"` overrides on top of existing bindings
pub fn apply_binding_overrides<'a, I>(bindings: &mut KeyBindings, overrides: I) -> ViewerResult<()>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    for (key, action_name) in overrides {
        let action = parse_action(action_name)?;
        bind_key(bindings, key, action)?;
    }
    Ok(())
}

/// Action bound to a key; `Ok(None)` for a valid but unbound key
pub fn action_for_key(bindings: &KeyBindings, key: &str) -> ViewerResult<Option<InputAction>> {
    let key = canonical_key_name(key)?;
    Ok(bindings.actions.get(&key).copied())
}

// ============================================================================
// STATE
// ============================================================================

pub fn init_input_state() -> InputState {
    InputState::default()
}

/// Record an action press or release; returns true on a fresh press
pub fn set_action(state: &mut InputState, action: InputAction, pressed: bool) -> bool {
    if pressed {
        state.pressed.insert(action)
    } else {
        state.pressed.remove(&action);
        false
    }
}

pub fn is_pressed(state: &InputState, action: InputAction) -> bool {
    state.pressed.contains(&action)
}

/// -1, 0 or 1 from a pair of opposing actions
pub fn axis(state: &InputState, positive: InputAction, negative: InputAction) -> f32 {
    let mut value = 0.0;
    if is_pressed(state, positive) {
        value += 1.0;
    }
    if is_pressed(state, negative) {
        value -= 1.0;
    }
    value
}

pub fn set_left_button(state: &mut InputState, pressed: bool) {
    state.pointer.left_button = pressed;
}

/// Current drag behaviour, if the left button is held
pub fn drag_mode(state: &InputState) -> Option<DragMode> {
    if !state.pointer.left_button {
        None
    } else if is_pressed(state, InputAction::ZoomModifier) {
        Some(DragMode::Zoom)
    } else {
        Some(DragMode::Rotate)
    }
}

/// Record a cursor sample and return the movement since the last one
///
/// The first sample only initializes tracking and yields no delta.
pub fn update_pointer(state: &mut InputState, position: Vec2) -> Option<Vec2> {
    let previous = state.pointer.position.replace(position);
    previous.map(|previous| position - previous)
}
