/// Input Module - Data-Oriented Programming (DOP) style
///
/// Key names map to abstract actions through `KeyBindings`; the scene only
/// ever sees `InputAction`s and pointer deltas.

pub mod input_data;
pub mod input_operations;

pub use input_data::{DragMode, InputAction, InputState, KeyBindings, PointerState};
pub use input_operations::{
    action_for_key, apply_binding_overrides, axis, bind_key, canonical_key_name,
    default_bindings, drag_mode, init_input_state, is_pressed, parse_action, set_action,
    set_left_button, update_pointer,
};
