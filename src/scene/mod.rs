/// Scene Module - Data-Oriented Programming (DOP) style
///
/// Ties cameras, characters and input together: `handle_*` functions feed
/// events in, `update` advances time, `render` emits passes and draws.

pub mod scene_data;
pub mod scene_operations;

pub use scene_data::{CoinData, SceneData};
pub use scene_operations::{
    active_eye_and_target, attach_keyframes, cycle_viewport_hero, handle_cursor, handle_key,
    handle_mouse_button, init_scene, load_scene_keyframes, main_view_pass, render, render_pass,
    select_character, selected_hero, set_camera_mode, small_view_pass, small_viewport_rect,
    update,
};
