/// Character Module - Data-Oriented Programming (DOP) style
///
/// Articulated characters as data: a rig is a list of part descriptors plus
/// named animators, a pose places it in the world, and free functions move,
/// animate and draw it.

pub mod animator_data;
pub mod animator_operations;
pub mod pose_data;
pub mod pose_operations;
pub mod rig_data;
pub mod rig_operations;
pub mod roster;

// Re-export data structures
pub use animator_data::{AnimatorData, AnimatorKind};
pub use pose_data::{CharacterPose, MotionDirection, WorldBounds};
pub use rig_data::{
    AngleSource, CharacterData, PartColor, PartDescriptor, RigData, RigState, TransformStep,
};

// Re-export operations
pub use animator_operations::{
    advance_animator, animator_value, blink_animator, spin_animator, swing_animator,
};
pub use pose_operations::{
    clamp_to_bounds, facing_vector, pose_matrix, step_pose, turn_pose, world_bounds,
};
pub use rig_operations::{
    advance_rig, apply_steps, build_draw_commands, draw_character, init_character,
    init_rig_state, move_character, part_color, part_matrices, resolve_angle, root_matrix,
    turn_character,
};
