//! Articulated rig operations
//!
//! Matrix composition, per-frame colors and draw emission for rigs, plus
//! the motion entry points that move a character and tick its animators.

use super::animator_data::AnimatorData;
use super::animator_operations::{advance_animator, animator_value};
use super::pose_data::{CharacterPose, MotionDirection, WorldBounds};
use super::pose_operations::{pose_matrix, step_pose, turn_pose};
use super::rig_data::{
    AngleSource, CharacterData, PartColor, RigData, RigState, TransformStep,
};
use crate::render::{build_draw_command, material_from_color, RenderSink, ViewPass};
use glam::{Mat4, Vec3};

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Fresh animation state for a rig
pub fn init_rig_state(rig: &RigData) -> RigState {
    RigState {
        animators: rig.animators.clone(),
        last_direction: None,
    }
}

/// Place a rig in the world
pub fn init_character(rig: RigData, pose: CharacterPose) -> CharacterData {
    let state = init_rig_state(&rig);
    CharacterData { pose, rig, state }
}

// ============================================================================
// MOTION
// ============================================================================

/// Tick every animator for one motion step
pub fn advance_rig(state: &mut RigState, direction: MotionDirection, delta_time: f32) {
    for animator in &mut state.animators {
        advance_animator(animator, direction, delta_time);
    }
    state.last_direction = Some(direction);
}

/// Walk a character and animate it
pub fn move_character(
    character: &mut CharacterData,
    direction: MotionDirection,
    speed: f32,
    delta_time: f32,
    bounds: &WorldBounds,
) {
    step_pose(&mut character.pose, direction, speed * delta_time, bounds);
    advance_rig(&mut character.state, direction, delta_time);
}

/// Turn a character in place; turning does not animate limbs
pub fn turn_character(character: &mut CharacterData, angular_speed: f32, delta_time: f32) {
    turn_pose(&mut character.pose, angular_speed * delta_time);
}

// ============================================================================
// MATRICES
// ============================================================================

pub fn resolve_angle(source: &AngleSource, animators: &[AnimatorData]) -> f32 {
    match *source {
        AngleSource::Fixed(angle) => angle,
        AngleSource::Animator {
            name,
            factor,
            offset,
        } => animator_value(animators, name).unwrap_or(0.0) * factor + offset,
    }
}

/// Apply transform steps to a base matrix in order
pub fn apply_steps(base: Mat4, steps: &[TransformStep], animators: &[AnimatorData]) -> Mat4 {
    steps.iter().fold(base, |matrix, step| match step {
        TransformStep::Translate(offset) => matrix * Mat4::from_translation(*offset),
        TransformStep::Rotate { axis, angle } => {
            let axis = axis.try_normalize().unwrap_or(Vec3::Y);
            matrix * Mat4::from_axis_angle(axis, resolve_angle(angle, animators))
        }
        TransformStep::Scale(scale) => matrix * Mat4::from_scale(*scale),
    })
}

/// Root matrix of a character: pose transform followed by the rig's root steps
pub fn root_matrix(pose: &CharacterPose, rig: &RigData, state: &RigState) -> Mat4 {
    apply_steps(pose_matrix(pose), &rig.root_steps, &state.animators)
}

/// Model matrix of every part, in part order
///
/// A parent index that does not point at an earlier part falls back to the
/// root matrix.
pub fn part_matrices(rig: &RigData, state: &RigState, root: Mat4) -> Vec<Mat4> {
    let mut matrices: Vec<Mat4> = Vec::with_capacity(rig.parts.len());
    for (index, part) in rig.parts.iter().enumerate() {
        let base = match part.parent {
            Some(parent) if parent < index => matrices[parent],
            Some(parent) => {
                log::warn!(
                    "[Rig::part_matrices] {}: part '{}' has invalid parent {}",
                    rig.name,
                    part.name,
                    parent
                );
                root
            }
            None => root,
        };
        matrices.push(apply_steps(base, &part.steps, &state.animators));
    }
    matrices
}

// ============================================================================
// COLOR
// ============================================================================

/// Color of a part for the current animation state
pub fn part_color(color: &PartColor, state: &RigState) -> Vec3 {
    match *color {
        PartColor::Solid(color) => color,
        PartColor::Headlight {
            lit,
            unlit,
            idle,
            blink,
        } => match state.last_direction {
            Some(MotionDirection::Forward) => {
                if animator_value(&state.animators, blink).unwrap_or(1.0) > 0.5 {
                    lit
                } else {
                    unlit
                }
            }
            _ => idle,
        },
    }
}

// ============================================================================
// DRAWING
// ============================================================================

/// Emit one draw command per part; returns the number of commands
pub fn build_draw_commands(
    rig: &RigData,
    state: &RigState,
    root: Mat4,
    pass: &ViewPass,
    sink: &mut dyn RenderSink,
) -> usize {
    let matrices = part_matrices(rig, state, root);
    for (part, model) in rig.parts.iter().zip(matrices) {
        let material = material_from_color(part_color(&part.color, state), part.shininess);
        sink.submit(&build_draw_command(part.primitive, model, pass, material));
    }
    rig.parts.len()
}

/// Draw a placed character
pub fn draw_character(
    character: &CharacterData,
    pass: &ViewPass,
    sink: &mut dyn RenderSink,
) -> usize {
    let root = root_matrix(&character.pose, &character.rig, &character.state);
    build_draw_commands(&character.rig, &character.state, root, pass, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::animator_operations::{blink_animator, spin_animator};
    use crate::character::pose_operations::world_bounds;
    use crate::character::rig_data::PartDescriptor;
    use crate::render::{DrawList, Primitive, Viewport};
    use std::f32::consts::FRAC_PI_2;

    const TOLERANCE: f32 = 1e-4;

    fn cube_part(
        name: &'static str,
        parent: Option<usize>,
        steps: Vec<TransformStep>,
    ) -> PartDescriptor {
        PartDescriptor {
            name,
            parent,
            steps,
            primitive: Primitive::Cube { size: 1.0 },
            color: PartColor::Solid(Vec3::ONE),
            shininess: 16.0,
        }
    }

    fn test_rig() -> RigData {
        RigData {
            name: "test",
            root_steps: vec![TransformStep::Translate(Vec3::new(0.0, 1.0, 0.0))],
            parts: vec![
                cube_part(
                    "arm",
                    None,
                    vec![
                        TransformStep::Translate(Vec3::new(1.0, 0.0, 0.0)),
                        TransformStep::Rotate {
                            axis: Vec3::Z,
                            angle: AngleSource::Animator {
                                name: "spin",
                                factor: 1.0,
                                offset: 0.0,
                            },
                        },
                    ],
                ),
                cube_part(
                    "hand",
                    Some(0),
                    vec![TransformStep::Translate(Vec3::new(1.0, 0.0, 0.0))],
                ),
            ],
            animators: vec![spin_animator("spin", 1.0), blink_animator("lights", 0.1)],
        }
    }

    fn test_pass() -> ViewPass {
        ViewPass {
            viewport: Viewport {
                x: 0,
                y: 0,
                width: 100,
                height: 100,
            },
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            eye: Vec3::ZERO,
            clear_depth: false,
        }
    }

    #[test]
    fn test_child_part_follows_parent_rotation() {
        let rig = test_rig();
        let mut state = init_rig_state(&rig);
        state.animators[0].value = FRAC_PI_2;

        let pose = CharacterPose {
            position: Vec3::ZERO,
            heading: 0.0,
        };
        let matrices = part_matrices(&rig, &state, root_matrix(&pose, &rig, &state));

        let arm = matrices[0].transform_point3(Vec3::ZERO);
        let hand = matrices[1].transform_point3(Vec3::ZERO);
        assert!((arm - Vec3::new(1.0, 1.0, 0.0)).length() < TOLERANCE);
        // Arm rotated a quarter turn about Z, so the hand sits above it
        assert!((hand - Vec3::new(1.0, 2.0, 0.0)).length() < TOLERANCE);
    }

    #[test]
    fn test_invalid_parent_falls_back_to_root() {
        let mut rig = test_rig();
        rig.parts[1].parent = Some(5);
        let state = init_rig_state(&rig);
        let matrices = part_matrices(&rig, &state, Mat4::IDENTITY);
        let hand = matrices[1].transform_point3(Vec3::ZERO);
        assert!((hand - Vec3::X).length() < TOLERANCE);
    }

    #[test]
    fn test_missing_animator_resolves_to_offset() {
        let source = AngleSource::Animator {
            name: "nothing",
            factor: 2.0,
            offset: 0.25,
        };
        assert_eq!(resolve_angle(&source, &[]), 0.25);
    }

    #[test]
    fn test_headlight_color_follows_motion() {
        let rig = test_rig();
        let mut state = init_rig_state(&rig);
        let headlight = PartColor::Headlight {
            lit: Vec3::new(1.0, 1.0, 0.0),
            unlit: Vec3::new(0.7, 0.7, 0.0),
            idle: Vec3::new(1.0, 0.0, 0.0),
            blink: "lights",
        };

        assert_eq!(part_color(&headlight, &state), Vec3::new(1.0, 0.0, 0.0));

        advance_rig(&mut state, MotionDirection::Forward, 0.01);
        assert_eq!(part_color(&headlight, &state), Vec3::new(1.0, 1.0, 0.0));
        advance_rig(&mut state, MotionDirection::Forward, 0.1);
        assert_eq!(part_color(&headlight, &state), Vec3::new(0.7, 0.7, 0.0));

        advance_rig(&mut state, MotionDirection::Backward, 0.01);
        assert_eq!(part_color(&headlight, &state), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_move_character_steps_and_animates() {
        let mut character = init_character(
            test_rig(),
            CharacterPose {
                position: Vec3::ZERO,
                heading: 0.0,
            },
        );
        let bounds = world_bounds(105.0, 3.0);

        move_character(&mut character, MotionDirection::Forward, 6.0, 0.5, &bounds);

        assert!((character.pose.position - Vec3::new(0.0, 0.0, -3.0)).length() < TOLERANCE);
        assert!((character.state.animators[0].value - 0.5).abs() < TOLERANCE);
        assert_eq!(character.state.last_direction, Some(MotionDirection::Forward));
    }

    #[test]
    fn test_turning_does_not_animate() {
        let mut character = init_character(
            test_rig(),
            CharacterPose {
                position: Vec3::ZERO,
                heading: 0.0,
            },
        );
        turn_character(&mut character, 1.0, 0.5);
        assert!((character.pose.heading - 0.5).abs() < TOLERANCE);
        assert_eq!(character.state.animators[0].value, 0.0);
        assert_eq!(character.state.last_direction, None);
    }

    #[test]
    fn test_draw_character_emits_one_command_per_part() {
        let character = init_character(
            test_rig(),
            CharacterPose {
                position: Vec3::new(2.0, 0.0, 0.0),
                heading: 0.0,
            },
        );
        let mut list = DrawList::new();
        let pass = test_pass();
        list.begin_pass(&pass);

        let count = draw_character(&character, &pass, &mut list);

        assert_eq!(count, 2);
        assert_eq!(list.commands.len(), 2);
        let (_, arm) = &list.commands[0];
        assert!((arm.model.transform_point3(Vec3::ZERO) - Vec3::new(3.0, 1.0, 0.0)).length() < TOLERANCE);
        assert_eq!(arm.material.shininess, 16.0);
    }
}
