//! Animator operations
//!
//! Animators advance only when their character moves, scaled by delta time.

use super::animator_data::{AnimatorData, AnimatorKind};
use super::pose_data::MotionDirection;
use crate::camera::wrap_angle;

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Swinging limb starting at rest
pub fn swing_animator(
    name: &'static str,
    rate: f32,
    limit: f32,
    rising: bool,
) -> AnimatorData {
    AnimatorData {
        name,
        kind: AnimatorKind::Swing {
            limit: limit.abs(),
            rising,
        },
        value: 0.0,
        rate,
    }
}

pub fn spin_animator(name: &'static str, rate: f32) -> AnimatorData {
    AnimatorData {
        name,
        kind: AnimatorKind::Spin,
        value: 0.0,
        rate,
    }
}

/// Blinker that starts lit
pub fn blink_animator(name: &'static str, period: f32) -> AnimatorData {
    AnimatorData {
        name,
        kind: AnimatorKind::Blink {
            period,
            elapsed: 0.0,
            lit: true,
        },
        value: 1.0,
        rate: 0.0,
    }
}

// ============================================================================
// UPDATE
// ============================================================================

/// Advance one animator by a motion step of `delta_time` seconds
pub fn advance_animator(animator: &mut AnimatorData, direction: MotionDirection, delta_time: f32) {
    let delta_time = delta_time.max(0.0);

    match &mut animator.kind {
        AnimatorKind::Swing { limit, rising } => {
            let limit = *limit;
            let step = animator.rate * delta_time;
            let mut value = if *rising {
                animator.value + step
            } else {
                animator.value - step
            };

            // Reflect off the limits; clamp covers steps longer than a full swing
            if value >= limit {
                value = (2.0 * limit - value).max(-limit);
                *rising = false;
            } else if value <= -limit {
                value = (-2.0 * limit - value).min(limit);
                *rising = true;
            }
            animator.value = value;
        }
        AnimatorKind::Spin => {
            let sign = match direction {
                MotionDirection::Forward => 1.0,
                MotionDirection::Backward => -1.0,
            };
            animator.value = wrap_angle(animator.value + sign * animator.rate * delta_time);
        }
        AnimatorKind::Blink {
            period,
            elapsed,
            lit,
        } => {
            if *period <= 0.0 || !delta_time.is_finite() {
                return;
            }
            *elapsed += delta_time;
            // Only the parity of whole periods matters
            let toggles = (*elapsed / *period).floor() as u64;
            *elapsed %= *period;
            if toggles % 2 == 1 {
                *lit = !*lit;
            }
            animator.value = if *lit { 1.0 } else { 0.0 };
        }
    }
}

/// Find an animator's value by name
pub fn animator_value(animators: &[AnimatorData], name: &str) -> Option<f32> {
    animators
        .iter()
        .find(|animator| animator.name == name)
        .map(|animator| animator.value)
}
