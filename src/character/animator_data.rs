//! Animator data - Pure DOP
//!
//! NO METHODS. Just data.
//! Each animator owns one scalar that rig parts can read by name.

/// How an animator's value evolves
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorKind {
    /// Triangle wave between -limit and +limit (radians)
    Swing { limit: f32, rising: bool },

    /// Continuous rotation in [0, 2π), reversed while moving backward
    Spin,

    /// On/off toggle every `period` seconds; value is 1.0 when lit
    Blink { period: f32, elapsed: f32, lit: bool },
}

/// A named animated scalar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorData {
    pub name: &'static str,
    pub kind: AnimatorKind,

    /// Current value (radians for Swing/Spin, 0 or 1 for Blink)
    pub value: f32,

    /// Units per second (unused by Blink)
    pub rate: f32,
}
