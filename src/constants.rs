//! Scene-wide constants
//!
//! Defaults for everything `ViewerConfig` can override, plus the few values
//! that are fixed by the camera math itself.

/// Orbit camera constants
pub mod orbit {
    /// Distance kept between the polar angle and either pole (radians)
    pub const POLAR_EPSILON: f32 = 0.001;

    pub const MIN_RADIUS: f32 = 1.0;
    pub const MAX_RADIUS: f32 = 500.0;

    /// Radius used by the default-constructed camera
    pub const DEFAULT_RADIUS: f32 = 50.0;
    pub const DEFAULT_THETA_DEGREES: f32 = 45.0;
    pub const DEFAULT_PHI_DEGREES: f32 = 45.0;

    /// Offsets used when the orbit camera re-frames the selected character
    pub const FRAME_EYE_OFFSET: [f32; 3] = [0.0, 10.0, 20.0];
    pub const FRAME_TARGET_OFFSET: [f32; 3] = [0.0, 1.0, 0.0];
    /// Height above the character the orbit target tracks while moving
    pub const FOLLOW_TARGET_HEIGHT: f32 = 2.0;

    /// Where the scene starts looking from before any character is framed
    pub const INITIAL_EYE: [f32; 3] = [0.0, 50.0, 100.0];
}

/// Free-fly / first-person camera constants
pub mod free {
    /// Pitch limit that keeps the forward vector away from the up axis
    pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
    /// First-person eye height above the character origin
    pub const EYE_HEIGHT: f32 = 4.0;
    pub const MOVE_SPEED: f32 = 15.0;
    pub const TURN_SPEED_DEGREES: f32 = 90.0;
    /// Radians of yaw/pitch per pixel of free-fly mouse drag
    pub const MOUSE_SENSITIVITY: f32 = 0.005;
}

/// Projection defaults
pub mod projection {
    pub const FOV_DEGREES: f32 = 45.0;
    pub const NEAR_PLANE: f32 = 0.1;
    pub const FAR_PLANE: f32 = 1000.0;
}

/// World layout
pub mod world {
    /// Half extent of the square ground plane
    pub const WORLD_SIZE: f32 = 105.0;
    /// Characters stop this far from the world edge
    pub const EDGE_MARGIN: f32 = 3.0;
    /// Coins and zombies are placed this far in from the corners
    pub const CORNER_INSET: f32 = 8.0;

    pub const COIN_HEIGHT: f32 = 1.2;
    pub const COIN_PICKUP_DISTANCE: f32 = 2.5;

    pub const ZOMBIES_PER_CORNER: usize = 2;
    pub const ZOMBIE_HEIGHT: f32 = 1.5;
    pub const ZOMBIE_SPACING: f32 = 2.0;
    pub const ZOMBIE_SPIN_DEGREES_PER_SECOND: f32 = 20.0;
    pub const ZOMBIE_DRIFT_PER_SECOND: f32 = 1.0;

    /// Hero movement, tuned for a 60 Hz step: 0.1 units and 1.5 degrees per frame
    pub const HERO_MOVE_SPEED: f32 = 6.0;
    pub const HERO_TURN_DEGREES_PER_SECOND: f32 = 90.0;

    /// Hero slot starting positions: car, golem, wizard, vyrme
    pub const HERO_STARTS: [[f32; 3]; 4] = [
        [0.0, 0.0, 0.0],
        [15.0, 0.0, 0.0],
        [-15.0, 0.0, 0.0],
        [0.0, 1.5, 15.0],
    ];
}

/// Keyframe playback
pub mod playback {
    pub const FRAME_DURATION: f32 = 1.0 / 30.0;
    /// eye.xyz, direction.xyz, up.xyz, fov
    pub const VALUES_PER_FRAME: usize = 10;
}

/// Small picture-in-picture viewport
pub mod viewport {
    pub const SMALL_VIEWPORT_DIVISOR: u32 = 3;
    pub const SMALL_VIEWPORT_MARGIN: u32 = 10;
}
