//! Character roster
//!
//! Rig builders for every character in the scene. Dimensions are in world
//! units relative to each character's root, colors are linear RGB.

use super::animator_data::AnimatorData;
use super::animator_operations::{blink_animator, spin_animator, swing_animator};
use super::rig_data::{AngleSource, PartColor, PartDescriptor, RigData, TransformStep};
use crate::render::Primitive;
use glam::Vec3;
use std::f32::consts::PI;

/// Per-step increments below are converted to rates at this step frequency
const STEPS_PER_SECOND: f32 = 60.0;

const WHITE: Vec3 = Vec3::ONE;
const BLACK: Vec3 = Vec3::ZERO;

fn grey(level: f32) -> Vec3 {
    Vec3::splat(level)
}

fn translate(x: f32, y: f32, z: f32) -> TransformStep {
    TransformStep::Translate(Vec3::new(x, y, z))
}

fn scale(x: f32, y: f32, z: f32) -> TransformStep {
    TransformStep::Scale(Vec3::new(x, y, z))
}

fn uniform_scale(s: f32) -> TransformStep {
    TransformStep::Scale(Vec3::splat(s))
}

fn rotate_fixed(axis: Vec3, degrees: f32) -> TransformStep {
    TransformStep::Rotate {
        axis,
        angle: AngleSource::Fixed(degrees.to_radians()),
    }
}

fn rotate_by(axis: Vec3, animator: &'static str, factor: f32) -> TransformStep {
    TransformStep::Rotate {
        axis,
        angle: AngleSource::Animator {
            name: animator,
            factor,
            offset: 0.0,
        },
    }
}

fn part(
    name: &'static str,
    steps: Vec<TransformStep>,
    primitive: Primitive,
    color: Vec3,
    shininess: f32,
) -> PartDescriptor {
    PartDescriptor {
        name,
        parent: None,
        steps,
        primitive,
        color: PartColor::Solid(color),
        shininess,
    }
}

fn cube(size: f32) -> Primitive {
    Primitive::Cube { size }
}

fn sphere(radius: f32, detail: u32) -> Primitive {
    Primitive::Sphere {
        radius,
        stacks: detail,
        slices: detail,
    }
}

fn cone(base: f32, height: f32, detail: u32) -> Primitive {
    Primitive::Cone {
        base,
        height,
        stacks: detail,
        slices: detail,
    }
}

fn cylinder(radius: f32, height: f32, detail: u32) -> Primitive {
    Primitive::Cylinder {
        base: radius,
        top: radius,
        height,
        stacks: detail,
        slices: detail,
    }
}

// ============================================================================
// CAR HERO
// ============================================================================

const CAR_SPOKES_PER_WHEEL: usize = 8;

/// Flying car: body, cabin, windows, four spoked wheels, a rear propeller
/// and headlights that blink while driving forward
pub fn car_hero() -> RigData {
    let mut parts = vec![
        part("body", vec![scale(2.0, 1.5, 6.0)], cube(1.0), WHITE, 32.0),
        part(
            "cabin",
            vec![translate(0.0, 1.25, 0.5), scale(1.5, 1.0, 4.0)],
            cube(1.0),
            grey(0.5),
            16.0,
        ),
    ];

    let glass = Vec3::new(0.4, 0.8, 1.0);
    for (name, x) in [("window_right", 0.8), ("window_left", -0.8)] {
        parts.push(part(
            name,
            vec![translate(x, 1.0, 0.0), scale(0.1, 0.5, 2.0)],
            cube(1.0),
            glass,
            16.0,
        ));
    }

    let wheel_positions = [
        ("wheel_front_right", Vec3::new(1.0, -0.75, 2.5)),
        ("wheel_rear_right", Vec3::new(1.0, -0.75, -2.5)),
        ("wheel_front_left", Vec3::new(-1.2, -0.75, 2.5)),
        ("wheel_rear_left", Vec3::new(-1.2, -0.75, -2.5)),
    ];
    for (name, position) in wheel_positions {
        let wheel_index = parts.len();
        parts.push(part(
            name,
            vec![
                TransformStep::Translate(position),
                rotate_fixed(Vec3::Z, -90.0),
                rotate_by(Vec3::Y, "propeller", 1.0),
            ],
            cylinder(0.5, 0.2, 16),
            BLACK,
            10.0,
        ));
        for spoke in 0..CAR_SPOKES_PER_WHEEL {
            parts.push(PartDescriptor {
                parent: Some(wheel_index),
                ..part(
                    "spoke",
                    vec![
                        rotate_fixed(Vec3::Z, 45.0 * spoke as f32),
                        translate(0.0, 0.0, 0.25),
                        scale(0.05, 0.05, 0.5),
                    ],
                    cube(1.0),
                    BLACK,
                    10.0,
                )
            });
        }
    }

    parts.push(part(
        "propeller",
        vec![
            translate(0.0, 0.5, 3.1),
            rotate_by(Vec3::Z, "propeller", 1.0),
            scale(1.5, 0.2, 0.1),
        ],
        cube(1.0),
        WHITE,
        32.0,
    ));

    for (name, x) in [("headlight_right", 0.8), ("headlight_left", -0.8)] {
        parts.push(PartDescriptor {
            color: PartColor::Headlight {
                lit: Vec3::new(1.0, 1.0, 0.0),
                unlit: Vec3::new(0.7, 0.7, 0.0),
                idle: Vec3::new(1.0, 0.0, 0.0),
                blink: "headlights",
            },
            ..part(
                name,
                vec![translate(x, 0.2, -3.0), uniform_scale(0.4)],
                cube(1.0),
                WHITE,
                64.0,
            )
        });
    }

    RigData {
        name: "car",
        root_steps: vec![translate(0.0, 1.3, 0.0)],
        parts,
        animators: vec![
            spin_animator("propeller", PI / 16.0 * STEPS_PER_SECOND),
            // 0.2 per step, toggling at 1.0
            blink_animator("headlights", 5.0 / STEPS_PER_SECOND),
        ],
    }
}

// ============================================================================
// WIZARD
// ============================================================================

/// Cone-robed wizard with a hat, beard and a twirling staff
pub fn wizard() -> RigData {
    let robe = grey(0.5);
    let skin = Vec3::new(0.941, 0.725, 0.2);
    let wood = Vec3::new(0.54, 0.46, 0.37);

    RigData {
        name: "wizard",
        root_steps: vec![uniform_scale(10.0)],
        parts: vec![
            part("robe", vec![uniform_scale(0.055)], cone(0.8, 5.0, 30), robe, 32.0),
            part(
                "head",
                vec![translate(0.0, 0.22, 0.0), scale(0.04, 0.06, 0.04)],
                sphere(1.0, 30),
                skin,
                32.0,
            ),
            part(
                "hat",
                vec![translate(0.0, 0.24, 0.0), uniform_scale(0.02)],
                cone(3.0, 7.0, 30),
                robe,
                32.0,
            ),
            part(
                "beard",
                vec![
                    translate(0.0, 0.19, -0.01),
                    rotate_fixed(Vec3::X, -150.0),
                    uniform_scale(0.03),
                ],
                cone(1.0, 2.0, 30),
                WHITE,
                32.0,
            ),
            part(
                "staff",
                vec![
                    translate(0.04, 0.15, 0.01),
                    rotate_by(Vec3::X, "staff", 1.0),
                    scale(0.08, 1.9, 0.08),
                ],
                cube(0.1),
                wood,
                32.0,
            ),
        ],
        animators: vec![spin_animator(
            "staff",
            5f32.to_radians() * STEPS_PER_SECOND,
        )],
    }
}

// ============================================================================
// GOLEM HERO
// ============================================================================

/// Armored golem with long hair, pointed ears and swinging arms
pub fn golem_hero() -> RigData {
    let armor = Vec3::new(0.31, 0.12, 0.55);
    let skin = Vec3::new(0.37, 0.39, 0.47);

    let mut parts = vec![
        part(
            "head",
            vec![translate(0.0, 1.5, 0.0), uniform_scale(7.5)],
            sphere(0.1, 40),
            skin,
            12.0,
        ),
        part(
            "hair_back",
            vec![translate(0.0, -0.01, -0.335), scale(5.6, 16.0, 5.6)],
            cylinder(0.1, 0.1, 40),
            WHITE,
            4.0,
        ),
        part(
            "hair_top",
            vec![translate(0.0, 1.5, -0.1), uniform_scale(8.0)],
            sphere(0.1, 40),
            WHITE,
            4.0,
        ),
        part("body", vec![scale(10.0, 18.0, 5.0)], cube(0.1), armor, 24.0),
    ];

    for (name, x, degrees) in [("ear_left", -0.6, 90.0), ("ear_right", 0.6, 270.0)] {
        parts.push(part(
            name,
            vec![
                translate(x, 1.5, 0.0),
                rotate_fixed(Vec3::Z, degrees),
                scale(1.0, 8.0, 1.0),
            ],
            cone(0.25, 0.1, 40),
            skin,
            4.0,
        ));
    }

    for (name, x, animator) in [("arm_right", 0.75, "right_arm"), ("arm_left", -0.75, "left_arm")] {
        parts.push(part(
            name,
            vec![
                translate(x, 0.3, 0.0),
                rotate_by(Vec3::X, animator, 0.5),
                scale(5.0, 12.0, 2.5),
            ],
            cube(0.1),
            armor,
            24.0,
        ));
    }

    RigData {
        name: "golem",
        root_steps: vec![translate(0.0, 1.0, 0.0)],
        parts,
        animators: limb_swing_animators(),
    }
}

// ============================================================================
// BRUTES (zombie and vyrme)
// ============================================================================

/// Colors and shininess for the shared humanoid brute builder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrutePalette {
    pub name: &'static str,
    pub body: Vec3,
    pub head: Vec3,
    pub face: Vec3,
    pub arm: Vec3,
    pub bag: Vec3,
    pub body_shininess: f32,
    pub head_shininess: f32,
    pub detail_shininess: f32,
}

pub const ZOMBIE_PALETTE: BrutePalette = BrutePalette {
    name: "zombie",
    body: Vec3::new(0.0, 0.0, 1.0),
    head: Vec3::new(0.0, 1.0, 0.0),
    face: Vec3::new(0.3, 0.3, 0.3),
    arm: Vec3::new(0.0, 1.0, 0.0),
    bag: Vec3::new(0.6, 0.6, 0.6),
    body_shininess: 64.0,
    head_shininess: 16.0,
    detail_shininess: 16.0,
};

pub const VYRME_PALETTE: BrutePalette = BrutePalette {
    name: "vyrme",
    body: Vec3::new(0.3, 0.0, 0.3),
    head: Vec3::new(1.0, 1.0, 1.0),
    face: Vec3::new(0.3, 0.3, 0.3),
    arm: Vec3::new(0.3, 0.0, 0.3),
    bag: Vec3::new(0.6, 0.6, 0.6),
    body_shininess: 32.0,
    head_shininess: 64.0,
    detail_shininess: 32.0,
};

/// Boxy humanoid with swinging arms, ear cones and a backpack
pub fn humanoid_brute(palette: &BrutePalette) -> RigData {
    let mut parts = vec![part(
        "body",
        vec![scale(0.8, 2.0, 0.5)],
        cube(1.0),
        palette.body,
        palette.body_shininess,
    )];

    for (name, x, animator) in [("arm_left", 0.55, "left_arm"), ("arm_right", -0.55, "right_arm")] {
        parts.push(part(
            name,
            vec![
                translate(x, 0.7, 0.0),
                rotate_by(Vec3::X, animator, 1.0),
                // Pivot at the shoulder
                translate(0.0, -0.7, 0.0),
                scale(0.3, 0.9, 0.3),
            ],
            cube(1.0),
            palette.arm,
            palette.detail_shininess,
        ));
    }

    parts.push(part(
        "head",
        vec![translate(0.0, 1.1, 0.0), uniform_scale(0.8)],
        sphere(1.0, 20),
        palette.head,
        palette.head_shininess,
    ));
    parts.push(part(
        "face",
        vec![translate(0.0, 1.1, -0.18), uniform_scale(0.7)],
        sphere(1.0, 20),
        palette.face,
        palette.detail_shininess,
    ));

    for (name, x, degrees) in [("ear_left", 0.7, -90.0), ("ear_right", -0.7, 90.0)] {
        parts.push(part(
            name,
            vec![
                translate(x, 1.0, 0.0),
                rotate_fixed(Vec3::Z, degrees),
                scale(0.25, 0.6, 0.25),
            ],
            cone(1.0, 1.0, 20),
            palette.face,
            palette.detail_shininess,
        ));
    }

    parts.push(part(
        "bag",
        vec![translate(0.0, 0.0, 0.35), scale(0.4, 0.6, 0.3)],
        cube(1.0),
        palette.bag,
        palette.body_shininess,
    ));

    RigData {
        name: palette.name,
        root_steps: Vec::new(),
        parts,
        animators: limb_swing_animators(),
    }
}

pub fn zombie() -> RigData {
    humanoid_brute(&ZOMBIE_PALETTE)
}

pub fn vyrme() -> RigData {
    humanoid_brute(&VYRME_PALETTE)
}

/// Left and right limbs swing out of phase, 1 degree per step up to 30 degrees
fn limb_swing_animators() -> Vec<AnimatorData> {
    let rate = 1f32.to_radians() * STEPS_PER_SECOND;
    let limit = 30f32.to_radians();
    vec![
        swing_animator("left_arm", rate, limit, true),
        swing_animator("right_arm", rate, limit, false),
    ]
}

// ============================================================================
// COIN
// ============================================================================

pub fn coin() -> RigData {
    RigData {
        name: "coin",
        root_steps: Vec::new(),
        parts: vec![part(
            "coin",
            Vec::new(),
            sphere(1.0, 20),
            Vec3::new(1.0, 0.84, 0.0),
            32.0,
        )],
        animators: Vec::new(),
    }
}
