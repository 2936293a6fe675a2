//! Draw command data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! A backend turns each `DrawCommand` into uniforms plus one draw call.

use glam::{Mat3, Mat4, Vec3};

/// Solid primitive shapes a backend must be able to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Cube {
        size: f32,
    },
    Sphere {
        radius: f32,
        stacks: u32,
        slices: u32,
    },
    Cone {
        base: f32,
        height: f32,
        stacks: u32,
        slices: u32,
    },
    Cylinder {
        base: f32,
        top: f32,
        height: f32,
        stacks: u32,
        slices: u32,
    },
    /// Unit ground quad in the XZ plane spanning [-1, 1]
    GroundQuad,
    /// Unit skybox cube sampled with the translation-free view matrix
    Skybox,
}

/// Phong material sent with each draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialData {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

/// One primitive ready to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub primitive: Primitive,

    /// Model matrix (object to world)
    pub model: Mat4,

    /// projection * view * model
    pub mvp: Mat4,

    /// transpose(inverse(mat3(model)))
    pub normal_matrix: Mat3,

    pub material: MaterialData,
}

/// Uniform block for one draw, laid out for std140 upload
/// Must match shader layout exactly
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniform {
    /// MVP matrix (4x4, column-major)
    pub mvp_matrix: [[f32; 4]; 4],

    /// Normal matrix (3x3 padded to three vec4 columns)
    pub normal_matrix: [[f32; 4]; 3],

    /// Material ambient color (vec3 + padding)
    pub material_ambient: [f32; 4],

    /// Material diffuse color (vec3 + padding)
    pub material_diffuse: [f32; 4],

    /// Material specular color (rgb) and shininess (w)
    pub material_specular_shininess: [f32; 4],
}

/// Pixel rectangle of the framebuffer, origin at the bottom-left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Camera setup for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPass {
    pub viewport: Viewport,
    pub view: Mat4,
    pub projection: Mat4,
    pub eye: Vec3,

    /// Whether the backend should clear depth before this pass
    pub clear_depth: bool,
}
