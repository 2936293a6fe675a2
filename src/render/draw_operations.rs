//! Draw command operations
//!
//! Pure functions: matrices and materials in, draw data out.

use super::draw_data::{DrawCommand, DrawUniform, MaterialData, Primitive, ViewPass};
use glam::{Mat3, Mat4, Vec3};

/// Ambient share of the base color
const AMBIENT_FACTOR: f32 = 0.2;
/// Specular grey shared by every part
const SPECULAR_LEVEL: f32 = 0.5;

/// Material derived from a single base color
pub fn material_from_color(color: Vec3, shininess: f32) -> MaterialData {
    MaterialData {
        ambient: color * AMBIENT_FACTOR,
        diffuse: color,
        specular: Vec3::splat(SPECULAR_LEVEL),
        shininess,
    }
}

/// Normal matrix for a model matrix
///
/// Singular models (a zero scale) fall back to the plain upper 3x3 rather
/// than producing NaN.
pub fn normal_matrix(model: Mat4) -> Mat3 {
    let upper = Mat3::from_mat4(model);
    if upper.determinant().abs() <= f32::EPSILON {
        return upper;
    }
    upper.inverse().transpose()
}

/// Build a draw command for a primitive under a pass's camera
pub fn build_draw_command(
    primitive: Primitive,
    model: Mat4,
    pass: &ViewPass,
    material: MaterialData,
) -> DrawCommand {
    DrawCommand {
        primitive,
        model,
        mvp: pass.projection * pass.view * model,
        normal_matrix: normal_matrix(model),
        material,
    }
}

/// Skybox draw: the view matrix loses its translation so the box follows the eye
pub fn build_skybox_command(pass: &ViewPass) -> DrawCommand {
    let rotation_only = Mat4::from_mat3(Mat3::from_mat4(pass.view));
    DrawCommand {
        primitive: Primitive::Skybox,
        model: Mat4::IDENTITY,
        mvp: pass.projection * rotation_only,
        normal_matrix: Mat3::IDENTITY,
        material: material_from_color(Vec3::ONE, 1.0),
    }
}

/// Pack a draw command into its uniform block
pub fn build_draw_uniform(command: &DrawCommand) -> DrawUniform {
    let n = command.normal_matrix;
    let m = &command.material;
    DrawUniform {
        mvp_matrix: command.mvp.to_cols_array_2d(),
        normal_matrix: [
            [n.x_axis.x, n.x_axis.y, n.x_axis.z, 0.0],
            [n.y_axis.x, n.y_axis.y, n.y_axis.z, 0.0],
            [n.z_axis.x, n.z_axis.y, n.z_axis.z, 0.0],
        ],
        material_ambient: [m.ambient.x, m.ambient.y, m.ambient.z, 0.0],
        material_diffuse: [m.diffuse.x, m.diffuse.y, m.diffuse.z, 0.0],
        material_specular_shininess: [m.specular.x, m.specular.y, m.specular.z, m.shininess],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::draw_data::Viewport;

    fn identity_pass() -> ViewPass {
        ViewPass {
            viewport: Viewport {
                x: 0,
                y: 0,
                width: 640,
                height: 480,
            },
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            eye: Vec3::ZERO,
            clear_depth: false,
        }
    }

    #[test]
    fn test_material_from_color() {
        let material = material_from_color(Vec3::new(1.0, 0.5, 0.0), 32.0);
        assert_eq!(material.ambient, Vec3::new(0.2, 0.1, 0.0));
        assert_eq!(material.diffuse, Vec3::new(1.0, 0.5, 0.0));
        assert_eq!(material.specular, Vec3::splat(0.5));
        assert_eq!(material.shininess, 32.0);
    }

    #[test]
    fn test_normal_matrix_undoes_non_uniform_scale() {
        let model = Mat4::from_scale(Vec3::new(2.0, 1.0, 4.0));
        let normal = normal_matrix(model);
        assert!((normal.x_axis.x - 0.5).abs() < 1e-6);
        assert!((normal.z_axis.z - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_normal_matrix_survives_zero_scale() {
        let normal = normal_matrix(Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0)));
        assert!(normal.is_finite());
    }

    #[test]
    fn test_skybox_drops_translation() {
        let mut pass = identity_pass();
        pass.view = Mat4::from_translation(Vec3::new(5.0, 6.0, 7.0));
        let command = build_skybox_command(&pass);
        assert_eq!(command.mvp, Mat4::IDENTITY);
    }

    #[test]
    fn test_uniform_packs_shininess() {
        let command = build_draw_command(
            Primitive::Cube { size: 1.0 },
            Mat4::IDENTITY,
            &identity_pass(),
            material_from_color(Vec3::ONE, 64.0),
        );
        let uniform = build_draw_uniform(&command);
        assert_eq!(uniform.material_specular_shininess[3], 64.0);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), std::mem::size_of::<DrawUniform>());
    }
}
