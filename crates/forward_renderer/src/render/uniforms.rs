//! Per-draw uniform blocks
//!
//! Layouts follow the shading stage's expectations exactly: every `vec3`
//! occupies a 16-byte slot, matrices are column-major, and the 3x3 normal
//! matrix is three padded columns.
//!
//! ```text
//! VertexUniforms (176 bytes)          FragmentUniforms (160 bytes)
//!   0  view_projection  mat4            0  camera_world_position  vec3
//!  64  model            mat4           16  ambient_light_color    vec3
//! 128  normal           mat3           32  specular_color         vec3
//!                                      48  specular_power         float
//!                                      64  lights[3] { world_position vec3, color vec3 }
//! ```

use bytemuck::{Pod, Zeroable};

use crate::foundation::math::{pad_mat3, pad_vec3, Mat3, Mat4, Vec3};
use crate::scene::{Light, Material, MAX_LIGHTS};

/// Vertex stage uniforms
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VertexUniforms {
    /// Projection * view, shared by every draw in a frame
    pub view_projection: [[f32; 4]; 4],
    /// Node world transform
    pub model: [[f32; 4]; 4],
    /// Upper-left 3x3 of the inverse-transpose world transform
    pub normal: [[f32; 4]; 3],
}

impl VertexUniforms {
    /// Pack matrices into the vertex block
    pub fn new(view_projection: &Mat4, model: &Mat4, normal: &Mat3) -> Self {
        Self {
            view_projection: (*view_projection).into(),
            model: (*model).into(),
            normal: pad_mat3(normal),
        }
    }

    /// Raw bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// One point light slot
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    /// World-space position (w unused)
    pub world_position: [f32; 4],
    /// RGB color, unclamped (w unused)
    pub color: [f32; 4],
}

impl From<&Light> for LightUniform {
    fn from(light: &Light) -> Self {
        Self {
            world_position: pad_vec3(&light.world_position),
            color: pad_vec3(&light.color),
        }
    }
}

/// Fragment stage uniforms
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FragmentUniforms {
    /// Camera position in world space
    pub camera_world_position: [f32; 4],
    /// Scene ambient color
    pub ambient_light_color: [f32; 4],
    /// Material specular color
    pub specular_color: [f32; 4],
    /// Material specular exponent
    pub specular_power: f32,
    /// Pads `lights` to a 16-byte boundary
    pub _padding: [f32; 3],
    /// Point lights; unused slots stay zeroed
    pub lights: [LightUniform; MAX_LIGHTS],
}

impl FragmentUniforms {
    /// Pack frame, scene, and material parameters into the fragment block
    pub fn new(camera_world_position: &Vec3, ambient_light_color: &Vec3, material: &Material, lights: &[Light]) -> Self {
        let mut slots = [LightUniform::zeroed(); MAX_LIGHTS];
        for (slot, light) in slots.iter_mut().zip(lights) {
            *slot = LightUniform::from(light);
        }

        Self {
            camera_world_position: pad_vec3(camera_world_position),
            ambient_light_color: pad_vec3(ambient_light_color),
            specular_color: pad_vec3(&material.specular_color),
            specular_power: material.specular_power,
            _padding: [0.0; 3],
            lights: slots,
        }
    }

    /// Raw bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
