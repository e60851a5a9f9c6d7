//! Per-node shading parameters

use crate::foundation::math::Vec3;
use crate::render::TextureHandle;

/// Surface material
///
/// A node without a base color texture is valid but invisible.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base color texture; `None` means the node is not drawn
    pub base_color_texture: Option<TextureHandle>,
    /// Specular highlight color
    pub specular_color: Vec3,
    /// Specular exponent, expected to be positive
    pub specular_power: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color_texture: None,
            specular_color: Vec3::new(1.0, 1.0, 1.0),
            specular_power: 1.0,
        }
    }
}

impl Material {
    /// Builder pattern: Set base color texture
    pub fn with_texture(mut self, texture: TextureHandle) -> Self {
        self.base_color_texture = Some(texture);
        self
    }

    /// Builder pattern: Set specular color
    pub fn with_specular_color(mut self, color: Vec3) -> Self {
        self.specular_color = color;
        self
    }

    /// Builder pattern: Set specular power
    pub fn with_specular_power(mut self, power: f32) -> Self {
        self.specular_power = power;
        self
    }
}
