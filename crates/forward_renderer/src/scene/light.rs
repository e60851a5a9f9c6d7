//! Point lights

use crate::foundation::math::Vec3;

/// Number of light slots in the fragment uniform block
pub const MAX_LIGHTS: usize = 3;

/// Point light in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World-space position
    pub world_position: Vec3,
    /// RGB color; components may exceed 1.0 for extra intensity
    pub color: Vec3,
}

impl Light {
    /// Create a point light
    pub fn new(world_position: Vec3, color: Vec3) -> Self {
        Self { world_position, color }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new(Vec3::zeros(), Vec3::zeros())
    }
}
