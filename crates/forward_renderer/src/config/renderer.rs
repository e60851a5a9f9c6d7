//! Renderer configuration

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::foundation::math::constants::{PI, THIRD_PI};

/// Shader entry points used to build the single forward pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    /// Vertex stage entry point
    pub vertex_function: String,
    /// Fragment stage entry point
    pub fragment_function: String,
}

impl ShaderConfig {
    /// Create a new shader configuration
    pub fn new(vertex_function: impl Into<String>, fragment_function: impl Into<String>) -> Self {
        Self {
            vertex_function: vertex_function.into(),
            fragment_function: fragment_function.into(),
        }
    }
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self::new("vertex_main", "fragment_main")
    }
}

/// Camera, projection, and traversal settings for the frame pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Vertical field of view in radians
    pub fov_y_radians: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
    /// Camera world position used by the default fixed camera path
    pub camera_position: [f32; 3],
    /// Deepest node level the traversal will visit before failing
    pub max_traversal_depth: usize,
    /// Pipeline shader entry points
    pub shaders: ShaderConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            fov_y_radians: THIRD_PI,
            near: 0.1,
            far: 100.0,
            camera_position: [0.0, 0.0, 2.0],
            max_traversal_depth: 64,
            shaders: ShaderConfig::default(),
        }
    }
}

impl Config for RendererConfig {}

impl RendererConfig {
    /// Set the camera position
    pub fn with_camera_position(mut self, position: [f32; 3]) -> Self {
        self.camera_position = position;
        self
    }

    /// Set the maximum traversal depth
    pub fn with_max_traversal_depth(mut self, depth: usize) -> Self {
        self.max_traversal_depth = depth;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_y_radians > 0.0 && self.fov_y_radians < PI) {
            return Err(ConfigError::Invalid(format!(
                "field of view must be in (0, pi), got {}",
                self.fov_y_radians
            )));
        }
        if self.near <= 0.0 {
            return Err(ConfigError::Invalid(format!("near plane must be positive, got {}", self.near)));
        }
        if self.far <= self.near {
            return Err(ConfigError::Invalid(format!(
                "far plane ({}) must lie beyond near plane ({})",
                self.far, self.near
            )));
        }
        if self.max_traversal_depth == 0 {
            return Err(ConfigError::Invalid("max traversal depth must be at least 1".to_string()));
        }
        if self.shaders.vertex_function.is_empty() || self.shaders.fragment_function.is_empty() {
            return Err(ConfigError::Invalid("shader entry points cannot be empty".to_string()));
        }
        Ok(())
    }
}
