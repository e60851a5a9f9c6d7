//! Viewer configuration
//!
//! Everything the demo needs to build its scene and drive frames, loadable
//! from `.toml` or `.ron`.

use forward_renderer::config::{Config, ConfigError, RendererConfig};
use forward_renderer::foundation::math::Vec3;
use forward_renderer::scene::{Light, MAX_LIGHTS};
use serde::{Deserialize, Serialize};

/// One point light
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightConfig {
    /// World-space position
    pub position: [f32; 3],
    /// RGB intensity, may exceed 1.0
    pub color: [f32; 3],
}

impl LightConfig {
    fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    /// Convert to a scene light
    pub fn to_light(&self) -> Light {
        Light::new(Vec3::from(self.position), Vec3::from(self.color))
    }
}

/// Scene viewer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Camera, projection, and traversal settings
    pub renderer: RendererConfig,
    /// Viewport width in pixels
    pub viewport_width: u32,
    /// Viewport height in pixels
    pub viewport_height: u32,
    /// Frames to render before exiting
    pub frame_count: u32,
    /// Fixed frame delta in seconds; measured wall-clock time when absent
    pub fixed_frame_delta: Option<f32>,
    /// Directories searched for texture files
    pub asset_search_paths: Vec<String>,
    /// Mesh to spawn
    pub mesh_name: String,
    /// Base color texture for the mesh
    pub texture_name: String,
    /// Scene ambient color
    pub ambient_light_color: [f32; 3],
    /// Point lights, at most three
    pub lights: Vec<LightConfig>,
    /// Uniform scale applied by the spin animation
    pub node_scale: f32,
    /// Material specular color
    pub specular_color: [f32; 3],
    /// Material specular exponent
    pub specular_power: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            renderer: RendererConfig::default(),
            viewport_width: 800,
            viewport_height: 600,
            frame_count: 120,
            fixed_frame_delta: Some(1.0 / 60.0),
            asset_search_paths: vec!["assets".to_string()],
            mesh_name: "cube".to_string(),
            texture_name: "checker".to_string(),
            ambient_light_color: [0.1, 0.1, 0.1],
            lights: vec![
                LightConfig::new([5.0, 5.0, 0.0], [0.3, 0.3, 0.3]),
                LightConfig::new([-5.0, 5.0, 0.0], [0.3, 0.3, 0.3]),
                LightConfig::new([0.0, -5.0, 0.0], [0.3, 0.3, 0.3]),
            ],
            node_scale: 0.5,
            specular_color: [0.8, 0.8, 0.8],
            specular_power: 100.0,
        }
    }
}

impl Config for ViewerConfig {}

impl ViewerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.renderer.validate()?;
        if self.lights.len() > MAX_LIGHTS {
            return Err(ConfigError::Invalid(format!(
                "{} lights configured, at most {} supported",
                self.lights.len(),
                MAX_LIGHTS
            )));
        }
        if self.specular_power <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "specular power must be positive, got {}",
                self.specular_power
            )));
        }
        if let Some(delta) = self.fixed_frame_delta {
            if delta < 0.0 {
                return Err(ConfigError::Invalid(format!("frame delta cannot be negative, got {delta}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ViewerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lights.len(), MAX_LIGHTS);
    }

    #[test]
    fn test_too_many_lights_rejected() {
        let mut config = ViewerConfig::default();
        config.lights.push(LightConfig::new([0.0; 3], [1.0; 3]));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ViewerConfig = toml::from_str("frame_count = 3\n[renderer]\nfar = 50.0\n").unwrap();
        assert_eq!(config.frame_count, 3);
        assert_eq!(config.renderer.far, 50.0);
        assert_eq!(config.mesh_name, "cube");
    }

    #[test]
    fn test_ron_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("scene_viewer_{}.ron", std::process::id()));
        let config = ViewerConfig { frame_count: 7, ..ViewerConfig::default() };

        config.save_to_file(&path).unwrap();
        let loaded = ViewerConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
