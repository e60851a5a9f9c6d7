//! Configuration system
//!
//! Configuration structs implement [`Config`] to gain TOML/RON file loading;
//! the format is chosen from the file extension.

mod renderer;

pub use renderer::{RendererConfig, ShaderConfig};
pub use serde::{Serialize, Deserialize};

use std::path::Path;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values parsed but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("forward_renderer_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_toml_round_trip_preserves_values() {
        let path = temp_path("renderer.toml");
        let config = RendererConfig {
            max_traversal_depth: 12,
            camera_position: [1.0, 2.0, 3.0],
            ..RendererConfig::default()
        };

        config.save_to_file(&path).unwrap();
        let loaded = RendererConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.max_traversal_depth, 12);
        assert_eq!(loaded.camera_position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_ron_partial_file_uses_defaults() {
        let path = temp_path("renderer.ron");
        std::fs::write(&path, "(far: 250.0)").unwrap();

        let loaded = RendererConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.far, 250.0);
        assert_eq!(loaded.near, RendererConfig::default().near);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let path = temp_path("renderer.yaml");
        std::fs::write(&path, "far: 1").unwrap();

        let result = RendererConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = RendererConfig::load_from_file(temp_path("does_not_exist.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
