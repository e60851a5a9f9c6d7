//! Asset loading for scene construction
//!
//! Scenes never reach into a global bundle. Construction code receives an
//! [`AssetProvider`] and resolves meshes and textures by name through it, so
//! tests can hand in fixture assets without touching the filesystem.

pub mod image_loader;
pub mod geometry;
pub mod provider;

pub use image_loader::ImageData;
pub use geometry::{Geometry, Vertex};
pub use provider::{AssetProvider, BackendAssetProvider};

use thiserror::Error;

/// Asset loading errors
///
/// All of these are fatal at startup: a scene that references a missing asset
/// cannot render anything meaningful.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found under any registered name or search path
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Asset exists but could not be decoded
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// The backend refused to create the GPU resource
    #[error("Backend rejected asset {name}: {reason}")]
    Backend {
        /// Asset name
        name: String,
        /// Backend error description
        reason: String,
    },
}
