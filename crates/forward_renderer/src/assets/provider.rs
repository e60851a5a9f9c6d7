//! Asset provider interface and the backend-uploading implementation

use std::collections::HashMap;
use std::path::PathBuf;

use crate::assets::{AssetError, Geometry, ImageData};
use crate::render::{MeshHandle, RenderBackend, TextureHandle};

/// Source of GPU-ready assets used while building a scene
pub trait AssetProvider {
    /// Resolve a mesh by name
    fn load_mesh(&mut self, name: &str) -> Result<MeshHandle, AssetError>;

    /// Resolve a texture by name
    fn load_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError>;
}

/// Provider that uploads assets through a [`RenderBackend`]
///
/// Names resolve against registered in-memory assets first, then (textures
/// only) against image files under the search paths. Each name is uploaded at
/// most once; later lookups return the cached handle.
pub struct BackendAssetProvider<'a, B: RenderBackend> {
    backend: &'a mut B,
    search_paths: Vec<PathBuf>,
    geometries: HashMap<String, Geometry>,
    images: HashMap<String, ImageData>,
    mesh_cache: HashMap<String, MeshHandle>,
    texture_cache: HashMap<String, TextureHandle>,
}

impl<'a, B: RenderBackend> BackendAssetProvider<'a, B> {
    /// Create a provider uploading through `backend`
    pub fn new(backend: &'a mut B) -> Self {
        Self {
            backend,
            search_paths: Vec::new(),
            geometries: HashMap::new(),
            images: HashMap::new(),
            mesh_cache: HashMap::new(),
            texture_cache: HashMap::new(),
        }
    }

    /// Add a directory searched for texture files
    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Register in-memory geometry under `name`
    pub fn register_geometry(&mut self, name: impl Into<String>, geometry: Geometry) {
        self.geometries.insert(name.into(), geometry);
    }

    /// Register an in-memory image under `name`
    pub fn register_image(&mut self, name: impl Into<String>, image: ImageData) {
        self.images.insert(name.into(), image);
    }

    fn find_image_file(&self, name: &str) -> Option<PathBuf> {
        self.search_paths
            .iter()
            .map(|dir| dir.join(name))
            .chain(std::iter::once(PathBuf::from(name)))
            .find(|candidate| candidate.is_file())
    }
}

impl<B: RenderBackend> AssetProvider for BackendAssetProvider<'_, B> {
    fn load_mesh(&mut self, name: &str) -> Result<MeshHandle, AssetError> {
        if let Some(handle) = self.mesh_cache.get(name) {
            return Ok(*handle);
        }

        let geometry = self
            .geometries
            .get(name)
            .ok_or_else(|| AssetError::NotFound(format!("mesh '{}'", name)))?;

        if !geometry.is_well_formed() {
            return Err(AssetError::LoadFailed(format!("mesh '{}' has out-of-range indices", name)));
        }

        let handle = self
            .backend
            .create_geometry_buffer(geometry)
            .map_err(|e| AssetError::Backend { name: name.to_string(), reason: e.to_string() })?;

        log::info!("Uploaded mesh '{}' ({} indices) as {:?}", name, geometry.index_count(), handle);
        self.mesh_cache.insert(name.to_string(), handle);
        Ok(handle)
    }

    fn load_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError> {
        if let Some(handle) = self.texture_cache.get(name) {
            return Ok(*handle);
        }

        let loaded;
        let image = if let Some(image) = self.images.get(name) {
            image
        } else {
            let path = self
                .find_image_file(name)
                .ok_or_else(|| AssetError::NotFound(format!("texture '{}'", name)))?;
            loaded = ImageData::from_file(path)?;
            &loaded
        };

        let handle = self
            .backend
            .create_texture(image)
            .map_err(|e| AssetError::Backend { name: name.to_string(), reason: e.to_string() })?;

        log::info!("Uploaded texture '{}' ({}x{}) as {:?}", name, image.width, image.height, handle);
        self.texture_cache.insert(name.to_string(), handle);
        Ok(handle)
    }
}
