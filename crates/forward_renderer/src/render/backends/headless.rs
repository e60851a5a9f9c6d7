//! Headless backend
//!
//! Allocates sequential handles and keeps every finished frame's draw list in
//! memory. Submissions are validated against the resources it created, so a
//! stale or foreign handle surfaces as [`RenderError::Backend`].

use std::collections::HashMap;

use crate::assets::{Geometry, ImageData};
use crate::config::ShaderConfig;
use crate::render::{BackendResult, DrawOp, MeshHandle, PipelineId, RenderBackend, RenderError, TextureHandle};

/// Recording backend with no GPU behind it
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    next_handle: u64,
    meshes: HashMap<MeshHandle, u32>,
    textures: HashMap<TextureHandle, (u32, u32)>,
    pipelines: HashMap<PipelineId, ShaderConfig>,
    current_frame: Vec<DrawOp>,
    frames: Vec<Vec<DrawOp>>,
}

impl HeadlessBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    /// Number of uploaded geometry buffers
    pub fn geometry_count(&self) -> usize {
        self.meshes.len()
    }

    /// Number of uploaded textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Number of built pipelines
    pub fn pipeline_count(&self) -> usize {
        self.pipelines.len()
    }

    /// Index count of an uploaded mesh
    pub fn mesh_index_count(&self, mesh: MeshHandle) -> Option<u32> {
        self.meshes.get(&mesh).copied()
    }

    /// Draws submitted since the last `end_frame`
    pub fn pending(&self) -> &[DrawOp] {
        &self.current_frame
    }

    /// Every finished frame, oldest first
    pub fn frames(&self) -> &[Vec<DrawOp>] {
        &self.frames
    }

    /// Most recently finished frame
    pub fn last_frame(&self) -> Option<&[DrawOp]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl RenderBackend for HeadlessBackend {
    fn create_geometry_buffer(&mut self, geometry: &Geometry) -> BackendResult<MeshHandle> {
        if geometry.vertices.is_empty() || geometry.indices.is_empty() {
            return Err(RenderError::Backend("cannot create an empty geometry buffer".to_string()));
        }
        let handle = MeshHandle(self.allocate());
        self.meshes.insert(handle, geometry.index_count());
        Ok(handle)
    }

    fn create_texture(&mut self, image: &ImageData) -> BackendResult<TextureHandle> {
        let expected = image.width as usize * image.height as usize * 4;
        if image.width == 0 || image.height == 0 || image.data.len() != expected {
            return Err(RenderError::Backend(format!(
                "texture data is {} bytes, expected {} for {}x{} RGBA8",
                image.data.len(),
                expected,
                image.width,
                image.height
            )));
        }
        let handle = TextureHandle(self.allocate());
        self.textures.insert(handle, (image.width, image.height));
        Ok(handle)
    }

    fn create_pipeline(&mut self, shaders: &ShaderConfig) -> BackendResult<PipelineId> {
        let id = PipelineId(self.allocate());
        log::debug!(
            "Headless pipeline {:?}: vertex '{}', fragment '{}'",
            id,
            shaders.vertex_function,
            shaders.fragment_function
        );
        self.pipelines.insert(id, shaders.clone());
        Ok(id)
    }

    fn submit(&mut self, draw: &DrawOp) -> BackendResult<()> {
        if !self.pipelines.contains_key(&draw.pipeline) {
            return Err(RenderError::Backend(format!("unknown pipeline {:?}", draw.pipeline)));
        }
        if !self.meshes.contains_key(&draw.mesh) {
            return Err(RenderError::Backend(format!("unknown mesh {:?}", draw.mesh)));
        }
        if !self.textures.contains_key(&draw.texture) {
            return Err(RenderError::Backend(format!("unknown texture {:?}", draw.texture)));
        }
        self.current_frame.push(draw.clone());
        Ok(())
    }

    fn end_frame(&mut self) -> BackendResult<()> {
        let frame = std::mem::take(&mut self.current_frame);
        self.frames.push(frame);
        Ok(())
    }

    fn discard_frame(&mut self) {
        self.current_frame.clear();
    }
}
