//! Backend abstraction for GPU resource creation and draw submission
//!
//! The frame pipeline never touches a graphics API directly. It hands fully
//! built [`DrawOp`]s to a [`RenderBackend`], which owns every GPU object.

use crate::assets::{Geometry, ImageData};
use crate::config::ShaderConfig;
use crate::render::{DrawOp, RenderError};

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Handle to geometry stored in the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u64);

/// Handle to a texture stored in the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Handle to a compiled render pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PipelineId(pub u64);

/// GPU backend collaborator
pub trait RenderBackend {
    /// Upload geometry and return a handle to its buffers
    fn create_geometry_buffer(&mut self, geometry: &Geometry) -> BackendResult<MeshHandle>;

    /// Upload an RGBA8 image and return a texture handle
    fn create_texture(&mut self, image: &ImageData) -> BackendResult<TextureHandle>;

    /// Build the forward pipeline from shader entry points
    fn create_pipeline(&mut self, shaders: &ShaderConfig) -> BackendResult<PipelineId>;

    /// Record one draw operation for the current frame
    fn submit(&mut self, draw: &DrawOp) -> BackendResult<()>;

    /// Hand the recorded frame to the GPU without waiting for completion
    fn end_frame(&mut self) -> BackendResult<()>;

    /// Drop every draw recorded since the last `end_frame`
    fn discard_frame(&mut self);
}
