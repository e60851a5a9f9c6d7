//! Draw operations produced by graph traversal
//!
//! A draw op is self-contained: the backend needs nothing else from the
//! scene to execute it. All transform work happens before the op is built.

use crate::render::{FragmentUniforms, MeshHandle, PipelineId, TextureHandle, VertexUniforms};
use crate::scene::NodeId;

/// One draw of one renderable node
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    /// Pipeline state to bind
    pub pipeline: PipelineId,

    /// View-projection, model, and normal matrices
    pub vertex_uniforms: VertexUniforms,

    /// Camera, ambient, material, and light parameters
    pub fragment_uniforms: FragmentUniforms,

    /// Base color texture bound at fragment slot 0
    pub texture: TextureHandle,

    /// Indexed triangle geometry
    pub mesh: MeshHandle,

    /// Node that emitted this op
    pub node: NodeId,
}
