//! Frame rendering pipeline
//!
//! Each frame runs in two phases that never interleave:
//!
//! ```text
//! FrameUpdater::update   (time, camera, projection, node animations)
//!      ↓
//! GraphRenderer::render  (pre-order traversal → Vec<DrawOp>)
//!      ↓
//! RenderBackend::submit  (fire-and-forget hand-off)
//! ```
//!
//! [`Renderer`] owns both phases and drives them from a single call.

pub mod backend;
pub mod backends;
pub mod draw_op;
pub mod error;
pub mod frame;
pub mod graph_renderer;
pub mod renderer;
pub mod uniforms;

pub use backend::{BackendResult, MeshHandle, PipelineId, RenderBackend, TextureHandle};
pub use draw_op::DrawOp;
pub use error::{RenderError, RenderResult};
pub use frame::{spin_about_y, CameraPath, FixedCamera, FrameState, FrameUpdater, NodeAnimation, Viewport};
pub use graph_renderer::GraphRenderer;
pub use renderer::{FrameStats, Renderer};
pub use uniforms::{FragmentUniforms, LightUniform, VertexUniforms};
