//! Frame-driven renderer
//!
//! Owns the camera state and both frame phases. One call to
//! [`Renderer::render_frame`] updates, traverses, submits, and ends the frame;
//! taking `&mut self` keeps frames strictly sequential. A frame whose
//! submission fails is discarded whole, never recorded in part.

use crate::config::RendererConfig;
use crate::foundation::math::Mat4;
use crate::render::{
    CameraPath, DrawOp, FrameState, FrameUpdater, GraphRenderer, PipelineId, RenderBackend, RenderError,
    RenderResult, Viewport,
};
use crate::scene::{NodeId, Scene};

/// Summary of one finished frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Zero-based frame number
    pub frame_index: u64,
    /// Draw operations submitted
    pub draw_count: usize,
    /// Accumulated time after this frame's update
    pub elapsed_time: f32,
}

/// Forward renderer driving the update and draw phases
pub struct Renderer {
    updater: FrameUpdater,
    graph_renderer: GraphRenderer,
    frame_index: u64,
}

impl Renderer {
    /// Create a renderer that draws with an already-built pipeline
    pub fn new(config: &RendererConfig, pipeline: PipelineId) -> RenderResult<Self> {
        config
            .validate()
            .map_err(|e| RenderError::InvalidConfig(e.to_string()))?;

        log::info!(
            "Renderer created: fov {:.3} rad, near {}, far {}, max depth {}",
            config.fov_y_radians,
            config.near,
            config.far,
            config.max_traversal_depth
        );

        Ok(Self {
            updater: FrameUpdater::new(config),
            graph_renderer: GraphRenderer::new(pipeline, config.max_traversal_depth),
            frame_index: 0,
        })
    }

    /// Build the configured pipeline on `backend`, then create the renderer
    pub fn with_backend<B: RenderBackend>(config: &RendererConfig, backend: &mut B) -> RenderResult<Self> {
        config
            .validate()
            .map_err(|e| RenderError::InvalidConfig(e.to_string()))?;
        let pipeline = backend.create_pipeline(&config.shaders)?;
        Self::new(config, pipeline)
    }

    /// Replace the camera trajectory
    pub fn set_camera_path(&mut self, path: impl CameraPath + 'static) {
        self.updater.set_camera_path(path);
    }

    /// Drive a node's local transform from elapsed time
    pub fn animate(&mut self, node: NodeId, animation: impl Fn(f32) -> Mat4 + 'static) {
        self.updater.animate(node, animation);
    }

    /// Camera and timing state after the latest update
    pub fn frame_state(&self) -> &FrameState {
        self.updater.state()
    }

    /// Frames completed so far
    pub fn frame_count(&self) -> u64 {
        self.frame_index
    }

    /// Update phase only
    pub fn update(&mut self, scene: &mut Scene, viewport: Viewport, frame_delta_seconds: f32) -> &FrameState {
        self.updater.update(scene, viewport, frame_delta_seconds)
    }

    /// Draw phase only, against the latest updated state
    pub fn render(&self, scene: &Scene) -> RenderResult<Vec<DrawOp>> {
        self.graph_renderer.render(scene, self.updater.state())
    }

    /// Run one full frame and hand its draws to `backend`
    pub fn render_frame<B: RenderBackend>(
        &mut self,
        scene: &mut Scene,
        backend: &mut B,
        viewport: Viewport,
        frame_delta_seconds: f32,
    ) -> RenderResult<FrameStats> {
        self.update(scene, viewport, frame_delta_seconds);
        let ops = self.render(scene)?;

        if let Err(e) = ops.iter().try_for_each(|op| backend.submit(op)) {
            backend.discard_frame();
            log::warn!("Frame {} discarded: {}", self.frame_index, e);
            return Err(e);
        }
        backend.end_frame()?;

        let stats = FrameStats {
            frame_index: self.frame_index,
            draw_count: ops.len(),
            elapsed_time: self.updater.state().elapsed_time,
        };
        self.frame_index += 1;

        log::debug!(
            "Frame {} submitted {} draws at t={:.3}s",
            stats.frame_index,
            stats.draw_count,
            stats.elapsed_time
        );
        Ok(stats)
    }
}
