//! Frame updater: time, camera, projection, and node animation
//!
//! The updater is the first of the two per-frame phases. It only mutates
//! renderer-owned [`FrameState`] and the local transforms of animated nodes;
//! it never draws.

use crate::config::RendererConfig;
use crate::foundation::math::{Mat4, Mat4Ext, Vec3};
use crate::render::{RenderError, RenderResult};
use crate::scene::{NodeId, Scene};

/// Validated viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport, rejecting zero-sized dimensions
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width / height as floating point
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Camera and timing state owned by the renderer
///
/// Reset only when the renderer is constructed and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    /// Camera position in world space
    pub camera_world_position: Vec3,
    /// World-to-camera transform
    pub view_matrix: Mat4,
    /// Camera-to-clip transform
    pub projection_matrix: Mat4,
    /// Seconds accumulated across all updates
    pub elapsed_time: f32,
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            camera_world_position: Vec3::zeros(),
            view_matrix: Mat4::identity(),
            projection_matrix: Mat4::identity(),
            elapsed_time: 0.0,
        }
    }
}

impl FrameState {
    /// Projection * view
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }
}

/// Camera trajectory as a function of elapsed time
pub trait CameraPath {
    /// Camera world position at `elapsed` seconds
    fn position_at(&self, elapsed: f32) -> Vec3;
}

impl<F> CameraPath for F
where
    F: Fn(f32) -> Vec3,
{
    fn position_at(&self, elapsed: f32) -> Vec3 {
        self(elapsed)
    }
}

/// Camera that never moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCamera(pub Vec3);

impl CameraPath for FixedCamera {
    fn position_at(&self, _elapsed: f32) -> Vec3 {
        self.0
    }
}

/// Local transform of a node as a function of elapsed time
pub type NodeAnimation = Box<dyn Fn(f32) -> Mat4>;

/// Rotation about +Y by `-elapsed` radians applied after a uniform scale
pub fn spin_about_y(scale: f32) -> impl Fn(f32) -> Mat4 {
    move |elapsed| Mat4::rotation_y(-elapsed) * Mat4::uniform_scale(scale)
}

/// First frame phase: advances time and recomputes camera state
pub struct FrameUpdater {
    state: FrameState,
    fov_y_radians: f32,
    near: f32,
    far: f32,
    camera_path: Box<dyn CameraPath>,
    animations: Vec<(NodeId, NodeAnimation)>,
}

impl FrameUpdater {
    /// Create an updater with a fixed camera at the configured position
    pub fn new(config: &RendererConfig) -> Self {
        let [x, y, z] = config.camera_position;
        Self {
            state: FrameState::default(),
            fov_y_radians: config.fov_y_radians,
            near: config.near,
            far: config.far,
            camera_path: Box::new(FixedCamera(Vec3::new(x, y, z))),
            animations: Vec::new(),
        }
    }

    /// Replace the camera trajectory
    pub fn set_camera_path(&mut self, path: impl CameraPath + 'static) {
        self.camera_path = Box::new(path);
    }

    /// Drive `node`'s local transform from elapsed time
    pub fn animate(&mut self, node: NodeId, animation: impl Fn(f32) -> Mat4 + 'static) {
        self.animations.push((node, Box::new(animation)));
    }

    /// Number of registered animations
    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Current frame state
    pub fn state(&self) -> &FrameState {
        &self.state
    }

    /// Advance one frame
    pub fn update(&mut self, scene: &mut Scene, viewport: Viewport, frame_delta_seconds: f32) -> &FrameState {
        self.state.elapsed_time += frame_delta_seconds;
        let elapsed = self.state.elapsed_time;

        let camera = self.camera_path.position_at(elapsed);
        self.state.camera_world_position = camera;
        self.state.view_matrix = Mat4::translation(-camera);
        self.state.projection_matrix =
            Mat4::perspective_rh_zo(self.fov_y_radians, viewport.aspect_ratio(), self.near, self.far);

        self.animations.retain(|(node_id, animation)| match scene.node_mut(*node_id) {
            Some(node) => {
                node.local_transform = animation(elapsed);
                true
            }
            None => {
                log::warn!("Dropping animation of {:?}: node is no longer in the scene", node_id);
                false
            }
        });

        &self.state
    }
}
