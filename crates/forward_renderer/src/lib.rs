//! # Forward Renderer
//!
//! Scene graph and per-frame render pipeline for a minimal forward renderer.
//!
//! ## Features
//!
//! - **Scene Graph**: slot-map arena of transform nodes with ordered children
//! - **Frame Pipeline**: explicit update phase followed by a pre-order draw phase
//! - **Lighting**: ambient term plus three fixed point-light slots
//! - **Pluggable Backend**: any [`RenderBackend`](render::RenderBackend) consumes the draw list
//! - **Asset Injection**: scenes are built from an [`AssetProvider`](assets::AssetProvider)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use forward_renderer::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut backend = HeadlessBackend::new();
//!     let mut scene = Scene::new();
//!     let root = scene.root();
//!
//!     let cube = {
//!         let mut provider = BackendAssetProvider::new(&mut backend);
//!         provider.register_geometry("cube", Geometry::cube(0.5));
//!         provider.register_image("white", ImageData::solid_color(1, 1, [255; 4]));
//!         scene.spawn_renderable(root, "cube", &mut provider, "cube", "white", Material::default())?
//!     };
//!
//!     let mut renderer = Renderer::with_backend(&RendererConfig::default(), &mut backend)?;
//!     renderer.animate(cube, spin_about_y(1.0));
//!
//!     let viewport = Viewport::new(800, 600)?;
//!     let stats = renderer.render_frame(&mut scene, &mut backend, viewport, 1.0 / 60.0)?;
//!     assert_eq!(stats.draw_count, 1);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for renderer users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, AssetProvider, BackendAssetProvider, Geometry, ImageData},
        config::{Config, ConfigError, RendererConfig, ShaderConfig},
        foundation::{
            math::{Mat3, Mat4, Mat4Ext, Vec3},
            time::{FrameClock, Stopwatch},
        },
        render::{
            backends::HeadlessBackend, spin_about_y, CameraPath, DrawOp, FixedCamera, FrameState, FrameStats,
            RenderBackend, RenderError, Renderer, Viewport,
        },
        scene::{Light, Material, Node, NodeId, Scene, SceneError, MAX_LIGHTS},
    };
}
