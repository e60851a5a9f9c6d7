//! Scene viewer
//!
//! Builds a one-node scene lit by up to three point lights, spins it about
//! the Y axis, and drives frames through the headless backend.
//!
//! Usage: `scene_viewer [config.toml|config.ron]`

mod config;

use config::ViewerConfig;
use forward_renderer::assets::{BackendAssetProvider, Geometry, ImageData};
use forward_renderer::config::{Config, ConfigError};
use forward_renderer::foundation::logging;
use forward_renderer::foundation::math::Vec3;
use forward_renderer::foundation::time::{FrameClock, Stopwatch};
use forward_renderer::render::backends::HeadlessBackend;
use forward_renderer::render::{spin_about_y, RenderError, Renderer, Viewport};
use forward_renderer::scene::{Material, NodeId, Scene, SceneError};
use thiserror::Error;

/// Startup and frame-loop failures
#[derive(Error, Debug)]
enum ViewerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scene build failed: {0}")]
    Scene(#[from] SceneError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading viewer configuration from {}", path);
            ViewerConfig::load_from_file(&path)?
        }
        None => ViewerConfig::default(),
    };

    run(&config)?;
    Ok(())
}

fn build_scene(config: &ViewerConfig, backend: &mut HeadlessBackend) -> Result<(Scene, NodeId), ViewerError> {
    let mut scene = Scene::new();
    scene.set_ambient_light_color(Vec3::from(config.ambient_light_color));
    for light in &config.lights {
        scene.add_light(light.to_light())?;
    }

    let mut provider = BackendAssetProvider::new(backend);
    for path in &config.asset_search_paths {
        provider = provider.with_search_path(path);
    }
    provider.register_geometry("cube", Geometry::cube(1.0));
    provider.register_image("checker", ImageData::checkerboard(64, 8, [230, 230, 230, 255], [40, 40, 40, 255]));

    let material = Material::default()
        .with_specular_color(Vec3::from(config.specular_color))
        .with_specular_power(config.specular_power);
    let root = scene.root();
    let node = scene.spawn_renderable(
        root,
        &config.mesh_name,
        &mut provider,
        &config.mesh_name,
        &config.texture_name,
        material,
    )?;

    log::info!("Scene built: {} nodes, {} lights", scene.node_count(), scene.lights().len());
    Ok((scene, node))
}

fn run(config: &ViewerConfig) -> Result<(), ViewerError> {
    config.validate()?;
    let viewport = Viewport::new(config.viewport_width, config.viewport_height)?;

    let mut backend = HeadlessBackend::new();
    let (mut scene, node) = build_scene(config, &mut backend)?;

    let mut renderer = Renderer::with_backend(&config.renderer, &mut backend)?;
    renderer.animate(node, spin_about_y(config.node_scale));

    let mut clock = config.fixed_frame_delta.map_or_else(FrameClock::measured, FrameClock::fixed);
    let stopwatch = Stopwatch::start();
    let mut total_draws = 0;

    for _ in 0..config.frame_count {
        let delta = clock.tick();
        let stats = renderer.render_frame(&mut scene, &mut backend, viewport, delta)?;
        total_draws += stats.draw_count;
    }

    log::info!(
        "Rendered {} frames ({} draws) in {:.2} ms, simulated {:.2}s at {:.1} fps",
        renderer.frame_count(),
        total_draws,
        stopwatch.elapsed_millis(),
        renderer.frame_state().elapsed_time,
        clock.average_fps()
    );
    Ok(())
}
