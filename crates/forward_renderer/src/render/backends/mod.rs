//! Backend implementations for the render module
//!
//! Only the headless recorder ships with the crate; windowed GPU backends
//! implement [`RenderBackend`](crate::render::RenderBackend) outside it.

/// In-process backend that records submitted frames
pub mod headless;

pub use headless::HeadlessBackend;
