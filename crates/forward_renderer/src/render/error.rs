//! Render error types

use thiserror::Error;

use crate::scene::NodeId;

/// Errors raised by the frame pipeline
///
/// Everything here is a configuration error: a malformed viewport or graph
/// is rejected outright instead of producing `inf`/`NaN` uniforms or
/// unbounded traversal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Viewport with a zero dimension; the aspect ratio would be undefined
    #[error("Invalid viewport {width}x{height}: both dimensions must be non-zero")]
    InvalidViewport {
        /// Viewport width in pixels
        width: u32,
        /// Viewport height in pixels
        height: u32,
    },

    /// Scene graph deeper than the configured traversal limit
    #[error("Scene graph exceeds maximum traversal depth of {max_depth}")]
    TraversalDepthExceeded {
        /// Configured limit
        max_depth: usize,
    },

    /// A child reference points at a node that is no longer in the scene
    #[error("Dangling node reference {0:?}")]
    DanglingNode(NodeId),

    /// Configuration rejected before rendering started
    #[error("Invalid renderer configuration: {0}")]
    InvalidConfig(String),

    /// Backend-specific failure
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
