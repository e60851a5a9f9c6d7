//! Scene graph
//!
//! A [`Scene`] owns every [`Node`] in a slot-map arena. Children are ordered
//! id lists and parents are non-owning id back-references, so the graph has
//! no reference cycles and reparenting is a pair of list edits.

mod graph;
mod light;
mod material;
mod node;

pub use graph::Scene;
pub use light::{Light, MAX_LIGHTS};
pub use material::Material;
pub use node::{Node, NodeId};

use thiserror::Error;

use crate::assets::AssetError;

/// Scene construction errors
///
/// All of these surface while the scene is being built, never during a frame.
#[derive(Error, Debug)]
pub enum SceneError {
    /// More lights than the shading stage has slots for
    #[error("Light capacity exceeded: the shading stage supports at most {capacity} lights")]
    LightCapacityExceeded {
        /// Fixed light slot count
        capacity: usize,
    },

    /// Attaching the node would make it its own ancestor
    #[error("Adding {child:?} under {parent:?} would create a cycle")]
    CycleDetected {
        /// Requested parent
        parent: NodeId,
        /// Requested child
        child: NodeId,
    },

    /// The root node cannot be attached under another node
    #[error("The root node cannot become a child")]
    RootCannotBeChild,

    /// Node id does not belong to this scene
    #[error("Unknown node {0:?}")]
    UnknownNode(NodeId),

    /// Required asset could not be loaded
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Result type for scene construction
pub type SceneResult<T> = Result<T, SceneError>;
