//! Transform node

use slotmap::new_key_type;

use crate::foundation::math::Mat4;
use crate::render::MeshHandle;
use crate::scene::Material;

new_key_type! {
    /// Stable id of a node inside its scene
    pub struct NodeId;
}

/// Positioned element of the scene hierarchy, optionally renderable
///
/// Parent and child links are maintained by [`Scene`](crate::scene::Scene);
/// they are read-only from here.
#[derive(Debug, Clone)]
pub struct Node {
    /// Lookup name; need not be unique
    pub name: String,
    /// Transform relative to the parent
    pub local_transform: Mat4,
    /// GPU geometry, owned by the backend
    pub mesh: Option<MeshHandle>,
    /// Shading parameters
    pub material: Material,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    /// Create an empty node with an identity transform
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local_transform: Mat4::identity(),
            mesh: None,
            material: Material::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Builder pattern: Set local transform
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.local_transform = transform;
        self
    }

    /// Builder pattern: Set mesh
    pub fn with_mesh(mut self, mesh: MeshHandle) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Builder pattern: Set material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Parent id, absent for the root and detached nodes
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in draw order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// True if the node carries both geometry and a base color texture
    pub fn is_renderable(&self) -> bool {
        self.mesh.is_some() && self.material.base_color_texture.is_some()
    }
}
