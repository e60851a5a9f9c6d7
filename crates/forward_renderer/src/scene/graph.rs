//! Scene: node arena, ambient color, and light slots

use slotmap::SlotMap;

use crate::assets::AssetProvider;
use crate::foundation::math::{Mat4, Vec3};
use crate::scene::{Light, Material, Node, NodeId, SceneError, SceneResult, MAX_LIGHTS};

/// Name given to the root node of a new scene
pub const ROOT_NAME: &str = "Root";

/// Scene graph plus global lighting state
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    ambient_light_color: Vec3,
    lights: Vec<Light>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a scene containing only a root node
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(ROOT_NAME));
        Self {
            nodes,
            root,
            ambient_light_color: Vec3::zeros(),
            lights: Vec::with_capacity(MAX_LIGHTS),
        }
    }

    /// Root node id
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrow a node
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Mutably borrow a node
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Number of nodes including the root and detached nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a detached node; attach it with [`Scene::add_child`]
    pub fn insert_node(&mut self, mut node: Node) -> NodeId {
        node.parent = None;
        node.children.clear();
        self.nodes.insert(node)
    }

    /// Insert `node` and attach it under `parent`
    pub fn attach_node(&mut self, parent: NodeId, node: Node) -> SceneResult<NodeId> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::UnknownNode(parent));
        }
        let id = self.insert_node(node);
        self.add_child(parent, id)?;
        Ok(id)
    }

    /// Append `child` to `parent`'s children, moving it from any previous parent
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> SceneResult<()> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::UnknownNode(parent));
        }
        if !self.nodes.contains_key(child) {
            return Err(SceneError::UnknownNode(child));
        }
        if child == self.root {
            return Err(SceneError::RootCannotBeChild);
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(SceneError::CycleDetected { parent, child });
        }

        if let Some(previous) = self.nodes[child].parent.take() {
            if let Some(old_parent) = self.nodes.get_mut(previous) {
                old_parent.children.retain(|&id| id != child);
            }
        }

        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
        log::trace!("Attached {:?} under {:?}", child, parent);
        Ok(())
    }

    /// Remove `id` and its whole subtree; the root cannot be removed
    ///
    /// Returns the number of nodes removed.
    pub fn remove_subtree(&mut self, id: NodeId) -> usize {
        if id == self.root || !self.nodes.contains_key(id) {
            return 0;
        }

        if let Some(parent) = self.nodes[id].parent {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.children.retain(|&child| child != id);
            }
        }

        let mut removed = 0;
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(next) {
                pending.extend(node.children);
                removed += 1;
            }
        }
        removed
    }

    /// Parent of `id`
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(Node::parent)
    }

    /// Children of `id` in draw order; empty for unknown ids
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map_or(&[][..], Node::children)
    }

    /// Find a node by name, checking the root itself first
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        if self.nodes[self.root].name == name {
            Some(self.root)
        } else {
            self.find_descendant(self.root, name)
        }
    }

    /// Pre-order depth-first search below `id` (excluding `id` itself)
    ///
    /// With duplicate names the first node reached in pre-order wins.
    pub fn find_descendant(&self, id: NodeId, name: &str) -> Option<NodeId> {
        let mut pending: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = pending.pop() {
            let Some(node) = self.nodes.get(next) else {
                continue;
            };
            if node.name == name {
                return Some(next);
            }
            pending.extend(node.children.iter().rev());
        }
        None
    }

    /// Accumulated transform from the root (or detached top node) down to `id`
    pub fn world_transform(&self, id: NodeId) -> Option<Mat4> {
        let mut transform = self.nodes.get(id)?.local_transform;
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            let node = self.nodes.get(ancestor)?;
            transform = node.local_transform * transform;
            current = node.parent;
        }
        Some(transform)
    }

    /// Ambient light color
    pub fn ambient_light_color(&self) -> Vec3 {
        self.ambient_light_color
    }

    /// Set the ambient light color
    pub fn set_ambient_light_color(&mut self, color: Vec3) {
        self.ambient_light_color = color;
    }

    /// Active lights in slot order
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Append a light to the next free slot
    pub fn add_light(&mut self, light: Light) -> SceneResult<()> {
        if self.lights.len() >= MAX_LIGHTS {
            return Err(SceneError::LightCapacityExceeded { capacity: MAX_LIGHTS });
        }
        self.lights.push(light);
        Ok(())
    }

    /// Create a textured, meshed node under `parent` from provider assets
    ///
    /// A missing asset aborts construction with [`SceneError::Asset`].
    pub fn spawn_renderable(
        &mut self,
        parent: NodeId,
        name: &str,
        provider: &mut dyn AssetProvider,
        mesh_name: &str,
        texture_name: &str,
        material: Material,
    ) -> SceneResult<NodeId> {
        let mesh = provider.load_mesh(mesh_name)?;
        let texture = provider.load_texture(texture_name)?;

        let node = Node::new(name)
            .with_mesh(mesh)
            .with_material(material.with_texture(texture));
        let id = self.attach_node(parent, node)?;
        log::info!("Spawned renderable '{}' (mesh '{}', texture '{}')", name, mesh_name, texture_name);
        Ok(id)
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetError;
    use crate::foundation::math::Mat4Ext;
    use crate::render::{MeshHandle, TextureHandle};
    use approx::assert_relative_eq;

    fn named(scene: &mut Scene, parent: NodeId, name: &str) -> NodeId {
        scene.attach_node(parent, Node::new(name)).unwrap()
    }

    #[test]
    fn test_new_scene_has_root() {
        let scene = Scene::new();
        assert_eq!(scene.node_count(), 1);
        assert_eq!(scene.node(scene.root()).unwrap().name, ROOT_NAME);
        assert!(scene.parent(scene.root()).is_none());
    }

    #[test]
    fn test_find_descendant_returns_depth_one_duplicate() {
        let mut scene = Scene::new();
        let root = scene.root();
        let shallow = named(&mut scene, root, "target");
        let _deep = named(&mut scene, shallow, "target");

        assert_eq!(scene.find_descendant(root, "target"), Some(shallow));
    }

    #[test]
    fn test_find_descendant_follows_preorder_not_breadth() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = named(&mut scene, root, "a");
        let nested = named(&mut scene, a, "target");
        let _later_sibling = named(&mut scene, root, "target");

        // root/a/target is reached before root/target in pre-order.
        assert_eq!(scene.find_descendant(root, "target"), Some(nested));
    }

    #[test]
    fn test_find_descendant_excludes_self() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = named(&mut scene, root, "a");
        assert_eq!(scene.find_descendant(a, "a"), None);
        assert_eq!(scene.find_node("a"), Some(a));
    }

    #[test]
    fn test_find_node_matches_root_name() {
        let scene = Scene::new();
        assert_eq!(scene.find_node(ROOT_NAME), Some(scene.root()));
        assert_eq!(scene.find_node("missing"), None);
    }

    #[test]
    fn test_add_child_moves_from_previous_parent() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = named(&mut scene, root, "a");
        let b = named(&mut scene, root, "b");
        let leaf = named(&mut scene, a, "leaf");

        scene.add_child(b, leaf).unwrap();

        assert!(scene.children(a).is_empty());
        assert_eq!(scene.children(b), &[leaf]);
        assert_eq!(scene.parent(leaf), Some(b));
    }

    #[test]
    fn test_add_child_rejects_cycles() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = named(&mut scene, root, "a");
        let b = named(&mut scene, a, "b");

        assert!(matches!(scene.add_child(b, a), Err(SceneError::CycleDetected { .. })));
        assert!(matches!(scene.add_child(a, a), Err(SceneError::CycleDetected { .. })));
        assert!(matches!(scene.add_child(b, root), Err(SceneError::RootCannotBeChild)));
        assert_eq!(scene.parent(a), Some(root));
    }

    #[test]
    fn test_remove_subtree_detaches_and_removes_descendants() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = named(&mut scene, root, "a");
        let child = named(&mut scene, a, "child");
        named(&mut scene, child, "grandchild");

        assert_eq!(scene.remove_subtree(a), 3);
        assert!(scene.children(root).is_empty());
        assert_eq!(scene.node_count(), 1);
        assert_eq!(scene.remove_subtree(root), 0);
    }

    #[test]
    fn test_world_transform_accumulates_parent_first() {
        let mut scene = Scene::new();
        let root = scene.root();
        let parent = scene
            .attach_node(root, Node::new("parent").with_transform(Mat4::translation(Vec3::new(1.0, 0.0, 0.0))))
            .unwrap();
        let child = scene
            .attach_node(parent, Node::new("child").with_transform(Mat4::uniform_scale(2.0)))
            .unwrap();

        let world = scene.world_transform(child).unwrap();
        let point = world.transform_point(&nalgebra::Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(point, nalgebra::Point3::new(3.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_fourth_light_is_rejected() {
        let mut scene = Scene::new();
        for _ in 0..MAX_LIGHTS {
            scene.add_light(Light::default()).unwrap();
        }
        let result = scene.add_light(Light::default());
        assert!(matches!(result, Err(SceneError::LightCapacityExceeded { capacity: 3 })));
        assert_eq!(scene.lights().len(), MAX_LIGHTS);
    }

    struct FixtureProvider;

    impl AssetProvider for FixtureProvider {
        fn load_mesh(&mut self, name: &str) -> Result<MeshHandle, AssetError> {
            match name {
                "cube" => Ok(MeshHandle(7)),
                _ => Err(AssetError::NotFound(name.to_string())),
            }
        }

        fn load_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError> {
            match name {
                "checker" => Ok(TextureHandle(9)),
                _ => Err(AssetError::NotFound(name.to_string())),
            }
        }
    }

    #[test]
    fn test_spawn_renderable_binds_assets() {
        let mut scene = Scene::new();
        let root = scene.root();
        let id = scene
            .spawn_renderable(root, "box", &mut FixtureProvider, "cube", "checker", Material::default())
            .unwrap();

        let node = scene.node(id).unwrap();
        assert!(node.is_renderable());
        assert_eq!(node.mesh, Some(MeshHandle(7)));
        assert_eq!(node.material.base_color_texture, Some(TextureHandle(9)));
    }

    #[test]
    fn test_spawn_renderable_missing_asset_is_fatal() {
        let mut scene = Scene::new();
        let root = scene.root();
        let result = scene.spawn_renderable(root, "pot", &mut FixtureProvider, "teapot", "checker", Material::default());

        assert!(matches!(result, Err(SceneError::Asset(AssetError::NotFound(_)))));
        assert_eq!(scene.node_count(), 1);
    }
}
