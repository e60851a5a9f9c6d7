//! Graph renderer: scene traversal into draw operations
//!
//! Walks the scene depth-first from the root, parent before children and
//! children in list order, accumulating world transforms. Every node that
//! carries both a mesh and a base color texture yields exactly one
//! [`DrawOp`]. The walk uses an explicit stack so a malformed graph fails
//! with [`RenderError::TraversalDepthExceeded`] instead of exhausting the
//! call stack.

use crate::foundation::math::{Mat4, Mat4Ext};
use crate::render::{DrawOp, FragmentUniforms, FrameState, PipelineId, RenderError, RenderResult, VertexUniforms};
use crate::scene::{NodeId, Scene};

/// Second frame phase: turns the scene into an ordered list of draws
#[derive(Debug, Clone)]
pub struct GraphRenderer {
    pipeline: PipelineId,
    max_depth: usize,
}

impl GraphRenderer {
    /// Create a renderer drawing with `pipeline`, refusing graphs deeper than `max_depth`
    pub fn new(pipeline: PipelineId, max_depth: usize) -> Self {
        Self { pipeline, max_depth }
    }

    /// Pipeline bound by every emitted op
    pub fn pipeline(&self) -> PipelineId {
        self.pipeline
    }

    /// Deepest node level accepted; the root is level 0
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Traverse `scene` and build this frame's draw operations in submission order
    pub fn render(&self, scene: &Scene, frame: &FrameState) -> RenderResult<Vec<DrawOp>> {
        let view_projection = frame.view_projection();
        let mut ops = Vec::new();
        let mut stack: Vec<(NodeId, Mat4, usize)> = vec![(scene.root(), Mat4::identity(), 0)];

        while let Some((id, parent_world, depth)) = stack.pop() {
            if depth > self.max_depth {
                return Err(RenderError::TraversalDepthExceeded { max_depth: self.max_depth });
            }

            let node = scene.node(id).ok_or(RenderError::DanglingNode(id))?;
            let world = parent_world * node.local_transform;

            if let (Some(mesh), Some(texture)) = (node.mesh, node.material.base_color_texture) {
                match world.normal_matrix() {
                    Some(normal) => {
                        log::trace!("Draw '{}' ({:?}) mesh {:?} texture {:?}", node.name, id, mesh, texture);
                        ops.push(DrawOp {
                            pipeline: self.pipeline,
                            vertex_uniforms: VertexUniforms::new(&view_projection, &world, &normal),
                            fragment_uniforms: FragmentUniforms::new(
                                &frame.camera_world_position,
                                &scene.ambient_light_color(),
                                &node.material,
                                scene.lights(),
                            ),
                            texture,
                            mesh,
                            node: id,
                        });
                    }
                    None => {
                        log::warn!("Skipping draw of '{}' ({:?}): world transform is not invertible", node.name, id);
                    }
                }
            }

            // Reversed so the first child is popped first
            for &child in node.children().iter().rev() {
                stack.push((child, world, depth + 1));
            }
        }

        Ok(ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Mat3, Vec3};
    use crate::render::{MeshHandle, TextureHandle};
    use crate::scene::{Light, Material, Node};
    use approx::assert_relative_eq;

    const PIPELINE: PipelineId = PipelineId(7);

    fn textured() -> Material {
        Material::default().with_texture(TextureHandle(1))
    }

    fn drawable(name: &str) -> Node {
        Node::new(name).with_mesh(MeshHandle(1)).with_material(textured())
    }

    fn frame() -> FrameState {
        FrameState {
            camera_world_position: Vec3::new(0.0, 0.0, 2.0),
            view_matrix: Mat4::translation(Vec3::new(0.0, 0.0, -2.0)),
            projection_matrix: Mat4::perspective_rh_zo(1.0, 1.0, 0.1, 100.0),
            elapsed_time: 0.0,
        }
    }

    fn emitted(ops: &[DrawOp]) -> Vec<NodeId> {
        ops.iter().map(|op| op.node).collect()
    }

    #[test]
    fn test_pre_order_parent_before_children() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = scene.attach_node(root, drawable("A")).unwrap();
        let b = scene.attach_node(root, drawable("B")).unwrap();
        let a1 = scene.attach_node(a, drawable("A1")).unwrap();

        let ops = GraphRenderer::new(PIPELINE, 64).render(&scene, &frame()).unwrap();
        assert_eq!(emitted(&ops), vec![a, a1, b]);
        assert!(ops.iter().all(|op| op.pipeline == PIPELINE));
    }

    #[test]
    fn test_root_emits_when_renderable() {
        let mut scene = Scene::new();
        let root = scene.root();
        {
            let root_node = scene.node_mut(root).unwrap();
            root_node.mesh = Some(MeshHandle(3));
            root_node.material = textured();
        }
        let a = scene.attach_node(root, drawable("A")).unwrap();

        let ops = GraphRenderer::new(PIPELINE, 64).render(&scene, &frame()).unwrap();
        assert_eq!(emitted(&ops), vec![root, a]);
    }

    #[test]
    fn test_untextured_node_skipped_children_still_drawn() {
        let mut scene = Scene::new();
        let root = scene.root();
        let bare = scene.attach_node(root, Node::new("bare").with_mesh(MeshHandle(2))).unwrap();
        let child = scene.attach_node(bare, drawable("child")).unwrap();

        let ops = GraphRenderer::new(PIPELINE, 64).render(&scene, &frame()).unwrap();
        assert_eq!(emitted(&ops), vec![child]);
    }

    #[test]
    fn test_world_transform_accumulates() {
        let mut scene = Scene::new();
        let root = scene.root();
        let parent = scene
            .attach_node(root, Node::new("parent").with_transform(Mat4::translation(Vec3::new(1.0, 0.0, 0.0))))
            .unwrap();
        scene
            .attach_node(parent, drawable("child").with_transform(Mat4::uniform_scale(2.0)))
            .unwrap();

        let ops = GraphRenderer::new(PIPELINE, 64).render(&scene, &frame()).unwrap();
        let expected: [[f32; 4]; 4] = (Mat4::translation(Vec3::new(1.0, 0.0, 0.0)) * Mat4::uniform_scale(2.0)).into();
        assert_eq!(ops[0].vertex_uniforms.model, expected);
    }

    #[test]
    fn test_view_projection_shared_by_all_draws() {
        let mut scene = Scene::new();
        let root = scene.root();
        scene.attach_node(root, drawable("A")).unwrap();
        scene
            .attach_node(root, drawable("B").with_transform(Mat4::rotation_y(0.3)))
            .unwrap();

        let state = frame();
        let ops = GraphRenderer::new(PIPELINE, 64).render(&scene, &state).unwrap();
        let expected: [[f32; 4]; 4] = state.view_projection().into();
        assert_eq!(ops[0].vertex_uniforms.view_projection, expected);
        assert_eq!(ops[1].vertex_uniforms.view_projection, expected);
    }

    #[test]
    fn test_normal_matrix_uses_inverse_transpose() {
        let mut scene = Scene::new();
        let root = scene.root();
        let world = Mat4::rotation_y(std::f32::consts::FRAC_PI_2) * Mat4::nonuniform_scale(2.0, 1.0, 1.0);
        scene.attach_node(root, drawable("stretched").with_transform(world)).unwrap();

        let ops = GraphRenderer::new(PIPELINE, 64).render(&scene, &frame()).unwrap();
        let normal = ops[0].vertex_uniforms.normal;
        let expected = Mat3::new(
            0.0,  0.0, 1.0,
            0.0,  1.0, 0.0,
            -0.5, 0.0, 0.0,
        );
        for (column, expected_column) in normal.iter().zip(expected.column_iter()) {
            assert_relative_eq!(column[0], expected_column[0], epsilon = 1e-5);
            assert_relative_eq!(column[1], expected_column[1], epsilon = 1e-5);
            assert_relative_eq!(column[2], expected_column[2], epsilon = 1e-5);
        }
    }

    #[test]
    fn test_singular_transform_skips_draw_only() {
        let mut scene = Scene::new();
        let root = scene.root();
        let flat = scene
            .attach_node(root, drawable("flat").with_transform(Mat4::uniform_scale(0.0)))
            .unwrap();
        scene.attach_node(flat, drawable("inside")).unwrap();
        let sibling = scene.attach_node(root, drawable("sibling")).unwrap();

        let ops = GraphRenderer::new(PIPELINE, 64).render(&scene, &frame()).unwrap();
        assert_eq!(emitted(&ops), vec![sibling]);
    }

    #[test]
    fn test_depth_cap_fails_fast() {
        let mut scene = Scene::new();
        let mut parent = scene.root();
        for level in 0..4 {
            parent = scene.attach_node(parent, Node::new(format!("level{level}"))).unwrap();
        }

        assert!(GraphRenderer::new(PIPELINE, 4).render(&scene, &frame()).is_ok());
        assert_eq!(
            GraphRenderer::new(PIPELINE, 3).render(&scene, &frame()),
            Err(RenderError::TraversalDepthExceeded { max_depth: 3 })
        );
    }

    #[test]
    fn test_lights_copied_verbatim() {
        let mut scene = Scene::new();
        let root = scene.root();
        scene.set_ambient_light_color(Vec3::new(0.1, 0.1, 0.1));
        scene.add_light(Light::new(Vec3::new(5.0, 5.0, 0.0), Vec3::new(0.3, 0.3, 0.3))).unwrap();
        scene.add_light(Light::new(Vec3::new(-5.0, 5.0, 0.0), Vec3::new(2.0, 0.0, 0.0))).unwrap();
        scene
            .attach_node(root, drawable("moved").with_transform(Mat4::translation(Vec3::new(9.0, 9.0, 9.0))))
            .unwrap();

        let ops = GraphRenderer::new(PIPELINE, 64).render(&scene, &frame()).unwrap();
        let block = &ops[0].fragment_uniforms;
        assert_eq!(block.camera_world_position, [0.0, 0.0, 2.0, 0.0]);
        assert_eq!(block.ambient_light_color, [0.1, 0.1, 0.1, 0.0]);
        assert_eq!(block.lights[0].world_position, [5.0, 5.0, 0.0, 0.0]);
        assert_eq!(block.lights[1].color, [2.0, 0.0, 0.0, 0.0]);
        assert_eq!(block.lights[2].color, [0.0; 4]);
    }

    #[test]
    fn test_empty_scene_emits_nothing() {
        let scene = Scene::new();
        let ops = GraphRenderer::new(PIPELINE, 64).render(&scene, &frame()).unwrap();
        assert!(ops.is_empty());
    }
}
