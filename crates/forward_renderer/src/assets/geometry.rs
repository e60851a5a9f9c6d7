//! CPU-side geometry handed to the backend for buffer creation
//!
//! Only procedurally generated shapes live here; mesh file formats are the
//! backend's business.

use bytemuck::{Pod, Zeroable};

/// Vertex with position, normal, and texture coordinate
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in model space
    pub position: [f32; 3],
    /// Surface normal
    pub normal: [f32; 3],
    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self { position, normal, tex_coord }
    }
}

/// Indexed triangle list
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    /// Vertex data
    pub vertices: Vec<Vertex>,
    /// Triangle indices into `vertices`
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Create geometry from raw data
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Axis-aligned cube centered on the origin with per-face normals
    pub fn cube(half_extent: f32) -> Self {
        let h = half_extent;
        // (normal, tangent u, tangent v) per face
        let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ];
        let corners = [(-1.0, -1.0, [0.0, 1.0]), (1.0, -1.0, [1.0, 1.0]), (1.0, 1.0, [1.0, 0.0]), (-1.0, 1.0, [0.0, 0.0])];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, u, v) in faces {
            let base = vertices.len() as u32;
            for (su, sv, tex_coord) in corners {
                let position = [
                    h * (normal[0] + su * u[0] + sv * v[0]),
                    h * (normal[1] + su * u[1] + sv * v[1]),
                    h * (normal[2] + su * u[2] + sv * v[2]),
                ];
                vertices.push(Vertex::new(position, normal, tex_coord));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self { vertices, indices }
    }

    /// Number of indices to draw
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// True if every index refers to an existing vertex and the list is whole triangles
    pub fn is_well_formed(&self) -> bool {
        self.indices.len() % 3 == 0
            && self.indices.iter().all(|&index| (index as usize) < self.vertices.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let cube = Geometry::cube(0.5);
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.index_count(), 36);
        assert!(cube.is_well_formed());
    }

    #[test]
    fn test_cube_vertices_lie_on_their_face() {
        let cube = Geometry::cube(2.0);
        for vertex in &cube.vertices {
            let along_normal: f32 = vertex
                .position
                .iter()
                .zip(vertex.normal.iter())
                .map(|(p, n)| p * n)
                .sum();
            assert!((along_normal - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_out_of_range_index_detected() {
        let geometry = Geometry::new(vec![Vertex::new([0.0; 3], [0.0, 1.0, 0.0], [0.0; 2])], vec![0, 0, 1]);
        assert!(!geometry.is_well_formed());
    }
}
