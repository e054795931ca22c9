//! Vertex and index buffer consolidation.

use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use nalgebra::{Point3, Vector3};

use super::IndexedTriangle;

/// One interleaved vertex entry: position, normal, texture coordinate.
///
/// `repr(C)` + Pod so a `&[MeshVertex]` can be uploaded to the GPU as raw
/// bytes without copying or repacking.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in model space.
    pub position: [f32; 3],
    /// Unit vertex normal (zero for degenerate geometry).
    pub normal: [f32; 3],
    /// Placeholder texture coordinate; no texturing path exists.
    pub texcoord: [f32; 2],
}

/// Renderable mesh data: the only artifact that crosses into the renderer.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffers {
    /// Interleaved vertex entries.
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Total number of indices, for sizing the indexed draw call.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Number of vertex entries.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// True if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Placeholder texture coordinate written to every vertex.
const PLACEHOLDER_TEXCOORD: [f32; 2] = [0.0, 0.0];

/// Merge positions, normals, and placeholder texcoords into renderable
/// vertex and index buffers.
///
/// Vertex slots are merged strictly by position index: the first triangle
/// corner referencing a position index writes its slot, and later corners
/// with the same index reuse it. Without a prior
/// [`weld_positions`](super::weld_positions) pass every corner has a unique
/// position index and the buffers are a 1:1 image of the soup; with welding
/// coincident corners share slots and the vertex buffer shrinks.
///
/// Either way every index buffer value is a valid vertex-buffer offset and
/// the index count is exactly 3 × triangle count.
pub fn consolidate(
    triangles: &[IndexedTriangle],
    positions: &[Point3<f64>],
    normals: &[Vector3<f64>],
) -> MeshBuffers {
    let mut slots: HashMap<u32, u32> = HashMap::with_capacity(positions.len());
    let mut buffers = MeshBuffers {
        vertices: Vec::with_capacity(positions.len()),
        indices: Vec::with_capacity(triangles.len() * 3),
    };

    for tri in triangles {
        for corner in &tri.corners {
            let slot = match slots.get(&corner.position) {
                Some(&slot) => slot,
                None => {
                    let slot = buffers.vertices.len() as u32;
                    let p = positions[corner.position as usize];
                    let n = normals[corner.normal as usize];
                    buffers.vertices.push(MeshVertex {
                        position: [p.x as f32, p.y as f32, p.z as f32],
                        normal: [n.x as f32, n.y as f32, n.z as f32],
                        texcoord: PLACEHOLDER_TEXCOORD,
                    });
                    slots.insert(corner.position, slot);
                    slot
                }
            };
            buffers.indices.push(slot);
        }
    }

    buffers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{estimate_vertex_normals, index_triangles, weld_positions, TriangleSoup};

    fn quad_soup() -> TriangleSoup {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(1.0, 1.0, 0.0);

        let mut soup = TriangleSoup::new();
        soup.push_triangle(a, b, c);
        soup.push_triangle(c, b, d);
        soup
    }

    #[test]
    fn test_unwelded_buffers_mirror_the_soup() {
        let soup = quad_soup();
        let triangles = index_triangles(&soup);
        let normals = estimate_vertex_normals(&triangles, &soup.positions);
        let buffers = consolidate(&triangles, &soup.positions, &normals);

        assert_eq!(buffers.num_vertices(), 6);
        assert_eq!(buffers.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(buffers.index_count(), 6);
    }

    #[test]
    fn test_welded_buffers_share_slots() {
        let soup = quad_soup();
        let mut triangles = index_triangles(&soup);
        weld_positions(&mut triangles, &soup.positions);
        let normals = estimate_vertex_normals(&triangles, &soup.positions);
        let buffers = consolidate(&triangles, &soup.positions, &normals);

        // Four distinct positions; welding never changes the index count.
        assert_eq!(buffers.num_vertices(), 4);
        assert_eq!(buffers.index_count(), 6);

        for &i in &buffers.indices {
            assert!((i as usize) < buffers.num_vertices());
        }

        // Both triangles reference the shared edge's slots.
        assert_eq!(buffers.indices[2], buffers.indices[3]);
        assert_eq!(buffers.indices[1], buffers.indices[4]);
    }

    #[test]
    fn test_placeholder_texcoord_and_slot_contents() {
        let soup = quad_soup();
        let triangles = index_triangles(&soup);
        let normals = estimate_vertex_normals(&triangles, &soup.positions);
        let buffers = consolidate(&triangles, &soup.positions, &normals);

        for (slot, vertex) in buffers.vertices.iter().enumerate() {
            let p = soup.positions[slot];
            assert_eq!(vertex.position, [p.x as f32, p.y as f32, p.z as f32]);
            assert_eq!(vertex.texcoord, [0.0, 0.0]);
        }
        // Planar quad: every vertex normal is +Z.
        for vertex in &buffers.vertices {
            assert_eq!(vertex.normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_empty_input() {
        let buffers = consolidate(&[], &[], &[]);
        assert!(buffers.is_empty());
        assert_eq!(buffers.index_count(), 0);
        assert_eq!(buffers.num_vertices(), 0);
    }
}
