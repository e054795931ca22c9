//! Unindexed triangle storage.

use nalgebra::Point3;

/// A triangle soup: a flat sequence of positions whose consecutive triples
/// form triangles.
///
/// There is no shared-vertex structure: a position that belongs to several
/// triangles appears once per triangle. Index sharing is introduced later by
/// [`weld_positions`](crate::mesh::weld_positions) and
/// [`consolidate`](crate::mesh::consolidate).
#[derive(Debug, Clone, Default)]
pub struct TriangleSoup {
    /// Flat positions; length is always a multiple of 3.
    pub positions: Vec<Point3<f64>>,
}

impl TriangleSoup {
    /// Create an empty soup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty soup with room for `triangles` triangles.
    pub fn with_triangle_capacity(triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(triangles * 3),
        }
    }

    /// Append one triangle.
    pub fn push_triangle(&mut self, a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) {
        self.positions.push(a);
        self.positions.push(b);
        self.positions.push(c);
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.positions.len() / 3
    }

    /// True if the soup holds no triangles.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
