//! Index assignment over the triangle soup.

use super::TriangleSoup;

/// Index triple for one corner of an indexed triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexIndices {
    /// Offset into the flat position array.
    pub position: u32,
    /// Offset into a texture-coordinate array. No texturing path exists, so
    /// this is fixed at 0.
    pub texcoord: u32,
    /// Offset into the per-position normal array. Starts equal to
    /// `position` and stays equal through welding.
    pub normal: u32,
}

/// A triangle described by three corner index triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedTriangle {
    /// The three corners, in winding order.
    pub corners: [VertexIndices; 3],
}

/// Assign index triples to each triangle of the soup.
///
/// One triangle per 3 consecutive soup positions; each corner's position and
/// normal index equal its soup offset, so before welding every position
/// index in `[0, soup len)` appears exactly once.
pub fn index_triangles(soup: &TriangleSoup) -> Vec<IndexedTriangle> {
    (0..soup.num_triangles())
        .map(|t| {
            let base = (t * 3) as u32;
            IndexedTriangle {
                corners: [base, base + 1, base + 2].map(|i| VertexIndices {
                    position: i,
                    texcoord: 0,
                    normal: i,
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn soup_of(triangles: usize) -> TriangleSoup {
        let mut soup = TriangleSoup::new();
        for t in 0..triangles {
            let x = t as f64;
            soup.push_triangle(
                Point3::new(x, 0.0, 0.0),
                Point3::new(x + 1.0, 0.0, 0.0),
                Point3::new(x, 1.0, 0.0),
            );
        }
        soup
    }

    #[test]
    fn test_one_triangle_per_position_triple() {
        let soup = soup_of(1000);
        assert_eq!(soup.positions.len(), 3000);

        let triangles = index_triangles(&soup);
        assert_eq!(triangles.len(), 1000);

        // Every position index in [0, 3000) appears exactly once.
        let mut seen = vec![false; soup.positions.len()];
        for tri in &triangles {
            for corner in &tri.corners {
                let i = corner.position as usize;
                assert!(!seen[i], "position index {i} referenced twice");
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_placeholder_indices() {
        let triangles = index_triangles(&soup_of(3));

        for tri in &triangles {
            for corner in &tri.corners {
                assert_eq!(corner.texcoord, 0);
                assert_eq!(corner.normal, corner.position);
            }
        }
    }

    #[test]
    fn test_empty_soup() {
        assert!(index_triangles(&TriangleSoup::new()).is_empty());
    }
}
