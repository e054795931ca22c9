//! Coincident-position welding.

use std::collections::HashMap;

use nalgebra::Point3;

use super::IndexedTriangle;

/// Quantization scale for position keys: coordinates matching to 1e-9 are
/// treated as the same point.
const QUANTIZE_SCALE: f64 = 1e9;

/// Collapse coincident positions onto a canonical position index.
///
/// The revolution sweep duplicates every shared quad corner, and the seam
/// band duplicates band 0's points exactly. Welding rewrites each corner's
/// position (and normal) index to the first soup offset holding the same
/// quantized coordinates, so downstream normal accumulation sums over all
/// triangles that meet at a point and consolidation shares one vertex slot
/// per distinct position.
///
/// Only the index records change; the position array itself is left intact,
/// and non-canonical entries simply become unreferenced.
pub fn weld_positions(triangles: &mut [IndexedTriangle], positions: &[Point3<f64>]) {
    let mut canonical: HashMap<[i64; 3], u32> = HashMap::with_capacity(positions.len());
    let mut remap: Vec<u32> = Vec::with_capacity(positions.len());

    for (i, p) in positions.iter().enumerate() {
        let index = *canonical.entry(quantize(p)).or_insert(i as u32);
        remap.push(index);
    }

    for tri in triangles {
        for corner in &mut tri.corners {
            corner.position = remap[corner.position as usize];
            corner.normal = corner.position;
        }
    }
}

fn quantize(p: &Point3<f64>) -> [i64; 3] {
    [
        (p.x * QUANTIZE_SCALE).round() as i64,
        (p.y * QUANTIZE_SCALE).round() as i64,
        (p.z * QUANTIZE_SCALE).round() as i64,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{index_triangles, TriangleSoup};

    #[test]
    fn test_weld_collapses_duplicates() {
        // Two triangles sharing the edge (b, c), emitted soup-style with
        // duplicated corners.
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(1.0, 1.0, 0.0);

        let mut soup = TriangleSoup::new();
        soup.push_triangle(a, b, c);
        soup.push_triangle(c, b, d);

        let mut triangles = index_triangles(&soup);
        weld_positions(&mut triangles, &soup.positions);

        // Corner 3 (c again) and corner 4 (b again) collapse onto their
        // first occurrences.
        assert_eq!(triangles[1].corners[0].position, 2);
        assert_eq!(triangles[1].corners[1].position, 1);
        assert_eq!(triangles[1].corners[2].position, 5);

        // Normal indices track position indices.
        for tri in &triangles {
            for corner in &tri.corners {
                assert_eq!(corner.normal, corner.position);
            }
        }
    }

    #[test]
    fn test_weld_within_tolerance() {
        let p = Point3::new(0.25, 0.5, -0.75);
        let nudged = Point3::new(0.25 + 1e-12, 0.5, -0.75 - 1e-12);
        let far = Point3::new(0.25 + 1e-6, 0.5, -0.75);

        let mut soup = TriangleSoup::new();
        soup.push_triangle(p, nudged, far);

        let mut triangles = index_triangles(&soup);
        weld_positions(&mut triangles, &soup.positions);

        let [c0, c1, c2] = triangles[0].corners;
        assert_eq!(c1.position, c0.position);
        assert_ne!(c2.position, c0.position);
    }

    #[test]
    fn test_weld_without_duplicates_is_identity() {
        let mut soup = TriangleSoup::new();
        soup.push_triangle(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );

        let before = index_triangles(&soup);
        let mut after = before.clone();
        weld_positions(&mut after, &soup.positions);

        assert_eq!(before, after);
    }
}
