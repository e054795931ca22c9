//! Vertex normal estimation.

use nalgebra::{Point3, Vector3};

use super::IndexedTriangle;

/// Shortest accumulated normal that still gets normalized; anything below
/// stays the zero vector instead of turning into NaN.
const MIN_NORMAL_LEN: f64 = 1e-10;

/// Estimate smooth per-position vertex normals.
///
/// Each triangle contributes its unnormalized face normal (the cross
/// product of its first two edge vectors, so the magnitude is twice the
/// triangle area) to the accumulator entry of all three of its corners'
/// normal indices. After all triangles are processed, every entry is
/// normalized to unit length.
///
/// Degenerate triangles are guarded twice: a zero-length or non-finite
/// cross product is skipped rather than accumulated, and an accumulator
/// entry that never received a contribution (or whose contributions cancel)
/// remains the zero vector. The result never contains NaN.
///
/// The returned vector is indexed by position index and has one entry per
/// input position.
pub fn estimate_vertex_normals(
    triangles: &[IndexedTriangle],
    positions: &[Point3<f64>],
) -> Vec<Vector3<f64>> {
    let mut accumulated = vec![Vector3::zeros(); positions.len()];

    for tri in triangles {
        let [p0, p1, p2] = tri
            .corners
            .map(|corner| positions[corner.position as usize]);

        // Area-weighted face normal, consistent with the sweep winding.
        let face = (p1 - p0).cross(&(p2 - p0));
        if !face_is_usable(&face) {
            continue;
        }

        for corner in &tri.corners {
            accumulated[corner.normal as usize] += face;
        }
    }

    for normal in &mut accumulated {
        let len = normal.norm();
        if len > MIN_NORMAL_LEN {
            *normal /= len;
        } else {
            *normal = Vector3::zeros();
        }
    }

    accumulated
}

fn face_is_usable(face: &Vector3<f64>) -> bool {
    face.x.is_finite()
        && face.y.is_finite()
        && face.z.is_finite()
        && face.norm_squared() > MIN_NORMAL_LEN * MIN_NORMAL_LEN
}
