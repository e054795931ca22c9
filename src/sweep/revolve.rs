//! Rotational sweep of a profile curve into a triangle soup.

use nalgebra::{Point3, Rotation3, Unit, Vector3};

use crate::mesh::TriangleSoup;

use super::SweepOptions;

/// Sweep an open profile curve around the revolution axis.
///
/// The profile is rotated once per band; adjacent bands are bridged with two
/// triangles per profile segment, wound so the cross product of the first
/// two edges points out of the solid. The final band connects back to band
/// 0, closing the surface; it never indexes a band past the last one.
///
/// A profile with fewer than 2 points has no segment to sweep and yields an
/// empty soup. Otherwise the soup holds `bands · (len − 1) · 2` triangles,
/// every corner duplicated (no index sharing at this stage).
pub fn revolve_profile(profile: &[Point3<f64>], options: &SweepOptions) -> TriangleSoup {
    if profile.len() < 2 {
        return TriangleSoup::new();
    }

    let bands = options.bands as usize;
    let step = options.band_angle();

    // [band][curve index] grid of rotated profile copies.
    let rings: Vec<Vec<Point3<f64>>> = (0..bands)
        .map(|k| rotate_profile(profile, &options.axis, k as f64 * step))
        .collect();

    let segments = profile.len() - 1;
    let mut soup = TriangleSoup::with_triangle_capacity(bands * segments * 2);

    for k in 0..bands {
        let ring = &rings[k];
        // The last band wraps back to band 0 instead of a band past the end.
        let next = if k + 1 == bands {
            &rings[0]
        } else {
            &rings[k + 1]
        };

        for j in 0..segments {
            soup.push_triangle(ring[j], ring[j + 1], next[j]);
            soup.push_triangle(next[j], ring[j + 1], next[j + 1]);
        }
    }

    soup
}

/// Rotate every profile point by `angle` radians about the axis.
fn rotate_profile(
    profile: &[Point3<f64>],
    axis: &Unit<Vector3<f64>>,
    angle: f64,
) -> Vec<Point3<f64>> {
    let rotation = Rotation3::from_axis_angle(axis, angle);
    profile.iter().map(|p| rotation * p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn vase_profile() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.5, -0.5, 0.0),
            Point3::new(0.8, -0.2, 0.0),
            Point3::new(0.6, 0.1, 0.0),
            Point3::new(0.4, 0.3, 0.0),
            Point3::new(0.5, 0.5, 0.0),
            Point3::new(0.7, 0.7, 0.0),
        ]
    }

    #[test]
    fn test_triangle_count() {
        let profile = vase_profile();
        let soup = revolve_profile(&profile, &SweepOptions::default());

        // 72 · (6 − 1) · 2 triangles, 3 positions each.
        assert_eq!(soup.num_triangles(), 720);
        assert_eq!(soup.positions.len(), 2160);
    }

    #[test]
    fn test_triangle_count_custom_resolution() {
        let profile = vase_profile();
        let soup = revolve_profile(&profile, &SweepOptions::with_bands(12));

        assert_eq!(soup.num_triangles(), 12 * 5 * 2);
    }

    #[test]
    fn test_wrap_seam_closes_on_band_zero() {
        let options = SweepOptions::default();
        let profile = vase_profile();

        // Rotating by one step past the last band is a full turn, which must
        // reproduce band 0 within floating-point tolerance.
        let full_turn = rotate_profile(
            &profile,
            &options.axis,
            f64::from(options.bands) * options.band_angle(),
        );
        for (p, q) in profile.iter().zip(full_turn.iter()) {
            assert!((p - q).norm() < 1e-9);
        }

        // The closing quads of the soup must reference band 0's points: the
        // last 2·(len−1) triangles bridge the final band and band 0.
        let soup = revolve_profile(&profile, &options);
        let last_band = rotate_profile(
            &profile,
            &options.axis,
            f64::from(options.bands - 1) * options.band_angle(),
        );

        let segments = profile.len() - 1;
        let closing = &soup.positions[soup.positions.len() - segments * 6..];
        for j in 0..segments {
            let quad = &closing[j * 6..j * 6 + 6];
            assert!((quad[0] - last_band[j]).norm() < 1e-12);
            assert!((quad[1] - last_band[j + 1]).norm() < 1e-12);
            assert!((quad[2] - profile[j]).norm() < 1e-12);
            assert!((quad[3] - profile[j]).norm() < 1e-12);
            assert!((quad[4] - last_band[j + 1]).norm() < 1e-12);
            assert!((quad[5] - profile[j + 1]).norm() < 1e-12);
        }
    }

    #[test]
    fn test_band_grid_lies_on_rotated_circles() {
        // Every swept point keeps its distance to the axis and its height
        // along the axis.
        let options = SweepOptions::with_bands(8);
        let profile = vase_profile();
        let soup = revolve_profile(&profile, &options);

        for p in &soup.positions {
            let source = profile
                .iter()
                .find(|q| {
                    (q.y - p.y).abs() < 1e-9
                        && ((q.x * q.x + q.z * q.z) - (p.x * p.x + p.z * p.z)).abs() < 1e-9
                })
                .copied();
            assert!(source.is_some(), "swept point {p} matches no profile circle");
        }
    }

    #[test]
    fn test_short_profile_yields_empty_soup() {
        let options = SweepOptions::default();
        assert!(revolve_profile(&[], &options).positions.is_empty());
        assert!(
            revolve_profile(&[Point3::new(1.0, 0.0, 0.0)], &options)
                .positions
                .is_empty()
        );
    }

    #[test]
    fn test_band_angle_covers_full_turn() {
        let options = SweepOptions::with_bands(72);
        assert!((f64::from(options.bands) * options.band_angle() - TAU).abs() < 1e-12);

        // 72 bands of 5 degrees.
        assert!((options.band_angle().to_degrees() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_bands_clamped_to_minimum() {
        assert_eq!(SweepOptions::with_bands(0).bands, 3);
        assert_eq!(SweepOptions::with_bands(2).bands, 3);
        assert_eq!(SweepOptions::with_bands(7).bands, 7);
    }
}
