//! Chaikin corner cutting for open polylines.

use nalgebra::Point3;

/// Interpolation parameters of the two cut points emitted per edge.
const CUT_NEAR: f64 = 0.25;
const CUT_FAR: f64 = 0.75;

/// Refine an open polyline by `depth` passes of corner-cutting subdivision.
///
/// For every adjacent pair of points, each pass emits two new points at
/// parameters 1/4 and 3/4 along the segment; the emitted sequence feeds the
/// next pass. The output length follows the recurrence `L₀ = N`,
/// `Lₖ = 2·(Lₖ₋₁ − 1)`.
///
/// The curve endpoints are **not** pinned: every pass moves the curve ends
/// inward, away from the first and last control point. Callers that need an
/// anchored curve must append anchor geometry themselves.
///
/// A `depth` of 0 returns the input unchanged. Fewer than 2 input points
/// yield an empty curve, since there is no segment to cut.
///
/// This is a pure function: the result depends only on the arguments, and
/// identical inputs produce identical outputs.
pub fn refine_open_curve(points: &[Point3<f64>], depth: usize) -> Vec<Point3<f64>> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut curve = points.to_vec();
    for _ in 0..depth {
        curve = cut_corners(&curve);
    }
    curve
}

/// One corner-cutting pass over an open polyline.
fn cut_corners(points: &[Point3<f64>]) -> Vec<Point3<f64>> {
    let mut out = Vec::with_capacity(2 * points.len().saturating_sub(1));

    for pair in points.windows(2) {
        out.push(lerp(&pair[0], &pair[1], CUT_NEAR));
        out.push(lerp(&pair[0], &pair[1], CUT_FAR));
    }

    out
}

fn lerp(a: &Point3<f64>, b: &Point3<f64>, t: f64) -> Point3<f64> {
    Point3::from(a.coords.lerp(&b.coords, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Vec<Point3<f64>> {
        vec![
            Point3::new(-0.5, 0.0, 0.0),
            Point3::new(0.0, -0.5, 0.0),
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(0.0, 0.5, 0.0),
        ]
    }

    #[test]
    fn test_length_recurrence() {
        let points = diamond();

        // L₀ = 4, Lₖ = 2·(Lₖ₋₁ − 1): 4 → 6 → 10 → 18 → ...
        let mut expected = points.len();
        for depth in 1..=6 {
            expected = 2 * (expected - 1);
            assert_eq!(refine_open_curve(&points, depth).len(), expected);
        }
    }

    #[test]
    fn test_single_pass_positions() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 4.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        ];
        let refined = refine_open_curve(&points, 1);

        assert_eq!(refined.len(), 6);
        let expected = [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(4.0, 1.0, 0.0),
            Point3::new(4.0, 3.0, 0.0),
            Point3::new(3.0, 4.0, 0.0),
            Point3::new(1.0, 4.0, 0.0),
        ];
        for (got, want) in refined.iter().zip(expected.iter()) {
            assert!((got - want).norm() < 1e-12);
        }
    }

    #[test]
    fn test_deterministic() {
        let points = diamond();
        let a = refine_open_curve(&points, 5);
        let b = refine_open_curve(&points, 5);

        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(b.iter()) {
            // Bit-identical, not just within tolerance.
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn test_endpoints_drift_inward() {
        // A straight polyline along X: the first refined point must sit
        // strictly inside the original extent, and drift further with depth.
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        ];

        let mut prev_start = points[0].x;
        let mut prev_end = points[3].x;
        for depth in 1..=4 {
            let refined = refine_open_curve(&points, depth);
            let start = refined.first().unwrap().x;
            let end = refined.last().unwrap().x;

            assert!(start > prev_start);
            assert!(end < prev_end);
            prev_start = start;
            prev_end = end;
        }
    }

    #[test]
    fn test_depth_zero_is_identity() {
        let points = diamond();
        assert_eq!(refine_open_curve(&points, 0), points);
    }

    #[test]
    fn test_short_input_yields_empty_curve() {
        assert!(refine_open_curve(&[], 1).is_empty());
        assert!(refine_open_curve(&[Point3::new(1.0, 2.0, 3.0)], 3).is_empty());
    }

    #[test]
    fn test_two_points_collapse_toward_midpoint() {
        // A single segment keeps producing two points, each pass pulling
        // them toward the segment midpoint.
        let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];

        let refined = refine_open_curve(&points, 1);
        assert_eq!(refined.len(), 2);
        assert!((refined[0].x - 0.25).abs() < 1e-12);
        assert!((refined[1].x - 0.75).abs() < 1e-12);
    }
}
