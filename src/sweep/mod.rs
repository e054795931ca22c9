//! Revolution meshing.
//!
//! A surface of revolution is generated by rotating a 2D profile curve
//! through a full turn around a fixed axis. This module discretizes that
//! rotation into angular bands: each band is the profile rotated by a
//! multiple of the band angle, and each pair of adjacent bands is bridged
//! with two triangles per profile segment.
//!
//! The output is a [`TriangleSoup`](crate::mesh::TriangleSoup): every quad
//! corner is emitted anew, with no index sharing. Indexing, normal
//! estimation, and vertex consolidation are separate downstream stages in
//! [`crate::mesh`].
//!
//! # Example
//!
//! ```
//! use lathe::sweep::{revolve_profile, SweepOptions};
//! use nalgebra::Point3;
//!
//! let profile = vec![
//!     Point3::new(0.5, -0.5, 0.0),
//!     Point3::new(0.7, 0.0, 0.0),
//!     Point3::new(0.5, 0.5, 0.0),
//! ];
//!
//! let soup = revolve_profile(&profile, &SweepOptions::default());
//! // bands · (profile length − 1) · 2 triangles
//! assert_eq!(soup.num_triangles(), 72 * 2 * 2);
//! ```

mod revolve;

pub use revolve::revolve_profile;

use nalgebra::{Unit, Vector3};

/// Minimum number of angular bands for a closed sweep.
const MIN_BANDS: u32 = 3;

/// Configuration of the rotational sweep.
///
/// The defaults reproduce the classic lathe discretization: 72 bands of 5°
/// around the +Y axis, covering a full turn. The band count is the only
/// resolution knob; the sweep always closes on itself after 360°.
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// Axis of revolution through the origin.
    pub axis: Unit<Vector3<f64>>,
    /// Number of angular bands; the band angle is `2π / bands`.
    pub bands: u32,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            axis: Vector3::y_axis(),
            bands: 72,
        }
    }
}

impl SweepOptions {
    /// Create options with the given band count, clamped to at least 3
    /// (fewer bands cannot enclose the axis).
    pub fn with_bands(bands: u32) -> Self {
        Self {
            bands: bands.max(MIN_BANDS),
            ..Default::default()
        }
    }

    /// Set the axis of revolution.
    pub fn with_axis(mut self, axis: Unit<Vector3<f64>>) -> Self {
        self.axis = axis;
        self
    }

    /// The angle between adjacent bands, in radians.
    pub fn band_angle(&self) -> f64 {
        std::f64::consts::TAU / f64::from(self.bands)
    }
}
