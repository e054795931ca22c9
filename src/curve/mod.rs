//! Profile curve refinement.
//!
//! The user edits a small control polygon; rendering wants a smooth profile.
//! This module bridges the two with corner-cutting subdivision.
//!
//! # Corner-Cutting Subdivision
//!
//! Chaikin's algorithm (Chaikin, 1974) replaces every edge of the polyline
//! with two points at interpolation parameters 1/4 and 3/4 along it. Each
//! pass cuts the corners off the polygon, and the refined polylines converge
//! to a quadratic B-spline curve.
//!
//! Because the scheme operates on edges, the original endpoints are not
//! preserved past the first pass: every iteration pulls the curve ends
//! slightly inward from their former extremities. This crate keeps that
//! behavior rather than pinning the endpoints; see
//! [`refine_open_curve`] for details.
//!
//! # Example
//!
//! ```
//! use lathe::curve::refine_open_curve;
//! use nalgebra::Point3;
//!
//! let square = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//!
//! // Each pass maps a polyline of length L to one of length 2·(L − 1).
//! assert_eq!(refine_open_curve(&square, 1).len(), 6);
//! assert_eq!(refine_open_curve(&square, 2).len(), 10);
//! ```
//!
//! # References
//!
//! - Chaikin, G. (1974). "An algorithm for high-speed curve generation."
//!   Computer Graphics and Image Processing, 3(4), 346-349.

mod chaikin;

pub use chaikin::refine_open_curve;

/// Smallest interactive refinement depth.
pub const MIN_DEPTH: usize = 1;

/// Largest interactive refinement depth.
///
/// Ten passes of corner cutting turn a 4-point polygon into a 2050-point
/// curve, which is already past the point of visible improvement.
pub const MAX_DEPTH: usize = 10;
