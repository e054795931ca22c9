//! # Lathe
//!
//! An interactive solid-of-revolution sculptor: edit a small 2D control
//! polygon and watch it rendered as a 3D solid.
//!
//! The library is the geometry-processing pipeline that turns the control
//! polygon into renderable triangle data. It runs as a strict sequence of
//! pure stages, recomputed in full on every interaction tick:
//!
//! 1. **Curve refinement**: corner-cutting (Chaikin) subdivision of the
//!    open control polyline ([`curve`]).
//! 2. **Revolution meshing**: sweeping the refined profile around an axis
//!    in discrete angular bands, producing a triangle soup ([`sweep`]).
//! 3. **Indexing**: assigning position/texcoord/normal index triples to
//!    each soup triangle ([`mesh::index_triangles`]).
//! 4. **Normal estimation**: accumulating face normals per shared position
//!    into smooth unit vertex normals ([`mesh::estimate_vertex_normals`]).
//! 5. **Consolidation**: merging positions, normals, and placeholder
//!    texcoords into a vertex buffer and matching index buffer
//!    ([`mesh::consolidate`]).
//!
//! Window setup, input handling, and GPU submission live in the `lathe-view`
//! binary; the library holds no rendering state.
//!
//! ## Quick Start
//!
//! ```
//! use lathe::prelude::*;
//!
//! let mut session = SculptSession::new();
//! session.increase_depth();
//!
//! let buffers = session.rebuild();
//! assert_eq!(buffers.index_count() % 3, 0);
//! ```
//!
//! ## Driving the stages directly
//!
//! ```
//! use lathe::prelude::*;
//! use nalgebra::Point3;
//!
//! let profile = vec![
//!     Point3::new(-0.5, 0.0, 0.0),
//!     Point3::new(0.0, -0.5, 0.0),
//!     Point3::new(0.5, 0.0, 0.0),
//!     Point3::new(0.0, 0.5, 0.0),
//! ];
//!
//! let refined = refine_open_curve(&profile, 2);
//! assert_eq!(refined.len(), 10);
//!
//! let soup = revolve_profile(&refined, &SweepOptions::default());
//! assert_eq!(soup.num_triangles(), 72 * (refined.len() - 1) * 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod curve;
pub mod error;
pub mod mesh;
pub mod session;
pub mod sweep;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use lathe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::curve::refine_open_curve;
    pub use crate::error::{Result, SculptError};
    pub use crate::mesh::{
        consolidate, estimate_vertex_normals, index_triangles, weld_positions, IndexedTriangle,
        MeshBuffers, MeshVertex, TriangleSoup, VertexIndices,
    };
    pub use crate::session::SculptSession;
    pub use crate::sweep::{revolve_profile, SweepOptions};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
