//! Triangle data: soup, indexing, normals, and renderable buffers.
//!
//! The revolution sweep produces an unindexed [`TriangleSoup`]. The stages
//! in this module turn it into indexed draw data:
//!
//! 1. [`index_triangles`]: one [`IndexedTriangle`] per 3 consecutive soup
//!    positions, position and normal indices equal to the soup offset.
//! 2. [`weld_positions`] (optional): coincident soup positions collapse
//!    onto a canonical index, so seams share normals and vertex slots.
//! 3. [`estimate_vertex_normals`]: face-normal accumulation per position
//!    index, normalized to smooth unit vertex normals.
//! 4. [`consolidate`]: interleaved vertex buffer plus `u32` index buffer,
//!    ready for indexed draw submission.

mod buffers;
mod indexed;
mod normals;
mod soup;
mod weld;

pub use buffers::{consolidate, MeshBuffers, MeshVertex};
pub use indexed::{index_triangles, IndexedTriangle, VertexIndices};
pub use normals::estimate_vertex_normals;
pub use soup::TriangleSoup;
pub use weld::weld_positions;
