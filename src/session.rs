//! Interactive sculpt session state.
//!
//! The session owns the live control polygon and refinement depth that the
//! viewer mutates between pipeline runs, and exposes the pipeline entry
//! point that turns them into renderable buffers. Keeping this state in one
//! explicit object (instead of globals next to the event loop) is what lets
//! the pipeline stay a pure function of its inputs.

use nalgebra::Point3;

use crate::curve::{refine_open_curve, MAX_DEPTH, MIN_DEPTH};
use crate::error::{Result, SculptError};
use crate::mesh::{
    consolidate, estimate_vertex_normals, index_triangles, weld_positions, MeshBuffers,
};
use crate::sweep::{revolve_profile, SweepOptions};

/// Minimum number of control points the editing API preserves.
///
/// Removal refuses below this floor, so the pipeline never sees a profile
/// it cannot refine into a drawable curve.
pub const MIN_CONTROL_POINTS: usize = 4;

/// The live editing state: control polygon, refinement depth, and sweep
/// configuration.
#[derive(Debug, Clone)]
pub struct SculptSession {
    control_points: Vec<Point3<f64>>,
    depth: usize,
    sweep: SweepOptions,
    weld: bool,
}

impl Default for SculptSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SculptSession {
    /// Create a session with the default diamond profile and depth 1.
    pub fn new() -> Self {
        Self {
            control_points: vec![
                Point3::new(-0.5, 0.0, 0.0),
                Point3::new(0.0, -0.5, 0.0),
                Point3::new(0.5, 0.0, 0.0),
                Point3::new(0.0, 0.5, 0.0),
            ],
            depth: MIN_DEPTH,
            sweep: SweepOptions::default(),
            weld: true,
        }
    }

    // ==================== Control polygon ====================

    /// The ordered control polygon, for display and picking.
    pub fn control_points(&self) -> &[Point3<f64>] {
        &self.control_points
    }

    /// Append a control point at the end of the polygon.
    pub fn add_point(&mut self, point: Point3<f64>) {
        self.control_points.push(point);
    }

    /// Index of the control point closest to `(x, y)` in the profile plane.
    ///
    /// Returns `None` only for an empty polygon, which the editing API never
    /// produces.
    pub fn nearest_point(&self, x: f64, y: f64) -> Option<usize> {
        let mut nearest = None;
        let mut nearest_dist = f64::INFINITY;

        for (i, p) in self.control_points.iter().enumerate() {
            let dist = (x - p.x).hypot(y - p.y);
            if dist < nearest_dist {
                nearest_dist = dist;
                nearest = Some(i);
            }
        }

        nearest
    }

    /// Move a control point to `(x, y)` in the profile plane, keeping its
    /// z coordinate.
    pub fn move_point(&mut self, index: usize, x: f64, y: f64) -> Result<()> {
        let count = self.control_points.len();
        let point = self
            .control_points
            .get_mut(index)
            .ok_or(SculptError::ControlPointOutOfRange { index, count })?;
        point.x = x;
        point.y = y;
        Ok(())
    }

    /// Remove a control point, refusing at the [`MIN_CONTROL_POINTS`] floor.
    pub fn remove_point(&mut self, index: usize) -> Result<()> {
        if self.control_points.len() <= MIN_CONTROL_POINTS {
            return Err(SculptError::ControlPointFloor {
                minimum: MIN_CONTROL_POINTS,
            });
        }
        if index >= self.control_points.len() {
            return Err(SculptError::ControlPointOutOfRange {
                index,
                count: self.control_points.len(),
            });
        }
        self.control_points.remove(index);
        Ok(())
    }

    // ==================== Refinement depth ====================

    /// Current refinement depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Set the refinement depth; out-of-range values are rejected.
    pub fn set_depth(&mut self, depth: usize) -> Result<()> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
            return Err(SculptError::invalid_param(
                "depth",
                depth,
                "must be between 1 and 10",
            ));
        }
        self.depth = depth;
        Ok(())
    }

    /// Step the depth up, saturating at the interactive maximum.
    pub fn increase_depth(&mut self) {
        if self.depth < MAX_DEPTH {
            self.depth += 1;
        }
    }

    /// Step the depth down, saturating at the interactive minimum.
    pub fn decrease_depth(&mut self) {
        if self.depth > MIN_DEPTH {
            self.depth -= 1;
        }
    }

    // ==================== Sweep configuration ====================

    /// The sweep configuration.
    pub fn sweep(&self) -> &SweepOptions {
        &self.sweep
    }

    /// Replace the sweep configuration.
    pub fn set_sweep(&mut self, sweep: SweepOptions) {
        self.sweep = sweep;
    }

    /// Enable or disable position welding (smooth vs. per-corner shading).
    pub fn set_weld(&mut self, weld: bool) {
        self.weld = weld;
    }

    // ==================== Pipeline ====================

    /// The refined profile curve for the current polygon and depth.
    pub fn refined_curve(&self) -> Vec<Point3<f64>> {
        refine_open_curve(&self.control_points, self.depth)
    }

    /// Run the full pipeline and return renderable buffers.
    ///
    /// Every call recomputes every stage from the current control polygon
    /// and depth: refinement, sweep, indexing, optional welding, normal
    /// estimation, consolidation. Nothing is cached between calls; the
    /// mesh is small enough that a full rebuild per interaction tick is the
    /// simpler contract.
    pub fn rebuild(&self) -> MeshBuffers {
        let curve = refine_open_curve(&self.control_points, self.depth);
        let soup = revolve_profile(&curve, &self.sweep);

        let mut triangles = index_triangles(&soup);
        if self.weld {
            weld_positions(&mut triangles, &soup.positions);
        }

        let normals = estimate_vertex_normals(&triangles, &soup.positions);
        consolidate(&triangles, &soup.positions, &normals)
    }
}
