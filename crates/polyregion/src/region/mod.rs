//! Immutable polygon region with winding-number queries.
//!
//! Purpose
//! - Build a closed vertex ring once, freeze its edge vectors and left-normal
//!   helpers, and answer winding-number / containment queries for single
//!   points or batches.
//!
//! Conventions
//! - Counter-clockwise vertex order gives positive winding inside; clockwise
//!   gives the negated value. Sub-loops encoded in one vertex sequence add
//!   algebraically, so an inner loop with opposite orientation carves a hole.
//! - Points on an edge's supporting line get no contribution from that edge.
//!   On a CCW square this puts the left and bottom sides inside and the right
//!   and top sides outside.
//! - Batches are 2 × M matrices with one point per column. Single points and
//!   batches are separate operations; the `_dyn` variants accept untyped
//!   shapes and report `QueryShapeError`.
//!
//! Reference: D. Sunday, "Inclusion of a point in a polygon",
//! <https://geomalgorithms.com/a03-_inclusion.html>.

mod error;
mod kernel;
mod types;

pub use error::{QueryShapeError, ShapeError};
pub use types::{Aabb2, RegionCfg};

use nalgebra::{DMatrix, DVector, Matrix2xX, Vector2};
use tracing::{debug, trace};

use kernel::col;

/// Planar polygon region, fixed at construction.
///
/// Invariants:
/// - `ring` has N+1 columns (N ≥ 3) and its last column repeats the first.
/// - `edges` and `helper` have N columns; `helper[:, j] = (-e_j.y, e_j.x)`.
/// - Nothing is mutable after construction; accessors hand out shared views.
#[derive(Clone, Debug)]
pub struct PolygonRegion {
    ring: Matrix2xX<f64>,
    edges: Matrix2xX<f64>,
    helper: Matrix2xX<f64>,
    bbox: Aabb2,
    cfg: RegionCfg,
}

impl PolygonRegion {
    /// Build from an ordered vertex list with the default config.
    pub fn new(vertices: &[Vector2<f64>]) -> Result<Self, ShapeError> {
        Self::with_cfg(vertices, RegionCfg::default())
    }

    /// Build from an ordered vertex list.
    pub fn with_cfg(vertices: &[Vector2<f64>], cfg: RegionCfg) -> Result<Self, ShapeError> {
        let n = vertices.len();
        if n < 3 {
            return Err(ShapeError::TooFewVertices { got: n });
        }
        let bbox = Aabb2::from_points(vertices).ok_or(ShapeError::TooFewVertices { got: n })?;
        debug!(
            vertices = n,
            lo_x = bbox.lo.x,
            lo_y = bbox.lo.y,
            hi_x = bbox.hi.x,
            hi_y = bbox.hi.y,
            bbox_reject = cfg.bbox_reject,
            "polygon region built"
        );
        Ok(Self::build(vertices, bbox, cfg))
    }

    /// Close the ring and derive edges and helpers. Pre: `vertices.len() >= 3`.
    fn build(vertices: &[Vector2<f64>], bbox: Aabb2, cfg: RegionCfg) -> Self {
        let n = vertices.len();
        let ring = Matrix2xX::from_fn(n + 1, |r, c| vertices[c % n][r]);
        let edges = Matrix2xX::from_fn(n, |r, c| ring[(r, c + 1)] - ring[(r, c)]);
        // Left normal of each edge: side = tail · helper = edge × tail.
        let helper = Matrix2xX::from_fn(n, |r, c| {
            if r == 0 {
                -edges[(1, c)]
            } else {
                edges[(0, c)]
            }
        });
        Self {
            ring,
            edges,
            helper,
            bbox,
            cfg,
        }
    }

    /// Build from a (2, N) matrix whose columns are vertices.
    pub fn from_matrix(vertices: &DMatrix<f64>) -> Result<Self, ShapeError> {
        if vertices.nrows() != 2 {
            return Err(ShapeError::WrongDimension {
                got: vertices.nrows(),
            });
        }
        let pts: Vec<Vector2<f64>> = (0..vertices.ncols())
            .map(|c| Vector2::new(vertices[(0, c)], vertices[(1, c)]))
            .collect();
        Self::new(&pts)
    }

    /// Build from one coordinate row per vertex; every row must have length 2.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let mut pts = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            match row {
                [x, y] => pts.push(Vector2::new(*x, *y)),
                _ => {
                    return Err(ShapeError::RaggedVertex {
                        index,
                        len: row.len(),
                    })
                }
            }
        }
        Self::new(&pts)
    }

    /// Build from interleaved coordinates `[x0, y0, x1, y1, ...]`.
    pub fn from_flat(coords: &[f64]) -> Result<Self, ShapeError> {
        if coords.len() % 2 != 0 {
            return Err(ShapeError::OddCoordinateCount { len: coords.len() });
        }
        let pts: Vec<Vector2<f64>> = coords
            .chunks_exact(2)
            .map(|xy| Vector2::new(xy[0], xy[1]))
            .collect();
        Self::new(&pts)
    }

    /// Same shape traversed in the opposite direction (winding numbers negate).
    pub fn reversed(&self) -> Self {
        let n = self.num_edges();
        let pts: Vec<Vector2<f64>> = (0..n).rev().map(|c| col(&self.ring, c)).collect();
        Self::build(&pts, self.bbox, self.cfg)
    }

    /// Number of edges N (equal to the number of input vertices).
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.ncols()
    }

    /// Closed vertex ring, 2 × (N+1); the last column repeats the first.
    #[inline]
    pub fn vertices(&self) -> &Matrix2xX<f64> {
        &self.ring
    }

    /// Edge vectors, 2 × N, in input order.
    #[inline]
    pub fn edges(&self) -> &Matrix2xX<f64> {
        &self.edges
    }

    /// Left normals `(-e.y, e.x)` of the edges, 2 × N.
    #[inline]
    pub fn cross_helper(&self) -> &Matrix2xX<f64> {
        &self.helper
    }

    #[inline]
    pub fn bounding_box(&self) -> Aabb2 {
        self.bbox
    }

    #[inline]
    pub fn cfg(&self) -> RegionCfg {
        self.cfg
    }

    /// Winding number of a single point. Counter-clockwise is positive.
    pub fn winding_number(&self, p: Vector2<f64>) -> i32 {
        if self.cfg.bbox_reject && self.bbox.strictly_excludes(p) {
            return 0;
        }
        kernel::winding_number_at(&self.ring, &self.helper, p)
    }

    /// Winding numbers for a batch of points (one per column).
    pub fn winding_numbers(&self, pts: &Matrix2xX<f64>) -> DVector<i32> {
        if !self.cfg.bbox_reject {
            trace!(points = pts.ncols(), edges = self.num_edges(), "winding batch");
            return kernel::winding_numbers(&self.ring, &self.helper, pts);
        }
        let kept: Vec<usize> = (0..pts.ncols())
            .filter(|&i| !self.bbox.strictly_excludes(col(pts, i)))
            .collect();
        trace!(
            points = pts.ncols(),
            rejected = pts.ncols() - kept.len(),
            edges = self.num_edges(),
            "winding batch"
        );
        let sub = Matrix2xX::from_fn(kept.len(), |r, c| pts[(r, kept[c])]);
        let sub_wn = kernel::winding_numbers(&self.ring, &self.helper, &sub);
        let mut wn = DVector::zeros(pts.ncols());
        for (k, &i) in kept.iter().enumerate() {
            wn[i] = sub_wn[k];
        }
        wn
    }

    /// Winding numbers for a slice of points.
    pub fn winding_numbers_of(&self, pts: &[Vector2<f64>]) -> Vec<i32> {
        let m = Matrix2xX::from_fn(pts.len(), |r, c| pts[c][r]);
        self.winding_numbers(&m).iter().copied().collect()
    }

    /// Single point given as an untyped coordinate slice.
    pub fn winding_number_dyn(&self, p: &[f64]) -> Result<i32, QueryShapeError> {
        match *p {
            [x, y] => Ok(self.winding_number(Vector2::new(x, y))),
            _ => Err(QueryShapeError::PointLength { len: p.len() }),
        }
    }

    /// Batch given as an untyped matrix; must have exactly 2 rows.
    pub fn winding_numbers_dyn(&self, pts: &DMatrix<f64>) -> Result<DVector<i32>, QueryShapeError> {
        if pts.nrows() != 2 {
            return Err(QueryShapeError::WrongDimension { got: pts.nrows() });
        }
        let m = Matrix2xX::from_fn(pts.ncols(), |r, c| pts[(r, c)]);
        Ok(self.winding_numbers(&m))
    }

    /// Nonzero-rule containment of a single point.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.winding_number(p) != 0
    }

    /// Nonzero-rule containment for a batch of points (one per column).
    pub fn contains_all(&self, pts: &Matrix2xX<f64>) -> DVector<bool> {
        self.winding_numbers(pts).map(|w| w != 0)
    }

    pub fn contains_of(&self, pts: &[Vector2<f64>]) -> Vec<bool> {
        self.winding_numbers_of(pts)
            .into_iter()
            .map(|w| w != 0)
            .collect()
    }

    pub fn contains_dyn(&self, p: &[f64]) -> Result<bool, QueryShapeError> {
        self.winding_number_dyn(p).map(|w| w != 0)
    }

    pub fn contains_all_dyn(&self, pts: &DMatrix<f64>) -> Result<DVector<bool>, QueryShapeError> {
        self.winding_numbers_dyn(pts).map(|wn| wn.map(|w| w != 0))
    }
}
