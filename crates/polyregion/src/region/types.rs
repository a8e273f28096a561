//! Small value types carried by `PolygonRegion`.
//!
//! - `RegionCfg`: query-time switches fixed at construction.
//! - `Aabb2`: axis-aligned bounding box of the raw vertices.

use nalgebra::Vector2;

/// Region configuration.
///
/// Every setting is a pure optimization switch; winding numbers are the same
/// for any combination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionCfg {
    /// Report 0 for points strictly outside the bounding box without running
    /// the crossing kernel on them.
    pub bbox_reject: bool,
}

/// Closed axis-aligned box `[lo.x, hi.x] × [lo.y, hi.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2 {
    pub lo: Vector2<f64>,
    pub hi: Vector2<f64>,
}

impl Aabb2 {
    /// Tight box around `points`; `None` for an empty slice.
    pub fn from_points(points: &[Vector2<f64>]) -> Option<Self> {
        let first = *points.first()?;
        let (lo, hi) = points[1..].iter().fold((first, first), |(lo, hi), p| {
            (
                Vector2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Vector2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(Self { lo, hi })
    }

    /// Closed membership (boundary counts as inside).
    #[inline]
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        p.x >= self.lo.x && p.x <= self.hi.x && p.y >= self.lo.y && p.y <= self.hi.y
    }

    /// True only when `p` is strictly outside. NaN coordinates are never
    /// reported as outside.
    #[inline]
    pub(crate) fn strictly_excludes(&self, p: Vector2<f64>) -> bool {
        p.x < self.lo.x || p.x > self.hi.x || p.y < self.lo.y || p.y > self.hi.y
    }

    #[inline]
    pub fn extent(&self) -> Vector2<f64> {
        self.hi - self.lo
    }
}
