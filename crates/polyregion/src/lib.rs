//! Winding-number polygon inclusion.
//!
//! A `PolygonRegion` is built once from an ordered vertex list (closed
//! implicitly) and answers winding-number and nonzero-rule containment queries
//! for single points or 2 × M batches. Polygons may be non-convex,
//! self-intersecting, or carry holes as oppositely oriented sub-loops.
//!
//! ```
//! use polyregion::prelude::*;
//!
//! let square = PolygonRegion::from_flat(&[1.0, 1.0, -1.0, 1.0, -1.0, -1.0, 1.0, -1.0]).unwrap();
//! assert_eq!(square.winding_number(Vec2::new(0.0, 0.0)), 1);
//! assert!(!square.contains(Vec2::new(1.5, 0.5)));
//! assert_eq!(square.reversed().winding_number(Vec2::new(0.0, 0.0)), -1);
//! ```

pub mod rand;
pub mod region;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use region::{Aabb2, PolygonRegion, QueryShapeError, RegionCfg, ShapeError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{
        draw_star_polygon, draw_vertex_soup, sample_points, ReplayToken, StarCfg, VertexCount,
    };
    pub use crate::region::{Aabb2, PolygonRegion, QueryShapeError, RegionCfg, ShapeError};
    pub use nalgebra::{Matrix2xX as Points2, Vector2 as Vec2};
}
