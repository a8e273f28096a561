//! Shape errors for construction and queries.
//!
//! Both kinds are returned eagerly; a malformed input invalidates the whole
//! call and nothing is partially evaluated.

use std::fmt;

/// Construction-time error: the vertex input does not describe a planar ring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// Fewer than 3 vertices.
    TooFewVertices { got: usize },
    /// Matrix input whose vertex axis is not 2-dimensional.
    WrongDimension { got: usize },
    /// Row input where vertex `index` has `len != 2` components.
    RaggedVertex { index: usize, len: usize },
    /// Flat coordinate input with an odd number of values.
    OddCoordinateCount { len: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { got } => {
                write!(f, "polygon needs at least 3 vertices, got {got}")
            }
            Self::WrongDimension { got } => {
                write!(f, "vertices must be planar (2 rows), got {got} rows")
            }
            Self::RaggedVertex { index, len } => write!(
                f,
                "vertex {index} has {len} coordinates (expected exactly 2)"
            ),
            Self::OddCoordinateCount { len } => write!(
                f,
                "flat coordinate list has odd length {len} (expected x,y pairs)"
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Query-time error: the points argument is not one 2D point or a batch of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryShapeError {
    /// Batch input with `got != 2` rows.
    WrongDimension { got: usize },
    /// Single-point input with `len != 2` coordinates.
    PointLength { len: usize },
}

impl fmt::Display for QueryShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongDimension { got } => {
                write!(f, "query batch must have 2 rows, got {got}")
            }
            Self::PointLength { len } => {
                write!(f, "query point must have 2 coordinates, got {len}")
            }
        }
    }
}

impl std::error::Error for QueryShapeError {}
