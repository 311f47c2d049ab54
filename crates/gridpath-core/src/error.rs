use std::fmt;

use crate::geom::{Point, Range};

/// Errors raised while building or indexing a [`GridMap`](crate::GridMap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input matrix has no rows, or its first row has no columns.
    EmptyGrid,
    /// Row `row` has `found` cells where `expected` were required.
    InvalidShape {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// `pos` lies outside the map's extent `range`.
    OutOfBounds { pos: Point, range: Range },
}

impl GridError {
    /// Whether this error rejects the shape of a grid at load time.
    pub fn is_invalid_shape(&self) -> bool {
        matches!(self, Self::EmptyGrid | Self::InvalidShape { .. })
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::InvalidShape {
                row,
                expected,
                found,
            } => write!(
                f,
                "ragged grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::OutOfBounds { pos, range } => {
                write!(f, "coordinate {pos} is outside map bounds {range}")
            }
        }
    }
}

impl std::error::Error for GridError {}
