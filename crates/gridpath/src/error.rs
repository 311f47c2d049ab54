use std::fmt;

use gridpath_core::GridError;

use crate::registry::MapKey;

/// Errors returned by [`PathEngine`](crate::PathEngine) queries and loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The grid was malformed, or a coordinate fell outside the map.
    Grid(GridError),
    /// No map was ever loaded under this key.
    MapNotFound(MapKey),
}

impl Error {
    /// Whether a load was rejected for its grid shape.
    pub fn is_invalid_shape(&self) -> bool {
        matches!(self, Self::Grid(e) if e.is_invalid_shape())
    }

    /// Whether a query coordinate fell outside the map.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::Grid(GridError::OutOfBounds { .. }))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => fmt::Display::fmt(e, f),
            Self::MapNotFound(key) => write!(f, "no map loaded for key {key}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::MapNotFound(_) => None,
        }
    }
}

impl From<GridError> for Error {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
