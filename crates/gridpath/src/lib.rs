//! **gridpath**: a path-finding engine over keyed occupancy grids.
//!
//! Callers own a [`PathEngine`], load one or more rectangular obstacle maps
//! into it (an unkeyed default map plus any number of named maps), and query
//! shortest paths and line segments between cells.
//!
//! ```
//! use gridpath::{PathEngine, Point};
//!
//! let engine = PathEngine::new();
//! engine.load_map(&[[0, 0, 0], [1, 1, 0], [0, 0, 0]]).unwrap();
//! let path = engine.find_path(Point::new(0, 0), Point::new(0, 2)).unwrap();
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&Point::new(0, 2)));
//! ```
//!
//! The [`boundary`] module exposes the same operations with the flat
//! `[x, y, x, y, ...]` integer encoding used by host bindings.

pub mod boundary;
mod engine;
mod error;
#[cfg(test)]
mod fixtures;
mod registry;

pub use engine::{PathEngine, PathQuery};
pub use error::Error;
pub use gridpath_core::{GridError, GridMap, Point, Range, flatten, unflatten};
pub use gridpath_paths::{Connectivity, SearchConfig, path_cost};
pub use registry::{MapKey, MapRegistry};

/// Crate version, as reported by [`boundary::version`].
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
