//! **gridpath-core**: occupancy grids and geometry for the *gridpath* engine.
//!
//! This crate provides the foundational types shared by the search and query
//! layers: integer geometry primitives, the immutable [`GridMap`] obstacle
//! model and the errors raised when building or indexing one.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range, flatten, unflatten};
pub use grid::GridMap;
