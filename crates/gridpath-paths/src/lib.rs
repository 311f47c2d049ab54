//! Path search and line tracing for occupancy grids.
//!
//! - **A\*** shortest-path search ([`PathRange::astar_path`], or the
//!   map-level [`find_path`])
//! - **Line tracing** with Bresenham rasterization ([`line_segment`]) and an
//!   obstacle-aware variant ([`clipped_segment`])
//!
//! Searches run through [`PathRange`], which owns the node cache so that a
//! single owner can repeat queries without reallocating ([`find_path_with`]).
//! Query layers that serve several threads create one per call instead.
//!
//! Costs are `i64`, in units of [`CARDINAL_COST`] per straight step.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | positive step costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic |

mod astar;
mod config;
mod distance;
mod finder;
mod line;
mod neighbors;
mod pathrange;
mod traits;

pub use config::{CARDINAL_COST, Connectivity, DIAGONAL_COST, SearchConfig};
pub use distance::{chebyshev, manhattan, manhattan_cost, octile};
pub use finder::{GridPather, find_path, find_path_with, path_cost};
pub use line::{clipped_segment, has_line_of_sight, line_segment};
pub use neighbors::{CARDINALS, DIAGONALS, push_moves};
pub use pathrange::{PathRange, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
