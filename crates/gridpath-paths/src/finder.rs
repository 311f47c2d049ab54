//! Shortest paths over a [`GridMap`].

use gridpath_core::{GridError, GridMap, Point};

use crate::PathRange;
use crate::config::{CARDINAL_COST, Connectivity, DIAGONAL_COST, SearchConfig};
use crate::distance::{manhattan_cost, octile};
use crate::neighbors::push_moves;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Adapts a [`GridMap`] and a [`SearchConfig`] to the A* pather traits.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    map: &'a GridMap,
    cfg: SearchConfig,
}

impl<'a> GridPather<'a> {
    pub fn new(map: &'a GridMap, cfg: SearchConfig) -> Self {
        Self { map, cfg }
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        push_moves(p, self.cfg, |q| self.map.passable(q), buf);
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Point, to: Point) -> i64 {
        step_cost(from, to)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i64 {
        match self.cfg.connectivity {
            Connectivity::Four => manhattan_cost(from, to),
            Connectivity::Eight => octile(from, to),
        }
    }
}

#[inline]
fn step_cost(from: Point, to: Point) -> i64 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        CARDINAL_COST
    }
}

/// Find a shortest path on `map` from `from` to `to`.
///
/// - either endpoint outside the map: [`GridError::OutOfBounds`]
/// - either endpoint blocked: empty path (even when `from == to`)
/// - `from == to`: the single cell
/// - no route: empty path
///
/// Each call owns its search state, so concurrent calls on a shared map do
/// not interfere.
pub fn find_path(
    map: &GridMap,
    from: Point,
    to: Point,
    cfg: SearchConfig,
) -> Result<Vec<Point>, GridError> {
    find_path_with(&mut PathRange::new(map.range()), map, from, to, cfg)
}

/// [`find_path`] reusing the caller's search state.
///
/// `search` is resized to the map's range when it differs, so one
/// `PathRange` can serve a run of queries without reallocating.
pub fn find_path_with(
    search: &mut PathRange,
    map: &GridMap,
    from: Point,
    to: Point,
    cfg: SearchConfig,
) -> Result<Vec<Point>, GridError> {
    map.check_bounds(from)?;
    map.check_bounds(to)?;

    if map.is_blocked(from)? || map.is_blocked(to)? {
        return Ok(Vec::new());
    }
    if from == to {
        return Ok(vec![from]);
    }

    if search.range() != map.range() {
        search.set_range(map.range());
    }
    let path = search
        .astar_path(&GridPather::new(map, cfg), from, to)
        .unwrap_or_default();
    Ok(path)
}

/// Total step cost of a cell sequence, in [`CARDINAL_COST`] units.
///
/// Consecutive cells are assumed adjacent.
pub fn path_cost(path: &[Point]) -> i64 {
    path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}
