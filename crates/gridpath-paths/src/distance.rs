use gridpath_core::Point;

use crate::config::{CARDINAL_COST, DIAGONAL_COST};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[inline]
fn deltas(a: Point, b: Point) -> (i64, i64) {
    (
        (i64::from(a.x) - i64::from(b.x)).abs(),
        (i64::from(a.y) - i64::from(b.y)).abs(),
    )
}

/// Manhattan distance in search cost units: the cost of the cheapest
/// 4-connected walk on an empty grid.
#[inline]
pub fn manhattan_cost(a: Point, b: Point) -> i64 {
    let (dx, dy) = deltas(a, b);
    CARDINAL_COST * (dx + dy)
}

/// Octile distance in search cost units: the cost of the cheapest
/// 8-connected walk on an empty grid.
#[inline]
pub fn octile(a: Point, b: Point) -> i64 {
    let (dx, dy) = deltas(a, b);
    CARDINAL_COST * dx.max(dy) + (DIAGONAL_COST - CARDINAL_COST) * dx.min(dy)
}
