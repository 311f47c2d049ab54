use gridpath_core::Point;

use crate::config::{Connectivity, SearchConfig};

/// Cardinal step offsets in enumeration order: north, east, south, west.
pub const CARDINALS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// Diagonal step offsets in enumeration order: NE, SE, SW, NW.
pub const DIAGONALS: [Point; 4] = [
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// Append the cells one legal step away from `p` into `buf`.
///
/// Cardinal moves come first, then diagonals, each in the order of
/// [`CARDINALS`] and [`DIAGONALS`]. `passable` decides which cells may be
/// entered; without corner cutting, a diagonal also needs both of the
/// cardinal cells it passes between to be passable.
pub fn push_moves(
    p: Point,
    cfg: SearchConfig,
    passable: impl Fn(Point) -> bool,
    buf: &mut Vec<Point>,
) {
    for d in CARDINALS {
        let n = p + d;
        if passable(n) {
            buf.push(n);
        }
    }
    if cfg.connectivity == Connectivity::Four {
        return;
    }
    for d in DIAGONALS {
        let n = p + d;
        if !passable(n) {
            continue;
        }
        if !cfg.corner_cutting && !(passable(p.shift(d.x, 0)) && passable(p.shift(0, d.y))) {
            continue;
        }
        buf.push(n);
    }
}
