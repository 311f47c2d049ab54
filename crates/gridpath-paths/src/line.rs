//! Bresenham line rasterization between two cells.
//!
//! [`line_segment`] traces pure geometry: it never looks at a map, and its
//! endpoints may lie anywhere, including outside any grid. [`clipped_segment`]
//! and [`has_line_of_sight`] intersect that geometry with a [`GridMap`].

use gridpath_core::{GridMap, Point};

/// Cells covered by the straight segment `from -> to`, both ends included.
///
/// Steps are 8-connected. The segment is always rasterized from the smaller
/// endpoint (by `x`, then `y`) and reversed when needed, so
/// `line_segment(b, a)` is exactly `line_segment(a, b)` reversed.
pub fn line_segment(from: Point, to: Point) -> Vec<Point> {
    if to < from {
        let mut cells: Vec<Point> = Bresenham::new(to, from).collect();
        cells.reverse();
        cells
    } else {
        Bresenham::new(from, to).collect()
    }
}

/// Bresenham walk from `from` to `to`.
///
/// Deltas and the error term are kept in `i64`, so any two `i32` endpoints
/// can be traced.
struct Bresenham {
    cur: Point,
    sx: i32,
    sy: i32,
    dx: i64,
    dy: i64,
    err: i64,
    // cells not yet yielded
    left: u64,
}

impl Bresenham {
    fn new(from: Point, to: Point) -> Self {
        let dx = (i64::from(to.x) - i64::from(from.x)).abs();
        let dy = (i64::from(to.y) - i64::from(from.y)).abs();
        Self {
            cur: from,
            sx: if from.x < to.x { 1 } else { -1 },
            sy: if from.y < to.y { 1 } else { -1 },
            dx,
            dy,
            err: dx - dy,
            left: dx.max(dy) as u64 + 1,
        }
    }
}

impl Iterator for Bresenham {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.left == 0 {
            return None;
        }
        let p = self.cur;
        self.left -= 1;
        // Never step past the last cell.
        if self.left > 0 {
            let e2 = 2 * self.err;
            if e2 > -self.dy {
                self.err -= self.dy;
                self.cur.x += self.sx;
            }
            if e2 < self.dx {
                self.err += self.dx;
                self.cur.y += self.sy;
            }
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.left) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// The leading part of `line_segment(from, to)` that stays on passable cells
/// of `map`.
///
/// Tracing stops before the first blocked or out-of-bounds cell, so the
/// result is empty when `from` itself is not passable.
pub fn clipped_segment(map: &GridMap, from: Point, to: Point) -> Vec<Point> {
    if to < from {
        let mut cells = line_segment(from, to);
        let visible = cells
            .iter()
            .position(|&p| !map.passable(p))
            .unwrap_or(cells.len());
        cells.truncate(visible);
        cells
    } else {
        Bresenham::new(from, to)
            .take_while(|&p| map.passable(p))
            .collect()
    }
}

/// Whether every cell of `line_segment(from, to)` is passable on `map`.
pub fn has_line_of_sight(map: &GridMap, from: Point, to: Point) -> bool {
    let (a, b) = if to < from { (to, from) } else { (from, to) };
    Bresenham::new(a, b).all(|p| map.passable(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    #[test]
    fn shallow_slope() {
        assert_eq!(
            line_segment(Point::new(0, 0), Point::new(4, 2)),
            pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)])
        );
    }

    #[test]
    fn reversed_endpoints_reverse_the_cells() {
        let fwd = line_segment(Point::new(0, 0), Point::new(4, 2));
        let mut back = line_segment(Point::new(4, 2), Point::new(0, 0));
        back.reverse();
        assert_eq!(fwd, back);
    }

    #[test]
    fn axis_aligned_and_degenerate() {
        assert_eq!(
            line_segment(Point::new(2, 5), Point::new(2, 2)),
            pts(&[(2, 5), (2, 4), (2, 3), (2, 2)])
        );
        assert_eq!(
            line_segment(Point::new(3, 3), Point::new(3, 3)),
            pts(&[(3, 3)])
        );
        assert_eq!(
            line_segment(Point::new(0, 0), Point::new(3, 3)),
            pts(&[(0, 0), (1, 1), (2, 2), (3, 3)])
        );
    }

    #[test]
    fn ignores_bounds() {
        let cells = line_segment(Point::new(-2, -1), Point::new(2, 1));
        assert_eq!(cells.first(), Some(&Point::new(-2, -1)));
        assert_eq!(cells.last(), Some(&Point::new(2, 1)));
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn clipped_stops_before_wall() {
        let map = GridMap::from_rows(&[[0, 0, 0, 1, 0]]).unwrap();
        assert_eq!(
            clipped_segment(&map, Point::new(0, 0), Point::new(4, 0)),
            pts(&[(0, 0), (1, 0), (2, 0)])
        );
        assert_eq!(
            clipped_segment(&map, Point::new(4, 0), Point::new(0, 0)),
            pts(&[(4, 0)])
        );
        assert!(!has_line_of_sight(&map, Point::new(0, 0), Point::new(4, 0)));
        assert!(has_line_of_sight(&map, Point::new(0, 0), Point::new(2, 0)));
    }

    #[test]
    fn clipped_stops_at_map_edge() {
        let map = GridMap::from_rows(&[[0, 0], [0, 0]]).unwrap();
        assert_eq!(
            clipped_segment(&map, Point::new(0, 0), Point::new(3, 3)),
            pts(&[(0, 0), (1, 1)])
        );
        assert!(clipped_segment(&map, Point::new(-1, 0), Point::new(1, 0)).is_empty());
    }

    #[test]
    fn far_apart_endpoints() {
        let far = Bresenham::new(Point::new(-2, 0), Point::new(i32::MAX, 0));
        assert_eq!(far.size_hint().0 as u64, i32::MAX as u64 + 3);
        assert_eq!(
            far.take(3).collect::<Vec<_>>(),
            pts(&[(-2, 0), (-1, 0), (0, 0)])
        );

        let steep = Bresenham::new(Point::new(0, i32::MIN), Point::new(1, i32::MAX));
        assert_eq!(
            steep.take(2).collect::<Vec<_>>(),
            pts(&[(0, i32::MIN), (0, i32::MIN + 1)])
        );

        let map = GridMap::from_rows(&[[0, 0], [0, 0]]).unwrap();
        let edge = Point::new(i32::MAX, i32::MAX);
        assert_eq!(clipped_segment(&map, Point::ZERO, edge), pts(&[(0, 0), (1, 1)]));
        assert!(!has_line_of_sight(&map, edge, Point::ZERO));
    }

    #[test]
    fn walk_ends_on_extreme_coordinates() {
        let start = Point::new(i32::MAX - 3, i32::MAX - 1);
        let end = Point::new(i32::MAX, i32::MAX);
        let cells: Vec<Point> = Bresenham::new(start, end).collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells.last(), Some(&end));
        assert_eq!(line_segment(end, start).len(), 4);
    }

    proptest! {
        #[test]
        fn swapped_endpoints_cover_same_cells(
            ax in -40i32..40, ay in -40i32..40, bx in -40i32..40, by in -40i32..40,
        ) {
            let (a, b) = (Point::new(ax, ay), Point::new(bx, by));
            let fwd: BTreeSet<Point> = line_segment(a, b).into_iter().collect();
            let back: BTreeSet<Point> = line_segment(b, a).into_iter().collect();
            prop_assert_eq!(fwd, back);
        }

        #[test]
        fn segment_is_connected_and_minimal(
            ax in -40i32..40, ay in -40i32..40, bx in -40i32..40, by in -40i32..40,
        ) {
            let (a, b) = (Point::new(ax, ay), Point::new(bx, by));
            let cells = line_segment(a, b);
            prop_assert_eq!(cells.first(), Some(&a));
            prop_assert_eq!(cells.last(), Some(&b));
            prop_assert_eq!(cells.len() as i32, crate::chebyshev(a, b) + 1);
            for w in cells.windows(2) {
                prop_assert!(w[0].is_adjacent(w[1]));
            }
        }
    }
}
