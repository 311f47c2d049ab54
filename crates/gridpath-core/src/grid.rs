//! The [`GridMap`] type: an immutable 2D occupancy grid.
//!
//! A `GridMap` is built once from a rectangular integer matrix and never
//! mutated afterwards, so it can be shared between threads behind an `Arc`
//! and read without locking. Replacing a map means building a new one.

use crate::error::GridError;
use crate::geom::{Point, Range};

/// A rectangular grid of blocked/passable cells.
///
/// Cell `(x, y)` comes from `rows[y][x]` of the input matrix; zero means
/// passable, any other value means blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    blocked: Vec<bool>,
    width: usize,
    height: usize,
}

impl GridMap {
    /// Build a map from a row-major integer matrix.
    ///
    /// Fails with [`GridError::EmptyGrid`] when there are no rows or no
    /// columns, and with [`GridError::InvalidShape`] on the first row whose
    /// length differs from the first row's.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 {
            return Err(GridError::EmptyGrid);
        }
        let height = rows.len();

        let mut blocked = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::InvalidShape {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            blocked.extend(row.iter().map(|&v| v != 0));
        }

        Ok(Self {
            blocked,
            width,
            height,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// The map's extent, `[0, width) × [0, height)`.
    #[inline]
    pub fn range(&self) -> Range {
        Range::sized(self.width(), self.height())
    }

    /// Whether `p` lies inside the map.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    /// `Ok(())` if `p` lies inside the map, [`GridError::OutOfBounds`] otherwise.
    pub fn check_bounds(&self, p: Point) -> Result<(), GridError> {
        if self.in_bounds(p) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                pos: p,
                range: self.range(),
            })
        }
    }

    /// Whether the cell at `p` is blocked.
    pub fn is_blocked(&self, p: Point) -> Result<bool, GridError> {
        self.get(p).ok_or(GridError::OutOfBounds {
            pos: p,
            range: self.range(),
        })
    }

    /// The blocked flag at `p`, or `None` outside the map.
    #[inline]
    pub fn get(&self, p: Point) -> Option<bool> {
        self.index(p).map(|i| self.blocked[i])
    }

    /// Whether `p` is inside the map and not blocked.
    ///
    /// Never fails, so search loops can call it on arbitrary neighbors.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.get(p) == Some(false)
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}
