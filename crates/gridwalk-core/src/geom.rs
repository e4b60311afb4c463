//! Geometry primitives: [`Coord`] and [`Range`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downwards, columns grow to
//! the right, matching how the grid is laid out on screen.

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid coordinate. Signed so that neighbour arithmetic can step outside
/// the grid before being bounds-checked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Unit steps in neighbour order: up, right, down, left.
    pub const CARDINALS: [Coord; 4] = [
        Coord::new(-1, 0),
        Coord::new(0, 1),
        Coord::new(1, 0),
        Coord::new(0, -1),
    ];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four cardinal neighbours (up, right, down, left).
    ///
    /// The order is fixed: search tie-breaking depends on it.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Self::CARDINALS.map(|d| self + d)
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Coord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Coord,
    pub max: Coord,
}

impl Range {
    /// The range `[0, rows) × [0, cols)`.
    #[inline]
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self {
            min: Coord::ZERO,
            max: Coord::new(rows.max(0), cols.max(0)),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether the range has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `c` is inside the half-open range.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= self.min.row
            && c.row < self.max.row
            && c.col >= self.min.col
            && c.col < self.max.col
    }

    /// Row-major flat index of `c`, or `None` if outside.
    #[inline]
    pub fn index_of(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        let r = (c.row - self.min.row) as usize;
        let k = (c.col - self.min.col) as usize;
        Some(r * self.cols() as usize + k)
    }

    /// Row-major iterator over every coordinate in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Coord,
}

impl Iterator for RangeIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.cur.row >= self.range.max.row || self.range.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let w = self.range.cols() as usize;
        let remaining_in_row = (self.range.max.col - self.cur.col) as usize;
        let remaining_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_up_right_down_left() {
        let c = Coord::new(2, 2);
        assert_eq!(
            c.neighbors_4(),
            [
                Coord::new(1, 2),
                Coord::new(2, 3),
                Coord::new(3, 2),
                Coord::new(2, 1),
            ]
        );
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Coord::new(0, 0);
        let b = Coord::new(4, 3);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn range_basics() {
        let r = Range::with_size(2, 3);
        assert_eq!((r.min, r.max), (Coord::ZERO, Coord::new(2, 3)));
        assert_eq!(Range::with_size(-4, 3).len(), 0);
        assert_eq!(r.rows(), 2);
        assert_eq!(r.cols(), 3);
        assert_eq!(r.len(), 6);
        assert!(r.contains(Coord::new(1, 2)));
        assert!(!r.contains(Coord::new(2, 0)));
        assert!(!r.contains(Coord::new(0, -1)));
    }

    #[test]
    fn index_is_row_major() {
        let r = Range::with_size(3, 4);
        assert_eq!(r.index_of(Coord::new(1, 2)), Some(6));
        assert_eq!(r.iter().nth(6), Some(Coord::new(1, 2)));
        assert_eq!(r.index_of(Coord::new(3, 0)), None);
    }

    #[test]
    fn range_iter_count() {
        let r = Range::with_size(2, 3);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(r.iter().len(), 6);
        assert_eq!(pts[0], Coord::new(0, 0));
        assert_eq!(pts[5], Coord::new(1, 2));
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::with_size(0, 5);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
    }
}
