use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the board, addressed as `(row, col)` from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Identifier of the major (top-left to bottom-right) diagonal: `col - row`.
    #[inline]
    pub fn major_diagonal(self) -> isize {
        saturate(self.col).saturating_sub(saturate(self.row))
    }

    /// Identifier of the minor (top-right to bottom-left) diagonal: `col + row`.
    #[inline]
    pub fn minor_diagonal(self) -> isize {
        saturate(self.col).saturating_add(saturate(self.row))
    }

    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// The cell with row and column swapped.
    #[inline]
    pub fn transposed(self) -> Coord {
        Coord::new(self.col, self.row)
    }
}

// Indices past isize::MAX never lie on a board; clamp them instead of wrapping.
#[inline]
fn saturate(v: usize) -> isize {
    isize::try_from(v).unwrap_or(isize::MAX)
}

impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_identifiers() {
        let c = Coord::new(2, 0);
        assert_eq!(c.major_diagonal(), -2);
        assert_eq!(c.minor_diagonal(), 2);

        let c = Coord::new(1, 3);
        assert_eq!(c.major_diagonal(), 2);
        assert_eq!(c.minor_diagonal(), 4);
    }

    #[test]
    fn bounds_are_half_open() {
        assert!(Coord::new(2, 2).in_bounds(3));
        assert!(!Coord::new(3, 0).in_bounds(3));
        assert!(!Coord::ORIGIN.in_bounds(0));
    }
}
