//! Rows, columns and diagonals: identifiers and the cells each one covers.

use std::fmt;
use std::ops::{Range, RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

/// The four families of lines a piece can attack along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineFamily {
    Row,
    Col,
    /// Constant `col - row`.
    MajorDiagonal,
    /// Constant `col + row`.
    MinorDiagonal,
}

impl LineFamily {
    pub const ALL: [LineFamily; 4] = [
        LineFamily::Row,
        LineFamily::Col,
        LineFamily::MajorDiagonal,
        LineFamily::MinorDiagonal,
    ];

    /// Every valid line index of this family on a board of `size`.
    ///
    /// Rows and columns run `0..size`, major diagonals `-(size-1)..=size-1`,
    /// minor diagonals `0..=2*size-2`. All ranges are empty when `size == 0`.
    pub fn index_range(self, size: usize) -> RangeInclusive<isize> {
        let n = size as isize;
        match self {
            LineFamily::Row | LineFamily::Col => 0..=n - 1,
            LineFamily::MajorDiagonal => -(n - 1)..=n - 1,
            LineFamily::MinorDiagonal => 0..=2 * n - 2,
        }
    }

    /// The line of this family with the given index. Negative row/column
    /// indices name no line and map to `None`.
    pub fn line(self, index: isize) -> Option<Line> {
        match self {
            LineFamily::Row => usize::try_from(index).ok().map(Line::Row),
            LineFamily::Col => usize::try_from(index).ok().map(Line::Col),
            LineFamily::MajorDiagonal => Some(Line::MajorDiagonal(index)),
            LineFamily::MinorDiagonal => Some(Line::MinorDiagonal(index)),
        }
    }

    /// All lines of this family in index order.
    pub fn lines(self, size: usize) -> impl Iterator<Item = Line> {
        self.index_range(size).filter_map(move |i| self.line(i))
    }

    /// The line of this family passing through `c`.
    #[inline]
    pub fn through(self, c: Coord) -> Line {
        match self {
            LineFamily::Row => Line::Row(c.row),
            LineFamily::Col => Line::Col(c.col),
            LineFamily::MajorDiagonal => Line::MajorDiagonal(c.major_diagonal()),
            LineFamily::MinorDiagonal => Line::MinorDiagonal(c.minor_diagonal()),
        }
    }
}

impl fmt::Display for LineFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineFamily::Row => "row",
            LineFamily::Col => "column",
            LineFamily::MajorDiagonal => "major diagonal",
            LineFamily::MinorDiagonal => "minor diagonal",
        };
        f.write_str(name)
    }
}

/// A single line on the board, identified by family and index.
///
/// A line may name indices outside the board; such a line simply has no cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "family", content = "index", rename_all = "snake_case")]
pub enum Line {
    Row(usize),
    Col(usize),
    MajorDiagonal(isize),
    MinorDiagonal(isize),
}

impl Line {
    pub fn family(self) -> LineFamily {
        match self {
            Line::Row(_) => LineFamily::Row,
            Line::Col(_) => LineFamily::Col,
            Line::MajorDiagonal(_) => LineFamily::MajorDiagonal,
            Line::MinorDiagonal(_) => LineFamily::MinorDiagonal,
        }
    }

    /// Number of cells of this line that lie on a board of `size`.
    #[inline]
    pub fn len(self, size: usize) -> usize {
        self.span(size).len()
    }

    #[inline]
    pub fn is_empty(self, size: usize) -> bool {
        self.span(size).is_empty()
    }

    /// The cells of this line clipped to a board of `size`, in increasing row
    /// order (increasing column order for rows).
    pub fn cells(self, size: usize) -> impl Iterator<Item = Coord> {
        self.span(size).map(move |t| self.cell_at(t))
    }

    /// Range of the free parameter `t` for which `cell_at(t)` lies on the board.
    ///
    /// `t` is the column for rows and the row for every other family. For
    /// diagonals the range is solved in closed form from the line equation,
    /// clipped to `[0, size)` on both axes.
    fn span(self, size: usize) -> Range<usize> {
        let n = size as isize;
        let (lo, hi) = match self {
            Line::Row(i) | Line::Col(i) => {
                if i < size {
                    (0, n)
                } else {
                    (0, 0)
                }
            }
            // col = row + d
            Line::MajorDiagonal(d) => (0isize.saturating_sub(d).max(0), n.saturating_sub(d).min(n)),
            // col = d - row
            Line::MinorDiagonal(d) => (d.saturating_sub(n - 1).max(0), d.saturating_add(1).min(n)),
        };
        if lo < hi {
            lo as usize..hi as usize
        } else {
            0..0
        }
    }

    #[inline]
    fn cell_at(self, t: usize) -> Coord {
        match self {
            Line::Row(i) => Coord::new(i, t),
            Line::Col(j) => Coord::new(t, j),
            Line::MajorDiagonal(d) => Coord::new(t, (t as isize + d) as usize),
            Line::MinorDiagonal(d) => Coord::new(t, (d - t as isize) as usize),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Line::Row(i) | Line::Col(i) => write!(f, "{} {i}", self.family()),
            Line::MajorDiagonal(d) | Line::MinorDiagonal(d) => write!(f, "{} {d}", self.family()),
        }
    }
}
