//! The N×N board and its conflict queries.
//!
//! A [`Board`] stores occupancy only; it does not know which piece stands on a cell. Conflict
//! queries count occupied cells per line: a line is in conflict when it holds **more than one**
//! piece. Which line families matter is decided by the caller (or by a [`PieceKind`]):
//!
//! - rooks attack along rows and columns
//! - queens additionally attack along both diagonal families
//!
//! Line queries accept any index. An index naming a line that does not exist on this board
//! (a row past the edge, a diagonal beyond the corners) has no cells and therefore no conflict.

pub mod lines;
pub mod observer;

use std::fmt;

use tracing::{debug, warn};

use crate::chess::piece::PieceKind;
use crate::core::coord::Coord;
use crate::error::BoardError;
use self::lines::{Line, LineFamily};
use self::observer::{BoardChange, Observers, SubscriptionId};

/// A square grid of occupied / empty cells, stored row-major.
///
/// Cloning a board copies its cells but not its subscribers.
#[derive(Debug, Default)]
pub struct Board {
    size: usize,
    cells: Vec<bool>,
    observers: Observers,
}

impl Board {
    /// Largest size whose `size * size` cell count fits in a `usize`.
    pub const MAX_SIZE: usize = (1 << (usize::BITS / 2)) - 1;

    /// An empty board of `size × size` cells.
    ///
    /// # Panics
    ///
    /// If `size > Board::MAX_SIZE`. Use [`Board::try_empty`] for sizes that are not known to fit.
    pub fn empty(size: usize) -> Self {
        assert!(
            size <= Self::MAX_SIZE,
            "board size {size} exceeds Board::MAX_SIZE ({})",
            Self::MAX_SIZE
        );
        debug!(size, "creating empty board");
        Self {
            size,
            cells: vec![false; size * size],
            observers: Observers::new(),
        }
    }

    /// Like [`Board::empty`], for sizes that arrive untyped (e.g. from a board file).
    ///
    /// Negative sizes and sizes above [`Board::MAX_SIZE`] fail with `InvalidSize`.
    pub fn try_empty(size: i64) -> Result<Self, BoardError> {
        let invalid = || BoardError::InvalidSize {
            size: size.to_string(),
            max: Self::MAX_SIZE,
        };
        let size = usize::try_from(size).map_err(|_| invalid())?;
        if size > Self::MAX_SIZE {
            return Err(invalid());
        }
        Ok(Self::empty(size))
    }

    /// Builds a board from explicit rows. The board size is the number of rows, and every row
    /// must have exactly that many cells.
    ///
    /// Values are normalized: anything other than `T::default()` (zero, `false`) is occupied.
    pub fn from_matrix<R, T>(matrix: &[R]) -> Result<Self, BoardError>
    where
        R: AsRef<[T]>,
        T: Copy + Default + PartialEq,
    {
        let size = matrix.len();
        if size > Self::MAX_SIZE {
            return Err(BoardError::InvalidSize {
                size: size.to_string(),
                max: Self::MAX_SIZE,
            });
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in matrix.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::InvalidShape {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend(values.iter().map(|&v| v != T::default()));
        }
        let board = Self {
            size,
            cells,
            observers: Observers::new(),
        };
        debug!(size, pieces = board.piece_count(), "created board from matrix");
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        Coord::new(row, col).in_bounds(self.size)
    }

    /// Whether `c` holds a piece. Cells off the board are empty.
    #[inline]
    pub fn is_occupied(&self, c: Coord) -> bool {
        c.in_bounds(self.size) && self.cells[self.index(c)]
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&occ| occ).count()
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &occ)| occ)
            .map(move |(i, _)| Coord::new(i / self.size, i % self.size))
    }

    /// Snapshot of the grid as rows of `0` / `1`.
    ///
    /// The returned rows are owned; editing them does not touch the board.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|&occ| occ as u8).collect())
            .collect()
    }

    /// Flips the cell at `(row, col)` between empty and occupied and returns its new state.
    ///
    /// Subscribers are notified once, after the cell has changed. An out-of-range cell is
    /// rejected without mutating the board or notifying anyone.
    pub fn toggle_piece(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        let cell = Coord::new(row, col);
        if !cell.in_bounds(self.size) {
            warn!(%cell, size = self.size, "rejected toggle outside the board");
            return Err(BoardError::OutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        let idx = self.index(cell);
        self.cells[idx] = !self.cells[idx];
        let occupied = self.cells[idx];
        debug!(%cell, occupied, "toggled piece");

        self.observers.notify(&BoardChange { cell, occupied });
        Ok(occupied)
    }

    /// Registers a callback run after every successful [`Board::toggle_piece`].
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&BoardChange) + Send + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ---- line sums ----

    /// Number of pieces on `line`. Lines that miss the board count zero.
    pub fn line_count(&self, line: Line) -> usize {
        line.cells(self.size)
            .filter(|&c| self.cells[self.index(c)])
            .count()
    }

    pub fn row_count(&self, row: usize) -> usize {
        self.line_count(Line::Row(row))
    }

    pub fn col_count(&self, col: usize) -> usize {
        self.line_count(Line::Col(col))
    }

    pub fn major_diagonal_count(&self, diagonal: isize) -> usize {
        self.line_count(Line::MajorDiagonal(diagonal))
    }

    pub fn minor_diagonal_count(&self, diagonal: isize) -> usize {
        self.line_count(Line::MinorDiagonal(diagonal))
    }

    // ---- line-level conflicts ----

    #[inline]
    pub fn has_conflict_on(&self, line: Line) -> bool {
        self.line_count(line) > 1
    }

    pub fn has_row_conflict_at(&self, row: usize) -> bool {
        self.has_conflict_on(Line::Row(row))
    }

    pub fn has_col_conflict_at(&self, col: usize) -> bool {
        self.has_conflict_on(Line::Col(col))
    }

    /// `diagonal` is `col - row` of any cell on it.
    pub fn has_major_diagonal_conflict_at(&self, diagonal: isize) -> bool {
        self.has_conflict_on(Line::MajorDiagonal(diagonal))
    }

    /// `diagonal` is `col + row` of any cell on it.
    pub fn has_minor_diagonal_conflict_at(&self, diagonal: isize) -> bool {
        self.has_conflict_on(Line::MinorDiagonal(diagonal))
    }

    // ---- aggregates ----

    /// Every line of `family` on this board, in index order.
    pub fn lines(&self, family: LineFamily) -> impl Iterator<Item = Line> {
        family.lines(self.size)
    }

    pub fn conflicting_lines(&self, family: LineFamily) -> Vec<Line> {
        self.lines(family)
            .filter(|&line| self.has_conflict_on(line))
            .collect()
    }

    pub fn has_any_conflicts_in(&self, family: LineFamily) -> bool {
        self.lines(family).any(|line| self.has_conflict_on(line))
    }

    pub fn has_any_row_conflicts(&self) -> bool {
        self.has_any_conflicts_in(LineFamily::Row)
    }

    pub fn has_any_col_conflicts(&self) -> bool {
        self.has_any_conflicts_in(LineFamily::Col)
    }

    pub fn has_any_major_diagonal_conflicts(&self) -> bool {
        self.has_any_conflicts_in(LineFamily::MajorDiagonal)
    }

    pub fn has_any_minor_diagonal_conflicts(&self) -> bool {
        self.has_any_conflicts_in(LineFamily::MinorDiagonal)
    }

    pub fn has_any_conflicts_for(&self, kind: PieceKind) -> bool {
        kind.line_families()
            .iter()
            .any(|&family| self.has_any_conflicts_in(family))
    }

    pub fn has_any_rooks_conflicts(&self) -> bool {
        self.has_any_conflicts_for(PieceKind::Rook)
    }

    pub fn has_any_queens_conflicts(&self) -> bool {
        self.has_any_conflicts_for(PieceKind::Queen)
    }

    /// Whether any line of `kind` through `c` is in conflict.
    ///
    /// `c` itself need not be occupied. Lines are derived from `c` arithmetically, so a
    /// coordinate off the board can still name a diagonal that crosses it.
    pub fn has_any_conflicts_on_for(&self, kind: PieceKind, c: Coord) -> bool {
        kind.line_families()
            .iter()
            .any(|&family| self.has_conflict_on(family.through(c)))
    }

    pub fn has_any_queen_conflicts_on(&self, row: usize, col: usize) -> bool {
        self.has_any_conflicts_on_for(PieceKind::Queen, Coord::new(row, col))
    }

    #[inline]
    fn index(&self, c: Coord) -> usize {
        debug_assert!(c.in_bounds(self.size));
        c.row * self.size + c.col
    }
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.clone(),
            observers: Observers::new(),
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
