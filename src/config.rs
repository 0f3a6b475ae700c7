//! JSON board files.
//!
//! A board file sets exactly one construction mode and optionally lists cells to toggle
//! afterwards:
//!
//! ```json
//! { "n": 4, "toggles": [[0, 1], [1, 3]] }
//! { "rows": [[1, 0], [0, 1]] }
//! ```
//!
//! Setting both `n` and `rows`, or neither, is an error. `n` must be a non-negative integer no
//! larger than [`MAX_FILE_SIZE`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::debug;

use crate::board::Board;
use crate::error::{BoardError, ConfigError};

/// Largest `n` accepted from a board file.
pub const MAX_FILE_SIZE: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BoardFile {
    /// Size of an empty board. Kept as a raw JSON number so that negative and fractional
    /// values reach validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<Number>,
    /// Explicit rows; nonzero values are pieces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<i64>>>,
    /// `[row, col]` pairs applied in order with [`Board::toggle_piece`].
    #[serde(default)]
    pub toggles: Vec<(usize, usize)>,
}

/// The construction mode a board file selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardMode<'a> {
    Empty { size: usize },
    Matrix { rows: &'a [Vec<i64>] },
}

impl BoardFile {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read board file");
        Self::from_json(&text)
    }

    /// Resolves and validates the construction mode.
    pub fn mode(&self) -> Result<BoardMode<'_>, ConfigError> {
        match (&self.n, &self.rows) {
            (Some(n), None) => Ok(BoardMode::Empty {
                size: file_size(n)?,
            }),
            (None, Some(rows)) => Ok(BoardMode::Matrix { rows }),
            (Some(_), Some(_)) => Err(ConfigError::AmbiguousMode),
            (None, None) => Err(ConfigError::MissingMode),
        }
    }

    /// Constructs the board and applies the toggles.
    pub fn build(&self) -> Result<Board, ConfigError> {
        let mut board = match self.mode()? {
            BoardMode::Empty { size } => Board::empty(size),
            BoardMode::Matrix { rows } => Board::from_matrix(rows)?,
        };
        for &(row, col) in &self.toggles {
            board.toggle_piece(row, col)?;
        }
        Ok(board)
    }
}

fn file_size(n: &Number) -> Result<usize, BoardError> {
    n.as_u64()
        .and_then(|v| usize::try_from(v).ok())
        .filter(|&v| v <= MAX_FILE_SIZE)
        .ok_or_else(|| BoardError::InvalidSize {
            size: n.to_string(),
            max: MAX_FILE_SIZE,
        })
}
