use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by board construction and mutation.
///
/// All of these are caller mistakes; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Negative, non-integer, or too large to hold `size * size` cells. `size` is the value as
    /// it was given.
    #[error("invalid board size {size}: must be a non-negative integer no larger than {max}")]
    InvalidSize { size: String, max: usize },

    #[error("row {row} has {found} cells, expected {expected} for a square board")]
    InvalidShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) is outside a board of size {size}")]
    OutOfRange { row: usize, col: usize, size: usize },
}

/// Errors raised while loading a board file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid board file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("board file sets both `n` and `rows`; use one")]
    AmbiguousMode,

    #[error("board file sets neither `n` nor `rows`")]
    MissingMode,

    #[error(transparent)]
    Board(#[from] BoardError),
}
