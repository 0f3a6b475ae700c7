use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::lines::LineFamily;

/// Long-range pieces whose conflicts the board can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Rook,
    Queen,
}

impl PieceKind {
    /// Line families along which two pieces of this kind attack each other.
    #[inline]
    pub fn line_families(self) -> &'static [LineFamily] {
        match self {
            PieceKind::Rook => &ROOK_FAMILIES,
            PieceKind::Queen => &QUEEN_FAMILIES,
        }
    }
}

pub const ROOK_FAMILIES: [LineFamily; 2] = [LineFamily::Row, LineFamily::Col];

pub const QUEEN_FAMILIES: [LineFamily; 4] = LineFamily::ALL;

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Rook => f.write_str("rook"),
            PieceKind::Queen => f.write_str("queen"),
        }
    }
}

impl FromStr for PieceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rook" | "rooks" => Ok(PieceKind::Rook),
            "queen" | "queens" => Ok(PieceKind::Queen),
            other => Err(format!("unknown piece kind '{other}' (expected rook or queen)")),
        }
    }
}
