//! Piece kinds and the lines they attack along.

pub mod piece;
