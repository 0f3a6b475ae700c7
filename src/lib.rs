//! Conflict detection for rooks and queens placed on a square board.
//!
//! The crate evaluates a *given* placement; it does not search for one.

pub mod board;
pub mod chess;
pub mod config;
pub mod core;
pub mod error;
pub mod report;
