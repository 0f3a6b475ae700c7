//! Low-level primitives shared by the board and its queries.
//!
//! - [`coord`]: cell coordinates and the diagonal identifiers derived from them.

pub mod coord;
