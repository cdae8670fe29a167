//! Board geometry.
//!
//! Positions, rectangular bounds, and knight-move neighbor enumeration.
//! Everything here is pure and allocation-free; the search engine in
//! [`crate::tour`] builds on these primitives for both degree maintenance
//! and candidate generation.

mod grid;
mod position;

pub use grid::Board;
pub use position::{Position, KNIGHT_OFFSETS};
