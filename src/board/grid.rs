//! Rectangular board bounds and neighbor enumeration.

use super::position::{Position, KNIGHT_OFFSETS};

/// A rectangular `rows × cols` board.
///
/// Pure geometry: holds no visitation state. Neighbor enumeration walks
/// [`KNIGHT_OFFSETS`] front to back, so its output order is fixed for any
/// given square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
}

impl Board {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of squares.
    #[inline]
    pub const fn squares(&self) -> usize {
        self.rows * self.cols
    }

    /// Flat index of a position, row-major.
    #[inline]
    pub const fn index(&self, p: Position) -> usize {
        p.row * self.cols + p.col
    }

    #[inline]
    pub const fn contains(&self, p: Position) -> bool {
        p.row < self.rows && p.col < self.cols
    }

    /// In-bounds knight neighbors of `from`, in fixed enumeration order.
    pub fn knight_neighbors(&self, from: Position) -> impl Iterator<Item = Position> + '_ {
        KNIGHT_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = from.row as i64 + dr as i64;
            let col = from.col as i64 + dc as i64;
            if row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols {
                Some(Position::new(row as usize, col as usize))
            } else {
                None
            }
        })
    }

    /// Number of in-bounds knight moves from `from`, ignoring visitation.
    pub fn knight_degree(&self, from: Position) -> usize {
        self.knight_neighbors(from).count()
    }
}
