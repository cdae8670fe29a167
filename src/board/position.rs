//! Board positions and the knight move table.

/// A square on the board, identified by 0-based row and column.
///
/// Identity is purely positional. `Ord` is lexicographic (row first, then
/// column), which is the order used for the final selection tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The 8 knight move offsets, in the fixed enumeration order used
/// throughout the crate.
///
/// The order does not affect correctness, but it is part of the engine's
/// determinism contract: candidate sets are always built by walking this
/// table front to back.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ord_is_lexicographic() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
        assert_eq!(Position::new(5, 5), Position::new(5, 5));
    }

    #[test]
    fn test_offsets_are_knight_moves() {
        for (dr, dc) in KNIGHT_OFFSETS {
            let (a, b) = (dr.abs(), dc.abs());
            assert!((a == 1 && b == 2) || (a == 2 && b == 1));
        }
    }

    #[test]
    fn test_offsets_are_distinct() {
        for i in 0..KNIGHT_OFFSETS.len() {
            for j in (i + 1)..KNIGHT_OFFSETS.len() {
                assert_ne!(KNIGHT_OFFSETS[i], KNIGHT_OFFSETS[j]);
            }
        }
    }
}
