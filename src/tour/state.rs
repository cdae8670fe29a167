//! Mutable per-run search state.
//!
//! Owns the visitation matrix, the incrementally-maintained degree matrix,
//! and the move stack. [`SearchState::visit`] and [`SearchState::undo`] are
//! exact inverses: an undo restores the degree matrix bit-for-bit to its
//! state before the matching visit.

use crate::board::{Board, Position};

/// Search state for one run. Created fresh per run, never shared.
#[derive(Debug, Clone)]
pub struct SearchState {
    board: Board,
    /// 0 = unvisited, otherwise the 1-based step index of the visit.
    visited: Vec<u32>,
    /// Per-square count of currently-unvisited knight neighbors.
    degree: Vec<u8>,
    /// Tour path so far; doubles as the undo stack.
    path: Vec<Position>,
    /// Total undo operations performed, monotone over the run.
    backtracks: usize,
}

impl SearchState {
    /// Initializes an empty state: nothing visited, degrees equal to the
    /// static in-bounds knight-move counts.
    pub fn new(board: Board) -> Self {
        let mut degree = vec![0u8; board.squares()];
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let p = Position::new(row, col);
                degree[board.index(p)] = board.knight_degree(p) as u8;
            }
        }
        Self {
            board,
            visited: vec![0; board.squares()],
            degree,
            path: Vec::with_capacity(board.squares()),
            backtracks: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn is_visited(&self, p: Position) -> bool {
        self.visited[self.board.index(p)] != 0
    }

    /// 1-based step index at which `p` was visited, or 0 if unvisited.
    #[inline]
    pub fn step_of(&self, p: Position) -> u32 {
        self.visited[self.board.index(p)]
    }

    /// Live onward-degree of `p` (count of its unvisited knight neighbors).
    #[inline]
    pub fn degree_of(&self, p: Position) -> u8 {
        self.degree[self.board.index(p)]
    }

    /// Number of squares on the path so far.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Current square: the top of the move stack.
    #[inline]
    pub fn current(&self) -> Option<Position> {
        self.path.last().copied()
    }

    #[inline]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Marks `p` visited as the next step and pushes it onto the path.
    ///
    /// Every knight neighbor of `p` loses one onward option. This is the
    /// only place degrees decrease.
    pub fn visit(&mut self, p: Position) {
        debug_assert!(!self.is_visited(p));
        let idx = self.board.index(p);
        self.path.push(p);
        self.visited[idx] = self.path.len() as u32;
        for n in self.board.knight_neighbors(p) {
            self.degree[self.board.index(n)] -= 1;
        }
    }

    /// Pops the last move, reversing its [`visit`](Self::visit) exactly,
    /// and counts one backtrack.
    ///
    /// Returns the square that was unvisited, or `None` on an empty path.
    pub fn undo(&mut self) -> Option<Position> {
        let p = self.path.pop()?;
        self.visited[self.board.index(p)] = 0;
        for n in self.board.knight_neighbors(p) {
            self.degree[self.board.index(n)] += 1;
        }
        self.backtracks += 1;
        Some(p)
    }

    /// Consumes the state, yielding the tour path.
    pub fn into_path(self) -> Vec<Position> {
        self.path
    }
}
