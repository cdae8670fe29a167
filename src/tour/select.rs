//! Warnsdorff candidate selection.

use super::state::SearchState;
use crate::board::Position;

/// Tie-break score for a candidate: the minimum live degree among its own
/// unvisited knight neighbors, widened so that "no unvisited successor"
/// scores strictly worse than any real degree.
fn min_successor_degree(state: &SearchState, candidate: Position) -> u16 {
    state
        .board()
        .knight_neighbors(candidate)
        .filter(|&t| !state.is_visited(t))
        .map(|t| state.degree_of(t) as u16)
        .min()
        .unwrap_or(u16::MAX)
}

/// Selects the next square from `from` under Warnsdorff's rule.
///
/// A strict filter cascade over the unvisited knight neighbors of `from`,
/// each stage narrowing the previous stage's survivors:
///
/// 1. keep the candidates of minimum live degree;
/// 2. among those, keep the candidates of minimum successor degree;
/// 3. among those, take the lexicographically smallest `(row, col)`.
///
/// Degrees are read from the live degree matrix, which already reflects all
/// prior visits but not the move under consideration. Returns `None` when
/// `from` has no unvisited neighbor (a dead end). Never mutates state.
pub fn select_next(state: &SearchState, from: Position) -> Option<Position> {
    let board = state.board();

    // Stage 1: minimum live degree.
    let mut survivors: Vec<Position> = Vec::with_capacity(8);
    let mut min_degree = u8::MAX;
    for n in board.knight_neighbors(from) {
        if state.is_visited(n) {
            continue;
        }
        let d = state.degree_of(n);
        if d < min_degree {
            min_degree = d;
            survivors.clear();
        }
        if d == min_degree {
            survivors.push(n);
        }
    }

    if survivors.len() <= 1 {
        return survivors.first().copied();
    }

    // Stage 2: minimum successor degree among stage-1 survivors.
    let mut finalists: Vec<Position> = Vec::with_capacity(survivors.len());
    let mut min_succ = u16::MAX;
    for &s in &survivors {
        let score = min_successor_degree(state, s);
        if score < min_succ {
            min_succ = score;
            finalists.clear();
        }
        if score == min_succ {
            finalists.push(s);
        }
    }

    // Stage 3: lexicographic (row, col) among stage-2 survivors.
    finalists.into_iter().min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn state_after(board: Board, visits: &[Position]) -> SearchState {
        let mut state = SearchState::new(board);
        for &p in visits {
            state.visit(p);
        }
        state
    }

    #[test]
    fn test_dead_end_yields_none() {
        // All neighbors of the corner visited.
        let state = state_after(
            Board::new(5, 5),
            &[
                Position::new(0, 0),
                Position::new(1, 2),
                Position::new(2, 1),
            ],
        );
        assert_eq!(select_next(&state, Position::new(0, 0)), None);
    }

    #[test]
    fn test_unique_minimum_degree_wins() {
        // After (0,0) -> (1,2), the corner-adjacent (0,4) has degree 1,
        // strictly below every other candidate.
        let state = state_after(
            Board::new(5, 5),
            &[Position::new(0, 0), Position::new(1, 2)],
        );
        assert_eq!(
            select_next(&state, Position::new(1, 2)),
            Some(Position::new(0, 4))
        );
    }

    #[test]
    fn test_successor_degree_then_lexicographic() {
        // From the corner both candidates have degree 5 and equal successor
        // scores; the cascade falls through to lexicographic order.
        let state = state_after(Board::new(5, 5), &[Position::new(0, 0)]);
        assert_eq!(
            select_next(&state, Position::new(0, 0)),
            Some(Position::new(1, 2))
        );
    }

    #[test]
    fn test_full_tie_falls_to_lexicographic() {
        // From the center of a fresh 5x5 all eight candidates tie on both
        // degree and successor degree.
        let state = state_after(Board::new(5, 5), &[Position::new(2, 2)]);
        assert_eq!(
            select_next(&state, Position::new(2, 2)),
            Some(Position::new(0, 1))
        );
    }

    #[test]
    fn test_selection_is_pure() {
        let state = state_after(Board::new(5, 5), &[Position::new(0, 0)]);
        let first = select_next(&state, Position::new(0, 0));
        let second = select_next(&state, Position::new(0, 0));
        assert_eq!(first, second);
        assert_eq!(state.path_len(), 1);
        assert_eq!(state.backtracks(), 0);
    }
}
