//! Tour search execution loop.

use super::config::TourConfig;
use super::select::select_next;
use super::state::SearchState;
use crate::board::{Board, Position};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Status of the runner after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TourStatus {
    /// A full tour was found.
    Complete,
    /// The search exhausted its backtrack budget (or had no first move).
    /// A normal outcome, not an error.
    Impossible,
    /// Configuration rejected before any search step.
    ConfigInvalid,
    /// Cancelled externally.
    Cancelled,
}

/// Result of a tour search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourResult {
    /// Runner status.
    pub status: TourStatus,

    /// The tour: `rows * cols` positions, first the start square, each
    /// consecutive pair a knight move. Empty unless `status` is
    /// [`TourStatus::Complete`]; no partial path is exposed.
    pub path: Vec<Position>,

    /// Board rows the run was configured with.
    pub rows: usize,

    /// Board columns the run was configured with.
    pub cols: usize,

    /// Total visit (push) operations, including the start square.
    pub steps: usize,

    /// Total undo operations performed. Never exceeds the configured
    /// backtrack limit.
    pub backtracks: usize,

    /// Solve time in milliseconds.
    pub solve_time_ms: i64,
}

impl TourResult {
    /// Creates an empty result with the given status.
    fn empty(status: TourStatus, rows: usize, cols: usize) -> Self {
        Self {
            status,
            path: Vec::new(),
            rows,
            cols,
            steps: 0,
            backtracks: 0,
            solve_time_ms: 0,
        }
    }

    /// Whether a full tour was found.
    pub fn is_tour_found(&self) -> bool {
        self.status == TourStatus::Complete
    }

    /// Renders the path as a `rows × cols` matrix of 1-based step indices
    /// (0 where unvisited).
    pub fn step_grid(&self) -> Vec<Vec<u32>> {
        let mut grid = vec![vec![0u32; self.cols]; self.rows];
        for (i, p) in self.path.iter().enumerate() {
            grid[p.row][p.col] = (i + 1) as u32;
        }
        grid
    }
}

/// Executes the knight's tour search.
///
/// # Examples
///
/// ```
/// use knights_tour::tour::{TourConfig, TourRunner};
///
/// let result = TourRunner::run(&TourConfig::new(8, 8));
/// assert!(result.is_tour_found());
/// ```
pub struct TourRunner;

impl TourRunner {
    /// Runs the search to completion.
    ///
    /// Deterministic: identical configurations always yield identical
    /// results. The run performs no I/O and no internal retries beyond the
    /// configured backtracking budget.
    pub fn run(config: &TourConfig) -> TourResult {
        Self::run_with_cancel(config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The engine itself imposes no wall-clock bound; a caller wanting one
    /// sets the flag from outside. A cancelled run yields
    /// [`TourStatus::Cancelled`] with no path.
    pub fn run_with_cancel(config: &TourConfig, cancel: Option<Arc<AtomicBool>>) -> TourResult {
        if config.validate().is_err() {
            return TourResult::empty(TourStatus::ConfigInvalid, config.rows, config.cols);
        }

        let started = std::time::Instant::now();
        let board = Board::new(config.rows, config.cols);
        let target = board.squares();

        let mut state = SearchState::new(board);
        state.visit(config.start);
        let mut steps = 1usize;

        let status = loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break TourStatus::Cancelled;
                }
            }

            if state.path_len() == target {
                break TourStatus::Complete;
            }

            let Some(current) = state.current() else {
                // The path never empties: undo refuses the last entry.
                break TourStatus::Impossible;
            };

            match select_next(&state, current) {
                Some(next) => {
                    state.visit(next);
                    steps += 1;
                }
                None => {
                    // Dead end. The budget check comes first: once the
                    // counter has reached the cap, any further dead end is
                    // fatal even if earlier squares still had alternatives.
                    // A single-entry path has nothing to undo and fails too.
                    if state.backtracks() >= config.backtrack_limit || state.path_len() <= 1 {
                        break TourStatus::Impossible;
                    }
                    state.undo();
                }
            }
        };

        let backtracks = state.backtracks();
        let path = if status == TourStatus::Complete {
            state.into_path()
        } else {
            Vec::new()
        };

        TourResult {
            status,
            path,
            rows: config.rows,
            cols: config.cols,
            steps,
            backtracks,
            solve_time_ms: started.elapsed().as_millis() as i64,
        }
    }
}
