//! Knight's tour search engine.
//!
//! Warnsdorff's greedy heuristic with a bounded backtracking escape hatch:
//!
//! - every step moves to the unvisited neighbor with the fewest onward
//!   options (ties broken by minimal successor degree, then lexicographic
//!   order);
//! - dead ends undo the last move, at most `backtrack_limit` times over the
//!   whole run.
//!
//! The per-square "onward options" counts are maintained incrementally: a
//! visit decrements the count of every knight neighbor, an undo increments
//! them back, so selection never rescans the board.
//!
//! # Examples
//!
//! ```
//! use knights_tour::tour::{TourConfig, TourRunner, TourStatus};
//!
//! let config = TourConfig::new(8, 8).with_start(0, 0);
//! let result = TourRunner::run(&config);
//!
//! assert_eq!(result.status, TourStatus::Complete);
//! assert_eq!(result.path.len(), 64);
//! ```
//!
//! # References
//!
//! - Warnsdorff (1823)
//! - Pohl (1967), "A method for finding Hamilton paths and Knight's tours"

mod config;
mod runner;
mod select;
mod state;

pub use config::{TourConfig, MAX_DIMENSION, MIN_DIMENSION};
pub use runner::{TourResult, TourRunner, TourStatus};
