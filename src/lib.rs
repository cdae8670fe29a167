//! Open Knight's Tour search on rectangular boards.
//!
//! Computes a sequence visiting every square of an `m × n` board exactly
//! once via legal knight moves, starting from a given square. The search
//! combines two mechanisms:
//!
//! - **Warnsdorff's rule**: always move to the unvisited neighbor with the
//!   fewest onward options, with a two-level tie-break (minimal successor
//!   degree, then lexicographic order).
//! - **Bounded backtracking**: dead ends are escaped by undoing moves,
//!   capped by a hard budget on the total number of undo operations.
//!
//! The search is usually linear in board size but can fail outright
//! (`Impossible`) once the backtrack budget is exhausted. The engine is
//! single-threaded and fully deterministic: identical inputs always yield
//! identical output.
//!
//! # Architecture
//!
//! - [`board`] — board geometry: positions, bounds, knight-neighbor
//!   enumeration.
//! - [`tour`] — the search engine: configuration, per-run search state,
//!   Warnsdorff candidate selection, and the runner.
//!
//! The crate performs no I/O; callers supply the run parameters and consume
//! either an ordered path of positions or a failure status.
//!
//! # References
//!
//! - Warnsdorff (1823), "Des Rösselsprunges einfachste und allgemeinste Lösung"
//! - Squirrel & Cull (1996), "A Warnsdorff-Rule Algorithm for Knight's Tours"

pub mod board;
pub mod tour;
