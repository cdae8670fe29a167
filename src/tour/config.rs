//! Tour search configuration.

use crate::board::Position;

/// Smallest supported board dimension.
pub const MIN_DIMENSION: usize = 5;

/// Largest supported board dimension.
pub const MAX_DIMENSION: usize = 500;

/// Configuration for a knight's tour search.
///
/// # Examples
///
/// ```
/// use knights_tour::tour::TourConfig;
///
/// let config = TourConfig::new(8, 8)
///     .with_start(3, 4)
///     .with_backtrack_limit(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourConfig {
    /// Number of board rows (`m`). Must be in `MIN_DIMENSION..=MAX_DIMENSION`.
    pub rows: usize,

    /// Number of board columns (`n`). Must be in `MIN_DIMENSION..=MAX_DIMENSION`.
    pub cols: usize,

    /// Hard cap on the total number of undo operations over the whole run.
    ///
    /// `0` disables backtracking entirely (pure greedy). Must not exceed
    /// `rows * cols`.
    pub backtrack_limit: usize,

    /// Starting square. Must lie on the board.
    pub start: Position,
}

impl TourConfig {
    /// Creates a configuration starting at `(0, 0)` with no backtracking.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            backtrack_limit: 0,
            start: Position::new(0, 0),
        }
    }

    pub fn with_start(mut self, row: usize, col: usize) -> Self {
        self.start = Position::new(row, col);
        self
    }

    pub fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = limit;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.rows < MIN_DIMENSION || self.rows > MAX_DIMENSION {
            return Err(format!(
                "rows must be in {MIN_DIMENSION}..={MAX_DIMENSION}, got {}",
                self.rows
            ));
        }
        if self.cols < MIN_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(format!(
                "cols must be in {MIN_DIMENSION}..={MAX_DIMENSION}, got {}",
                self.cols
            ));
        }
        if self.backtrack_limit > self.rows * self.cols {
            return Err(format!(
                "backtrack_limit must not exceed rows * cols ({}), got {}",
                self.rows * self.cols,
                self.backtrack_limit
            ));
        }
        if self.start.row >= self.rows || self.start.col >= self.cols {
            return Err(format!(
                "start ({}, {}) out of bounds for a {}x{} board",
                self.start.row, self.start.col, self.rows, self.cols
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let config = TourConfig::new(8, 8);
        assert_eq!(config.backtrack_limit, 0);
        assert_eq!(config.start, Position::new(0, 0));
    }

    #[test]
    fn test_validate_ok() {
        assert!(TourConfig::new(5, 5).validate().is_ok());
        assert!(TourConfig::new(500, 500)
            .with_start(499, 499)
            .with_backtrack_limit(250_000)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rows_too_small() {
        assert!(TourConfig::new(3, 8).validate().is_err());
    }

    #[test]
    fn test_validate_cols_too_large() {
        assert!(TourConfig::new(8, 501).validate().is_err());
    }

    #[test]
    fn test_validate_backtrack_limit_exceeds_squares() {
        let config = TourConfig::new(5, 6).with_backtrack_limit(31);
        assert!(config.validate().is_err());
        let config = TourConfig::new(5, 6).with_backtrack_limit(30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_start_out_of_bounds() {
        assert!(TourConfig::new(5, 5).with_start(5, 0).validate().is_err());
        assert!(TourConfig::new(5, 5).with_start(0, 5).validate().is_err());
    }
}
