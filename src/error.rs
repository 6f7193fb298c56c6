//! Error type shared by the engine, the parser and the solver entry points.
//!
//! Only contract violations are errors. A search that runs out of frontier is a
//! normal outcome and is reported through `SolveResult::success`.

use crate::engine::Action;

/// Contract violations raised by the puzzle core.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The cells do not form a permutation of 0..=8.
    #[error("Malformed state: {reason}")]
    MalformedState { reason: String },

    /// The blank cannot move in the requested direction.
    #[error("Illegal action {action} with blank at ({blank_row}, {blank_col})")]
    IllegalAction {
        action: Action,
        blank_row: usize,
        blank_col: usize,
    },

    /// Text input could not be turned into a state.
    #[error("Parse error: {reason}")]
    Parse { reason: String },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PuzzleError>;
