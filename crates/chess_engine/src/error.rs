//! Error types for chess engine
//!
//! Provides custom error types for chess engine operations including
//! position loading, square parsing, and search invariants.
//!
//! Gameplay "failures" are not errors here: an illegal move is an ordinary
//! `false` from the session and an exhausted search root is `Ok(None)`.

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Malformed or impossible FEN handed to `load_fen`/`set_fen`
    #[error("Invalid position '{fen}': {reason}")]
    InvalidPosition { fen: String, reason: String },

    /// Square text that is not a1..h8, or row/col outside the board
    #[error("Invalid square: {square}")]
    InvalidSquare { square: String },

    /// Backtracking did not restore the exact prior position.
    ///
    /// Fatal. The search aborts and the error is propagated to the caller.
    #[error("Search invariant violated: {message}")]
    InvariantViolation { message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
