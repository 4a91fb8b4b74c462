//! Rules collaborator - legal moves, terminal detection and FEN I/O
//!
//! The engine never generates moves or detects checkmate itself. Everything that
//! depends on the laws of chess goes through the [`Rules`] trait, which owns a mutable
//! *working position* plus a stack-based undo log.
//!
//! # Contract
//!
//! - [`Rules::apply_move`] mutates the working position and returns the move as it was
//!   applied, or `None` if the move is illegal (the position is then unchanged).
//! - [`Rules::undo`] pops the undo log and restores the exact prior position.
//! - [`Rules::load_fen`] replaces the working position and clears the undo log; it
//!   fails with [`ChessEngineError::InvalidPosition`] on malformed input.
//! - Query methods (`is_check`, `legal_moves`, ...) never mutate.
//!
//! The search engine relies on apply/undo being exact inverses; it verifies the
//! restored FEN after every undo (see [`crate::search`]).
//!
//! # Implementations
//!
//! - [`ShakmatyRules`] - production implementation backed by the `shakmaty` crate

mod shakmaty_rules;

pub use shakmaty_rules::ShakmatyRules;

use crate::error::ChessEngineResult;
use crate::types::{Move, PieceColor, Position, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a position is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Checkmate { winner: PieceColor },
    Stalemate,
    Draw { reason: DrawReason },
}

impl GameResult {
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameResult::Checkmate { winner } => Some(*winner),
            GameResult::Stalemate | GameResult::Draw { .. } => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameResult::Stalemate => write!(f, "draw by stalemate"),
            GameResult::Draw { reason } => match reason {
                DrawReason::Stalemate => write!(f, "draw by stalemate"),
                DrawReason::InsufficientMaterial => write!(f, "draw by insufficient material"),
                DrawReason::FiftyMoveRule => write!(f, "draw by fifty-move rule"),
                DrawReason::ThreefoldRepetition => write!(f, "draw by threefold repetition"),
            },
        }
    }
}

/// Laws-of-chess collaborator owning a mutable working position
///
/// `Clone` must produce a fully independent copy (including the undo log) so a search
/// can run on a private clone of a live game. `Default` is the standard start position.
pub trait Rules: Clone + Default {
    /// Legal moves for the side to move, in generation order.
    /// With `Some(square)`, only moves starting on that square.
    fn legal_moves(&self, square: Option<Square>) -> Vec<Move>;

    /// Number of legal moves `color` would have if it were its turn in this position
    fn legal_move_count(&self, color: PieceColor) -> usize;

    /// Apply a move matching `mv.from`, `mv.to` and `mv.promotion`.
    /// Returns the applied move, or `None` (position unchanged) if it is illegal.
    fn apply_move(&mut self, mv: &Move) -> Option<Move>;

    /// Take back the last applied move
    fn undo(&mut self) -> Option<Move>;

    fn is_check(&self) -> bool;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    /// Reason the position is drawn, if it is
    fn draw_reason(&self) -> Option<DrawReason>;

    fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    fn current_turn(&self) -> PieceColor;

    /// Replace the working position; clears the undo log
    fn load_fen(&mut self, fen: &str) -> ChessEngineResult<()>;

    /// Standard 6-field FEN of the working position
    fn to_fen(&self) -> String;

    /// Snapshot of the working position
    fn position(&self) -> Position;

    /// Moves applied since the last load, oldest first
    fn history(&self) -> Vec<Move>;

    fn king_square(&self, color: PieceColor) -> Option<Square> {
        self.position().king_square(color)
    }

    /// Result of the game if the working position is terminal
    fn result(&self) -> Option<GameResult> {
        if self.is_checkmate() {
            Some(GameResult::Checkmate {
                winner: self.current_turn().opponent(),
            })
        } else if self.is_stalemate() {
            Some(GameResult::Stalemate)
        } else {
            self.draw_reason().map(|reason| GameResult::Draw { reason })
        }
    }
}
