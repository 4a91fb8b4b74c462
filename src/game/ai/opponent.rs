//! AI opponent move selection
//!
//! The opponent first consults a tiny opening book of hardcoded first moves, then
//! falls back to a fixed-depth search. Searches run on a private copy of the
//! session's position, never on the live game.

use super::resource::ChessAIConfig;
use crate::core::{CoreError, CoreResult};
use chess_engine::{GameSession, Move, Square};
use tracing::{debug, info};

/// Book entries: position (board, side, castling, en passant) to coordinate move
const OPENING_BOOK: &[(&str, &str)] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
        "e2e4",
    ),
    (
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq -",
        "e7e5",
    ),
    (
        "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq -",
        "d7d5",
    ),
];

/// Parse coordinate notation such as `e2e4`
pub fn parse_coordinate_move(text: &str) -> CoreResult<(Square, Square)> {
    let invalid = || CoreError::InvalidInput {
        message: format!("expected a move like e2e4, got '{text}'"),
    };
    if text.len() != 4 || !text.is_ascii() {
        return Err(invalid());
    }
    let from: Square = text[..2].parse().map_err(|_| invalid())?;
    let to: Square = text[2..].parse().map_err(|_| invalid())?;
    Ok((from, to))
}

/// Book move for the session's position, if any and if legal
pub fn book_move(session: &GameSession) -> Option<Move> {
    let fen = session.fen();
    let key = fen.split(' ').take(4).collect::<Vec<_>>().join(" ");
    let (_, uci) = OPENING_BOOK.iter().find(|(position, _)| *position == key)?;
    let (from, to) = parse_coordinate_move(uci).ok()?;
    session
        .legal_moves_from(from)
        .into_iter()
        .find(|m| m.to == to)
}

/// Bounded-strength AI opponent
#[derive(Debug, Clone, Copy, Default)]
pub struct AIOpponent {
    pub config: ChessAIConfig,
}

impl AIOpponent {
    pub fn new(config: ChessAIConfig) -> Self {
        Self { config }
    }

    /// Move the AI would play, `None` if the game is over
    pub fn choose_move(&self, session: &GameSession) -> CoreResult<Option<Move>> {
        if session.is_game_over() {
            return Ok(None);
        }
        if let Some(mv) = book_move(session) {
            debug!("[AI] Book move {}", mv);
            return Ok(Some(mv));
        }
        let depth = self.config.difficulty.search_depth();
        Ok(session.best_move(depth)?)
    }

    /// Choose a move and play it on the session
    ///
    /// Returns the move played, or `None` if it is not the AI's turn or the game is
    /// over.
    pub fn play_turn(&self, session: &mut GameSession) -> CoreResult<Option<Move>> {
        if !self.config.mode.is_ai_turn(session.current_player()) {
            return Ok(None);
        }
        let Some(mv) = self.choose_move(session)? else {
            return Ok(None);
        };
        if !session.make_move(mv.from, mv.to, mv.promotion) {
            return Err(CoreError::InvalidInput {
                message: format!("AI chose illegal move {mv} in {}", session.fen()),
            });
        }
        info!(
            "[AI] {} plays {} ({})",
            mv.piece.color, mv, self.config.difficulty
        );
        Ok(Some(mv))
    }
}
