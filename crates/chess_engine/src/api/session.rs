//! Game session lifecycle and move execution
//!
//! [`GameSession`] owns the live position (through a [`Rules`] implementation), the
//! analysis caches and the event listeners. It is the only thing that mutates the
//! live position; searches always run on a private clone.

use super::events::{GameEvent, GameEventListener, GameStatus};
use crate::cache::{CacheStats, PositionCache};
use crate::constants::DEFAULT_ANALYSIS_DEPTH;
use crate::error::ChessEngineResult;
use crate::evaluation::{EvalWeights, EvaluationResult};
use crate::quality::{evaluate_move, MoveQualityAssessment};
use crate::rules::{Rules, ShakmatyRules};
use crate::types::{Move, PieceColor, PieceKind, Position, Square};
use chrono::Utc;
use std::fmt;
use tracing::{debug, info};

/// A game in progress
///
/// # Example
///
/// ```
/// use chess_engine::{GameSession, Square};
///
/// let mut session: GameSession = GameSession::new();
/// let e2 = Square::new(6, 4).unwrap();
/// let e4 = Square::new(4, 4).unwrap();
/// assert!(session.make_move(e2, e4, None));
/// assert!(session.fen().starts_with("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"));
/// ```
pub struct GameSession<R: Rules = ShakmatyRules> {
    pub(super) rules: R,
    pub(super) weights: EvalWeights,
    pub(super) analysis_depth: u32,
    /// Whole-position analysis, keyed by FEN
    pub(super) analysis_cache: PositionCache<EvaluationResult>,
    /// Legal moves per origin square, keyed by `FEN:square`
    pub(super) moves_cache: PositionCache<Vec<Move>>,
    listeners: Vec<Box<dyn GameEventListener>>,
    /// Moves applied since the last load, with timestamps
    moves: Vec<Move>,
    last_quality: Option<MoveQualityAssessment>,
}

impl<R: Rules> Default for GameSession<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rules> GameSession<R> {
    /// New session at the standard start position with default settings
    pub fn new() -> Self {
        Self::with_settings(EvalWeights::default(), DEFAULT_ANALYSIS_DEPTH)
    }

    pub fn with_settings(weights: EvalWeights, analysis_depth: u32) -> Self {
        Self {
            rules: R::default(),
            weights,
            analysis_depth,
            analysis_cache: PositionCache::new(),
            moves_cache: PositionCache::new(),
            listeners: Vec::new(),
            moves: Vec::new(),
            last_quality: None,
        }
    }

    /// New session at `fen`
    ///
    /// # Errors
    ///
    /// [`crate::ChessEngineError::InvalidPosition`] if `fen` is malformed.
    pub fn from_fen(fen: &str) -> ChessEngineResult<Self> {
        let mut session = Self::new();
        session.rules.load_fen(fen)?;
        Ok(session)
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    /// Register a listener; it receives every later event
    pub fn subscribe(&mut self, listener: impl GameEventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&self, event: GameEvent) {
        debug!("[SESSION] {:?}", event);
        for listener in &self.listeners {
            listener.on_event(&event);
        }
    }

    fn emit_position_changed(&self) {
        self.emit(GameEvent::PositionChanged {
            fen: self.rules.to_fen(),
        });
    }

    // ========================================================================
    // Position
    // ========================================================================

    pub fn board(&self) -> Position {
        self.rules.position()
    }

    pub fn fen(&self) -> String {
        self.rules.to_fen()
    }

    /// Replace the position
    ///
    /// Clears the caches and the move history, then emits `PositionChanged`.
    ///
    /// # Errors
    ///
    /// [`crate::ChessEngineError::InvalidPosition`] if `fen` is malformed. The session is
    /// unchanged in that case and no event is emitted.
    pub fn set_fen(&mut self, fen: &str) -> ChessEngineResult<()> {
        self.rules.load_fen(fen)?;
        info!("[SESSION] Loaded position {}", fen);
        self.clear_derived_state();
        self.emit_position_changed();
        Ok(())
    }

    /// Back to the start position; clears the caches and emits `PositionChanged`
    pub fn reset(&mut self) {
        self.rules = R::default();
        info!("[SESSION] Reset to start position");
        self.clear_derived_state();
        self.emit_position_changed();
    }

    fn clear_derived_state(&mut self) {
        self.analysis_cache.clear();
        self.moves_cache.clear();
        self.moves.clear();
        self.last_quality = None;
    }

    // ========================================================================
    // Moves
    // ========================================================================

    /// Play the move from `from` to `to`
    ///
    /// Pawn moves to the last rank promote to `promotion`, or to a queen when it is
    /// `None`. Returns `false` (and changes nothing) if no such legal move exists.
    ///
    /// On success emits `MoveMade`, then `Check` if the opponent is now in check,
    /// then `GameOver` if the game has ended.
    pub fn make_move(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        let candidates: Vec<Move> = self
            .rules
            .legal_moves(Some(from))
            .into_iter()
            .filter(|m| m.to == to)
            .collect();

        let is_promotion = candidates.iter().any(|m| m.promotion.is_some());
        let wanted = if is_promotion {
            Some(promotion.unwrap_or(PieceKind::Queen))
        } else {
            None
        };

        let Some(candidate) = candidates.into_iter().find(|m| m.promotion == wanted) else {
            debug!("[SESSION] Rejected illegal move {}{}", from, to);
            return false;
        };

        let before = self.rules.clone();
        let Some(mut applied) = self.rules.apply_move(&candidate) else {
            debug!("[SESSION] Rules rejected {}", candidate);
            return false;
        };
        applied.timestamp = Some(Utc::now());

        self.last_quality = Some(evaluate_move(
            &applied,
            &before,
            &self.rules,
            &self.weights,
        ));
        self.moves.push(applied.clone());

        self.emit(GameEvent::MoveMade { mv: applied });
        if self.rules.is_check() {
            if let Some(king_square) = self.rules.king_square(self.rules.current_turn()) {
                self.emit(GameEvent::Check { king_square });
            }
        }
        if let Some(result) = self.rules.result() {
            info!("[SESSION] Game over: {}", result);
            self.emit(GameEvent::GameOver { result });
        }
        true
    }

    /// Take back the last move and emit `PositionChanged`
    ///
    /// Returns the move taken back, or `None` if there is nothing to undo.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let undone = self.rules.undo()?;
        let undone = self.moves.pop().unwrap_or(undone);
        self.last_quality = None;
        self.emit_position_changed();
        Some(undone)
    }

    /// Moves played since the last reset or FEN load, oldest first
    pub fn history(&self) -> &[Move] {
        &self.moves
    }

    /// Quality of the most recent move, cleared by undo, reset and FEN loads
    pub fn last_move_quality(&self) -> Option<&MoveQualityAssessment> {
        self.last_quality.as_ref()
    }

    // ========================================================================
    // State queries
    // ========================================================================

    pub fn is_check(&self) -> bool {
        self.rules.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.rules.is_checkmate()
    }

    pub fn is_draw(&self) -> bool {
        self.rules.is_draw()
    }

    pub fn is_game_over(&self) -> bool {
        self.rules.is_game_over()
    }

    pub fn current_player(&self) -> PieceColor {
        self.rules.current_turn()
    }

    pub fn status(&self) -> GameStatus {
        match self.rules.result() {
            Some(result) => GameStatus::Terminal(result),
            None if self.rules.is_check() => GameStatus::Check,
            None => GameStatus::Active,
        }
    }

    // ========================================================================
    // Settings
    // ========================================================================

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Changing the weights invalidates cached analysis
    pub fn set_weights(&mut self, weights: EvalWeights) {
        self.weights = weights;
        self.analysis_cache.clear();
    }

    pub fn analysis_depth(&self) -> u32 {
        self.analysis_depth
    }

    /// Changing the depth invalidates cached analysis
    pub fn set_analysis_depth(&mut self, depth: u32) {
        self.analysis_depth = depth;
        self.analysis_cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.analysis_cache.stats()
    }
}

/// Independent session at the same position
///
/// The clone gets its own rules copy, empty caches and no listeners; nothing mutable
/// is shared with the original.
impl<R: Rules> Clone for GameSession<R> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            weights: self.weights,
            analysis_depth: self.analysis_depth,
            analysis_cache: PositionCache::new(),
            moves_cache: PositionCache::new(),
            listeners: Vec::new(),
            moves: self.moves.clone(),
            last_quality: self.last_quality.clone(),
        }
    }
}

impl<R: Rules> fmt::Debug for GameSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("fen", &self.rules.to_fen())
            .field("analysis_depth", &self.analysis_depth)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
