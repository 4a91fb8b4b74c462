//! Cached analysis on a game session
//!
//! All analysis runs on a clone of the live rules, so the live position is never
//! touched by a search. Results are memoized by FEN (whole-position analysis) or
//! `FEN:square` (legal moves from one square).

use super::GameSession;
use crate::cache::{position_key, square_key, CacheStatus};
use crate::error::ChessEngineResult;
use crate::evaluation::{
    evaluate_breakdown, evaluate_position, find_threats, positional_features, EvaluationResult,
};
use crate::rules::Rules;
use crate::search::{find_best_move, search};
use crate::types::{Move, Square};
use tracing::debug;

impl<R: Rules> GameSession<R> {
    /// Score, expected line, threats and positional features of the current position
    ///
    /// Searched to the session's analysis depth and cached until the next reset, FEN
    /// load or settings change.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::ChessEngineError::InvariantViolation`] from the search.
    pub fn analyze(&self) -> ChessEngineResult<EvaluationResult> {
        let fen = self.rules.to_fen();
        let (result, status) = self
            .analysis_cache
            .get_or_compute(&position_key(&fen), || self.compute_analysis())?;
        if status == CacheStatus::Hit {
            debug!("[SESSION] Analysis cache hit for {}", fen);
        }
        Ok(result)
    }

    fn compute_analysis(&self) -> ChessEngineResult<EvaluationResult> {
        let mut scratch = self.rules.clone();
        let outcome = search(&mut scratch, self.analysis_depth, &self.weights)?;
        let breakdown = evaluate_breakdown(&self.rules);

        let (score, depth, best_line) = match outcome {
            Some(result) => (result.score, result.depth, result.best_line),
            // Terminal position: the static evaluation is all there is
            None => (evaluate_position(&self.rules, &self.weights), 0, Vec::new()),
        };

        Ok(EvaluationResult {
            score,
            depth,
            best_line,
            threats: find_threats(&self.rules),
            positional_features: positional_features(&self.rules, &breakdown),
        })
    }

    /// Legal moves starting on `square`, empty if it holds nothing of the side to move
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        let key = square_key(&self.rules.to_fen(), square);
        let (moves, _) = self
            .moves_cache
            .get_or_insert_with(&key, || self.rules.legal_moves(Some(square)));
        moves
    }

    /// Best move for the side to move, searched on a private copy
    ///
    /// # Errors
    ///
    /// Propagates [`crate::ChessEngineError::InvariantViolation`] from the search.
    pub fn best_move(&self, depth: u32) -> ChessEngineResult<Option<Move>> {
        let mut scratch = self.rules.clone();
        find_best_move(&mut scratch, depth, &self.weights)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::GameSession;
    use crate::cache::CacheStats;
    use crate::types::Square;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_analyze_is_cached_and_idempotent() {
        let session: GameSession = GameSession::new();
        let fresh = session.analyze().unwrap();
        let cached = session.analyze().unwrap();
        assert_eq!(fresh, cached);
        assert_eq!(
            session.cache_stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                entries: 1
            }
        );
        assert_eq!(fresh.depth, session.analysis_depth());
        assert_eq!(fresh.best_line.len() as u32, session.analysis_depth());
    }

    #[test]
    fn test_analyze_leaves_position_alone() {
        let mut session: GameSession = GameSession::new();
        session.make_move(sq("e2"), sq("e4"), None);
        let fen = session.fen();
        session.analyze().unwrap();
        session.best_move(3).unwrap();
        assert_eq!(session.fen(), fen);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_analyze_terminal_position() {
        let session: GameSession = GameSession::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .unwrap();
        let result = session.analyze().unwrap();
        assert_eq!(result.depth, 0);
        assert!(result.best_line.is_empty());
        assert_eq!(session.best_move(2).unwrap(), None);
    }

    #[test]
    fn test_legal_moves_from_square() {
        let session: GameSession = GameSession::new();
        assert_eq!(session.legal_moves_from(sq("e2")).len(), 2);
        assert_eq!(session.legal_moves_from(sq("g1")).len(), 2);
        assert!(session.legal_moves_from(sq("e7")).is_empty());
        assert!(session.legal_moves_from(sq("e4")).is_empty());
        // Second lookup is served from the cache
        assert_eq!(session.legal_moves_from(sq("e2")).len(), 2);
    }
}
