//! Chess analysis engine
//!
//! Evaluates positions, searches the game tree to a caller-chosen depth and rates
//! moves for player feedback. The laws of chess (move generation, check and
//! terminal detection, FEN) come from a [`Rules`] collaborator; the default one is
//! backed by `shakmaty`.
//!
//! ## Module Organization
//!
//! - `types` - Board, piece, square and move types
//! - `rules` - Rules collaborator trait and its `shakmaty` implementation
//! - `evaluation` - Static evaluation, weights and analysis records
//! - `search` - Bounded minimax with alpha-beta pruning
//! - `cache` - FEN-keyed memo table
//! - `quality` - Heuristic move quality scorer
//! - `api` - Game session tying everything together
//!
//! ## Example
//!
//! ```
//! use chess_engine::{find_best_move, EvalWeights, Rules, ShakmatyRules};
//!
//! let mut rules = ShakmatyRules::default();
//! let before = rules.to_fen();
//! let best = find_best_move(&mut rules, 2, &EvalWeights::default()).unwrap();
//! assert!(best.is_some());
//! assert_eq!(rules.to_fen(), before);
//! ```

pub mod api;
pub mod cache;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod quality;
pub mod rules;
pub mod search;
pub mod types;

pub use api::{ChannelListener, GameEvent, GameEventListener, GameSession, GameStatus};
pub use cache::{CacheStats, CacheStatus, PositionCache};
pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::{
    evaluate_breakdown, evaluate_position, EvalBreakdown, EvalWeights, EvaluationResult,
    PositionalFeatures, Threat,
};
pub use quality::{evaluate_move, MoveQualityAssessment, QualityFactor};
pub use rules::{DrawReason, GameResult, Rules, ShakmatyRules};
pub use search::{find_best_move, minimax_exhaustive, search, SearchResult};
pub use types::{CastlingSide, Move, Piece, PieceColor, PieceKind, Position, Square};
