//! # Chess Engine Constants - Evaluation Values & Scoring Parameters
//!
//! ## Overview
//!
//! This module centralizes the constant values used by the evaluation function, the
//! move quality scorer and the game session. Keeping them in one place makes the
//! engine's behaviour easy to audit: every number that influences a score lives here.
//!
//! ## Pawn-Unit Valuation System
//!
//! Scores are floating point and expressed in **pawns** rather than centipawns. The
//! evaluation is a weighted sum of several terms, so fractional values are natural and
//! the move quality scorer compares evaluation deltas directly against thresholds in
//! the same unit.
//!
//! - **Pawn**: 1.0 (reference unit)
//! - **Knight**: 3.0
//! - **Bishop**: 3.0
//! - **Rook**: 5.0
//! - **Queen**: 9.0
//! - **King**: 0.0 (never captured; checkmate is detected by the rules, not by material)
//!
//! Piece-square tables are kept in centipawns (see [`crate::evaluation`]) and scaled by
//! [`PST_SCALE`] when summed.
//!
//! ## Move Quality Bonuses
//!
//! The move scorer starts from [`QUALITY_NEUTRAL`] and adds independent bonuses. They
//! are additive and order-insensitive; the final score is clamped to `[0, 1]`.
//!
//! | Factor                  | Bonus  |
//! |-------------------------|--------|
//! | Capture                 | +0.30  |
//! | Gives check             | +0.20  |
//! | Minor piece development | +0.20  |
//! | Lands on a center square| +0.15  |
//! | Castling                | +0.25  |
//! | Positional gain         | +0.20  |
//! | Positional loss         | -0.20  |

use crate::types::{PieceKind, Square};

/// Standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const PAWN_VALUE: f64 = 1.0;
pub const KNIGHT_VALUE: f64 = 3.0;
pub const BISHOP_VALUE: f64 = 3.0;
pub const ROOK_VALUE: f64 = 5.0;
pub const QUEEN_VALUE: f64 = 9.0;
pub const KING_VALUE: f64 = 0.0;

/// Piece-square tables are written in centipawns
pub const PST_SCALE: f64 = 0.01;

/// Material value of a piece kind in pawns
pub const fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

// Evaluation weight defaults
pub const DEFAULT_MATERIAL_WEIGHT: f64 = 1.0;
pub const DEFAULT_POSITION_WEIGHT: f64 = 0.1;
pub const DEFAULT_MOBILITY_WEIGHT: f64 = 0.1;
pub const DEFAULT_KING_SAFETY_WEIGHT: f64 = 0.2;
pub const DEFAULT_PAWN_STRUCTURE_WEIGHT: f64 = 0.1;

/// The four central squares: d5, e5, d4, e4
pub const CENTER_SQUARES: [Square; 4] = [
    Square { row: 3, col: 3 },
    Square { row: 3, col: 4 },
    Square { row: 4, col: 3 },
    Square { row: 4, col: 4 },
];

// Move quality scoring
pub const QUALITY_NEUTRAL: f64 = 0.5;
pub const QUALITY_CAPTURE_BONUS: f64 = 0.3;
pub const QUALITY_CHECK_BONUS: f64 = 0.2;
pub const QUALITY_DEVELOPMENT_BONUS: f64 = 0.2;
pub const QUALITY_CENTER_BONUS: f64 = 0.15;
pub const QUALITY_CASTLING_BONUS: f64 = 0.25;
pub const QUALITY_POSITIONAL_BONUS: f64 = 0.2;

/// Evaluation swing (in pawns, from the mover's side) that counts as a positional
/// gain; the negated value counts as a loss.
pub const POSITIONAL_THRESHOLD: f64 = 0.5;

/// Default depth used by [`crate::api::GameSession::analyze`]
pub const DEFAULT_ANALYSIS_DEPTH: u32 = 2;
