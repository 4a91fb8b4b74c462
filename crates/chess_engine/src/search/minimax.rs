//! Exhaustive minimax without pruning
//!
//! Visits every node of the tree. Far too slow for play; it exists as the reference
//! the pruned search is checked against.

use super::make_unmake::with_move;
use crate::error::ChessEngineResult;
use crate::evaluation::{evaluate_position, EvalWeights};
use crate::rules::Rules;
use crate::types::{Move, PieceColor};

/// Best root move and its minimax score, or `None` without legal moves
///
/// Same depth handling, leaf scoring and tie-break as [`super::search`].
///
/// # Errors
///
/// [`crate::ChessEngineError::InvariantViolation`] on a failed undo.
pub fn minimax_exhaustive<R: Rules>(
    rules: &mut R,
    depth: u32,
    weights: &EvalWeights,
) -> ChessEngineResult<Option<(Move, f64)>> {
    let depth = depth.max(1);
    let maximizing = rules.current_turn() == PieceColor::White;
    let mut best: Option<(Move, f64)> = None;

    for mv in rules.legal_moves(None) {
        let score = with_move(rules, &mv, |r| minimax(r, depth - 1, weights))?;
        let improves = match &best {
            None => true,
            Some((_, best_score)) if maximizing => score > *best_score,
            Some((_, best_score)) => score < *best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    Ok(best)
}

fn minimax<R: Rules>(rules: &mut R, depth: u32, weights: &EvalWeights) -> ChessEngineResult<f64> {
    let moves = rules.legal_moves(None);
    if depth == 0 || rules.is_game_over() || moves.is_empty() {
        return Ok(evaluate_position(rules, weights));
    }

    let maximizing = rules.current_turn() == PieceColor::White;
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for mv in &moves {
        let score = with_move(rules, mv, |r| minimax(r, depth - 1, weights))?;
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    Ok(best)
}
