//! Full position evaluation
//!
//! Evaluates positions as a weighted sum of independently computed terms:
//! material, piece-square tables, mobility, king safety and pawn structure.
//! Scores are in pawns from White's perspective.

use super::material::{evaluate_material, evaluate_piece_squares};
use super::weights::EvalWeights;
use crate::rules::Rules;
use crate::types::{PieceColor, Position};
use serde::{Deserialize, Serialize};

/// Unweighted value of every evaluation term, each from White's perspective
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EvalBreakdown {
    pub material: f64,
    pub piece_squares: f64,
    pub mobility: f64,
    pub king_safety: f64,
    pub pawn_structure: f64,
}

impl EvalBreakdown {
    /// Weighted sum of the terms
    pub fn total(&self, weights: &EvalWeights) -> f64 {
        weights.material_weight * self.material
            + weights.position_weight * self.piece_squares
            + weights.mobility_weight * self.mobility
            + weights.king_safety_weight * self.king_safety
            + weights.pawn_structure_weight * self.pawn_structure
    }
}

/// Evaluate the rules collaborator's working position
///
/// Deterministic and side-effect free. Never panics on a position the rules
/// collaborator accepted.
pub fn evaluate_position<R: Rules>(rules: &R, weights: &EvalWeights) -> f64 {
    evaluate_breakdown(rules).total(weights)
}

/// Compute every term without applying weights
pub fn evaluate_breakdown<R: Rules>(rules: &R) -> EvalBreakdown {
    let position = rules.position();
    EvalBreakdown {
        material: evaluate_material(&position),
        piece_squares: evaluate_piece_squares(&position),
        mobility: evaluate_mobility(rules, position.side_to_move),
        king_safety: evaluate_king_safety(&position),
        pawn_structure: evaluate_pawn_structure(&position),
    }
}

/// Legal moves of the side to move minus those of its opponent, from White's side
///
/// The difference is "side to move minus opponent"; it is multiplied by the side's
/// sign so that it shares the White-positive frame of the other terms.
fn evaluate_mobility<R: Rules>(rules: &R, side_to_move: PieceColor) -> f64 {
    let own = rules.legal_move_count(side_to_move) as f64;
    let theirs = rules.legal_move_count(side_to_move.opponent()) as f64;
    side_to_move.sign() * (own - theirs)
}

/// Placeholder king safety: kings further from the center are considered safer.
///
/// This is a low-fidelity stand-in (no pawn shield, no attacker count, no game
/// phase). A missing king contributes nothing.
fn evaluate_king_safety(position: &Position) -> f64 {
    let distance = |color| {
        position
            .king_square(color)
            .map(|sq| sq.center_distance())
            .unwrap_or(0.0)
    };
    distance(PieceColor::White) - distance(PieceColor::Black)
}

/// Pawn structure is not evaluated yet; the term is always zero.
fn evaluate_pawn_structure(_position: &Position) -> f64 {
    0.0
}
