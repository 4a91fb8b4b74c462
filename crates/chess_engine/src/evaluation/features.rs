//! Explainable position features and the evaluation result record
//!
//! [`EvaluationResult`] is what the game session hands to a UI when a player asks
//! "how am I doing?": the score, the line the search expects, the captures on offer
//! and a handful of named positional features.

use super::position::EvalBreakdown;
use crate::constants::CENTER_SQUARES;
use crate::rules::Rules;
use crate::types::{Move, PieceColor, PieceKind, Position, Square};
use serde::{Deserialize, Serialize};

/// Named positional features, each from White's perspective
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionalFeatures {
    /// Always 0: pawn structure is not evaluated
    pub pawn_structure: f64,
    /// King center-distance placeholder (see [`EvalBreakdown::king_safety`])
    pub king_safety: f64,
    pub mobility: f64,
    /// White pieces on d4/e4/d5/e5 minus black pieces there
    pub center_control: f64,
    /// Developed knights, bishops, rooks and queens (off their back rank), White minus Black
    pub piece_activity: f64,
}

/// A capture available to the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threat {
    pub from: Square,
    pub to: Square,
    pub attacker: PieceKind,
    pub target: PieceKind,
}

/// Full analysis of one position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Minimax score in pawns, positive favours White
    pub score: f64,
    /// Search depth the score was computed at
    pub depth: u32,
    /// Expected continuation, best move first
    pub best_line: Vec<Move>,
    pub threats: Vec<Threat>,
    pub positional_features: PositionalFeatures,
}

/// Collect the named features from a rules snapshot and its term breakdown
pub fn positional_features<R: Rules>(rules: &R, breakdown: &EvalBreakdown) -> PositionalFeatures {
    let position = rules.position();
    PositionalFeatures {
        pawn_structure: breakdown.pawn_structure,
        king_safety: breakdown.king_safety,
        mobility: breakdown.mobility,
        center_control: center_control(&position),
        piece_activity: piece_activity(&position),
    }
}

/// Captures available to the side to move, in generation order
pub fn find_threats<R: Rules>(rules: &R) -> Vec<Threat> {
    rules
        .legal_moves(None)
        .into_iter()
        .filter_map(|m| {
            m.captured.map(|target| Threat {
                from: m.from,
                to: m.to,
                attacker: m.piece.kind,
                target,
            })
        })
        .collect()
}

fn center_control(position: &Position) -> f64 {
    CENTER_SQUARES
        .iter()
        .filter_map(|sq| position.piece_at(*sq))
        .map(|p| p.color.sign())
        .sum()
}

fn piece_activity(position: &Position) -> f64 {
    position
        .pieces()
        .filter(|(_, p)| !matches!(p.kind, PieceKind::Pawn | PieceKind::King))
        .filter(|(sq, p)| sq.row != p.color.back_rank_row())
        .map(|(_, p)| p.color.sign())
        .sum()
}

/// Side whose perspective a White-positive score should be read from
pub fn perspective_score(score: f64, color: PieceColor) -> f64 {
    score * color.sign()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::evaluate_breakdown;
    use crate::rules::ShakmatyRules;

    #[test]
    fn test_start_position_features_are_neutral() {
        let rules = ShakmatyRules::default();
        let features = positional_features(&rules, &evaluate_breakdown(&rules));
        assert_eq!(features.center_control, 0.0);
        assert_eq!(features.piece_activity, 0.0);
        assert!(find_threats(&rules).is_empty());
    }

    #[test]
    fn test_center_and_activity_after_development() {
        let rules = ShakmatyRules::from_fen(
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
        )
        .unwrap();
        let features = positional_features(&rules, &evaluate_breakdown(&rules));
        assert_eq!(features.center_control, 0.0);
        assert_eq!(features.piece_activity, 1.0);
    }

    #[test]
    fn test_threats_list_captures() {
        // White to move can take on d5
        let rules = ShakmatyRules::from_fen(
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
        )
        .unwrap();
        let threats = find_threats(&rules);
        assert_eq!(threats.len(), 1);
        assert_eq!(threats[0].attacker, PieceKind::Pawn);
        assert_eq!(threats[0].target, PieceKind::Pawn);
        assert_eq!(threats[0].to.to_string(), "d5");
    }
}
