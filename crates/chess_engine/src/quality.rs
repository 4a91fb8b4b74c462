//! Move quality scoring
//!
//! Rates a single move on a 0..1 scale for player feedback. The score starts at
//! [`QUALITY_NEUTRAL`] and each heuristic that fires adds its bonus:
//!
//! | Factor                               | Bonus  |
//! |--------------------------------------|--------|
//! | Capture                              | +0.30  |
//! | Gives check                          | +0.20  |
//! | Knight or bishop leaves its back rank| +0.20  |
//! | Lands on d4, e4, d5 or e5            | +0.15  |
//! | Castling                             | +0.25  |
//! | Evaluation gain above 0.5 for mover  | +0.20  |
//! | Evaluation loss below -0.5 for mover | -0.20  |
//!
//! The result is clamped to `[0, 1]`. Factors are reported in the order above.
//!
//! The scorer is pure: it only reads the two rules snapshots it is given.

use crate::constants::*;
use crate::evaluation::{evaluate_position, perspective_score, EvalWeights};
use crate::rules::Rules;
use crate::types::{Move, PieceKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One heuristic that contributed to a move's quality score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum QualityFactor {
    Capture { captured: PieceKind },
    Check,
    Development,
    CenterControl,
    Castling,
    /// Evaluation improved for the mover by `delta` pawns
    PositionalGain { delta: f64 },
    /// Evaluation worsened for the mover by `delta` pawns (negative)
    PositionalLoss { delta: f64 },
}

impl QualityFactor {
    /// Signed contribution to the score
    pub fn bonus(&self) -> f64 {
        match self {
            QualityFactor::Capture { .. } => QUALITY_CAPTURE_BONUS,
            QualityFactor::Check => QUALITY_CHECK_BONUS,
            QualityFactor::Development => QUALITY_DEVELOPMENT_BONUS,
            QualityFactor::CenterControl => QUALITY_CENTER_BONUS,
            QualityFactor::Castling => QUALITY_CASTLING_BONUS,
            QualityFactor::PositionalGain { .. } => QUALITY_POSITIONAL_BONUS,
            QualityFactor::PositionalLoss { .. } => -QUALITY_POSITIONAL_BONUS,
        }
    }
}

impl fmt::Display for QualityFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityFactor::Capture { captured } => {
                write!(f, "Captures a {}", piece_name(*captured))
            }
            QualityFactor::Check => write!(f, "Gives check"),
            QualityFactor::Development => write!(f, "Develops a minor piece"),
            QualityFactor::CenterControl => write!(f, "Occupies the center"),
            QualityFactor::Castling => write!(f, "Castles the king to safety"),
            QualityFactor::PositionalGain { delta } => {
                write!(f, "Improves the position (+{delta:.2})")
            }
            QualityFactor::PositionalLoss { delta } => {
                write!(f, "Weakens the position ({delta:.2})")
            }
        }
    }
}

fn piece_name(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Pawn => "pawn",
        PieceKind::Knight => "knight",
        PieceKind::Bishop => "bishop",
        PieceKind::Rook => "rook",
        PieceKind::Queen => "queen",
        PieceKind::King => "king",
    }
}

/// Quality verdict for one move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveQualityAssessment {
    /// 0 (blunder) to 1 (excellent), 0.5 is neutral
    pub score: f64,
    /// Capture or check
    pub is_tactical: bool,
    pub reasoning: Vec<QualityFactor>,
    /// Evaluation change from the mover's perspective, in pawns
    pub positional_delta: f64,
}

/// Score `mv`, played from `before` and resulting in `after`
///
/// `mv` should be the move as applied by the rules collaborator, so that capture and
/// castling details are filled in.
pub fn evaluate_move<R: Rules>(
    mv: &Move,
    before: &R,
    after: &R,
    weights: &EvalWeights,
) -> MoveQualityAssessment {
    let mover = mv.piece.color;
    let gives_check = after.is_check();
    let mut reasoning = Vec::new();

    if let Some(captured) = mv.captured {
        reasoning.push(QualityFactor::Capture { captured });
    }
    if gives_check {
        reasoning.push(QualityFactor::Check);
    }
    if mv.piece.kind.is_minor()
        && mv.from.row == mover.back_rank_row()
        && mv.to.row != mover.back_rank_row()
    {
        reasoning.push(QualityFactor::Development);
    }
    if CENTER_SQUARES.contains(&mv.to) {
        reasoning.push(QualityFactor::CenterControl);
    }
    if mv.castling.is_some() {
        reasoning.push(QualityFactor::Castling);
    }

    let raw_delta = evaluate_position(after, weights) - evaluate_position(before, weights);
    let positional_delta = perspective_score(raw_delta, mover);
    if positional_delta > POSITIONAL_THRESHOLD {
        reasoning.push(QualityFactor::PositionalGain {
            delta: positional_delta,
        });
    } else if positional_delta < -POSITIONAL_THRESHOLD {
        reasoning.push(QualityFactor::PositionalLoss {
            delta: positional_delta,
        });
    }

    let score = reasoning
        .iter()
        .fold(QUALITY_NEUTRAL, |acc, factor| acc + factor.bonus())
        .clamp(0.0, 1.0);

    MoveQualityAssessment {
        score,
        is_tactical: mv.is_capture() || gives_check,
        reasoning,
        positional_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ShakmatyRules;
    use crate::types::Square;

    fn play(fen: &str, from: &str, to: &str) -> (Move, ShakmatyRules, ShakmatyRules) {
        let before = ShakmatyRules::from_fen(fen).unwrap();
        let mut after = before.clone();
        let from: Square = from.parse().unwrap();
        let to: Square = to.parse().unwrap();
        let candidate = before
            .legal_moves(Some(from))
            .into_iter()
            .find(|m| m.to == to)
            .unwrap();
        let applied = after.apply_move(&candidate).unwrap();
        (applied, before, after)
    }

    #[test]
    fn test_quiet_center_pawn_push() {
        let (mv, before, after) = play(START_FEN, "e2", "e4");
        let assessment = evaluate_move(&mv, &before, &after, &EvalWeights::material_only());
        assert_eq!(assessment.reasoning, vec![QualityFactor::CenterControl]);
        assert!((assessment.score - 0.65).abs() < 1e-9);
        assert!(!assessment.is_tactical);
    }

    #[test]
    fn test_knight_development() {
        let (mv, before, after) = play(START_FEN, "g1", "f3");
        let assessment = evaluate_move(&mv, &before, &after, &EvalWeights::material_only());
        assert_eq!(assessment.reasoning, vec![QualityFactor::Development]);
        assert!((assessment.score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_capture_is_tactical_and_clamped() {
        // exd5 wins the queen: capture, center and a large positional gain
        let (mv, before, after) = play(
            "rnb1kbnr/pppppppp/8/3q4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1",
            "e4",
            "d5",
        );
        let assessment = evaluate_move(&mv, &before, &after, &EvalWeights::default());
        assert!(assessment.is_tactical);
        assert_eq!(assessment.score, 1.0);
        assert!(matches!(
            assessment.reasoning[0],
            QualityFactor::Capture {
                captured: PieceKind::Queen
            }
        ));
        assert!(matches!(
            assessment.reasoning.last(),
            Some(QualityFactor::PositionalGain { .. })
        ));
    }

    #[test]
    fn test_castling_bonus() {
        let (mv, before, after) = play(
            "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
            "e1",
            "g1",
        );
        let assessment = evaluate_move(&mv, &before, &after, &EvalWeights::material_only());
        assert_eq!(assessment.reasoning, vec![QualityFactor::Castling]);
        assert!((assessment.score - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_positional_loss_from_mover_perspective() {
        // g2-g3 trades a +10 pawn square for a -5 one; scaled up it crosses the threshold
        let weights = EvalWeights {
            material_weight: 0.0,
            position_weight: 10.0,
            ..EvalWeights::material_only()
        };
        let (mv, before, after) = play(START_FEN, "g2", "g3");
        let assessment = evaluate_move(&mv, &before, &after, &weights);
        assert!((assessment.positional_delta + 1.5).abs() < 1e-9);
        assert!(matches!(
            assessment.reasoning.as_slice(),
            [QualityFactor::PositionalLoss { .. }]
        ));
        assert!((assessment.score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_black_gain_is_positive_for_black() {
        let weights = EvalWeights {
            material_weight: 0.0,
            position_weight: 10.0,
            ..EvalWeights::material_only()
        };
        // Black plays ...Nf6: g8 (-40) to f6 (+10)
        let (mv, before, after) = play(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
            "g8",
            "f6",
        );
        let assessment = evaluate_move(&mv, &before, &after, &weights);
        assert!(assessment.positional_delta > 0.5);
        assert_eq!(
            assessment.reasoning.first(),
            Some(&QualityFactor::Development)
        );
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let (mv, before, after) = play(START_FEN, "d2", "d4");
        let weights = EvalWeights::default();
        let first = evaluate_move(&mv, &before, &after, &weights);
        let second = evaluate_move(&mv, &before, &after, &weights);
        assert_eq!(first, second);
        assert_eq!(before.to_fen(), START_FEN);
    }

    #[test]
    fn test_factor_display() {
        let factor = QualityFactor::Capture {
            captured: PieceKind::Knight,
        };
        assert_eq!(factor.to_string(), "Captures a knight");
        assert_eq!(QualityFactor::Check.to_string(), "Gives check");
    }
}
