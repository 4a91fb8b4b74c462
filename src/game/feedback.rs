//! Human-readable move feedback
//!
//! Turns a [`MoveQualityAssessment`] into a grade and short sentences a player can
//! read after each move.

use chess_engine::{MoveQualityAssessment, QualityFactor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse verdict on a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeedbackGrade {
    Poor,
    Dubious,
    Neutral,
    Good,
    Excellent,
}

impl FeedbackGrade {
    /// Grade for a quality score in `[0, 1]`
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            FeedbackGrade::Excellent
        } else if score >= 0.6 {
            FeedbackGrade::Good
        } else if score >= 0.45 {
            FeedbackGrade::Neutral
        } else if score >= 0.3 {
            FeedbackGrade::Dubious
        } else {
            FeedbackGrade::Poor
        }
    }

    /// Annotation symbol in the usual chess style
    pub fn symbol(self) -> &'static str {
        match self {
            FeedbackGrade::Excellent => "!!",
            FeedbackGrade::Good => "!",
            FeedbackGrade::Neutral => "",
            FeedbackGrade::Dubious => "?!",
            FeedbackGrade::Poor => "?",
        }
    }
}

impl fmt::Display for FeedbackGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeedbackGrade::Excellent => "Excellent",
            FeedbackGrade::Good => "Good",
            FeedbackGrade::Neutral => "Neutral",
            FeedbackGrade::Dubious => "Dubious",
            FeedbackGrade::Poor => "Poor",
        };
        f.write_str(name)
    }
}

/// Feedback shown to the player for one move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveFeedback {
    pub grade: FeedbackGrade,
    pub score: f64,
    pub tactical: bool,
    /// One sentence per factor that fired, in scoring order
    pub reasons: Vec<String>,
}

impl MoveFeedback {
    pub fn from_assessment(assessment: &MoveQualityAssessment) -> Self {
        Self {
            grade: FeedbackGrade::from_score(assessment.score),
            score: assessment.score,
            tactical: assessment.is_tactical,
            reasons: assessment.reasoning.iter().map(QualityFactor::to_string).collect(),
        }
    }

    /// One-line summary, e.g. `Good (0.70): Develops a minor piece`
    pub fn summary(&self) -> String {
        if self.reasons.is_empty() {
            format!("{} ({:.2}): quiet move", self.grade, self.score)
        } else {
            format!("{} ({:.2}): {}", self.grade, self.score, self.reasons.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::PieceKind;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(FeedbackGrade::from_score(1.0), FeedbackGrade::Excellent);
        assert_eq!(FeedbackGrade::from_score(0.7), FeedbackGrade::Good);
        assert_eq!(FeedbackGrade::from_score(0.5), FeedbackGrade::Neutral);
        assert_eq!(FeedbackGrade::from_score(0.3), FeedbackGrade::Dubious);
        assert_eq!(FeedbackGrade::from_score(0.0), FeedbackGrade::Poor);
        assert!(FeedbackGrade::Good > FeedbackGrade::Dubious);
    }

    #[test]
    fn test_summary_lists_reasons() {
        let assessment = MoveQualityAssessment {
            score: 0.8,
            is_tactical: true,
            reasoning: vec![
                QualityFactor::Capture {
                    captured: PieceKind::Pawn,
                },
                QualityFactor::CenterControl,
            ],
            positional_delta: 0.2,
        };
        let feedback = MoveFeedback::from_assessment(&assessment);
        assert_eq!(feedback.grade, FeedbackGrade::Excellent);
        assert_eq!(
            feedback.summary(),
            "Excellent (0.80): Captures a pawn, Occupies the center"
        );
    }

    #[test]
    fn test_quiet_move_summary() {
        let assessment = MoveQualityAssessment {
            score: 0.5,
            is_tactical: false,
            reasoning: Vec::new(),
            positional_delta: 0.0,
        };
        assert_eq!(
            MoveFeedback::from_assessment(&assessment).summary(),
            "Neutral (0.50): quiet move"
        );
    }
}
