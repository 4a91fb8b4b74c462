//! Coach settings
//!
//! Everything a user can tune lives in [`CoachSettings`]. Every field has a default
//! and `#[serde(default)]` fills in whatever a settings file leaves out, so old
//! files keep loading as fields are added.

use crate::game::ai::AIDifficulty;
use chess_engine::constants::DEFAULT_ANALYSIS_DEPTH;
use chess_engine::{EvalWeights, PieceColor};
use serde::{Deserialize, Serialize};

/// User preferences for analysis and the AI opponent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachSettings {
    /// Weights of the evaluation terms
    pub eval_weights: EvalWeights,
    /// Search depth used for position analysis
    pub analysis_depth: u32,
    /// Strength of the AI opponent
    pub difficulty: AIDifficulty,
    /// Color the AI plays
    pub ai_color: PieceColor,
}

impl Default for CoachSettings {
    fn default() -> Self {
        Self {
            eval_weights: EvalWeights::default(),
            analysis_depth: DEFAULT_ANALYSIS_DEPTH,
            difficulty: AIDifficulty::Medium,
            ai_color: PieceColor::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: CoachSettings =
            serde_json::from_str(r#"{ "difficulty": "Hard", "eval_weights": { "mobility_weight": 0.3 } }"#)
                .unwrap();
        assert_eq!(settings.difficulty, AIDifficulty::Hard);
        assert_eq!(settings.eval_weights.mobility_weight, 0.3);
        assert_eq!(settings.eval_weights.material_weight, 1.0);
        assert_eq!(settings.analysis_depth, DEFAULT_ANALYSIS_DEPTH);
        assert_eq!(settings.ai_color, PieceColor::Black);
    }

    #[test]
    fn test_round_trip() {
        let settings = CoachSettings {
            analysis_depth: 3,
            ai_color: PieceColor::White,
            ..CoachSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: CoachSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
