//! AI configuration for game mode and difficulty settings
//!
//! Configures AI opponent strength and which side(s) it controls.
//!
//! # Game Modes
//!
//! - **VsHuman**: Two human players (local hot-seat)
//! - **VsAI**: One human player vs AI opponent (specify AI color)
//! - **AIvsAI**: The AI plays both sides (demos and self-play)
//!
//! # Difficulty Levels
//!
//! Difficulty is a fixed search depth. There is no time control; deeper searches
//! simply take longer.
//!
//! | Difficulty | Depth |
//! |------------|-------|
//! | Easy       | 1 ply |
//! | Medium     | 2 ply |
//! | Hard       | 3 ply |

use chess_engine::PieceColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// AI configuration: who the AI plays and how strongly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessAIConfig {
    pub mode: GameMode,
    pub difficulty: AIDifficulty,
}

impl Default for ChessAIConfig {
    /// AI plays Black at medium difficulty
    fn default() -> Self {
        Self {
            mode: GameMode::VsAI {
                ai_color: PieceColor::Black,
            },
            difficulty: AIDifficulty::Medium,
        }
    }
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    VsHuman,
    /// The given color is controlled by the AI, the other by a human
    VsAI { ai_color: PieceColor },
    AIvsAI,
}

impl GameMode {
    /// Whether the AI should move when `turn` is to play
    pub fn is_ai_turn(self, turn: PieceColor) -> bool {
        match self {
            GameMode::VsHuman => false,
            GameMode::VsAI { ai_color } => ai_color == turn,
            GameMode::AIvsAI => true,
        }
    }
}

/// AI difficulty levels, each a fixed search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AIDifficulty {
    /// One ply: grabs material, sees no replies
    Easy,
    /// Two ply: sees the opponent's immediate reply
    #[default]
    Medium,
    /// Three ply
    Hard,
}

impl AIDifficulty {
    pub const ALL: [AIDifficulty; 3] = [AIDifficulty::Easy, AIDifficulty::Medium, AIDifficulty::Hard];

    /// Search depth in plies
    pub fn search_depth(self) -> u32 {
        match self {
            AIDifficulty::Easy => 1,
            AIDifficulty::Medium => 2,
            AIDifficulty::Hard => 3,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AIDifficulty::Easy => "Easy (1 ply)",
            AIDifficulty::Medium => "Medium (2 ply)",
            AIDifficulty::Hard => "Hard (3 ply)",
        }
    }
}

impl fmt::Display for AIDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for AIDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(AIDifficulty::Easy),
            "medium" => Ok(AIDifficulty::Medium),
            "hard" => Ok(AIDifficulty::Hard),
            other => Err(format!("unknown difficulty '{other}' (easy, medium, hard)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chess_ai_config_default() {
        let config = ChessAIConfig::default();
        assert!(matches!(
            config.mode,
            GameMode::VsAI {
                ai_color: PieceColor::Black
            }
        ));
        assert_eq!(config.difficulty, AIDifficulty::Medium);
    }

    #[test]
    fn test_ai_turn_per_mode() {
        let vs_ai = GameMode::VsAI {
            ai_color: PieceColor::White,
        };
        assert!(vs_ai.is_ai_turn(PieceColor::White));
        assert!(!vs_ai.is_ai_turn(PieceColor::Black));
        assert!(!GameMode::VsHuman.is_ai_turn(PieceColor::White));
        assert!(GameMode::AIvsAI.is_ai_turn(PieceColor::Black));
    }

    #[test]
    fn test_ai_difficulty_depths() {
        assert_eq!(AIDifficulty::Easy.search_depth(), 1);
        assert_eq!(AIDifficulty::Medium.search_depth(), 2);
        assert_eq!(AIDifficulty::Hard.search_depth(), 3);
    }

    #[test]
    fn test_ai_difficulty_parse() {
        assert_eq!("HARD".parse::<AIDifficulty>(), Ok(AIDifficulty::Hard));
        assert!("grandmaster".parse::<AIDifficulty>().is_err());
        for difficulty in AIDifficulty::ALL {
            assert!(difficulty.to_string().contains("ply"));
        }
    }
}
