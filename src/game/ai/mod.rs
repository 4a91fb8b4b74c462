//! Chess AI opponent
//!
//! The AI is a thin layer over the engine: a handful of book moves for the very
//! first plies, then a fixed-depth search chosen by difficulty.
//!
//! # Architecture
//!
//! - `ChessAIConfig`: game mode and difficulty
//! - `AIOpponent`: picks and plays moves on a [`chess_engine::GameSession`]

pub mod opponent;
pub mod resource;

pub use opponent::{book_move, parse_coordinate_move, AIOpponent};
pub use resource::{AIDifficulty, ChessAIConfig, GameMode};
