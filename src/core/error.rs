//! Error types for core module
//!
//! Provides custom error types for core functionality including settings persistence
//! and engine calls made on behalf of the application.

use chess_engine::ChessEngineError;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Error raised by the chess engine
    #[error("Engine error: {0}")]
    Engine(#[from] ChessEngineError),

    /// Malformed user input (move text, square names)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
