//! Core application services
//!
//! Settings, their persistence, logging and the application error type. Nothing in
//! here knows about chess rules; that all lives in the `chess_engine` crate.
//!
//! ## Module Organization
//!
//! - `settings` - [`CoachSettings`] and its defaults
//! - `settings_persistence` - JSON load/save in the platform config directory
//! - `logging` - `tracing-subscriber` setup
//! - `error` - [`CoreError`] and [`CoreResult`]

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use settings::CoachSettings;
pub use settings_persistence::{load_from_path, load_settings, save_settings, save_to_path, settings_path};
