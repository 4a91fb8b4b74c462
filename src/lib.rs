//! Chess coach application
//!
//! Wraps the `chess_engine` crate with user settings, an AI opponent and readable
//! move feedback. The `chess_coach` binary exposes all of it on the command line.

pub mod core;
pub mod game;
