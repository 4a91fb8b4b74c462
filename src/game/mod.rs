//! Game-level features built on the engine
//!
//! ## Module Organization
//!
//! - `ai` - AI opponent configuration and move selection
//! - `feedback` - Grades and sentences for move quality

pub mod ai;
pub mod feedback;

pub use feedback::{FeedbackGrade, MoveFeedback};
