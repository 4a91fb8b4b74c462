//! Position evaluation with piece-square tables
//!
//! Evaluates chess positions using:
//! - Material count (piece values)
//! - Positional bonuses (piece-square tables)
//! - Mobility (number of legal moves)
//! - King safety (center-distance placeholder)
//! - Pawn structure (named, not implemented)
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square tables for positional evaluation
//! - `material` - Material balance and piece-square sums
//! - `position` - Full weighted evaluation and per-term breakdown
//! - `weights` - [`EvalWeights`] configuration
//! - `features` - Explainable features and [`EvaluationResult`]

mod features;
mod material;
mod position;
mod pst;
mod weights;

pub use features::{
    find_threats, perspective_score, positional_features, EvaluationResult, PositionalFeatures,
    Threat,
};
pub use material::{evaluate_material, evaluate_piece_squares, side_material};
pub use position::{evaluate_breakdown, evaluate_position, EvalBreakdown};
pub use pst::get_pst_value;
pub use weights::EvalWeights;
