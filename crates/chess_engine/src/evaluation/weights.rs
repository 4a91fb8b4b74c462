//! Evaluation weights
//!
//! Every tunable of the evaluation function lives in [`EvalWeights`]. The struct is
//! serde-deserializable with `#[serde(default)]`, so a settings file that names only
//! some weights gets the documented defaults for the rest.

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Weights applied to each evaluation term
///
/// # Defaults
///
/// | Field                  | Default | Term                                        |
/// |------------------------|---------|---------------------------------------------|
/// | `material_weight`      | 1.0     | Material balance in pawns                   |
/// | `position_weight`      | 0.1     | Piece-square table bonus in pawns           |
/// | `mobility_weight`      | 0.1     | Legal move count difference                 |
/// | `king_safety_weight`   | 0.2     | King distance from the center (placeholder) |
/// | `pawn_structure_weight`| 0.1     | Pawn structure (not implemented, always 0)  |
///
/// Symmetric weights are what make the evaluation color-symmetric: the score of a
/// position and of its color-reversed mirror are exact negations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub material_weight: f64,
    pub position_weight: f64,
    pub mobility_weight: f64,
    pub king_safety_weight: f64,
    pub pawn_structure_weight: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            material_weight: DEFAULT_MATERIAL_WEIGHT,
            position_weight: DEFAULT_POSITION_WEIGHT,
            mobility_weight: DEFAULT_MOBILITY_WEIGHT,
            king_safety_weight: DEFAULT_KING_SAFETY_WEIGHT,
            pawn_structure_weight: DEFAULT_PAWN_STRUCTURE_WEIGHT,
        }
    }
}

impl EvalWeights {
    /// Material only; handy for tests that want exact, predictable scores
    pub fn material_only() -> Self {
        Self {
            material_weight: 1.0,
            position_weight: 0.0,
            mobility_weight: 0.0,
            king_safety_weight: 0.0,
            pawn_structure_weight: 0.0,
        }
    }
}
