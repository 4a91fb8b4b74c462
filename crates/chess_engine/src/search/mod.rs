//! Bounded minimax search with alpha-beta pruning
//!
//! The search explores the game tree on the rules collaborator's working copy:
//! apply a move, recurse one ply shallower, undo, move on to the next sibling.
//! There is no iterative deepening, no quiescence extension, no move ordering and
//! no time limit. The caller picks the depth and the call runs to completion.
//!
//! ## Module Organization
//!
//! - `alphabeta` - pruned search, principal line and node statistics
//! - `minimax` - exhaustive reference search used to check the pruned one
//! - `make_unmake` - guarded apply/undo with exact-restoration check
//!
//! ## Invariants
//!
//! - On `Ok`, the working position is exactly what it was before the call. The FEN is
//!   compared after every undo and a mismatch aborts with
//!   [`crate::ChessEngineError::InvariantViolation`].
//! - Among moves with equal scores, the first in generation order wins, so pruned and
//!   exhaustive searches agree on both move and score.
//! - No legal moves at the root is `Ok(None)`, not an error.

mod alphabeta;
mod make_unmake;
mod minimax;

pub use alphabeta::{find_best_move, search};
pub use minimax::minimax_exhaustive;

use crate::types::Move;
use serde::{Deserialize, Serialize};

/// Outcome of one [`search`] call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_move: Move,
    /// Minimax score in pawns, positive favours White
    pub score: f64,
    /// Principal variation, `best_move` first
    pub best_line: Vec<Move>,
    /// Depth actually searched
    pub depth: u32,
    pub nodes: u64,
    pub cutoffs: u64,
}
