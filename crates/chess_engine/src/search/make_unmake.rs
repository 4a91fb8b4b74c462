//! Guarded move making and unmaking for search
//!
//! The search explores the tree on the rules collaborator's working copy, so every
//! apply must be matched by an undo that restores the exact prior position. The
//! helper here snapshots the FEN before the move and compares it after the undo.
//! Any mismatch is a [`ChessEngineError::InvariantViolation`].

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::rules::Rules;
use crate::types::Move;

/// Apply `mv`, run `explore` on the resulting position, then undo and verify.
///
/// `mv` must come from `rules.legal_moves`; a rejected move is an invariant violation
/// too, since the collaborator just reported it as legal.
pub(crate) fn with_move<R: Rules, T>(
    rules: &mut R,
    mv: &Move,
    explore: impl FnOnce(&mut R) -> ChessEngineResult<T>,
) -> ChessEngineResult<T> {
    let before = rules.to_fen();

    if rules.apply_move(mv).is_none() {
        return Err(ChessEngineError::InvariantViolation {
            message: format!("generated move {mv} was rejected in {before}"),
        });
    }

    let value = explore(rules)?;

    if rules.undo().is_none() {
        return Err(ChessEngineError::InvariantViolation {
            message: format!("undo of {mv} failed, undo log empty"),
        });
    }

    let after = rules.to_fen();
    if after != before {
        return Err(ChessEngineError::InvariantViolation {
            message: format!("undo of {mv} restored {after}, expected {before}"),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ShakmatyRules;
    use crate::types::Square;

    #[test]
    fn test_position_restored_after_explore() {
        let mut rules = ShakmatyRules::default();
        let before = rules.to_fen();
        let mv = rules.legal_moves(None)[0].clone();

        let fen_inside = with_move(&mut rules, &mv, |r| Ok(r.to_fen())).unwrap();

        assert_ne!(fen_inside, before);
        assert_eq!(rules.to_fen(), before);
    }

    #[test]
    fn test_rejected_move_is_invariant_violation() {
        let mut rules = ShakmatyRules::default();
        let mut mv = rules.legal_moves(None)[0].clone();
        mv.to = Square::new(3, 0).unwrap();
        mv.from = Square::new(7, 0).unwrap();

        let err = with_move(&mut rules, &mv, |_| Ok(())).unwrap_err();
        assert!(matches!(err, ChessEngineError::InvariantViolation { .. }));
    }

    #[test]
    fn test_explore_that_loses_undo_is_detected() {
        let mut rules = ShakmatyRules::default();
        let moves = rules.legal_moves(None);
        let first = moves[0].clone();

        // The closure applies an extra move and never takes it back.
        let err = with_move(&mut rules, &first, |r| {
            let reply = r.legal_moves(None)[0].clone();
            r.apply_move(&reply);
            Ok(())
        })
        .unwrap_err();

        assert!(matches!(err, ChessEngineError::InvariantViolation { .. }));
    }
}
