//! Alpha-beta minimax
//!
//! Scores are White-positive throughout, so White nodes maximize and Black nodes
//! minimize (plain minimax, not negamax). Children are visited in generation order
//! and the first child to strictly improve on the best score so far is kept, which
//! makes the pruned result identical to [`super::minimax_exhaustive`].
//!
//! Inner nodes are fail-soft: a node cut off by the window returns a bound that lies
//! on the far side of the window, never a value that could displace an earlier,
//! exact sibling score at the root.

use super::make_unmake::with_move;
use super::SearchResult;
use crate::error::ChessEngineResult;
use crate::evaluation::{evaluate_position, EvalWeights};
use crate::rules::Rules;
use crate::types::{Move, PieceColor};
use tracing::debug;

/// Counters threaded through one search call
#[derive(Debug)]
struct SearchContext<'w> {
    weights: &'w EvalWeights,
    nodes: u64,
    cutoffs: u64,
}

/// Search `depth` plies from the working position
///
/// The working position is restored exactly before returning `Ok`. A depth of 0 is
/// treated as 1 so that a move can always be recommended.
///
/// Returns `Ok(None)` when the side to move has no legal moves.
///
/// # Errors
///
/// [`crate::ChessEngineError::InvariantViolation`] if any undo fails to restore the
/// position it was applied to. The search is aborted at that point.
pub fn search<R: Rules>(
    rules: &mut R,
    depth: u32,
    weights: &EvalWeights,
) -> ChessEngineResult<Option<SearchResult>> {
    let depth = depth.max(1);
    let root_moves = rules.legal_moves(None);
    if root_moves.is_empty() {
        debug!("[SEARCH] No legal moves at root: {}", rules.to_fen());
        return Ok(None);
    }

    let maximizing = rules.current_turn() == PieceColor::White;
    let mut ctx = SearchContext {
        weights,
        nodes: 1,
        cutoffs: 0,
    };
    let mut alpha = f64::NEG_INFINITY;
    let mut beta = f64::INFINITY;
    let mut best: Option<(f64, Vec<Move>)> = None;

    for mv in &root_moves {
        let (score, line) = with_move(rules, mv, |r| {
            alphabeta(r, depth - 1, alpha, beta, &mut ctx)
        })?;

        let improves = match &best {
            None => true,
            Some((best_score, _)) if maximizing => score > *best_score,
            Some((best_score, _)) => score < *best_score,
        };
        if improves {
            if maximizing {
                alpha = score;
            } else {
                beta = score;
            }
            best = Some((score, prepend(mv, line)));
        }
    }

    let Some((score, best_line)) = best else {
        return Ok(None);
    };
    let Some(best_move) = best_line.first().cloned() else {
        return Ok(None);
    };
    let result = SearchResult {
        best_move,
        score,
        best_line,
        depth,
        nodes: ctx.nodes,
        cutoffs: ctx.cutoffs,
    };

    debug!(
        "[SEARCH] depth {} best {} score {:.2} ({} nodes, {} cutoffs)",
        depth, result.best_move, result.score, result.nodes, result.cutoffs
    );

    Ok(Some(result))
}

/// Best move for the side to move, or `None` if it has no legal moves
///
/// # Errors
///
/// See [`search`].
pub fn find_best_move<R: Rules>(
    rules: &mut R,
    depth: u32,
    weights: &EvalWeights,
) -> ChessEngineResult<Option<Move>> {
    Ok(search(rules, depth, weights)?.map(|result| result.best_move))
}

fn alphabeta<R: Rules>(
    rules: &mut R,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    ctx: &mut SearchContext<'_>,
) -> ChessEngineResult<(f64, Vec<Move>)> {
    ctx.nodes += 1;

    if depth == 0 || rules.is_game_over() {
        return Ok((evaluate_position(rules, ctx.weights), Vec::new()));
    }

    let moves = rules.legal_moves(None);
    if moves.is_empty() {
        return Ok((evaluate_position(rules, ctx.weights), Vec::new()));
    }

    let maximizing = rules.current_turn() == PieceColor::White;
    let mut best_score = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best_line = Vec::new();

    for mv in &moves {
        let (score, line) = with_move(rules, mv, |r| alphabeta(r, depth - 1, alpha, beta, ctx))?;

        if maximizing {
            if score > best_score {
                best_score = score;
                best_line = prepend(mv, line);
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_line = prepend(mv, line);
            }
            beta = beta.min(best_score);
        }

        if beta <= alpha {
            ctx.cutoffs += 1;
            break;
        }
    }

    Ok((best_score, best_line))
}

fn prepend(mv: &Move, mut line: Vec<Move>) -> Vec<Move> {
    line.insert(0, mv.clone());
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ShakmatyRules;

    fn rules(fen: &str) -> ShakmatyRules {
        ShakmatyRules::from_fen(fen).unwrap()
    }

    #[test]
    fn test_search_restores_position() {
        let mut r = ShakmatyRules::default();
        let before = r.to_fen();
        let result = search(&mut r, 3, &EvalWeights::default()).unwrap();
        assert!(result.is_some());
        assert_eq!(r.to_fen(), before);
        assert!(r.history().is_empty());
    }

    #[test]
    fn test_captures_hanging_queen() {
        // Black queen on d5 can be taken by the e4 pawn
        let mut r = rules("rnb1kbnr/pppppppp/8/3q4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1");
        let mv = find_best_move(&mut r, 1, &EvalWeights::material_only())
            .unwrap()
            .unwrap();
        assert_eq!(mv.to_uci(), "e4d5");
    }

    #[test]
    fn test_black_minimizes() {
        // Black to move can take the white queen on d4 with the e5 pawn
        let mut r = rules("rnbqkbnr/pppp1ppp/8/4p3/3Q4/8/PPPPPPPP/RNB1KBNR b KQkq - 0 1");
        let result = search(&mut r, 1, &EvalWeights::material_only())
            .unwrap()
            .unwrap();
        assert_eq!(result.best_move.to_uci(), "e5d4");
        assert_eq!(result.score, -9.0);
    }

    #[test]
    fn test_no_legal_moves_is_none() {
        // White is checkmated (fool's mate)
        let mut r = rules("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(r.is_checkmate());
        assert_eq!(
            find_best_move(&mut r, 2, &EvalWeights::default()).unwrap(),
            None
        );

        let mut stalemate = rules("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(search(&mut stalemate, 3, &EvalWeights::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_best_line_starts_with_best_move() {
        let mut r = ShakmatyRules::default();
        let result = search(&mut r, 3, &EvalWeights::default())
            .unwrap()
            .unwrap();
        assert_eq!(result.best_line.len(), 3);
        assert!(result.best_line[0].same_move(&result.best_move));
        assert_eq!(result.depth, 3);
        assert!(result.nodes > 20);
    }

    #[test]
    fn test_zero_depth_searches_one_ply() {
        let mut r = ShakmatyRules::default();
        let result = search(&mut r, 0, &EvalWeights::default())
            .unwrap()
            .unwrap();
        assert_eq!(result.depth, 1);
        assert_eq!(result.best_line.len(), 1);
    }

    #[test]
    fn test_tie_break_is_first_in_generation_order() {
        // With material-only weights every opening move scores 0.
        let mut r = ShakmatyRules::default();
        let first = r.legal_moves(None)[0].clone();
        let mv = find_best_move(&mut r, 2, &EvalWeights::material_only())
            .unwrap()
            .unwrap();
        assert!(mv.same_move(&first));
    }
}
