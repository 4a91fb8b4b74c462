//! Material and piece-square evaluation
//!
//! Both terms are a single pass over the board snapshot.

use super::pst::get_pst_value;
use crate::constants::{piece_value, PST_SCALE};
use crate::types::{PieceColor, Position};

/// Material balance in pawns (positive favours White)
pub fn evaluate_material(position: &Position) -> f64 {
    position
        .pieces()
        .map(|(_, piece)| piece.color.sign() * piece_value(piece.kind))
        .sum()
}

/// Sum of piece-square bonuses in pawns (positive favours White)
pub fn evaluate_piece_squares(position: &Position) -> f64 {
    let centipawns: i32 = position
        .pieces()
        .map(|(sq, piece)| i32::from(get_pst_value(piece, sq)))
        .sum();
    f64::from(centipawns) * PST_SCALE
}

/// Material held by one side, kings excluded
pub fn side_material(position: &Position, color: PieceColor) -> f64 {
    position
        .pieces()
        .filter(|(_, p)| p.color == color)
        .map(|(_, p)| piece_value(p.kind))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PAWN_VALUE, QUEEN_VALUE};
    use crate::rules::{Rules, ShakmatyRules};

    fn position(fen: &str) -> Position {
        ShakmatyRules::from_fen(fen).unwrap().position()
    }

    #[test]
    fn test_starting_position_material_balance() {
        let pos = ShakmatyRules::default().position();
        assert_eq!(evaluate_material(&pos), 0.0);
        assert_eq!(evaluate_piece_squares(&pos), 0.0);
        assert_eq!(side_material(&pos, PieceColor::White), 39.0);
    }

    #[test]
    fn test_white_up_queen() {
        let pos = position("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(evaluate_material(&pos), QUEEN_VALUE);
    }

    #[test]
    fn test_black_up_pawn() {
        let pos = position("rnbqkbnr/pppppppp/8/8/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(evaluate_material(&pos), -PAWN_VALUE);
    }

    #[test]
    fn test_bare_kings_material() {
        let pos = position("8/8/4k3/8/8/4K3/8/8 w - - 0 1");
        assert_eq!(evaluate_material(&pos), 0.0);
    }
}
