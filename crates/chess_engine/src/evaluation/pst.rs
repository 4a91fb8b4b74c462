//! Piece-square tables for positional evaluation
//!
//! Values are in centipawns from White's point of view and laid out the way the board
//! is drawn: the first row of each table is rank 8, the last row is rank 1. Black reads
//! the same tables vertically mirrored, so a black pawn on e7 scores like a white pawn
//! on e2.

use crate::types::{Piece, PieceColor, PieceKind, Square};

#[rustfmt::skip]
const PAWN_PST: [[i16; 8]; 8] = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [ 5,  5, 10, 25, 25, 10,  5,  5],
    [ 0,  0,  0, 20, 20,  0,  0,  0],
    [ 5, -5,-10,  0,  0,-10, -5,  5],
    [ 5, 10, 10,-20,-20, 10, 10,  5],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_PST: [[i16; 8]; 8] = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

#[rustfmt::skip]
const BISHOP_PST: [[i16; 8]; 8] = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10, 10, 10, 10, 10,-10],
    [-10,  5,  0,  0,  0,  0,  5,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

#[rustfmt::skip]
const ROOK_PST: [[i16; 8]; 8] = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5, 10, 10, 10, 10, 10, 10,  5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [ 0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN_PST: [[i16; 8]; 8] = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20],
];

#[rustfmt::skip]
const KING_PST_MIDDLEGAME: [[i16; 8]; 8] = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20],
];

fn table(kind: PieceKind) -> &'static [[i16; 8]; 8] {
    match kind {
        PieceKind::Pawn => &PAWN_PST,
        PieceKind::Knight => &KNIGHT_PST,
        PieceKind::Bishop => &BISHOP_PST,
        PieceKind::Rook => &ROOK_PST,
        PieceKind::Queen => &QUEEN_PST,
        PieceKind::King => &KING_PST_MIDDLEGAME,
    }
}

/// Piece-square value in centipawns, signed by color (positive favours White)
pub fn get_pst_value(piece: Piece, square: Square) -> i16 {
    // Black sees the board upside down
    let sq = match piece.color {
        PieceColor::White => square,
        PieceColor::Black => square.flipped(),
    };
    let value = table(piece.kind)[sq.row as usize][sq.col as usize];

    match piece.color {
        PieceColor::White => value,
        PieceColor::Black => -value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_black_reads_mirrored_table() {
        let white = Piece::new(PieceKind::Pawn, PieceColor::White);
        let black = Piece::new(PieceKind::Pawn, PieceColor::Black);
        assert_eq!(get_pst_value(white, sq("e2")), -20);
        assert_eq!(get_pst_value(black, sq("e7")), 20);
        assert_eq!(get_pst_value(white, sq("d4")), 20);
        assert_eq!(get_pst_value(black, sq("d5")), -20);
    }

    #[test]
    fn test_knight_prefers_center() {
        let knight = Piece::new(PieceKind::Knight, PieceColor::White);
        assert!(get_pst_value(knight, sq("e4")) > get_pst_value(knight, sq("a1")));
    }

    #[test]
    fn test_every_square_mirrors() {
        for kind in PieceKind::ALL {
            let white = Piece::new(kind, PieceColor::White);
            let black = Piece::new(kind, PieceColor::Black);
            for s in Square::all() {
                assert_eq!(get_pst_value(white, s), -get_pst_value(black, s.flipped()));
            }
        }
    }
}
