//! [`Rules`] implementation backed by the `shakmaty` crate
//!
//! `shakmaty` positions are immutable-by-convention values without an unmake
//! operation, so undo is implemented with a stack of prior positions: every applied
//! move pushes the position it was played from. Restoring is a plain pop, which makes
//! apply/undo exact inverses by construction.
//!
//! # Coordinate Conversion
//!
//! - **Engine squares**: `row` 0 = rank 8, `col` 0 = file a
//! - **shakmaty squares**: file/rank enums, a1 = 0
//!
//! Conversion helpers: [`to_shakmaty_square`] and [`from_shakmaty_square`].

use super::{DrawReason, Rules};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::{
    CastlingRights, CastlingSide, Grid, Move, Piece, PieceColor, PieceKind, Position, Square,
};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, File, Position as _, Rank, Role};

/// Entry of the undo log
#[derive(Clone, Debug)]
struct UndoEntry {
    /// Position the move was played from
    previous: Chess,
    /// First four FEN fields of `previous`, for repetition detection
    repetition_key: String,
    applied: Move,
}

/// Working position plus undo log
#[derive(Clone, Debug, Default)]
pub struct ShakmatyRules {
    position: Chess,
    undo_log: Vec<UndoEntry>,
}

impl ShakmatyRules {
    /// Load a position from FEN into a fresh rules instance
    pub fn from_fen(fen: &str) -> ChessEngineResult<Self> {
        let mut rules = Self::default();
        rules.load_fen(fen)?;
        Ok(rules)
    }

    fn current_moves(&self) -> Vec<Move> {
        let castling = castling_rights_of(&self.position);
        self.position
            .legal_moves()
            .iter()
            .filter_map(|m| to_domain_move(m, self.position.turn(), &castling))
            .collect()
    }

    /// Board, side, castling and en-passant fields: the identity used for repetition
    fn repetition_key(&self) -> String {
        repetition_key_of(&fen_of(&self.position))
    }

    fn is_threefold_repetition(&self) -> bool {
        // Any repetition needs at least four reversible plies in between
        if self.position.halfmoves() < 4 {
            return false;
        }
        let key = self.repetition_key();
        let earlier = self
            .undo_log
            .iter()
            .filter(|entry| entry.repetition_key == key)
            .count();
        earlier >= 2
    }
}

impl Rules for ShakmatyRules {
    fn legal_moves(&self, square: Option<Square>) -> Vec<Move> {
        let moves = self.current_moves();
        match square {
            Some(sq) => moves.into_iter().filter(|m| m.from == sq).collect(),
            None => moves,
        }
    }

    fn legal_move_count(&self, color: PieceColor) -> usize {
        if to_domain_color(self.position.turn()) == color {
            return self.position.legal_moves().len();
        }
        // Passing the turn is impossible while the side to move is in check
        match self.position.clone().swap_turn() {
            Ok(swapped) => swapped.legal_moves().len(),
            Err(_) => 0,
        }
    }

    fn apply_move(&mut self, mv: &Move) -> Option<Move> {
        let castling = castling_rights_of(&self.position);
        let turn = self.position.turn();
        let legal = self.position.legal_moves();
        let (raw, applied) = legal.iter().find_map(|m| {
            let domain = to_domain_move(m, turn, &castling)?;
            let matches =
                domain.from == mv.from && domain.to == mv.to && domain.promotion == mv.promotion;
            matches.then(|| (m.clone(), domain))
        })?;

        let previous = self.position.clone();
        let repetition_key = self.repetition_key();
        self.position.play_unchecked(&raw);
        self.undo_log.push(UndoEntry {
            previous,
            repetition_key,
            applied: applied.clone(),
        });
        Some(applied)
    }

    fn undo(&mut self) -> Option<Move> {
        let entry = self.undo_log.pop()?;
        self.position = entry.previous;
        Some(entry.applied)
    }

    fn is_check(&self) -> bool {
        self.position.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    fn draw_reason(&self) -> Option<DrawReason> {
        if self.position.is_stalemate() {
            Some(DrawReason::Stalemate)
        } else if self.position.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if self.position.halfmoves() >= 100 {
            Some(DrawReason::FiftyMoveRule)
        } else if self.is_threefold_repetition() {
            Some(DrawReason::ThreefoldRepetition)
        } else {
            None
        }
    }

    fn current_turn(&self) -> PieceColor {
        to_domain_color(self.position.turn())
    }

    fn load_fen(&mut self, fen: &str) -> ChessEngineResult<()> {
        let invalid = |reason: String| ChessEngineError::InvalidPosition {
            fen: fen.to_string(),
            reason,
        };
        let trimmed = fen.trim();
        if trimmed.split_whitespace().count() != 6 {
            return Err(invalid("expected 6 space-separated fields".to_string()));
        }
        let parsed: Fen = trimmed.parse().map_err(|e| invalid(format!("{e}")))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;
        self.position = position;
        self.undo_log.clear();
        Ok(())
    }

    fn to_fen(&self) -> String {
        fen_of(&self.position)
    }

    fn position(&self) -> Position {
        let fen = self.to_fen();
        let fields: Vec<&str> = fen.split(' ').collect();
        let castling = castling_rights_of(&self.position);

        let mut grid: Grid = [[None; 8]; 8];
        for sq in Square::all() {
            let piece = to_shakmaty_square(sq).and_then(|s| self.position.board().piece_at(s));
            if let Some(piece) = piece {
                let kind = to_domain_kind(piece.role);
                let color = to_domain_color(piece.color);
                grid[sq.row as usize][sq.col as usize] = Some(Piece {
                    kind,
                    color,
                    has_moved: derive_has_moved(kind, color, sq, &castling),
                });
            }
        }

        Position {
            grid,
            side_to_move: self.current_turn(),
            castling,
            en_passant: fields.get(3).and_then(|f| f.parse().ok()),
            halfmove_clock: self.position.halfmoves(),
            fullmove_number: fields.get(5).and_then(|f| f.parse().ok()).unwrap_or(1),
        }
    }

    fn history(&self) -> Vec<Move> {
        self.undo_log.iter().map(|e| e.applied.clone()).collect()
    }
}

fn fen_of(position: &Chess) -> String {
    Fen::from_position(position.clone(), EnPassantMode::Legal).to_string()
}

fn repetition_key_of(fen: &str) -> String {
    fen.split(' ').take(4).collect::<Vec<_>>().join(" ")
}

/// Castling rights read from the FEN castling field
fn castling_rights_of(position: &Chess) -> CastlingRights {
    let fen = fen_of(position);
    let field = fen.split(' ').nth(2).unwrap_or("-");
    CastlingRights {
        white_king_side: field.contains('K'),
        white_queen_side: field.contains('Q'),
        black_king_side: field.contains('k'),
        black_queen_side: field.contains('q'),
    }
}

/// Convert an engine square to a shakmaty square, `None` if it is off the board
pub fn to_shakmaty_square(sq: Square) -> Option<shakmaty::Square> {
    if sq.col > 7 {
        return None;
    }
    let rank = 7u8.checked_sub(sq.row)?;
    Some(shakmaty::Square::from_coords(
        File::new(u32::from(sq.col)),
        Rank::new(u32::from(rank)),
    ))
}

/// Convert a shakmaty square to an engine square
pub fn from_shakmaty_square(sq: shakmaty::Square) -> Square {
    Square {
        row: 7 - sq.rank() as u8,
        col: sq.file() as u8,
    }
}

fn to_domain_color(color: Color) -> PieceColor {
    match color {
        Color::White => PieceColor::White,
        Color::Black => PieceColor::Black,
    }
}

fn to_domain_kind(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

/// Best-effort "has this piece moved" from what a FEN records
fn derive_has_moved(
    kind: PieceKind,
    color: PieceColor,
    sq: Square,
    castling: &CastlingRights,
) -> bool {
    let home = color.back_rank_row();
    match kind {
        PieceKind::Pawn => {
            let start_row = match color {
                PieceColor::White => 6,
                PieceColor::Black => 1,
            };
            sq.row != start_row
        }
        PieceKind::King => !(sq.row == home && sq.col == 4 && castling.any(color)),
        PieceKind::Rook => {
            let (king_side, queen_side) = match color {
                PieceColor::White => (castling.white_king_side, castling.white_queen_side),
                PieceColor::Black => (castling.black_king_side, castling.black_queen_side),
            };
            let untouched = sq.row == home && ((sq.col == 7 && king_side) || (sq.col == 0 && queen_side));
            !untouched
        }
        _ => false,
    }
}

/// Translate a shakmaty move into the engine's move record
///
/// Returns `None` for drop moves, which standard chess never generates.
fn to_domain_move(
    m: &shakmaty::Move,
    turn: Color,
    castling: &CastlingRights,
) -> Option<Move> {
    let color = to_domain_color(turn);
    let piece_at = |kind: PieceKind, from: Square| Piece {
        kind,
        color,
        has_moved: derive_has_moved(kind, color, from, castling),
    };

    match m {
        shakmaty::Move::Normal {
            role,
            from,
            capture,
            to,
            promotion,
        } => {
            let from = from_shakmaty_square(*from);
            Some(Move {
                from,
                to: from_shakmaty_square(*to),
                piece: piece_at(to_domain_kind(*role), from),
                captured: capture.map(to_domain_kind),
                promotion: promotion.map(to_domain_kind),
                castling: None,
                en_passant: false,
                timestamp: None,
            })
        }
        shakmaty::Move::EnPassant { from, to } => {
            let from = from_shakmaty_square(*from);
            Some(Move {
                from,
                to: from_shakmaty_square(*to),
                piece: piece_at(PieceKind::Pawn, from),
                captured: Some(PieceKind::Pawn),
                promotion: None,
                castling: None,
                en_passant: true,
                timestamp: None,
            })
        }
        shakmaty::Move::Castle { king, rook } => {
            let from = from_shakmaty_square(*king);
            let rook = from_shakmaty_square(*rook);
            let (side, king_col) = if rook.col > from.col {
                (CastlingSide::KingSide, 6)
            } else {
                (CastlingSide::QueenSide, 2)
            };
            Some(Move {
                from,
                to: Square {
                    row: from.row,
                    col: king_col,
                },
                piece: piece_at(PieceKind::King, from),
                captured: None,
                promotion: None,
                castling: Some(side),
                en_passant: false,
                timestamp: None,
            })
        }
        shakmaty::Move::Put { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::START_FEN;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn request(from: &str, to: &str) -> Move {
        Move {
            from: sq(from),
            to: sq(to),
            piece: Piece::new(PieceKind::Pawn, PieceColor::White),
            captured: None,
            promotion: None,
            castling: None,
            en_passant: false,
            timestamp: None,
        }
    }

    #[test]
    fn test_default_is_start_position() {
        let rules = ShakmatyRules::default();
        assert_eq!(rules.to_fen(), START_FEN);
        assert_eq!(rules.legal_moves(None).len(), 20);
        assert_eq!(rules.current_turn(), PieceColor::White);
    }

    #[test]
    fn test_square_conversion_roundtrip() {
        for s in Square::all() {
            assert_eq!(to_shakmaty_square(s).map(from_shakmaty_square), Some(s));
        }
        assert_eq!(to_shakmaty_square(sq("e2")), Some(shakmaty::Square::E2));
    }

    #[test]
    fn test_off_board_square_has_no_shakmaty_square() {
        assert_eq!(to_shakmaty_square(Square { row: 8, col: 0 }), None);
        assert_eq!(to_shakmaty_square(Square { row: 0, col: 8 }), None);
        assert_eq!(to_shakmaty_square(Square { row: 255, col: 255 }), None);
    }

    #[test]
    fn test_legal_moves_for_square() {
        let rules = ShakmatyRules::default();
        let knight = rules.legal_moves(Some(sq("b1")));
        assert_eq!(knight.len(), 2);
        assert!(knight.iter().all(|m| m.piece.kind == PieceKind::Knight));
        assert!(rules.legal_moves(Some(sq("e4"))).is_empty());
    }

    #[test]
    fn test_apply_and_undo_restore_fen() {
        let mut rules = ShakmatyRules::default();
        let applied = rules.apply_move(&request("e2", "e4")).unwrap();
        assert_eq!(applied.piece.kind, PieceKind::Pawn);
        assert!(rules.to_fen().starts_with("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"));

        let undone = rules.undo().unwrap();
        assert_eq!(undone, applied);
        assert_eq!(rules.to_fen(), START_FEN);
        assert!(rules.undo().is_none());
    }

    #[test]
    fn test_illegal_move_leaves_position() {
        let mut rules = ShakmatyRules::default();
        assert!(rules.apply_move(&request("e2", "e5")).is_none());
        assert_eq!(rules.to_fen(), START_FEN);
        assert!(rules.history().is_empty());
    }

    #[test]
    fn test_load_fen_rejects_malformed() {
        let mut rules = ShakmatyRules::default();
        assert!(rules.load_fen("not a fen").is_err());
        assert!(rules.load_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").is_err());
        assert!(rules.load_fen("8/8/8/8/8/8/8/8 w - - 0 1").is_err());
        // Failed loads keep the previous position
        assert_eq!(rules.to_fen(), START_FEN);
    }

    #[test]
    fn test_castling_move_record() {
        let rules =
            ShakmatyRules::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        let castles: Vec<Move> = rules
            .legal_moves(Some(sq("e1")))
            .into_iter()
            .filter(|m| m.castling.is_some())
            .collect();
        assert_eq!(castles.len(), 2);
        assert!(castles
            .iter()
            .any(|m| m.to == sq("g1") && m.castling == Some(CastlingSide::KingSide)));
        assert!(castles
            .iter()
            .any(|m| m.to == sq("c1") && m.castling == Some(CastlingSide::QueenSide)));
    }

    #[test]
    fn test_en_passant_move_record() {
        let rules = ShakmatyRules::from_fen(
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        )
        .unwrap();
        let ep = rules
            .legal_moves(Some(sq("e5")))
            .into_iter()
            .find(|m| m.en_passant)
            .unwrap();
        assert_eq!(ep.to, sq("f6"));
        assert_eq!(ep.captured, Some(PieceKind::Pawn));
    }

    #[test]
    fn test_mobility_of_opponent() {
        let rules = ShakmatyRules::default();
        assert_eq!(rules.legal_move_count(PieceColor::White), 20);
        assert_eq!(rules.legal_move_count(PieceColor::Black), 20);
    }

    #[test]
    fn test_position_snapshot() {
        let rules = ShakmatyRules::default();
        let pos = rules.position();
        assert_eq!(
            pos.piece_at(sq("e1")).map(|p| p.kind),
            Some(PieceKind::King)
        );
        assert_eq!(pos.king_square(PieceColor::Black), Some(sq("e8")));
        assert!(pos.castling.white_king_side && pos.castling.black_queen_side);
        assert_eq!(pos.fullmove_number, 1);
        assert!(!pos.piece_at(sq("a1")).unwrap().has_moved);
    }

    #[test]
    fn test_draw_detection() {
        let bare_kings = ShakmatyRules::from_fen("8/8/4k3/8/8/4K3/8/8 w - - 0 1").unwrap();
        assert_eq!(
            bare_kings.draw_reason(),
            Some(DrawReason::InsufficientMaterial)
        );

        let stalemate = ShakmatyRules::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(stalemate.is_stalemate());
        assert_eq!(stalemate.draw_reason(), Some(DrawReason::Stalemate));
        assert!(stalemate.is_game_over());
    }

    #[test]
    fn test_threefold_repetition() {
        let mut rules = ShakmatyRules::default();
        for _ in 0..2 {
            for (from, to) in [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")] {
                assert!(rules.apply_move(&request(from, to)).is_some());
            }
        }
        assert_eq!(rules.draw_reason(), Some(DrawReason::ThreefoldRepetition));
    }
}
