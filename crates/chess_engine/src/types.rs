//! # Chess Engine Core Types - Squares, Pieces, Moves and Positions
//!
//! ## Overview
//!
//! This module defines the domain vocabulary shared by every part of the engine:
//! evaluation, search, the move quality scorer and the game session. The types are
//! deliberately independent of the rules library backing [`crate::rules::Rules`]; the
//! only place that knows about `shakmaty` is [`crate::rules::ShakmatyRules`].
//!
//! ## Coordinate System
//!
//! Squares are addressed the way a board is drawn on screen:
//!
//! - `row` 0 is rank 8 (Black's back rank), `row` 7 is rank 1 (White's back rank)
//! - `col` 0 is file a, `col` 7 is file h
//!
//! So e2 is `Square { row: 6, col: 4 }` and e4 is `Square { row: 4, col: 4 }`. This
//! matches the grid layout of [`Position::grid`], so `grid[row][col]` is the piece on
//! that square.
//!
//! ## Moves
//!
//! A [`Move`] is only meaningful relative to the position it was generated from: it
//! records which piece moved, what it captured and whether it was a castle,
//! en-passant capture or promotion. Moves produced by move generation carry no
//! timestamp; moves applied through the game session are stamped when they land.

use crate::error::{ChessEngineError, ChessEngineResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Piece type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// All piece kinds, most valuable first
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Knights and bishops
    pub fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }

    /// Lowercase FEN letter
    pub fn to_char(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }
}

/// Side color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// +1.0 for White, -1.0 for Black
    ///
    /// Evaluation scores are from White's perspective; multiplying by this sign turns
    /// them into scores from `self`'s perspective.
    pub fn sign(self) -> f64 {
        match self {
            PieceColor::White => 1.0,
            PieceColor::Black => -1.0,
        }
    }

    /// Grid row of this color's back rank
    pub fn back_rank_row(self) -> u8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "white"),
            PieceColor::Black => write!(f, "black"),
        }
    }
}

/// A piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
    /// Whether the piece has left its initial square.
    ///
    /// Derived from the position: kings and rooks from castling rights, pawns from
    /// their start rank. Other pieces report `false` because FEN does not record it.
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    /// FEN letter: uppercase for White, lowercase for Black
    pub fn to_fen_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            PieceColor::White => c.to_ascii_uppercase(),
            PieceColor::Black => c,
        }
    }
}

/// Board square in screen coordinates (row 0 = rank 8, col 0 = file a)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a square, rejecting coordinates outside the board
    pub fn new(row: u8, col: u8) -> ChessEngineResult<Self> {
        if row < 8 && col < 8 {
            Ok(Self { row, col })
        } else {
            Err(ChessEngineError::InvalidSquare {
                square: format!("row {row}, col {col}"),
            })
        }
    }

    /// Rank number 1-8
    #[inline]
    pub fn rank(self) -> u8 {
        8 - self.row
    }

    /// File letter a-h
    #[inline]
    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// The same square seen from the other side of the board (rank mirrored)
    #[inline]
    pub fn flipped(self) -> Square {
        Square {
            row: 7 - self.row,
            col: self.col,
        }
    }

    /// Manhattan distance from the board center (between d4, e4, d5 and e5)
    ///
    /// Ranges from 1.0 on the central squares to 7.0 in the corners.
    pub fn center_distance(self) -> f64 {
        (f64::from(self.row) - 3.5).abs() + (f64::from(self.col) - 3.5).abs()
    }

    /// Iterate over all 64 squares, a8 first, h1 last
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

impl FromStr for Square {
    type Err = ChessEngineError;

    /// Parse algebraic notation such as `"e4"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessEngineError::InvalidSquare {
            square: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square {
            row: 7 - (rank - b'1'),
            col: file - b'a',
        })
    }
}

/// Which side of the board a castle goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

/// Castling availability for both colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub fn any(&self, color: PieceColor) -> bool {
        match color {
            PieceColor::White => self.white_king_side || self.white_queen_side,
            PieceColor::Black => self.black_king_side || self.black_queen_side,
        }
    }
}

/// A move, relative to the position it was generated from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    /// Destination of the moving piece (for castling: the king's destination)
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub castling: Option<CastlingSide>,
    pub en_passant: bool,
    /// Set when the move is applied through a game session
    pub timestamp: Option<DateTime<Utc>>,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Same move, ignoring the timestamp
    pub fn same_move(&self, other: &Move) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.promotion == other.promotion
            && self.piece.kind == other.piece.kind
            && self.piece.color == other.piece.color
    }

    /// Coordinate notation, e.g. `e2e4` or `e7e8q`
    pub fn to_uci(&self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci())
    }
}

/// 8×8 grid indexed `[row][col]`
pub type Grid = [[Option<Piece>; 8]; 8];

/// Snapshot of a full position
///
/// Produced by [`crate::rules::Rules::position`]. The canonical serialized form is the
/// 6-field FEN string, which only the rules collaborator reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub grid: Grid,
    pub side_to_move: PieceColor,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Position {
    /// Piece on `square`, `None` for empty or off-board squares
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid
            .get(square.row as usize)
            .and_then(|rank| rank.get(square.col as usize))
            .copied()
            .flatten()
    }

    /// All occupied squares with their pieces, a8 first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn king_square(&self, color: PieceColor) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
    }
}
