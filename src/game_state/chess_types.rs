//! Piece, color and coordinate vocabulary shared by every engine module.
//!
//! Coordinates follow the board's storage order: row 0 is Black's back rank
//! and row 7 is White's back rank.

use std::fmt;

pub use crate::game_state::board::{Board, Square, SquareShade};
pub use crate::game_state::game_state::GameState;

/// Side-length of the board in squares.
pub const BOARD_WIDTH: i8 = 8;

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Back rank holding this color's king and rooks at the start.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// Contents of a single square: empty, or one of twelve colored pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceType {
    #[default]
    Empty,
    WhiteKing,
    WhiteQueen,
    WhiteRook,
    WhiteBishop,
    WhiteKnight,
    WhitePawn,
    BlackKing,
    BlackQueen,
    BlackRook,
    BlackBishop,
    BlackKnight,
    BlackPawn,
}

impl PieceType {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        match (color, kind) {
            (Color::White, PieceKind::King) => PieceType::WhiteKing,
            (Color::White, PieceKind::Queen) => PieceType::WhiteQueen,
            (Color::White, PieceKind::Rook) => PieceType::WhiteRook,
            (Color::White, PieceKind::Bishop) => PieceType::WhiteBishop,
            (Color::White, PieceKind::Knight) => PieceType::WhiteKnight,
            (Color::White, PieceKind::Pawn) => PieceType::WhitePawn,
            (Color::Black, PieceKind::King) => PieceType::BlackKing,
            (Color::Black, PieceKind::Queen) => PieceType::BlackQueen,
            (Color::Black, PieceKind::Rook) => PieceType::BlackRook,
            (Color::Black, PieceKind::Bishop) => PieceType::BlackBishop,
            (Color::Black, PieceKind::Knight) => PieceType::BlackKnight,
            (Color::Black, PieceKind::Pawn) => PieceType::BlackPawn,
        }
    }

    pub const fn color(self) -> Option<Color> {
        match self {
            PieceType::Empty => None,
            PieceType::WhiteKing
            | PieceType::WhiteQueen
            | PieceType::WhiteRook
            | PieceType::WhiteBishop
            | PieceType::WhiteKnight
            | PieceType::WhitePawn => Some(Color::White),
            _ => Some(Color::Black),
        }
    }

    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            PieceType::Empty => None,
            PieceType::WhiteKing | PieceType::BlackKing => Some(PieceKind::King),
            PieceType::WhiteQueen | PieceType::BlackQueen => Some(PieceKind::Queen),
            PieceType::WhiteRook | PieceType::BlackRook => Some(PieceKind::Rook),
            PieceType::WhiteBishop | PieceType::BlackBishop => Some(PieceKind::Bishop),
            PieceType::WhiteKnight | PieceType::BlackKnight => Some(PieceKind::Knight),
            PieceType::WhitePawn | PieceType::BlackPawn => Some(PieceKind::Pawn),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, PieceType::Empty)
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.kind() == Some(PieceKind::King)
    }

    /// True when both squares hold pieces of the same color. Empty never matches.
    #[inline]
    pub fn same_color(self, other: PieceType) -> bool {
        match (self.color(), other.color()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// A `(row, col)` position. May be out of bounds; the board validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i8,
    pub col: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_WIDTH && self.col >= 0 && self.col < BOARD_WIDTH
    }

    /// Shift by a delta, keeping only on-board results.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Coordinate> {
        let shifted = Coordinate::new(self.row + d_row, self.col + d_col);
        shifted.in_bounds().then_some(shifted)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
