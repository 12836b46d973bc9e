//! Canonical chess-rule constants.
//!
//! Starting layout, castling geometry and pawn ranks. Castling targets are
//! fixed by the layout and do not depend on where a king currently stands.

use crate::game_state::chess_types::{Color, PieceType};

use crate::game_state::chess_types::PieceType::{
    BlackBishop as b, BlackKing as k, BlackKnight as n, BlackPawn as p, BlackQueen as q,
    BlackRook as r, Empty as E, WhiteBishop as B, WhiteKing as K, WhiteKnight as N,
    WhitePawn as P, WhiteQueen as Q, WhiteRook as R,
};

/// Standard starting position, row 0 (Black's back rank) first.
pub const INITIAL_LAYOUT: [[PieceType; 8]; 8] = [
    [r, n, b, q, k, b, n, r],
    [p, p, p, p, p, p, p, p],
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E],
    [P, P, P, P, P, P, P, P],
    [R, N, B, Q, K, B, N, R],
];

/// Column the king starts on.
pub const KING_HOME_COL: i8 = 4;

/// Kingside: king lands on col 6, rook travels from col 7 to col 5.
pub const KINGSIDE_KING_TARGET_COL: i8 = 6;
pub const KINGSIDE_ROOK_FROM_COL: i8 = 7;
pub const KINGSIDE_ROOK_TO_COL: i8 = 5;

/// Queenside: king lands on col 1, rook travels from col 0 to col 2.
pub const QUEENSIDE_KING_TARGET_COL: i8 = 1;
pub const QUEENSIDE_ROOK_FROM_COL: i8 = 0;
pub const QUEENSIDE_ROOK_TO_COL: i8 = 2;

/// Rank a pawn may double-step from.
#[inline]
pub const fn pawn_home_row(color: Color) -> i8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Farthest rank from a pawn's start, where it promotes.
#[inline]
pub const fn promotion_row(color: Color) -> i8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
