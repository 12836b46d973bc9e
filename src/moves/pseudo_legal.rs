//! Pseudo-legal destination generation.
//!
//! Destinations respect each piece's movement pattern and board occupancy
//! but ignore check, friendly captures and king captures. The legality
//! filter removes those afterwards.

use crate::game_state::chess_types::{Board, Coordinate, PieceKind};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Raw destinations for the piece on `from`. Empty squares yield nothing.
pub fn pseudo_legal_destinations(board: &Board, from: Coordinate) -> Vec<Coordinate> {
    let piece = board.piece(from);
    let (Some(color), Some(kind)) = (piece.color(), piece.kind()) else {
        return Vec::new();
    };

    match kind {
        PieceKind::Pawn => pawn_moves(board, from, color),
        PieceKind::Knight => knight_moves(from),
        PieceKind::Bishop => bishop_moves(board, from),
        PieceKind::Rook => rook_moves(board, from),
        PieceKind::Queen => queen_moves(board, from),
        PieceKind::King => king_moves(from),
    }
}

/// Walk each direction one square at a time, stopping on (and including)
/// the first occupied square.
pub(crate) fn trace_rays(board: &Board, from: Coordinate, directions: &[(i8, i8)]) -> Vec<Coordinate> {
    let mut moves = Vec::with_capacity(14);

    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(d_row, d_col) {
            moves.push(next);
            if !board.piece(next).is_empty() {
                break;
            }
            cursor = next;
        }
    }

    moves
}

/// Fixed-offset jumps filtered to the board.
pub(crate) fn leap(from: Coordinate, offsets: &[(i8, i8)]) -> Vec<Coordinate> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .collect()
}
