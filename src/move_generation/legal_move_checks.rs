//! Check detection by full-board scan.
//!
//! For every opposing piece, generate its pseudo-legal destinations and test
//! whether any lands on the target. No attack maps are cached; a position is
//! rescanned from scratch on every call.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::pseudo_legal::pseudo_legal_destinations;

#[inline]
pub fn king_square(board: &Board, color: Color) -> ChessResult<Coordinate> {
    board
        .king_coordinate(color)
        .ok_or(ChessErrors::KingMissing(color))
}

/// True if `color`'s king is attacked. `KingMissing` if it has no king.
pub fn is_in_check(board: &Board, color: Color) -> ChessResult<bool> {
    let king = king_square(board, color)?;
    Ok(is_square_attacked(board, king, color.opposite()))
}

pub fn is_square_attacked(board: &Board, target: Coordinate, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|square| pseudo_legal_destinations(board, square.coordinate).contains(&target))
}

pub fn attackers_to_square(
    board: &Board,
    target: Coordinate,
    attacker_color: Color,
) -> Vec<Square> {
    board
        .pieces_of(attacker_color)
        .filter(|square| pseudo_legal_destinations(board, square.coordinate).contains(&target))
        .collect()
}
