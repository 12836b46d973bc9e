//! King step generation.
//!
//! Castling is not produced here. The legality filter appends the fixed
//! castling targets when the rights allow it.

use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::chess_types::Coordinate;
use crate::moves::pseudo_legal::leap;

#[inline]
pub fn king_moves(from: Coordinate) -> Vec<Coordinate> {
    leap(from, &KING_OFFSETS)
}
