use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::Coordinate;
use crate::moves::pseudo_legal::leap;

/// Knight destinations. Occupancy is ignored; the legality filter handles it.
#[inline]
pub fn knight_moves(from: Coordinate) -> Vec<Coordinate> {
    leap(from, &KNIGHT_OFFSETS)
}
