use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::game_state::chess_types::{Board, Coordinate};
use crate::moves::pseudo_legal::trace_rays;

/// Rook destinations: orthogonal rays, each stopping on the first occupied
/// square (included whatever its color).
pub fn rook_moves(board: &Board, from: Coordinate) -> Vec<Coordinate> {
    trace_rays(board, from, &ROOK_DIRECTIONS)
}
