use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::chess_types::{Board, Coordinate};
use crate::moves::pseudo_legal::trace_rays;

pub fn bishop_moves(board: &Board, from: Coordinate) -> Vec<Coordinate> {
    trace_rays(board, from, &BISHOP_DIRECTIONS)
}
