use crate::game_state::chess_types::{Board, Coordinate};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

#[inline]
pub fn queen_moves(board: &Board, from: Coordinate) -> Vec<Coordinate> {
    let mut moves = bishop_moves(board, from);
    moves.extend(rook_moves(board, from));
    moves
}
