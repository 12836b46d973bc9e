use crate::game_state::chess_rules::pawn_home_row;
use crate::game_state::chess_types::{Board, Color, Coordinate};

/// Pawn pushes and diagonal captures. En passant is added by the legality
/// filter, which knows the last move.
pub fn pawn_moves(board: &Board, from: Coordinate, color: Color) -> Vec<Coordinate> {
    let mut moves = Vec::with_capacity(4);
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.piece(one_step).is_empty() {
            moves.push(one_step);

            if from.row == pawn_home_row(color) {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.piece(two_step).is_empty() {
                        moves.push(two_step);
                    }
                }
            }
        }
    }

    // Captures onto any occupied diagonal; color is filtered later.
    for col_delta in [-1i8, 1i8] {
        if let Some(diagonal) = from.offset(forward, col_delta) {
            if !board.piece(diagonal).is_empty() {
                moves.push(diagonal);
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::game_state::chess_types::{Board, Color, Coordinate, PieceType};

    #[test]
    fn white_pawn_double_steps_from_home_rank() {
        let board = Board::initial();
        let moves = pawn_moves(&board, Coordinate::new(6, 4), Color::White);
        assert_eq!(moves, vec![Coordinate::new(5, 4), Coordinate::new(4, 4)]);
    }

    #[test]
    fn black_pawn_moves_toward_increasing_rows() {
        let board = Board::initial();
        let moves = pawn_moves(&board, Coordinate::new(1, 3), Color::Black);
        assert_eq!(moves, vec![Coordinate::new(2, 3), Coordinate::new(3, 3)]);
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let board = Board::initial()
            .with_piece(Coordinate::new(4, 4), PieceType::BlackKnight)
            .unwrap();
        let moves = pawn_moves(&board, Coordinate::new(6, 4), Color::White);
        assert_eq!(moves, vec![Coordinate::new(5, 4)]);

        let blocked = Board::initial()
            .with_piece(Coordinate::new(5, 4), PieceType::BlackKnight)
            .unwrap();
        assert!(pawn_moves(&blocked, Coordinate::new(6, 4), Color::White).is_empty());
    }

    #[test]
    fn diagonals_only_onto_occupied_squares() {
        let from = Coordinate::new(4, 0);
        let board = Board::empty()
            .with_piece(from, PieceType::WhitePawn)
            .unwrap()
            .with_piece(Coordinate::new(3, 1), PieceType::WhiteKnight)
            .unwrap();
        let moves = pawn_moves(&board, from, Color::White);
        assert!(moves.contains(&Coordinate::new(3, 0)));
        assert!(moves.contains(&Coordinate::new(3, 1)));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn pawn_on_last_rank_has_no_moves() {
        let from = Coordinate::new(0, 3);
        let board = Board::empty().with_piece(from, PieceType::WhitePawn).unwrap();
        assert!(pawn_moves(&board, from, Color::White).is_empty());
    }
}
