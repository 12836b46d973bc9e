//! Legality filter.
//!
//! Starts from the pseudo-legal destinations of one piece, appends castling
//! and en passant candidates, then simulates every candidate and drops the
//! ones that land on a friendly piece, land on a king, or leave the mover's
//! own king attacked. Each candidate costs a full apply plus a full check
//! scan; positions are small enough that nothing is cached.

use std::collections::BTreeSet;

use log::trace;

use crate::errors::ChessResult;
use crate::game_state::castling_rights::SideCastlingRights;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::pseudo_legal::pseudo_legal_destinations;

/// Legal destinations for the piece on `from`, for the side to move.
///
/// Empty when `from` is off the board, empty, or holds a piece of the side
/// not on move.
pub fn legal_moves(game_state: &GameState, from: Coordinate) -> ChessResult<BTreeSet<Coordinate>> {
    if !from.in_bounds() || game_state.board.piece(from).color() != Some(game_state.turn) {
        return Ok(BTreeSet::new());
    }
    legal_destinations(game_state, from)
}

/// Legal destinations for the piece on `from`, whichever color it is.
pub fn legal_destinations(
    game_state: &GameState,
    from: Coordinate,
) -> ChessResult<BTreeSet<Coordinate>> {
    let mut legal = BTreeSet::new();
    if !from.in_bounds() {
        return Ok(legal);
    }

    let board = &game_state.board;
    let piece = board.piece(from);
    let Some(color) = piece.color() else {
        return Ok(legal);
    };

    let mut candidates = pseudo_legal_destinations(board, from);
    if piece.is_king() {
        candidates.extend(castling_candidates(
            board,
            from,
            color,
            game_state.castling_rights.for_color(color),
        ));
    }
    if let Some(target) = en_passant_candidate(game_state, from, piece) {
        candidates.push(target);
    }

    for to in candidates {
        let occupant = board.piece(to);
        if occupant.same_color(piece) {
            trace!("{from} -> {to} rejected: own piece on target");
            continue;
        }
        if occupant.is_king() {
            trace!("{from} -> {to} rejected: kings cannot be captured");
            continue;
        }
        let simulated = apply_move(board, from, to)?;
        if is_in_check(&simulated.board, color)? {
            trace!("{from} -> {to} rejected: leaves {color} king in check");
            continue;
        }
        legal.insert(to);
    }

    Ok(legal)
}

/// Fixed castling targets for a king on its home square whose rights are
/// intact, whose rook is still in the corner and whose path is clear.
/// Squares the king passes over are not tested for attack.
fn castling_candidates(
    board: &Board,
    king_from: Coordinate,
    color: Color,
    rights: SideCastlingRights,
) -> Vec<Coordinate> {
    let home = color.home_row();
    let mut targets = Vec::with_capacity(2);
    if king_from != Coordinate::new(home, KING_HOME_COL) {
        return targets;
    }

    let rook = PieceType::new(color, PieceKind::Rook);
    let path_clear = |cols: std::ops::Range<i8>| {
        cols.into_iter()
            .all(|col| board.piece(Coordinate::new(home, col)).is_empty())
    };

    if rights.kingside
        && board.piece(Coordinate::new(home, KINGSIDE_ROOK_FROM_COL)) == rook
        && path_clear(KING_HOME_COL + 1..KINGSIDE_ROOK_FROM_COL)
    {
        targets.push(Coordinate::new(home, KINGSIDE_KING_TARGET_COL));
    }
    if rights.queenside
        && board.piece(Coordinate::new(home, QUEENSIDE_ROOK_FROM_COL)) == rook
        && path_clear(QUEENSIDE_ROOK_FROM_COL + 1..KING_HOME_COL)
    {
        targets.push(Coordinate::new(home, QUEENSIDE_KING_TARGET_COL));
    }

    targets
}

/// Square behind an enemy pawn that double-stepped to sit beside `from` on
/// the previous move.
fn en_passant_candidate(game_state: &GameState, from: Coordinate, piece: PieceType) -> Option<Coordinate> {
    let last = game_state.last_move?;
    let color = piece.color()?;
    if piece.kind() != Some(PieceKind::Pawn) {
        return None;
    }
    if last.from.piece != PieceType::new(color.opposite(), PieceKind::Pawn) {
        return None;
    }

    let double_step = (last.from.coordinate.row - last.to.coordinate.row).abs() == 2;
    let beside = (from.col - last.to.coordinate.col).abs() == 1;
    let same_row = from.row == last.to.coordinate.row;
    if !(double_step && beside && same_row) {
        return None;
    }

    last.to.coordinate.offset(color.forward(), 0)
}

/// True if any piece of `color` has at least one legal destination.
pub fn has_any_legal_move(game_state: &GameState, color: Color) -> ChessResult<bool> {
    for square in game_state.board.pieces_of(color) {
        if !legal_destinations(game_state, square.coordinate)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Every legal `(from, to)` pair for the side to move.
pub fn all_legal_moves(game_state: &GameState) -> ChessResult<Vec<(Coordinate, Coordinate)>> {
    let mut moves = Vec::with_capacity(48);
    for square in game_state.board.pieces_of(game_state.turn) {
        for to in legal_destinations(game_state, square.coordinate)? {
            moves.push((square.coordinate, to));
        }
    }
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessErrors;
    use crate::game_state::castling_rights::CastlingRights;

    fn c(row: i8, col: i8) -> Coordinate {
        Coordinate::new(row, col)
    }

    fn board_with(pieces: &[(i8, i8, PieceType)]) -> Board {
        pieces.iter().fold(Board::empty(), |board, &(row, col, piece)| {
            board.with_piece(c(row, col), piece).unwrap()
        })
    }

    #[test]
    fn opening_position_offers_exactly_twenty_moves() {
        let game = GameState::new_game();
        let moves = all_legal_moves(&game).unwrap();
        assert_eq!(moves.len(), 20);

        for col in 0..8 {
            assert!(moves.contains(&(c(6, col), c(5, col))));
            assert!(moves.contains(&(c(6, col), c(4, col))));
        }
        for (from, to) in [
            (c(7, 1), c(5, 0)),
            (c(7, 1), c(5, 2)),
            (c(7, 6), c(5, 5)),
            (c(7, 6), c(5, 7)),
        ] {
            assert!(moves.contains(&(from, to)));
        }
    }

    #[test]
    fn opponent_pieces_and_empty_squares_yield_nothing() {
        let game = GameState::new_game();
        assert!(legal_moves(&game, c(1, 4)).unwrap().is_empty());
        assert!(legal_moves(&game, c(4, 4)).unwrap().is_empty());
        assert!(legal_moves(&game, c(9, 4)).unwrap().is_empty());
        assert_eq!(legal_destinations(&game, c(1, 4)).unwrap().len(), 2);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        let board = board_with(&[
            (7, 4, PieceType::WhiteKing),
            (5, 4, PieceType::WhiteRook),
            (0, 4, PieceType::BlackRook),
            (0, 0, PieceType::BlackKing),
        ]);
        let game = GameState::from_position(board, Color::White, CastlingRights::none()).unwrap();
        let moves = legal_moves(&game, c(5, 4)).unwrap();
        assert!(moves.iter().all(|to| to.col == 4));
        assert!(moves.contains(&c(0, 4)));
    }

    #[test]
    fn kings_are_never_capture_targets() {
        let board = board_with(&[
            (7, 4, PieceType::WhiteKing),
            (3, 3, PieceType::WhiteRook),
            (3, 0, PieceType::BlackKing),
        ]);
        let game = GameState::from_position(board, Color::White, CastlingRights::none()).unwrap();
        let moves = legal_moves(&game, c(3, 3)).unwrap();
        assert!(!moves.contains(&c(3, 0)));
        assert!(moves.contains(&c(3, 1)));
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let board = board_with(&[
            (7, 4, PieceType::WhiteKing),
            (0, 5, PieceType::BlackRook),
            (0, 0, PieceType::BlackKing),
        ]);
        let game = GameState::from_position(board, Color::White, CastlingRights::none()).unwrap();
        let moves = legal_moves(&game, c(7, 4)).unwrap();
        assert!(!moves.contains(&c(7, 5)));
        assert!(!moves.contains(&c(6, 5)));
        assert!(moves.contains(&c(6, 3)));
    }

    #[test]
    fn castling_requires_clear_path_and_rook_in_corner() {
        let board = board_with(&[
            (7, 4, PieceType::WhiteKing),
            (7, 7, PieceType::WhiteRook),
            (7, 1, PieceType::WhiteKnight),
            (7, 0, PieceType::WhiteRook),
            (0, 4, PieceType::BlackKing),
        ]);
        let game = GameState::from_position(board, Color::White, CastlingRights::all()).unwrap();
        let moves = legal_moves(&game, c(7, 4)).unwrap();
        assert!(moves.contains(&c(7, 6)));
        assert!(!moves.contains(&c(7, 1)));

        let no_rook = board.with_piece(c(7, 7), PieceType::Empty).unwrap();
        let game = GameState::from_position(no_rook, Color::White, CastlingRights::all()).unwrap();
        assert!(!legal_moves(&game, c(7, 4)).unwrap().contains(&c(7, 6)));
    }

    #[test]
    fn castling_is_withheld_without_rights() {
        let board = board_with(&[
            (0, 4, PieceType::BlackKing),
            (0, 0, PieceType::BlackRook),
            (7, 4, PieceType::WhiteKing),
        ]);
        let mut rights = CastlingRights::all();
        rights.black.queenside = false;
        let game = GameState::from_position(board, Color::Black, rights).unwrap();
        assert!(!legal_moves(&game, c(0, 4)).unwrap().contains(&c(0, 1)));

        let game = GameState::from_position(board, Color::Black, CastlingRights::all()).unwrap();
        assert!(legal_moves(&game, c(0, 4)).unwrap().contains(&c(0, 1)));
    }

    #[test]
    fn en_passant_only_right_after_the_double_step() {
        let game = GameState::new_game()
            .play_move(c(6, 4), c(4, 4))
            .and_then(|g| g.play_move(c(1, 0), c(2, 0)))
            .and_then(|g| g.play_move(c(4, 4), c(3, 4)))
            .and_then(|g| g.play_move(c(1, 3), c(3, 3)))
            .unwrap();
        assert!(legal_moves(&game, c(3, 4)).unwrap().contains(&c(2, 3)));

        // One tempo later the chance is gone.
        let later = game
            .play_move(c(7, 6), c(5, 5))
            .and_then(|g| g.play_move(c(2, 0), c(3, 0)))
            .unwrap();
        assert!(!legal_moves(&later, c(3, 4)).unwrap().contains(&c(2, 3)));
    }

    #[test]
    fn every_legal_move_keeps_the_mover_out_of_check() {
        let game = GameState::new_game()
            .play_move(c(6, 4), c(4, 4))
            .and_then(|g| g.play_move(c(1, 5), c(2, 5)))
            .and_then(|g| g.play_move(c(7, 3), c(3, 7)))
            .unwrap();
        // Black is in check from the queen on (3,7).
        assert_eq!(game.is_in_check(), Ok(true));
        for (from, to) in all_legal_moves(&game).unwrap() {
            let next = apply_move(&game.board, from, to).unwrap();
            assert_eq!(is_in_check(&next.board, Color::Black), Ok(false));
        }
    }

    #[test]
    fn missing_king_surfaces_as_an_error() {
        let board = board_with(&[(4, 4, PieceType::WhiteRook), (0, 0, PieceType::BlackKing)]);
        let game = GameState {
            board,
            ..GameState::new_game()
        };
        assert_eq!(
            legal_destinations(&game, c(4, 4)),
            Err(ChessErrors::KingMissing(Color::White))
        );
    }
}
