//! Move application.
//!
//! `apply_move` turns a `(from, to)` pair into a new board. Special cases are
//! tried in a fixed order and the first match wins: en passant, castling,
//! promotion, then a plain move or capture. The input board is never
//! modified.

use log::debug;

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Which branch of `apply_move` produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture,
    EnPassant,
    Castle(CastleSide),
    Promotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    /// Piece removed from the board by this move, `Empty` if none.
    pub captured: PieceType,
    pub kind: MoveKind,
}

pub fn apply_move(board: &Board, from: Coordinate, to: Coordinate) -> ChessResult<AppliedMove> {
    let origin = board.at(from)?;
    let target = board.at(to)?;

    let (Some(color), Some(kind)) = (origin.piece.color(), origin.piece.kind()) else {
        return Err(ChessErrors::IllegalMove { from, to });
    };

    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    let mut next = *board;

    if kind == PieceKind::Pawn && d_row.abs() == 1 && d_col.abs() == 1 && target.is_empty() {
        // Diagonal onto an empty square can only be en passant: the passed
        // pawn sits one rank behind the destination.
        let passed = Coordinate::new(to.row - color.forward(), to.col);
        let captured = next.piece(passed);
        next.set(passed, PieceType::Empty);
        next.relocate(from, to);
        debug!("en passant {from} -> {to} removes {captured:?} on {passed}");
        return Ok(AppliedMove {
            board: next,
            captured,
            kind: MoveKind::EnPassant,
        });
    }

    if kind == PieceKind::King {
        let home = color.home_row();
        if from.col - to.col > 2 {
            next.relocate(from, to);
            next.relocate(
                Coordinate::new(home, QUEENSIDE_ROOK_FROM_COL),
                Coordinate::new(home, QUEENSIDE_ROOK_TO_COL),
            );
            debug!("{color} castles queenside");
            return Ok(AppliedMove {
                board: next,
                captured: PieceType::Empty,
                kind: MoveKind::Castle(CastleSide::Queenside),
            });
        }
        if d_col.abs() > 1 {
            next.relocate(from, to);
            next.relocate(
                Coordinate::new(home, KINGSIDE_ROOK_FROM_COL),
                Coordinate::new(home, KINGSIDE_ROOK_TO_COL),
            );
            debug!("{color} castles kingside");
            return Ok(AppliedMove {
                board: next,
                captured: PieceType::Empty,
                kind: MoveKind::Castle(CastleSide::Kingside),
            });
        }
    }

    if kind == PieceKind::Pawn && to.row == promotion_row(color) {
        let captured = next.relocate(from, to);
        next.set(to, PieceType::new(color, PieceKind::Queen));
        debug!("{color} pawn promotes on {to}");
        return Ok(AppliedMove {
            board: next,
            captured,
            kind: MoveKind::Promotion,
        });
    }

    let captured = next.relocate(from, to);
    Ok(AppliedMove {
        board: next,
        captured,
        kind: if captured.is_empty() {
            MoveKind::Quiet
        } else {
            MoveKind::Capture
        },
    })
}
