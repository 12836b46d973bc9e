//! The 8x8 mailbox board.
//!
//! `Board` is a plain `Copy` value. Every transformation returns a new board
//! and leaves its input untouched, so earlier snapshots stay valid.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::INITIAL_LAYOUT;
use crate::game_state::chess_types::*;

/// Light/dark checkerboard tag. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareShade {
    Light,
    Dark,
}

/// A square on the board together with its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub coordinate: Coordinate,
    pub piece: PieceType,
}

impl Square {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece.is_empty()
    }

    pub fn shade(&self) -> SquareShade {
        if (self.coordinate.row + self.coordinate.col) % 2 == 0 {
            SquareShade::Light
        } else {
            SquareShade::Dark
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[PieceType; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// Standard chess starting position.
    pub const fn initial() -> Self {
        Self {
            cells: INITIAL_LAYOUT,
        }
    }

    /// Board with no pieces, for building positions piece by piece.
    pub const fn empty() -> Self {
        Self {
            cells: [[PieceType::Empty; 8]; 8],
        }
    }

    /// Square at `coordinate`, or `OutOfBounds`.
    pub fn at(&self, coordinate: Coordinate) -> ChessResult<Square> {
        if !coordinate.in_bounds() {
            return Err(ChessErrors::out_of_bounds(coordinate));
        }
        Ok(Square {
            coordinate,
            piece: self.piece(coordinate),
        })
    }

    /// Contents of an on-board coordinate.
    ///
    /// Callers inside the engine only pass coordinates produced by
    /// `Coordinate::offset` or validated by `at`.
    #[inline]
    pub(crate) fn piece(&self, coordinate: Coordinate) -> PieceType {
        debug_assert!(coordinate.in_bounds());
        self.cells[coordinate.row as usize][coordinate.col as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, coordinate: Coordinate, piece: PieceType) {
        debug_assert!(coordinate.in_bounds());
        self.cells[coordinate.row as usize][coordinate.col as usize] = piece;
    }

    /// Copy of this board with `piece` placed on `coordinate`.
    pub fn with_piece(&self, coordinate: Coordinate, piece: PieceType) -> ChessResult<Board> {
        if !coordinate.in_bounds() {
            return Err(ChessErrors::out_of_bounds(coordinate));
        }
        let mut next = *self;
        next.set(coordinate, piece);
        Ok(next)
    }

    /// Copy of this board with the piece on `from` relocated to `to`.
    ///
    /// Returns the new board and whatever `to` held before (possibly empty).
    pub fn with_move(&self, from: Coordinate, to: Coordinate) -> ChessResult<(Board, PieceType)> {
        if !from.in_bounds() {
            return Err(ChessErrors::out_of_bounds(from));
        }
        if !to.in_bounds() {
            return Err(ChessErrors::out_of_bounds(to));
        }
        let mut next = *self;
        let displaced = next.relocate(from, to);
        Ok((next, displaced))
    }

    /// In-place relocation on a board the caller already owns as a copy.
    pub(crate) fn relocate(&mut self, from: Coordinate, to: Coordinate) -> PieceType {
        let moving = self.piece(from);
        let displaced = self.piece(to);
        self.set(to, moving);
        self.set(from, PieceType::Empty);
        displaced
    }

    /// All 64 squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..BOARD_WIDTH).flat_map(move |row| {
            (0..BOARD_WIDTH).map(move |col| {
                let coordinate = Coordinate::new(row, col);
                Square {
                    coordinate,
                    piece: self.piece(coordinate),
                }
            })
        })
    }

    /// Occupied squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.squares()
            .filter(move |square| square.piece.color() == Some(color))
    }

    /// Location of `color`'s king, if it is on the board.
    pub fn king_coordinate(&self, color: Color) -> Option<Coordinate> {
        let king = PieceType::new(color, PieceKind::King);
        self.squares()
            .find(|square| square.piece == king)
            .map(|square| square.coordinate)
    }

    pub fn count(&self, piece: PieceType) -> usize {
        self.squares().filter(|square| square.piece == piece).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_has_standard_back_ranks() {
        let board = Board::initial();
        assert_eq!(
            board.at(Coordinate::new(0, 4)).unwrap().piece,
            PieceType::BlackKing
        );
        assert_eq!(
            board.at(Coordinate::new(7, 3)).unwrap().piece,
            PieceType::WhiteQueen
        );
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
        assert_eq!(board.squares().count(), 64);
    }

    #[test]
    fn at_rejects_off_board_coordinates() {
        let board = Board::initial();
        assert_eq!(
            board.at(Coordinate::new(8, 0)),
            Err(ChessErrors::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            board.at(Coordinate::new(0, -1)),
            Err(ChessErrors::OutOfBounds { row: 0, col: -1 })
        );
    }

    #[test]
    fn with_move_leaves_the_source_board_untouched() {
        let board = Board::initial();
        let (next, displaced) = board
            .with_move(Coordinate::new(6, 4), Coordinate::new(4, 4))
            .unwrap();
        assert_eq!(displaced, PieceType::Empty);
        assert_eq!(board, Board::initial());
        assert_eq!(next.piece(Coordinate::new(4, 4)), PieceType::WhitePawn);
        assert!(next.piece(Coordinate::new(6, 4)).is_empty());
    }

    #[test]
    fn shade_alternates_across_the_board() {
        let board = Board::initial();
        let a = board.at(Coordinate::new(0, 0)).unwrap();
        let b = board.at(Coordinate::new(0, 1)).unwrap();
        let c = board.at(Coordinate::new(1, 1)).unwrap();
        assert_eq!(a.shade(), SquareShade::Light);
        assert_eq!(b.shade(), SquareShade::Dark);
        assert_eq!(c.shade(), SquareShade::Light);
    }

    #[test]
    fn king_coordinate_finds_each_king() {
        let board = Board::initial();
        assert_eq!(board.king_coordinate(Color::White), Some(Coordinate::new(7, 4)));
        assert_eq!(board.king_coordinate(Color::Black), Some(Coordinate::new(0, 4)));
        assert_eq!(Board::empty().king_coordinate(Color::White), None);
    }
}
