//! Castling-rights bookkeeping.
//!
//! Flags only ever go from `true` to `false`. Nothing in the crate sets a
//! cleared flag again.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_FROM_COL, QUEENSIDE_ROOK_FROM_COL};
use crate::game_state::chess_types::{Color, Coordinate, PieceKind, PieceType, Square};
use crate::move_generation::legal_move_apply::CastleSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SideCastlingRights {
    pub queenside: bool,
    pub kingside: bool,
}

impl SideCastlingRights {
    pub const ALL: SideCastlingRights = SideCastlingRights {
        queenside: true,
        kingside: true,
    };
    pub const NONE: SideCastlingRights = SideCastlingRights {
        queenside: false,
        kingside: false,
    };

    #[inline]
    pub fn allows(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::Kingside => self.kingside,
            CastleSide::Queenside => self.queenside,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white: SideCastlingRights,
    pub black: SideCastlingRights,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            white: SideCastlingRights::ALL,
            black: SideCastlingRights::ALL,
        }
    }

    pub const fn none() -> Self {
        Self {
            white: SideCastlingRights::NONE,
            black: SideCastlingRights::NONE,
        }
    }

    #[inline]
    pub fn for_color(&self, color: Color) -> SideCastlingRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn for_color_mut(&mut self, color: Color) -> &mut SideCastlingRights {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    pub fn clear(&mut self, color: Color, side: CastleSide) {
        let rights = self.for_color_mut(color);
        match side {
            CastleSide::Kingside => rights.kingside = false,
            CastleSide::Queenside => rights.queenside = false,
        }
    }

    pub fn clear_all(&mut self, color: Color) {
        *self.for_color_mut(color) = SideCastlingRights::NONE;
    }

    /// Rights after `moved` travelled to `to`, removing `captured`.
    ///
    /// A king move clears both flags of its color; a rook leaving its home
    /// corner clears that corner's flag; a rook captured on its home corner
    /// clears the flag of the captured side.
    pub fn after_move(&self, moved: Square, to: Coordinate, captured: PieceType) -> CastlingRights {
        let mut next = *self;

        if let (Some(color), Some(kind)) = (moved.piece.color(), moved.piece.kind()) {
            match kind {
                PieceKind::King => next.clear_all(color),
                PieceKind::Rook => {
                    if let Some(side) = home_corner_side(color, moved.coordinate) {
                        next.clear(color, side);
                    }
                }
                _ => {}
            }
        }

        if let (Some(color), Some(PieceKind::Rook)) = (captured.color(), captured.kind()) {
            if let Some(side) = home_corner_side(color, to) {
                next.clear(color, side);
            }
        }

        next
    }
}

/// Which castle a rook of `color` standing on `coordinate` belongs to, if
/// `coordinate` is one of that color's starting rook corners.
pub fn home_corner_side(color: Color, coordinate: Coordinate) -> Option<CastleSide> {
    if coordinate.row != color.home_row() {
        return None;
    }
    match coordinate.col {
        QUEENSIDE_ROOK_FROM_COL => Some(CastleSide::Queenside),
        KINGSIDE_ROOK_FROM_COL => Some(CastleSide::Kingside),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(row: i8, col: i8, piece: PieceType) -> Square {
        Square {
            coordinate: Coordinate::new(row, col),
            piece,
        }
    }

    #[test]
    fn king_move_clears_both_flags_for_its_color_only() {
        let rights = CastlingRights::all().after_move(
            square(7, 4, PieceType::WhiteKing),
            Coordinate::new(7, 5),
            PieceType::Empty,
        );
        assert_eq!(rights.white, SideCastlingRights::NONE);
        assert_eq!(rights.black, SideCastlingRights::ALL);
    }

    #[test]
    fn rook_leaving_its_corner_clears_the_matching_flag() {
        let rights = CastlingRights::all().after_move(
            square(0, 7, PieceType::BlackRook),
            Coordinate::new(3, 7),
            PieceType::Empty,
        );
        assert!(rights.black.queenside);
        assert!(!rights.black.kingside);
        assert_eq!(rights.white, SideCastlingRights::ALL);
    }

    #[test]
    fn rook_away_from_its_corner_leaves_rights_alone() {
        let rights = CastlingRights::all().after_move(
            square(4, 0, PieceType::WhiteRook),
            Coordinate::new(7, 0),
            PieceType::Empty,
        );
        assert_eq!(rights, CastlingRights::all());
    }

    #[test]
    fn capturing_a_home_corner_rook_clears_the_victims_flag() {
        let rights = CastlingRights::all().after_move(
            square(2, 2, PieceType::WhiteBishop),
            Coordinate::new(0, 0),
            PieceType::BlackRook,
        );
        assert!(!rights.black.queenside);
        assert!(rights.black.kingside);
        assert_eq!(rights.white, SideCastlingRights::ALL);
    }

    #[test]
    fn cleared_flags_stay_cleared() {
        let mut rights = CastlingRights::none();
        rights = rights.after_move(
            square(7, 3, PieceType::WhiteRook),
            Coordinate::new(7, 0),
            PieceType::Empty,
        );
        assert_eq!(rights, CastlingRights::none());
    }
}
