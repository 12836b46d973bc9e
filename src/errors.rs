//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by board access, move
//! application, the game controller and the session layer.
//!
//! - `OutOfBounds` and `IllegalMove` are caller mistakes and recoverable.
//! - `GameOver` is recoverable by starting a new game.
//! - `KingMissing` means a board lost a king. That is a bug in move
//!   application and must be propagated, never swallowed.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Coordinate};

/// Unified error type for the chess engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A coordinate outside the 8x8 grid reached the API boundary.
    #[error("coordinate ({row},{col}) is outside the board")]
    OutOfBounds { row: i8, col: i8 },

    /// The destination is not in the legal-move set of the origin. Covers
    /// wrong turn, empty origin, blocked paths and moving into check alike.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Coordinate, to: Coordinate },

    /// No king of this color is on the board.
    #[error("no {0} king on the board")]
    KingMissing(Color),

    /// A move was attempted after the game ended.
    #[error("game is already over: {0}")]
    GameOver(String),

    /// Undo requested with no earlier snapshot stored.
    #[error("no earlier position to return to")]
    NothingToUndo,

    /// Undo requested while the configuration forbids it.
    #[error("undo is disabled by configuration")]
    UndoDisabled,

    /// An environment override could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;

impl ChessErrors {
    pub fn out_of_bounds(coordinate: Coordinate) -> Self {
        ChessErrors::OutOfBounds {
            row: coordinate.row,
            col: coordinate.col,
        }
    }
}
