//! Game state controller.
//!
//! `GameState` is the single aggregate of a game: board, side to move,
//! castling rights, the last move (for en passant), captured-piece ledgers
//! and terminal status. It is a value: `play_move` returns a fresh state and
//! leaves `self` intact, so a previous snapshot can be kept for undo.

use std::fmt;

use log::{debug, info};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{has_any_legal_move, legal_moves};

/// The previous move, kept only so the next move can test for en passant.
/// Squares hold their contents from before the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
}

/// Pieces taken by each side, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    pub white: Vec<PieceType>,
    pub black: Vec<PieceType>,
}

impl Captured {
    pub fn by(&self, capturer: Color) -> &[PieceType] {
        match capturer {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn record(&mut self, capturer: Color, piece: PieceType) {
        match capturer {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminal {
    #[default]
    InProgress,
    Checkmate,
    Stalemate,
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::InProgress => write!(f, "in progress"),
            Terminal::Checkmate => write!(f, "checkmate"),
            Terminal::Stalemate => write!(f, "stalemate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub castling_rights: CastlingRights,
    pub last_move: Option<LastMove>,
    pub captured: Captured,
    pub terminal: Terminal,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard opening layout, White to move, full castling rights.
    pub fn new_game() -> Self {
        Self {
            board: Board::initial(),
            turn: Color::White,
            castling_rights: CastlingRights::all(),
            last_move: None,
            captured: Captured::default(),
            terminal: Terminal::InProgress,
        }
    }

    /// Arbitrary position with `turn` to move. Terminal status is computed
    /// immediately, so a mated or stalemated position is already over.
    pub fn from_position(
        board: Board,
        turn: Color,
        castling_rights: CastlingRights,
    ) -> ChessResult<Self> {
        let mut state = Self {
            board,
            turn,
            castling_rights,
            last_move: None,
            captured: Captured::default(),
            terminal: Terminal::InProgress,
        };
        state.terminal = state.classify_terminal()?;
        Ok(state)
    }

    /// Play `from -> to` for the side to move and return the next state.
    pub fn play_move(&self, from: Coordinate, to: Coordinate) -> ChessResult<GameState> {
        if self.is_terminal() {
            return Err(ChessErrors::GameOver(self.terminal.to_string()));
        }
        let moved = self.board.at(from)?;
        let target = self.board.at(to)?;

        if !legal_moves(self, from)?.contains(&to) {
            debug!(
                "rejected {from} -> {to} for {}: {:?} has no such legal destination",
                self.turn, moved.piece
            );
            return Err(ChessErrors::IllegalMove { from, to });
        }

        let applied = apply_move(&self.board, from, to)?;
        let mover = self.turn;

        let mut captured = self.captured.clone();
        if !applied.captured.is_empty() {
            captured.record(mover, applied.captured);
        }

        let mut next = GameState {
            board: applied.board,
            turn: mover.opposite(),
            castling_rights: self
                .castling_rights
                .after_move(moved, to, applied.captured),
            last_move: Some(LastMove { from: moved, to: target }),
            captured,
            terminal: Terminal::InProgress,
        };
        next.terminal = next.classify_terminal()?;

        debug!("{mover} played {from} -> {to} ({:?})", applied.kind);
        if next.is_terminal() {
            info!("game over: {} ({} to move)", next.terminal, next.turn);
        }
        Ok(next)
    }

    /// Side to move without a legal move is mated if in check, stalemated
    /// otherwise.
    fn classify_terminal(&self) -> ChessResult<Terminal> {
        if has_any_legal_move(self, self.turn)? {
            return Ok(Terminal::InProgress);
        }
        if is_in_check(&self.board, self.turn)? {
            Ok(Terminal::Checkmate)
        } else {
            Ok(Terminal::Stalemate)
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal != Terminal::InProgress
    }

    /// The side that delivered mate. `None` while playing and on stalemate.
    pub fn winner(&self) -> Option<Color> {
        match self.terminal {
            Terminal::Checkmate => Some(self.turn.opposite()),
            Terminal::InProgress | Terminal::Stalemate => None,
        }
    }

    /// Whether the side to move is in check.
    pub fn is_in_check(&self) -> ChessResult<bool> {
        is_in_check(&self.board, self.turn)
    }
}
