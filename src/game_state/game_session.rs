//! Interactive session around a single game.
//!
//! The session is the only writer of its `GameState`. It follows the
//! select / highlight / confirm loop of a board UI, keeps the previous
//! snapshot for a one-level undo, and drives the countdown clock. Legality
//! shown to the user and legality used to play always come from the same
//! stored snapshot.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::clock::game_clock::GameClock;
use crate::config::GameConfig;
use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;

/// The currently selected piece and where it may go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub from: Coordinate,
    pub destinations: BTreeSet<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected(Selection),
    Cleared,
    Moved { from: Coordinate, to: Coordinate },
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    previous: Option<GameState>,
    selection: Option<Selection>,
    clock: Option<GameClock>,
    time_forfeit: Option<Color>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> ChessResult<Self> {
        let clock = config.clock_limit()?.map(GameClock::new);
        Ok(Self {
            config,
            state: GameState::new_game(),
            previous: None,
            selection: None,
            clock,
            time_forfeit: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn clock(&self) -> Option<&GameClock> {
        self.clock.as_ref()
    }

    /// Side that lost on time, if the game ended that way.
    pub fn time_forfeit(&self) -> Option<Color> {
        self.time_forfeit
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal() || self.time_forfeit.is_some()
    }

    /// Flags an expired clock first, so a side out of time cannot move.
    fn ensure_running(&mut self, now: DateTime<Utc>) -> ChessResult<()> {
        self.check_clock(now);
        if let Some(loser) = self.time_forfeit {
            return Err(ChessErrors::GameOver(format!("{loser} ran out of time")));
        }
        if self.state.is_terminal() {
            return Err(ChessErrors::GameOver(self.state.terminal.to_string()));
        }
        Ok(())
    }

    /// One click on the board.
    ///
    /// With nothing selected, a piece of the side to move becomes the
    /// selection. With a selection, clicking it again clears it, clicking a
    /// highlighted square plays the move, anything else clears it.
    pub fn select(&mut self, coordinate: Coordinate, now: DateTime<Utc>) -> ChessResult<SelectionOutcome> {
        self.ensure_running(now)?;
        let square = self.state.board.at(coordinate)?;

        if let Some(selection) = self.selection.take() {
            if selection.destinations.contains(&coordinate) {
                self.play(selection.from, coordinate, now)?;
                return Ok(SelectionOutcome::Moved {
                    from: selection.from,
                    to: coordinate,
                });
            }
            return Ok(SelectionOutcome::Cleared);
        }

        if square.piece.color() != Some(self.state.turn) {
            return Ok(SelectionOutcome::Cleared);
        }

        let selection = Selection {
            from: coordinate,
            destinations: legal_moves(&self.state, coordinate)?,
        };
        self.selection = Some(selection.clone());
        Ok(SelectionOutcome::Selected(selection))
    }

    /// Play a move directly, bypassing the selection loop.
    pub fn play(&mut self, from: Coordinate, to: Coordinate, now: DateTime<Utc>) -> ChessResult<&GameState> {
        self.ensure_running(now)?;
        let next = match self.state.play_move(from, to) {
            Ok(next) => next,
            Err(err) => {
                warn!("move {from} -> {to} refused: {err}");
                return Err(err);
            }
        };

        if let Some(clock) = self.clock.as_mut() {
            if next.is_terminal() {
                clock.stop(now);
            } else {
                clock.switch(now, next.turn);
            }
        }

        self.previous = Some(std::mem::replace(&mut self.state, next));
        self.selection = None;
        Ok(&self.state)
    }

    /// Return to the snapshot before the last move.
    pub fn undo(&mut self, now: DateTime<Utc>) -> ChessResult<&GameState> {
        if !self.config.allow_undo {
            return Err(ChessErrors::UndoDisabled);
        }
        self.check_clock(now);
        if let Some(loser) = self.time_forfeit {
            return Err(ChessErrors::GameOver(format!("{loser} ran out of time")));
        }
        let previous = self.previous.take().ok_or(ChessErrors::NothingToUndo)?;
        self.state = previous;
        self.selection = None;

        if let Some(clock) = self.clock.as_mut() {
            clock.switch(now, self.state.turn);
        }
        info!("undo: {} to move again", self.state.turn);
        Ok(&self.state)
    }

    pub fn new_game(&mut self) {
        self.state = GameState::new_game();
        self.previous = None;
        self.selection = None;
        self.time_forfeit = None;
        if let Some(clock) = self.clock.as_mut() {
            clock.reset();
        }
        info!("new game started");
    }

    /// Flag the side to move if its clock has run out.
    pub fn check_clock(&mut self, now: DateTime<Utc>) -> Option<Color> {
        if self.time_forfeit.is_some() || self.state.is_terminal() {
            return self.time_forfeit;
        }
        let clock = self.clock.as_mut()?;
        let loser = clock.flagged(now)?;
        clock.stop(now);
        self.time_forfeit = Some(loser);
        self.selection = None;
        info!("{loser} loses on time");
        Some(loser)
    }
}
