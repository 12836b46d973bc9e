//! Per-side countdown clock.
//!
//! The clock sits outside `GameState`: it only observes whose turn it is and
//! whether the game has ended. It starts with the first completed move and
//! runs for one side at a time. Timestamps are supplied by the caller.

use chrono::{DateTime, TimeDelta, Utc};

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameClock {
    limit: TimeDelta,
    remaining: [TimeDelta; 2],
    running: Option<(Color, DateTime<Utc>)>,
}

impl GameClock {
    pub fn new(limit: TimeDelta) -> Self {
        Self {
            limit,
            remaining: [limit, limit],
            running: None,
        }
    }

    pub fn limit(&self) -> TimeDelta {
        self.limit
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.limit);
    }

    /// Which side the clock is running for, if any.
    pub fn running_for(&self) -> Option<Color> {
        self.running.map(|(color, _)| color)
    }

    /// Charge the side that just moved and start `next_turn`'s countdown.
    pub fn switch(&mut self, now: DateTime<Utc>, next_turn: Color) {
        self.charge(now);
        self.running = Some((next_turn, now));
    }

    /// Charge the running side and stop.
    pub fn stop(&mut self, now: DateTime<Utc>) {
        self.charge(now);
        self.running = None;
    }

    fn charge(&mut self, now: DateTime<Utc>) {
        if let Some((color, since)) = self.running {
            let spent = now.signed_duration_since(since).max(TimeDelta::zero());
            let left = &mut self.remaining[color.index()];
            *left = (*left - spent).max(TimeDelta::zero());
        }
    }

    /// Time left for `color` as of `now`, never negative.
    pub fn remaining(&self, color: Color, now: DateTime<Utc>) -> TimeDelta {
        let stored = self.remaining[color.index()];
        match self.running {
            Some((running, since)) if running == color => {
                let spent = now.signed_duration_since(since).max(TimeDelta::zero());
                (stored - spent).max(TimeDelta::zero())
            }
            _ => stored,
        }
    }

    /// The side whose time has run out, if any.
    pub fn flagged(&self, now: DateTime<Utc>) -> Option<Color> {
        let (color, _) = self.running?;
        (self.remaining(color, now) <= TimeDelta::zero()).then_some(color)
    }
}
