//! Session configuration.
//!
//! Defaults match a casual five-minute game with undo allowed. The terminal
//! front end reads overrides from the environment:
//!
//! - `MAILBOX_CHESS_CLOCK_SECONDS`: per-side countdown, `0` disables the clock.
//! - `MAILBOX_CHESS_ALLOW_UNDO`: `true`/`false`.

use chrono::TimeDelta;

use crate::errors::{ChessErrors, ChessResult};

pub const CLOCK_SECONDS_VAR: &str = "MAILBOX_CHESS_CLOCK_SECONDS";
pub const ALLOW_UNDO_VAR: &str = "MAILBOX_CHESS_ALLOW_UNDO";

pub const DEFAULT_CLOCK_SECONDS: u64 = 5 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub clock_limit_seconds: u64,
    pub allow_undo: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            clock_limit_seconds: DEFAULT_CLOCK_SECONDS,
            allow_undo: true,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> ChessResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ChessResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(CLOCK_SECONDS_VAR) {
            config.clock_limit_seconds = raw.trim().parse::<u64>().map_err(|_| {
                ChessErrors::InvalidConfig(format!("{CLOCK_SECONDS_VAR}={raw} is not a number of seconds"))
            })?;
        }

        if let Some(raw) = lookup(ALLOW_UNDO_VAR) {
            config.allow_undo = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ChessErrors::InvalidConfig(format!(
                        "{ALLOW_UNDO_VAR}={raw} is not a boolean"
                    )))
                }
            };
        }

        config.clock_limit()?;
        Ok(config)
    }

    /// Per-side time limit, or `None` when the clock is disabled.
    pub fn clock_limit(&self) -> ChessResult<Option<TimeDelta>> {
        if self.clock_limit_seconds == 0 {
            return Ok(None);
        }
        i64::try_from(self.clock_limit_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .map(Some)
            .ok_or_else(|| {
                ChessErrors::InvalidConfig(format!(
                    "clock limit of {} seconds is out of range",
                    self.clock_limit_seconds
                ))
            })
    }
}
