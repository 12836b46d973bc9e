//! Line-oriented terminal front end and command loop.
//!
//! Stands in for a graphical board: parses commands, forwards them to a
//! `GameSession`, and prints the rendered board after every change.
//! Coordinates are raw `row col` integers, row 0 at the top.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};

use crate::config::GameConfig;
use crate::errors::ChessResult;
use crate::game_state::chess_types::Coordinate;
use crate::game_state::game_session::{GameSession, SelectionOutcome};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::utils::render_game_state::render_session;

const HELP: &str = "commands: select r c | move r1 c1 r2 c2 | moves r c | undo | new | board | help | quit";

pub fn run_stdio_loop(config: GameConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut terminal = TerminalState::new(config).map_err(io::Error::other)?;

    terminal.print_board(&mut stdout, Utc::now())?;
    writeln!(stdout, "{HELP}")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = terminal.handle_command(&line, &mut stdout, Utc::now())?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TerminalState {
    session: GameSession,
}

impl TerminalState {
    pub fn new(config: GameConfig) -> ChessResult<Self> {
        Ok(Self {
            session: GameSession::new(config)?,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Handle one input line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write, now: DateTime<Utc>) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        if let Some(loser) = self.session.check_clock(now) {
            writeln!(out, "{loser} ran out of time")?;
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match cmd {
            "select" => match parse_coordinates(&args, 1) {
                Some(coords) => match self.session.select(coords[0], now) {
                    Ok(SelectionOutcome::Selected(selection)) => {
                        if selection.destinations.is_empty() {
                            writeln!(out, "{} has no legal moves", selection.from)?;
                        }
                        self.print_board(out, now)?;
                    }
                    Ok(SelectionOutcome::Cleared) => {
                        writeln!(out, "selection cleared")?;
                    }
                    Ok(SelectionOutcome::Moved { from, to }) => {
                        writeln!(out, "moved {from} -> {to}")?;
                        self.print_board(out, now)?;
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                },
                None => writeln!(out, "usage: select r c")?,
            },
            "move" => match parse_coordinates(&args, 2) {
                Some(coords) => match self.session.play(coords[0], coords[1], now).map(|_| ()) {
                    Ok(()) => self.print_board(out, now)?,
                    Err(err) => writeln!(out, "error: {err}")?,
                },
                None => writeln!(out, "usage: move r1 c1 r2 c2")?,
            },
            "moves" => match parse_coordinates(&args, 1) {
                Some(coords) => match legal_moves(self.session.state(), coords[0]) {
                    Ok(destinations) => {
                        let listed: Vec<String> = destinations.iter().map(|to| to.to_string()).collect();
                        if listed.is_empty() {
                            writeln!(out, "no legal moves from {}", coords[0])?;
                        } else {
                            writeln!(out, "{}", listed.join(" "))?;
                        }
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                },
                None => writeln!(out, "usage: moves r c")?,
            },
            "undo" => match self.session.undo(now).map(|_| ()) {
                Ok(()) => self.print_board(out, now)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "new" => {
                self.session.new_game();
                self.print_board(out, now)?;
            }
            "board" => self.print_board(out, now)?,
            "help" => writeln!(out, "{HELP}")?,
            "quit" => return Ok(true),
            _ => writeln!(out, "unknown command '{cmd}', {HELP}")?,
        }

        Ok(false)
    }

    fn print_board(&self, out: &mut impl Write, now: DateTime<Utc>) -> io::Result<()> {
        match render_session(&self.session, now) {
            Ok(text) => writeln!(out, "{text}"),
            Err(err) => writeln!(out, "error: {err}"),
        }
    }
}

/// Parse exactly `count` `row col` pairs.
fn parse_coordinates(args: &[&str], count: usize) -> Option<Vec<Coordinate>> {
    if args.len() != count * 2 {
        return None;
    }
    let numbers = args
        .iter()
        .map(|arg| arg.parse::<i8>().ok())
        .collect::<Option<Vec<i8>>>()?;
    Some(
        numbers
            .chunks(2)
            .map(|pair| Coordinate::new(pair[0], pair[1]))
            .collect(),
    )
}
