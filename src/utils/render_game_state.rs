//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the terminal front end, tests,
//! and diagnostics. Rows and columns are labelled with the raw `(row, col)`
//! indices the engine uses; row 0 (black's home rank) is printed on top.
//!
//! Each cell is a marker followed by the piece icon:
//! `>` selected piece, `*` legal destination, `!` king in check.

use std::collections::BTreeSet;

use chrono::{DateTime, TimeDelta, Utc};

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::game_state::game_session::GameSession;
use crate::game_state::game_state::Terminal;
use crate::move_generation::legal_move_checks::{attackers_to_square, king_square};

/// Board, captured ledgers and status line for a bare game state.
pub fn render_game_state(game_state: &GameState) -> ChessResult<String> {
    let mut out = render_board(game_state, &BTreeSet::new(), None)?;
    out.push('\n');
    out.push_str(&render_captured(game_state));
    out.push_str(&render_status(game_state)?);
    Ok(out)
}

/// Everything the front end shows for a session: highlights for the current
/// selection, ledgers, clocks and outcome.
pub fn render_session(session: &GameSession, now: DateTime<Utc>) -> ChessResult<String> {
    let game_state = session.state();
    let (highlights, selected) = match session.selection() {
        Some(selection) => (selection.destinations.clone(), Some(selection.from)),
        None => (BTreeSet::new(), None),
    };

    let mut out = render_board(game_state, &highlights, selected)?;
    out.push('\n');
    out.push_str(&render_captured(game_state));

    if let Some(clock) = session.clock() {
        out.push_str(&format!(
            "clock: white {} | black {}\n",
            format_clock(clock.remaining(Color::White, now)),
            format_clock(clock.remaining(Color::Black, now))
        ));
    }

    match session.time_forfeit() {
        Some(loser) => out.push_str(&format!("{loser} lost on time, {} wins", loser.opposite())),
        None => out.push_str(&render_status(game_state)?),
    }
    Ok(out)
}

/// The 8x8 grid with labels and markers, without a trailing newline.
pub fn render_board(
    game_state: &GameState,
    highlights: &BTreeSet<Coordinate>,
    selected: Option<Coordinate>,
) -> ChessResult<String> {
    let checked_king = checked_king(game_state)?;
    let mut out = String::new();

    out.push(' ');
    for col in 0..BOARD_WIDTH {
        out.push_str(&format!(" {col}"));
    }
    out.push('\n');

    for row in 0..BOARD_WIDTH {
        out.push_str(&row.to_string());
        for col in 0..BOARD_WIDTH {
            let coordinate = Coordinate::new(row, col);
            let square = game_state.board.at(coordinate)?;

            let marker = if selected == Some(coordinate) {
                '>'
            } else if highlights.contains(&coordinate) {
                '*'
            } else if checked_king == Some(coordinate) {
                '!'
            } else {
                ' '
            };
            out.push(marker);
            out.push(piece_to_unicode(square.piece));
        }
        out.push_str(&format!(" {row}\n"));
    }

    out.push(' ');
    for col in 0..BOARD_WIDTH {
        out.push_str(&format!(" {col}"));
    }

    Ok(out)
}

fn checked_king(game_state: &GameState) -> ChessResult<Option<Coordinate>> {
    if !game_state.is_in_check()? {
        return Ok(None);
    }
    king_square(&game_state.board, game_state.turn).map(Some)
}

fn render_captured(game_state: &GameState) -> String {
    let mut out = String::new();
    for color in [Color::White, Color::Black] {
        let taken = game_state.captured.by(color);
        out.push_str(&format!("captured by {color}:"));
        if taken.is_empty() {
            out.push_str(" -");
        }
        for piece in taken {
            out.push(' ');
            out.push(piece_to_unicode(*piece));
        }
        out.push('\n');
    }
    out
}

/// One-line summary of whose turn it is, or how the game ended.
pub fn render_status(game_state: &GameState) -> ChessResult<String> {
    let status = match game_state.terminal {
        Terminal::Checkmate => match game_state.winner() {
            Some(winner) => format!("checkmate, {winner} wins"),
            None => "checkmate".to_owned(),
        },
        Terminal::Stalemate => "stalemate, draw".to_owned(),
        Terminal::InProgress => {
            let king = king_square(&game_state.board, game_state.turn)?;
            let attackers = attackers_to_square(&game_state.board, king, game_state.turn.opposite());
            if attackers.is_empty() {
                format!("{} to move", game_state.turn)
            } else {
                let from: Vec<String> = attackers
                    .iter()
                    .map(|square| square.coordinate.to_string())
                    .collect();
                format!("{} to move, in check from {}", game_state.turn, from.join(" "))
            }
        }
    };
    Ok(status)
}

fn format_clock(remaining: TimeDelta) -> String {
    let seconds = remaining.num_seconds().max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn piece_to_unicode(piece: PieceType) -> char {
    match piece {
        PieceType::Empty => '·',
        PieceType::WhitePawn => '♙',
        PieceType::WhiteKnight => '♘',
        PieceType::WhiteBishop => '♗',
        PieceType::WhiteRook => '♖',
        PieceType::WhiteQueen => '♕',
        PieceType::WhiteKing => '♔',
        PieceType::BlackPawn => '♟',
        PieceType::BlackKnight => '♞',
        PieceType::BlackBishop => '♝',
        PieceType::BlackRook => '♜',
        PieceType::BlackQueen => '♛',
        PieceType::BlackKing => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn c(row: i8, col: i8) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn opening_board_renders_with_labels() {
        let text = render_game_state(&GameState::new_game()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], "0 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 0");
        assert_eq!(lines[4], "3 · · · · · · · · 3");
        assert_eq!(lines[8], "7 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 7");
        assert_eq!(lines[9], "  0 1 2 3 4 5 6 7");
        assert_eq!(lines[10], "captured by white: -");
        assert_eq!(lines[11], "captured by black: -");
        assert_eq!(lines[12], "white to move");
    }

    #[test]
    fn selection_and_destinations_are_marked() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        let now = DateTime::from_timestamp(0, 0).unwrap();
        session.select(c(6, 4), now).unwrap();

        let text = render_session(&session, now).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[7], "6 ♙ ♙ ♙ ♙>♙ ♙ ♙ ♙ 6");
        assert_eq!(lines[6], "5 · · · ·*· · · · 5");
        assert_eq!(lines[5], "4 · · · ·*· · · · 4");
        assert!(text.contains("clock: white 5:00 | black 5:00"));
    }

    #[test]
    fn check_and_mate_are_reported() {
        let game = GameState::new_game()
            .play_move(c(6, 5), c(5, 5))
            .and_then(|g| g.play_move(c(1, 4), c(3, 4)))
            .and_then(|g| g.play_move(c(6, 6), c(4, 6)))
            .and_then(|g| g.play_move(c(0, 3), c(4, 7)))
            .unwrap();
        let text = render_game_state(&game).unwrap();
        assert!(text.contains("!♔"));
        assert!(text.ends_with("checkmate, black wins"));
    }

    #[test]
    fn captures_are_listed_for_the_capturer() {
        let game = GameState::new_game()
            .play_move(c(6, 4), c(4, 4))
            .and_then(|g| g.play_move(c(1, 3), c(3, 3)))
            .and_then(|g| g.play_move(c(4, 4), c(3, 3)))
            .unwrap();
        let text = render_game_state(&game).unwrap();
        assert!(text.contains("captured by white: ♟"));
        assert!(text.contains("captured by black: -"));
    }

    #[test]
    fn time_forfeit_replaces_the_status_line() {
        let mut session = GameSession::new(GameConfig {
            clock_limit_seconds: 10,
            ..GameConfig::default()
        })
        .unwrap();
        let start = DateTime::from_timestamp(0, 0).unwrap();
        let late = DateTime::from_timestamp(20, 0).unwrap();
        session.play(c(6, 4), c(4, 4), start).unwrap();
        session.check_clock(late);

        let text = render_session(&session, late).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[12], "clock: white 0:10 | black 0:00");
        assert_eq!(lines[13], "black lost on time, white wins");
        assert_eq!(lines.len(), 14);
    }

    #[test]
    fn clock_format_pads_seconds() {
        assert_eq!(format_clock(TimeDelta::try_seconds(65).unwrap()), "1:05");
        assert_eq!(format_clock(TimeDelta::zero()), "0:00");
    }
}
