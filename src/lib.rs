//! Crate root module declarations for the Mailbox Chess rules engine.
//!
//! This file exposes the board model, move generation, the game controller
//! and session, the clock, configuration, and the terminal front end so
//! binaries, benches, and tests can import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod castling_rights;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_session;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod pseudo_legal;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod clock {
    pub mod game_clock;
}

pub mod frontend {
    pub mod terminal;
}

pub mod utils {
    pub mod render_game_state;
}
