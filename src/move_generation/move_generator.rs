//! Whole-position move generation.
//!
//! `MoveGenerator` enumerates every legal move of the side to move together
//! with the state each move produces. Perft and the benches are written
//! against the trait so alternate generators can be measured the same way.

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Terminal;
use crate::move_generation::legal_move_apply::{apply_move, MoveKind};
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
    pub is_checkmate: bool,
}

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub from: Coordinate,
    pub to: Coordinate,
    pub kind: MoveKind,
    pub captured: PieceType,
    pub game_after_move: GameState,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>>;
}

/// Generator backed by the simulate-and-filter legality rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>> {
        if game_state.is_terminal() {
            return Ok(Vec::new());
        }

        let mut generated = Vec::new();
        for (from, to) in all_legal_moves(game_state)? {
            let applied = apply_move(&game_state.board, from, to)?;
            let game_after_move = game_state.play_move(from, to)?;
            let annotations = MoveAnnotations {
                gives_check: game_after_move.is_in_check()?,
                is_checkmate: game_after_move.terminal == Terminal::Checkmate,
            };
            generated.push(GeneratedMove {
                from,
                to,
                kind: applied.kind,
                captured: applied.captured,
                game_after_move,
                annotations,
            });
        }
        Ok(generated)
    }
}
