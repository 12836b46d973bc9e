use std::sync::Arc;
use std::thread;

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::MoveKind;
use crate::move_generation::move_generator::{GeneratedMove, LegalMoveGenerator, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn count_leaf(&mut self, mv: &GeneratedMove) {
        self.nodes += 1;
        if !mv.captured.is_empty() {
            self.captures += 1;
        }
        match mv.kind {
            MoveKind::EnPassant => self.en_passant += 1,
            MoveKind::Castle(_) => self.castles += 1,
            MoveKind::Promotion => self.promotions += 1,
            MoveKind::Quiet | MoveKind::Capture => {}
        }
        if mv.annotations.gives_check {
            self.checks += 1;
        }
        if mv.annotations.is_checkmate {
            self.checkmates += 1;
        }
    }
}

/// Perft with the default legality-filter generator.
pub fn perft_legal(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    perft(&LegalMoveGenerator, game_state, depth)
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    perft_single_thread(generator, game_state, depth)
}

pub fn perft_single_thread<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut total = PerftCounts::default();

    for mv in root_moves {
        perft_recurse(generator, &mv, depth, 1, &mut total)?;
    }

    Ok(total)
}

/// One worker thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &mv, depth, 1, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok((result, local)) => {
                result?;
                total.merge(local);
            }
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if current_depth == search_depth {
        counts.count_leaf(mv);
        return Ok(());
    }

    let moves = generator.generate_legal_moves(&mv.game_after_move)?;
    for child in moves {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}
