use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_chess::game_state::chess_types::*;
use mailbox_chess::move_generation::legal_move_checks::is_in_check;
use mailbox_chess::move_generation::legal_move_generator::{all_legal_moves, legal_moves};

fn middlegame() -> GameState {
    let c = Coordinate::new;
    [
        (c(6, 4), c(4, 4)),
        (c(1, 4), c(3, 4)),
        (c(7, 6), c(5, 5)),
        (c(0, 1), c(2, 2)),
        (c(7, 5), c(4, 2)),
        (c(0, 5), c(3, 2)),
        (c(6, 3), c(5, 3)),
        (c(0, 6), c(2, 5)),
    ]
    .iter()
    .try_fold(GameState::new_game(), |game, &(from, to)| game.play_move(from, to))
    .expect("benchmark opening line should be legal")
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for (name, game) in [("opening", GameState::new_game()), ("middlegame", middlegame())] {
        group.bench_with_input(BenchmarkId::new("all_legal_moves", name), &game, |b, game| {
            b.iter(|| {
                let moves = all_legal_moves(black_box(game)).expect("generation should succeed");
                black_box(moves.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("king_square_moves", name), &game, |b, game| {
            let king = game
                .board
                .king_coordinate(game.turn)
                .expect("benchmark position should have a king");
            b.iter(|| black_box(legal_moves(black_box(game), king).expect("king moves")));
        });

        group.bench_with_input(BenchmarkId::new("is_in_check", name), &game, |b, game| {
            b.iter(|| black_box(is_in_check(black_box(&game.board), game.turn).expect("king present")));
        });
    }

    group.finish();
}

criterion_group!(legal_move_benches, bench_legal_moves);
criterion_main!(legal_move_benches);
