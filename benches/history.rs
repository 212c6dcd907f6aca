//! Cost of snapshot-per-move play and full unwinding.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use golf_solitaire::GameState;

fn greedy_playout(seed: u64) -> GameState {
    let mut game = GameState::with_seed(seed);
    while let Some(&mv) = game.legal_moves().first() {
        let _ = game.apply(mv);
    }
    game
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("greedy_playout", |b| {
        b.iter(|| greedy_playout(black_box(42)))
    });
}

fn bench_unwind(c: &mut Criterion) {
    c.bench_function("undo_to_start", |b| {
        b.iter_batched(
            || greedy_playout(42),
            |mut game| while game.undo().is_ok() {},
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_playout, bench_unwind);
criterion_main!(benches);
