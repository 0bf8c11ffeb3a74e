//! Benchmarks for dealing puzzles and driving play sessions.
//!
//! This benchmarks the intent reducer - the only code on the interactive path.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use seesaw::game::{Digit, GameState, Intent, Operator, Side};

/// Pair up the dealt digits and commit every distinct-valued pair.
fn scripted_session(seed: u64) -> GameState {
    let mut state = GameState::new(seed);

    for side in Side::BOTH {
        let digits: Vec<Digit> = state.side(side).pool().digits().to_vec();
        for pair in digits.chunks(2) {
            if let [a, b] = *pair
                && a != b
            {
                state.apply(Intent::SelectNumber { value: a, side });
                state.apply(Intent::SelectNumber { value: b, side });
                state.apply(Intent::SelectOperator(Operator::Add));
                state.apply(Intent::Commit(side));
            }
        }
    }

    state.apply(Intent::CheckBalance);
    state
}

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal", |b| {
        b.iter(|| black_box(GameState::new(black_box(42))));
    });
}

fn bench_session(c: &mut Criterion) {
    c.bench_function("scripted_session", |b| {
        b.iter(|| black_box(scripted_session(black_box(42))));
    });
}

fn bench_session_batch(c: &mut Criterion) {
    // Benchmark 100 sessions sequentially to smooth out per-deal variance
    c.bench_function("100_sessions_sequential", |b| {
        b.iter(|| {
            for seed in 0..100u64 {
                let state = scripted_session(black_box(seed));
                let _ = black_box(state);
            }
        });
    });
}

fn bench_totals(c: &mut Criterion) {
    let state = scripted_session(42);

    c.bench_function("totals_recompute", |b| {
        b.iter(|| black_box(black_box(&state).totals()));
    });
}

criterion_group!(
    benches,
    bench_deal,
    bench_session,
    bench_session_batch,
    bench_totals
);
criterion_main!(benches);
