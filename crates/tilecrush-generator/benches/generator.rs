//! Benchmarks for board generation and settling.
//!
//! # Benchmarks
//!
//! - **`generate_resolve`**: Deals an 8x8 board over 5 colors and settles any
//!   initial matches (the default policy).
//! - **`generate_defer`**: Deals the same boards without settling, isolating the
//!   cost of the fill itself.
//! - **`settle_after_swap`**: Swaps the first adjacent pair that creates a match
//!   on a dealt board and runs the full settle cycle.
//!
//! # Test Data
//!
//! Uses three fixed seeds so every run measures the same boards.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use tilecrush_core::{Board, BoardSize, Direction, Palette, Resolver, run_through};
use tilecrush_generator::{BoardGenerator, BoardSeed, InitialMatchPolicy, RandomSource};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn generator(policy: InitialMatchPolicy) -> BoardGenerator {
    BoardGenerator::new(BoardSize::new(8).unwrap(), Palette::new(5).unwrap()).with_policy(policy)
}

fn bench_generate(c: &mut Criterion, name: &str, policy: InitialMatchPolicy) {
    let generator = generator(policy);
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = BoardSeed::from_str(seed).unwrap();
        c.bench_with_input(BenchmarkId::new(name, format!("seed_{i}")), &seed, |b, seed| {
            b.iter_batched(
                || hint::black_box(*seed),
                |seed| generator.generate_with_seed(seed),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_generate_resolve(c: &mut Criterion) {
    bench_generate(c, "generate_resolve", InitialMatchPolicy::Resolve);
}

fn bench_generate_defer(c: &mut Criterion) {
    bench_generate(c, "generate_defer", InitialMatchPolicy::Defer);
}

/// Finds a swap that creates a match without relying on the game crate.
fn matching_swap(board: &Board) -> Option<(usize, usize)> {
    let size = board.size();
    let edge = size.edge();
    (0..size.cell_count()).find_map(|a| {
        [a + 1, a + edge]
            .into_iter()
            .filter(|&b| size.are_neighbors(a, b))
            .find(|&b| {
                let mut trial = board.clone();
                trial.swap(a, b);
                [a, b].into_iter().any(|i| {
                    Direction::ALL
                        .into_iter()
                        .any(|d| run_through(&trial, i, d).len() >= 3)
                })
            })
            .map(|b| (a, b))
    })
}

fn bench_settle_after_swap(c: &mut Criterion) {
    let generator = generator(InitialMatchPolicy::Resolve);
    let resolver = Resolver::new(generator.palette());

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = BoardSeed::from_str(seed).unwrap();
        let mut source = RandomSource::from_seed(seed);
        let board = generator.generate(&mut source);
        let (a, b) = matching_swap(&board).expect("dealt board has a matching swap");

        c.bench_with_input(
            BenchmarkId::new("settle_after_swap", format!("seed_{i}")),
            &(board, source),
            |bench, (board, source)| {
                bench.iter_batched(
                    || (hint::black_box(board.clone()), source.clone()),
                    |(mut board, mut source)| {
                        board.swap(a, b);
                        resolver.settle(&mut board, &mut source)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generate_resolve,
        bench_generate_defer,
        bench_settle_after_swap
);
criterion_main!(benches);
