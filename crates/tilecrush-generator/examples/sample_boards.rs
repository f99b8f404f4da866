//! Samples many dealt boards and reports how often they need settling.
//!
//! This example shows how to:
//! - Create a `BoardGenerator` for a given size and palette
//! - Deal boards from explicit seeds with `InitialMatchPolicy::Defer`
//! - Settle them with a `Resolver` fed by the same seeded stream
//! - Summarize how many raw boards contain matches and how long settling takes
//!
//! # Usage
//!
//! ```sh
//! cargo run --example sample_boards
//! ```
//!
//! Change the board shape:
//!
//! ```sh
//! cargo run --example sample_boards -- --size 5 --palette 4
//! ```
//!
//! Control the sample count (default: 10000):
//!
//! ```sh
//! cargo run --example sample_boards -- --samples 100000
//! ```
//!
//! Print the board dealt from one seed, before and after settling:
//!
//! ```sh
//! cargo run --example sample_boards -- --show c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use tilecrush_core::{BoardSize, Palette, Resolver, find_all_matches};
use tilecrush_generator::{BoardGenerator, BoardSeed, InitialMatchPolicy, RandomSource};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board edge length.
    #[arg(long, value_name = "N", default_value_t = 8)]
    size: usize,

    /// Number of tile colors.
    #[arg(long, value_name = "P", default_value_t = 5)]
    palette: u8,

    /// Number of seeds to sample.
    #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
    samples: u64,

    /// Show a single seed instead of sampling.
    #[arg(long, value_name = "SEED")]
    show: Option<BoardSeed>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Sample {
    had_matches: bool,
    passes: usize,
    cleared: usize,
}

fn main() {
    let args = Args::parse();
    let (size, palette) = match (BoardSize::new(args.size), Palette::new(args.palette)) {
        (Ok(size), Ok(palette)) => (size, palette),
        (Err(e), _) => {
            eprintln!("--size: {e}");
            process::exit(2);
        }
        (_, Err(e)) => {
            eprintln!("--palette: {e}");
            process::exit(2);
        }
    };
    let generator = BoardGenerator::new(size, palette).with_policy(InitialMatchPolicy::Defer);

    if let Some(seed) = args.show {
        show(&generator, seed);
        return;
    }

    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let samples = (0..args.samples)
        .into_par_iter()
        .map(|n| sample(&generator, BoardSeed::from_u64(n)))
        .collect::<Vec<_>>();

    print_summary(&args, &samples);
}

fn sample(generator: &BoardGenerator, seed: BoardSeed) -> Sample {
    let mut source = RandomSource::from_seed(seed);
    let mut board = generator.generate(&mut source);
    let had_matches = !find_all_matches(&board).is_empty();
    let resolution = Resolver::new(generator.palette()).settle(&mut board, &mut source);
    Sample {
        had_matches,
        passes: resolution.pass_count(),
        cleared: resolution.total_cleared(),
    }
}

fn show(generator: &BoardGenerator, seed: BoardSeed) {
    let mut source = RandomSource::from_seed(seed);
    let mut board = generator.generate(&mut source);

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Dealt:");
    for line in board.to_string().lines() {
        println!("  {line}");
    }
    println!();

    let resolution = Resolver::new(generator.palette()).settle(&mut board, &mut source);
    println!("Settled ({} passes, {} cleared):", resolution.pass_count(), resolution.total_cleared());
    for line in board.to_string().lines() {
        println!("  {line}");
    }
}

#[expect(clippy::cast_precision_loss)]
fn print_summary(args: &Args, samples: &[Sample]) {
    let total = samples.len() as f64;
    let with_matches = samples.iter().filter(|s| s.had_matches).count();
    let max_passes = samples.iter().map(|s| s.passes).max().unwrap_or_default();
    let mean_passes = samples.iter().map(|s| s.passes).sum::<usize>() as f64 / total;
    let mean_cleared = samples.iter().map(|s| s.cleared).sum::<usize>() as f64 / total;

    println!("Board:");
    println!("  {0}x{0}, {1} colors", args.size, args.palette);
    println!();
    println!("Samples:");
    println!("  {}", samples.len());
    println!();
    println!("Initial matches:");
    println!(
        "  {with_matches} boards ({:.1}%)",
        with_matches as f64 / total * 100.0
    );
    println!();
    println!("Settle:");
    println!("  mean passes: {mean_passes:.2}");
    println!("  max passes: {max_passes}");
    println!("  mean cleared: {mean_cleared:.2}");
}
