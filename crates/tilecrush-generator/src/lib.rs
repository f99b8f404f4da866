//! Seeded board generation.
//!
//! This crate supplies the randomness the core crate leaves abstract:
//!
//! - [`BoardSeed`]: a 256-bit seed with a hex text form
//! - [`RandomSource`]: a PCG stream implementing [`TileSource`](tilecrush_core::TileSource)
//! - [`BoardGenerator`]: deals fresh boards and applies an [`InitialMatchPolicy`]
//!
//! # Examples
//!
//! ```
//! use tilecrush_core::{BoardSize, Palette};
//! use tilecrush_generator::{BoardGenerator, InitialMatchPolicy};
//!
//! let generator = BoardGenerator::new(BoardSize::new(5)?, Palette::new(5)?)
//!     .with_policy(InitialMatchPolicy::Defer);
//! let dealt = generator.generate_random();
//!
//! println!("seed: {}", dealt.seed);
//! println!("{}", dealt.board);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{generator::*, random_source::*, seed::*};

mod generator;
mod random_source;
mod seed;
