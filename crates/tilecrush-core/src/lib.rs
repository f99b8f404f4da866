//! Core data structures and algorithms for tile-matching puzzles.
//!
//! This crate holds the board state machine of the engine: the grid itself, the
//! match finder, gravity and refill, and the settle loop that drives a board from
//! "just swapped" back to a stable state. It has no logging and performs no I/O;
//! randomness enters only through the [`TileSource`] trait so that every settle
//! cycle is reproducible.
//!
//! # Overview
//!
//! 1. **Values** - What a cell can hold
//!    - [`tile`]: [`TileType`] colors, the [`Palette`] they are drawn from, and the
//!      [`Cell`] alias (`None` is the empty sentinel)
//!    - [`geometry`]: [`BoardSize`] index arithmetic and [`Direction`]
//!
//! 2. **Board** - The grid and its primitives
//!    - [`board`]: [`Board`], a row-major square grid of cells
//!
//! 3. **Algorithms** - Pure functions over a board
//!    - [`matcher`]: runs and [`find_all_matches`]
//!    - [`gravity`]: [`apply_gravity`] and [`refill`]
//!    - [`resolver`]: the multi-pass [`Resolver`]
//!
//! 4. **Randomness** - [`source`]: the [`TileSource`] seam and a deterministic
//!    [`SequenceSource`]
//!
//! # Examples
//!
//! ```
//! use tilecrush_core::{Board, Palette, Resolver, SequenceSource, find_all_matches};
//!
//! let mut board: Board = "
//!     AAA
//!     BCB
//!     CBC
//! "
//! .parse()?;
//! assert_eq!(find_all_matches(&board).len(), 3);
//!
//! let palette = Palette::new(5)?;
//! let mut source = SequenceSource::from_letters("ABA");
//! let resolution = Resolver::new(palette).settle(&mut board, &mut source);
//!
//! assert_eq!(resolution.total_cleared(), 3);
//! assert!(find_all_matches(&board).is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod geometry;
pub mod gravity;
pub mod matcher;
pub mod resolver;
pub mod source;
pub mod tile;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardError, BoardParseError},
    geometry::{BoardSize, BoardSizeError, Direction},
    gravity::{TileFall, TileUpdate, apply_gravity, refill},
    matcher::{MIN_MATCH_LEN, MatchSet, Run, find_all_matches, is_stable, run_through},
    resolver::{ClearEvent, Resolution, ResolutionPass, Resolver},
    source::{SequenceSource, TileSource},
    tile::{Cell, Palette, PaletteError, TileType},
};
