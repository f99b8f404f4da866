use std::{num::NonZero, time::Duration};

use clap::Parser;
use tilecrush_game::GameConfig;
use tilecrush_generator::{BoardSeed, InitialMatchPolicy};

/// Play a tile-matching puzzle in the terminal.
///
/// Swap two adjacent tiles by typing their cells, either as linear indices
/// (`12 13`) or as `row,col` pairs (`1,4 1,5`). Other commands: `hint`,
/// `board`, `quit`.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Board edge length.
    #[arg(long, value_name = "N", default_value_t = 8)]
    pub size: usize,

    /// Number of tile colors.
    #[arg(long, value_name = "P", default_value_t = 5)]
    pub palette: u8,

    /// Swaps allowed per level (unlimited if omitted).
    #[arg(long, value_name = "N")]
    pub moves: Option<NonZero<u32>>,

    /// Seed of the tile stream, as 64 hex digits (random if omitted).
    #[arg(long, value_name = "HEX")]
    pub seed: Option<BoardSeed>,

    /// Countdown between levels, in seconds.
    #[arg(long, value_name = "S", default_value_t = 7)]
    pub delay_secs: u64,

    /// Let the hint search play every move.
    #[arg(long)]
    pub autoplay: bool,

    /// Keep matches present on a freshly dealt board until the first swap.
    #[arg(long)]
    pub defer_initial_matches: bool,
}

impl Args {
    /// Builds the game configuration these arguments describe.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        let initial_match_policy = if self.defer_initial_matches {
            InitialMatchPolicy::Defer
        } else {
            InitialMatchPolicy::Resolve
        };
        GameConfig {
            board_size: self.size,
            palette_size: self.palette,
            move_budget: self.moves,
            level_delay: Duration::from_secs(self.delay_secs),
            initial_match_policy,
            ..GameConfig::classic()
        }
    }
}
