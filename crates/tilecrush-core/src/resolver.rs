//! The settle cycle.
//!
//! After a swap the board may hold matches. The [`Resolver`] repeats
//! clear → gravity → refill → rescan until the board is stable, recording each
//! pass so callers can score the clears and replay them at their own pace.

use crate::{
    Board, MatchSet, Palette, TileFall, TileSource, TileUpdate, apply_gravity, find_all_matches,
    refill,
};

/// A single cleared cell, tagged with the pass that cleared it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClearEvent {
    /// Cell index.
    pub index: usize,
    /// 1-based pass number.
    pub pass: usize,
}

/// What happened during one pass of the settle cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionPass {
    number: usize,
    cleared: Vec<usize>,
    falls: Vec<TileFall>,
    refills: Vec<TileUpdate>,
}

impl ResolutionPass {
    /// Returns the 1-based pass number. Pass 1 clears the swap's own matches;
    /// later passes are cascades.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Returns the cleared indices in ascending order, each exactly once.
    #[must_use]
    pub fn cleared(&self) -> &[usize] {
        &self.cleared
    }

    /// Returns the tiles moved by gravity.
    #[must_use]
    pub fn falls(&self) -> &[TileFall] {
        &self.falls
    }

    /// Returns the cells filled with new tiles.
    #[must_use]
    pub fn refills(&self) -> &[TileUpdate] {
        &self.refills
    }

    /// Returns `true` if this pass cleared a cell after a swap's own matches.
    #[must_use]
    pub fn is_cascade(&self) -> bool {
        self.number > 1 && !self.cleared.is_empty()
    }
}

/// The full record of a settle cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    passes: Vec<ResolutionPass>,
}

impl Resolution {
    /// Returns the passes in the order they ran.
    #[must_use]
    pub fn passes(&self) -> &[ResolutionPass] {
        &self.passes
    }

    /// Returns the number of passes that ran.
    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Returns `true` if the board was already stable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Returns the number of cells cleared across all passes.
    #[must_use]
    pub fn total_cleared(&self) -> usize {
        self.passes.iter().map(|pass| pass.cleared.len()).sum()
    }

    /// Returns every clear as `{index, pass}` in pass order.
    #[must_use]
    pub fn clear_events(&self) -> Vec<ClearEvent> {
        self.passes
            .iter()
            .flat_map(|pass| {
                pass.cleared.iter().map(|&index| ClearEvent {
                    index,
                    pass: pass.number,
                })
            })
            .collect()
    }
}

/// Drives a board to a stable state.
///
/// # Examples
///
/// ```
/// use tilecrush_core::{Board, Palette, Resolver, SequenceSource, is_stable};
///
/// // One swap completes two rows at once.
/// let mut board: Board = "
///     BAB
///     ABA
///     BAB
/// "
/// .parse()?;
/// board.swap(1, 4);
/// assert_eq!(board.to_string(), "BBB\nAAA\nBAB");
///
/// let resolver = Resolver::new(Palette::new(4)?);
/// let resolution = resolver.settle(&mut board, &mut SequenceSource::from_letters("CDC"));
///
/// assert_eq!(resolution.pass_count(), 1);
/// assert_eq!(resolution.total_cleared(), 6);
/// assert!(is_stable(&board));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    palette: Palette,
}

impl Resolver {
    /// Creates a resolver that refills from `palette`.
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Returns the palette used for refills.
    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Runs passes until the board is full and holds no match.
    ///
    /// Each pass clears every matched cell once, applies gravity, refills the
    /// emptied cells from `source`, and rescans. A board that is already stable
    /// yields an empty [`Resolution`]. A board with empty cells but no match gets
    /// one pass that clears nothing and only refills.
    ///
    /// There is no pass limit. With at least two colors and a uniformly random
    /// source the loop ends with probability 1; a source that keeps producing
    /// matches keeps it running.
    pub fn settle<S>(&self, board: &mut Board, source: &mut S) -> Resolution
    where
        S: TileSource + ?Sized,
    {
        let mut passes = Vec::new();
        loop {
            let matches = find_all_matches(board);
            if matches.is_empty() && board.is_full() {
                break;
            }
            let number = passes.len() + 1;
            passes.push(self.run_pass(number, board, &matches, source));
        }
        Resolution { passes }
    }

    /// Runs a single pass: clear `matches`, apply gravity, refill.
    ///
    /// `matches` is normally the result of [`find_all_matches`] on `board`.
    pub fn run_pass<S>(
        &self,
        number: usize,
        board: &mut Board,
        matches: &MatchSet,
        source: &mut S,
    ) -> ResolutionPass
    where
        S: TileSource + ?Sized,
    {
        let cleared = matches.iter().collect::<Vec<_>>();
        for &index in &cleared {
            board.clear(index);
        }
        let falls = apply_gravity(board);
        let refills = refill(board, self.palette, source);
        ResolutionPass {
            number,
            cleared,
            falls,
            refills,
        }
    }
}
