use tilecrush_core::{Board, BoardSize, Palette, Resolver, TileSource};

use crate::{BoardSeed, RandomSource};

/// What to do with matches a freshly dealt board happens to contain.
///
/// Uniform random fills regularly produce runs of three. Either they are settled
/// before the player sees the board, or they stay until the first swap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitialMatchPolicy {
    /// Settle the board immediately, without scoring. The dealt board is stable.
    #[default]
    Resolve,
    /// Leave initial matches in place. They are cleared, and scored, by the
    /// settle cycle of the first accepted swap.
    Defer,
}

/// A board together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The dealt board.
    pub board: Board,
    /// Seed of the tile stream used to deal it.
    pub seed: BoardSeed,
}

/// Deals fresh boards.
///
/// # Examples
///
/// ```
/// use tilecrush_core::{BoardSize, Palette, is_stable};
/// use tilecrush_generator::{BoardGenerator, BoardSeed};
///
/// let generator = BoardGenerator::new(BoardSize::new(8)?, Palette::new(5)?);
/// let dealt = generator.generate_with_seed(BoardSeed::from_u64(1));
///
/// assert!(is_stable(&dealt.board));
/// assert_eq!(generator.generate_with_seed(dealt.seed), dealt);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGenerator {
    size: BoardSize,
    palette: Palette,
    policy: InitialMatchPolicy,
}

impl BoardGenerator {
    /// Creates a generator that settles initial matches.
    #[must_use]
    pub const fn new(size: BoardSize, palette: Palette) -> Self {
        Self {
            size,
            palette,
            policy: InitialMatchPolicy::Resolve,
        }
    }

    /// Returns a copy of this generator using `policy`.
    #[must_use]
    pub const fn with_policy(self, policy: InitialMatchPolicy) -> Self {
        Self { policy, ..self }
    }

    /// Returns the size of dealt boards.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the palette tiles are drawn from.
    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Returns the initial match policy.
    #[must_use]
    pub const fn policy(&self) -> InitialMatchPolicy {
        self.policy
    }

    /// Deals a board drawing every tile from `source`.
    ///
    /// With [`InitialMatchPolicy::Resolve`] the same source also feeds the
    /// settle cycle, so the result depends only on the source's state.
    pub fn generate<S>(&self, source: &mut S) -> Board
    where
        S: TileSource + ?Sized,
    {
        let mut board = Board::random(self.size, self.palette, source);
        match self.policy {
            InitialMatchPolicy::Resolve => {
                Resolver::new(self.palette).settle(&mut board, source);
            }
            InitialMatchPolicy::Defer => {}
        }
        board
    }

    /// Deals a board from a fresh stream seeded with `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: BoardSeed) -> GeneratedBoard {
        let mut source = RandomSource::from_seed(seed);
        let board = self.generate(&mut source);
        GeneratedBoard { board, seed }
    }

    /// Deals a board from a randomly seeded stream.
    #[must_use]
    pub fn generate_random(&self) -> GeneratedBoard {
        self.generate_with_seed(BoardSeed::random())
    }
}
