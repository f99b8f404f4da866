use rand::{
    SeedableRng as _,
    distr::{Distribution as _, Uniform},
};
use rand_pcg::Pcg64;
use tilecrush_core::{Palette, TileSource, TileType};

use crate::BoardSeed;

/// A seeded PCG stream of uniformly distributed tile colors.
///
/// Two sources built from the same [`BoardSeed`] yield the same colors in the
/// same order, so a whole session (initial fills and every refill) can be
/// replayed from its seed.
///
/// # Examples
///
/// ```
/// use tilecrush_core::{Palette, TileSource as _};
/// use tilecrush_generator::{BoardSeed, RandomSource};
///
/// let palette = Palette::new(5)?;
/// let seed = BoardSeed::from_u64(42);
/// let mut a = RandomSource::from_seed(seed);
/// let mut b = RandomSource::from_seed(seed);
///
/// for _ in 0..16 {
///     let tile = a.next_tile(palette);
///     assert!(palette.contains(tile));
///     assert_eq!(tile, b.next_tile(palette));
/// }
/// # Ok::<(), tilecrush_core::PaletteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: Pcg64,
    seed: BoardSeed,
}

impl RandomSource {
    /// Creates a source from `seed`.
    #[must_use]
    pub fn from_seed(seed: BoardSeed) -> Self {
        Self {
            rng: Pcg64::from_seed(*seed.as_bytes()),
            seed,
        }
    }

    /// Creates a source from a freshly drawn seed.
    #[must_use]
    pub fn from_random_seed() -> Self {
        Self::from_seed(BoardSeed::random())
    }

    /// Returns the seed this source started from.
    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.seed
    }
}

impl TileSource for RandomSource {
    fn next_tile(&mut self, palette: Palette) -> TileType {
        // `Palette` guarantees at least two colors, so the range is never empty.
        let colors = Uniform::new(0, palette.size()).expect("palette range is non-empty");
        TileType::new(colors.sample(&mut self.rng))
    }
}
