//! Where new tiles come from.

use crate::{Palette, TileType};

/// A source of tile colors for initial fills and refills.
///
/// Every random choice the engine makes goes through this trait, so swapping in
/// a deterministic source makes board creation and settle cycles reproducible.
pub trait TileSource {
    /// Returns the next color, which must belong to `palette`.
    fn next_tile(&mut self, palette: Palette) -> TileType;
}

impl<S> TileSource for &mut S
where
    S: TileSource + ?Sized,
{
    fn next_tile(&mut self, palette: Palette) -> TileType {
        (**self).next_tile(palette)
    }
}

impl TileSource for Box<dyn TileSource> {
    fn next_tile(&mut self, palette: Palette) -> TileType {
        (**self).next_tile(palette)
    }
}

/// A source that replays a fixed list of colors, cycling when it runs out.
///
/// Values are reduced modulo the palette size so any list is valid for any
/// palette. An empty list always yields the first color.
///
/// # Examples
///
/// ```
/// use tilecrush_core::{Palette, SequenceSource, TileSource as _, TileType};
///
/// let palette = Palette::new(3)?;
/// let mut source = SequenceSource::from_letters("AC");
///
/// assert_eq!(source.next_tile(palette), TileType::new(0));
/// assert_eq!(source.next_tile(palette), TileType::new(2));
/// assert_eq!(source.next_tile(palette), TileType::new(0));
/// assert_eq!(source.drawn(), 3);
/// # Ok::<(), tilecrush_core::PaletteError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceSource {
    tiles: Vec<TileType>,
    drawn: usize,
}

impl SequenceSource {
    /// Creates a source that replays `tiles` in order.
    pub fn new<I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = TileType>,
    {
        Self {
            tiles: tiles.into_iter().collect(),
            drawn: 0,
        }
    }

    /// Creates a source from tile letters, ignoring every other character.
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        Self::new(letters.chars().filter_map(TileType::from_letter))
    }

    /// Returns how many tiles have been drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl TileSource for SequenceSource {
    fn next_tile(&mut self, palette: Palette) -> TileType {
        let tile = if self.tiles.is_empty() {
            TileType::new(0)
        } else {
            let value = self.tiles[self.drawn % self.tiles.len()].value();
            TileType::new(value % palette.size())
        };
        self.drawn += 1;
        tile
    }
}
