//! Tile colors and palettes.

use std::fmt::{self, Display};

/// A tile color.
///
/// Colors are plain integers drawn from a [`Palette`]; the engine attaches no
/// visual meaning to them. In text form a color is an uppercase letter, with
/// `A` for color 0.
///
/// # Examples
///
/// ```
/// use tilecrush_core::TileType;
///
/// let tile = TileType::new(2);
/// assert_eq!(tile.letter(), 'C');
/// assert_eq!(TileType::from_letter('C'), Some(tile));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileType(u8);

impl TileType {
    /// Creates a tile color from its palette value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the palette value of this color.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Parses an uppercase letter (`A`-`Z`) into a color.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        u8::try_from(letter).ok().map(|byte| Self(byte - b'A'))
    }

    /// Returns the letter used for this color in text form.
    ///
    /// Colors beyond `Z` are shown as `?`.
    #[must_use]
    pub fn letter(self) -> char {
        if self.0 < Palette::MAX_SIZE {
            char::from(b'A' + self.0)
        } else {
            '?'
        }
    }
}

impl Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Contents of a single board cell. `None` is the empty sentinel.
pub type Cell = Option<TileType>;

/// The set of colors tiles are drawn from.
///
/// A palette holds between [`Palette::MIN_SIZE`] and [`Palette::MAX_SIZE`] colors.
/// A single-color palette is rejected: every refill would recreate a match and the
/// board could never settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    size: u8,
}

impl Palette {
    /// Smallest accepted palette.
    pub const MIN_SIZE: u8 = 2;
    /// Largest accepted palette (one color per letter).
    pub const MAX_SIZE: u8 = 26;

    /// Creates a palette with `size` colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::OutOfRange`] if `size` is outside
    /// [`MIN_SIZE`](Self::MIN_SIZE)`..=`[`MAX_SIZE`](Self::MAX_SIZE).
    pub fn new(size: u8) -> Result<Self, PaletteError> {
        if (Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            Ok(Self { size })
        } else {
            Err(PaletteError::OutOfRange { size })
        }
    }

    /// Returns the number of colors.
    #[must_use]
    pub const fn size(self) -> u8 {
        self.size
    }

    /// Returns `true` if `tile` belongs to this palette.
    #[must_use]
    pub const fn contains(self, tile: TileType) -> bool {
        tile.value() < self.size
    }

    /// Iterates over every color in ascending order.
    pub fn tiles(self) -> impl Iterator<Item = TileType> {
        (0..self.size).map(TileType::new)
    }
}

/// Errors returned when constructing a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PaletteError {
    /// The requested size cannot form a playable palette.
    #[display(
        "palette size {size} is outside {}..={}",
        Palette::MIN_SIZE,
        Palette::MAX_SIZE
    )]
    OutOfRange {
        /// The rejected size.
        size: u8,
    },
}
