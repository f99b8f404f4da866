use std::{num::NonZero, time::Duration};

use tilecrush_core::{BoardSize, Palette};
use tilecrush_generator::InitialMatchPolicy;

/// Construction-time parameters of a game.
///
/// The fields are public so drivers can start from a preset and override what
/// they need; [`validate`](Self::validate) is run by every session constructor.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use tilecrush_game::GameConfig;
///
/// let config = GameConfig {
///     board_size: 5,
///     move_budget: NonZero::new(20),
///     ..GameConfig::classic()
/// };
/// config.validate()?;
/// assert_eq!(config.total_levels(), 5);
/// # Ok::<(), tilecrush_game::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Edge length `N` of the square board.
    pub board_size: usize,
    /// Number of tile colors.
    pub palette_size: u8,
    /// Score required to complete each level, first level first.
    pub level_targets: Vec<u32>,
    /// Swaps allowed per level, or `None` for unlimited play.
    pub move_budget: Option<NonZero<u32>>,
    /// Pause between a completed level and the next one. Drivers own the wait.
    pub level_delay: Duration,
    /// Points awarded for every cleared cell.
    pub points_per_tile: u32,
    /// What to do with matches present on a freshly dealt board.
    pub initial_match_policy: InitialMatchPolicy,
}

impl GameConfig {
    /// Smallest board on which a run of three fits.
    pub const MIN_BOARD_SIZE: usize = 3;

    /// Score targets of the reference level sequence.
    pub const CLASSIC_TARGETS: [u32; 5] = [50, 55, 60, 65, 70];

    /// An 8x8 board over 5 colors, five levels, no move limit.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            board_size: 8,
            palette_size: 5,
            level_targets: Self::CLASSIC_TARGETS.to_vec(),
            move_budget: None,
            level_delay: Duration::from_secs(7),
            points_per_tile: 10,
            initial_match_policy: InitialMatchPolicy::Resolve,
        }
    }

    /// [`classic`](Self::classic) with 30 swaps per level.
    #[must_use]
    pub fn move_limited() -> Self {
        Self {
            move_budget: NonZero::new(30),
            ..Self::classic()
        }
    }

    /// Returns the number of levels.
    #[must_use]
    pub fn total_levels(&self) -> usize {
        self.level_targets.len()
    }

    /// Returns the target of the 1-based `level`, if it exists.
    #[must_use]
    pub fn level_target(&self, level: usize) -> Option<u32> {
        level
            .checked_sub(1)
            .and_then(|i| self.level_targets.get(i))
            .copied()
    }

    /// Checks that the configuration describes a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBoardSize`] if the board is smaller than
    /// 3x3 or larger than [`BoardSize::MAX_EDGE`].
    /// Returns [`ConfigError::InvalidPaletteSize`] if the palette is outside
    /// [`Palette::MIN_SIZE`]..=[`Palette::MAX_SIZE`].
    /// Returns [`ConfigError::NoLevels`] if `level_targets` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board_size()?;
        self.palette()?;
        if self.level_targets.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        Ok(())
    }

    pub(crate) fn board_size(&self) -> Result<BoardSize, ConfigError> {
        if self.board_size < Self::MIN_BOARD_SIZE {
            return Err(ConfigError::InvalidBoardSize {
                size: self.board_size,
            });
        }
        BoardSize::new(self.board_size).map_err(|_| ConfigError::InvalidBoardSize {
            size: self.board_size,
        })
    }

    pub(crate) fn palette(&self) -> Result<Palette, ConfigError> {
        Palette::new(self.palette_size).map_err(|_| ConfigError::InvalidPaletteSize {
            size: self.palette_size,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Reasons a [`GameConfig`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The board edge is outside the supported range.
    #[display("board size {size} is outside 3..=64")]
    InvalidBoardSize {
        /// Requested edge length.
        size: usize,
    },
    /// The palette size is outside the supported range.
    #[display("palette size {size} is outside 2..=26")]
    InvalidPaletteSize {
        /// Requested number of colors.
        size: u8,
    },
    /// No level targets were given.
    #[display("at least one level target is required")]
    NoLevels,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let classic = GameConfig::classic();
        assert_eq!(classic.board_size, 8);
        assert_eq!(classic.palette_size, 5);
        assert_eq!(classic.level_targets, [50, 55, 60, 65, 70]);
        assert_eq!(classic.move_budget, None);
        assert_eq!(classic.level_delay, Duration::from_secs(7));
        assert_eq!(classic.points_per_tile, 10);
        assert_eq!(classic.total_levels(), 5);
        assert!(classic.validate().is_ok());

        let limited = GameConfig::move_limited();
        assert_eq!(limited.move_budget.map(NonZero::get), Some(30));
        assert_eq!(limited.level_targets, classic.level_targets);
        assert!(limited.validate().is_ok());

        assert_eq!(GameConfig::default(), classic);
    }

    #[test]
    fn test_level_target_is_one_based() {
        let config = GameConfig::classic();
        assert_eq!(config.level_target(0), None);
        assert_eq!(config.level_target(1), Some(50));
        assert_eq!(config.level_target(5), Some(70));
        assert_eq!(config.level_target(6), None);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GameConfig {
            board_size: 2,
            ..GameConfig::classic()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBoardSize { size: 2 })
        );

        let config = GameConfig {
            board_size: 65,
            ..GameConfig::classic()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBoardSize { size: 65 })
        );

        let config = GameConfig {
            palette_size: 1,
            ..GameConfig::classic()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidPaletteSize { size: 1 })
        );

        let config = GameConfig {
            level_targets: vec![],
            ..GameConfig::classic()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoLevels));
    }

    #[test]
    fn test_small_boards_are_valid() {
        let config = GameConfig {
            board_size: 3,
            ..GameConfig::classic()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.board_size().map(BoardSize::edge), Ok(3));
    }
}
