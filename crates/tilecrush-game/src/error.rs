use crate::ConfigError;

/// Why a swap request was turned down.
///
/// Rejections are part of normal play, not failures: the session is left
/// exactly as it was, with no score or move effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum RejectedReason {
    /// An index lies outside the board.
    #[display("cell index is outside the board")]
    OutOfBounds,
    /// The two cells are not horizontally or vertically adjacent.
    #[display("cells are not adjacent")]
    NotAdjacent,
    /// The first cell holds no tile.
    #[display("source cell is empty")]
    SourceEmpty,
    /// The second cell holds no tile.
    #[display("target cell is empty")]
    TargetEmpty,
    /// The move budget of the level is used up.
    #[display("no moves left")]
    OutOfMoves,
    /// The session is not in the `Playing` state.
    #[display("no level is in progress")]
    NotPlaying,
}

/// Errors returned by session driver operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// The requested level does not exist.
    #[display("level {level} is outside 1..={total}")]
    LevelOutOfRange {
        /// Requested level.
        level: usize,
        /// Number of levels in the game.
        total: usize,
    },
    /// [`advance_level`](crate::Session::advance_level) was called while the
    /// current level is still in progress or the game is over.
    #[display("the current level is not complete")]
    NotLevelComplete,
    /// The operation needs a level in progress.
    #[display("no level is in progress")]
    NotPlaying,
    /// The game has ended; no further boards are dealt.
    #[display("the game is complete")]
    GameOver,
    /// A supplied board does not match the configured size.
    #[display("board edge {actual} does not match configured edge {expected}")]
    BoardSizeMismatch {
        /// Configured edge length.
        expected: usize,
        /// Edge length of the supplied board.
        actual: usize,
    },
    /// The configuration is invalid.
    #[display("invalid configuration: {_0}")]
    #[from]
    Config(ConfigError),
}
