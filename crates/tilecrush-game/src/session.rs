use std::{num::NonZero, time::Duration};

use tilecrush_core::{Board, BoardSize, ClearEvent, Resolution, Resolver, TileSource, TileUpdate};
use tilecrush_generator::{BoardGenerator, BoardSeed, RandomSource};

use crate::{ConfigError, GameConfig, Presenter, RejectedReason, SessionError};

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum SessionState {
    /// Swaps are accepted on the board of `level`.
    Playing {
        /// 1-based level number.
        level: usize,
    },
    /// `level` reached its target; the driver advances after its delay.
    LevelComplete {
        /// 1-based level number.
        level: usize,
    },
    /// The last level reached its target. Terminal.
    GameComplete,
}

/// Everything a presentation layer needs to show after an accepted swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    /// First cell of the swap.
    pub from: usize,
    /// Second cell of the swap.
    pub to: usize,
    /// The settle cycle the swap triggered.
    pub resolution: Resolution,
    /// Points awarded for this swap.
    pub points: u32,
    /// Score after the swap.
    pub score: u32,
    /// Moves left after the swap, if the level has a budget.
    pub moves_remaining: Option<u32>,
    /// State after the swap.
    pub state: SessionState,
    /// Final color of the two swapped cells, every cleared cell, and every
    /// other cell that differs from the board before the swap, in ascending
    /// index order.
    ///
    /// A cleared cell is listed even when it ends up with its old color.
    pub changed: Vec<TileUpdate>,
}

impl SwapOutcome {
    /// Returns the clear events of all passes in order.
    #[must_use]
    pub fn clear_events(&self) -> Vec<ClearEvent> {
        self.resolution.clear_events()
    }

    /// Returns the number of cells cleared across all passes.
    #[must_use]
    pub fn cleared_count(&self) -> usize {
        self.resolution.total_cleared()
    }

    /// Feeds the outcome to `presenter`.
    ///
    /// See [`Presenter`] for the order of the calls.
    pub fn replay(&self, presenter: &mut dyn Presenter) {
        for event in self.clear_events() {
            presenter.tile_cleared(event.index, event.pass);
        }
        for update in &self.changed {
            presenter.tile_changed(update.index, update.tile);
        }
        presenter.score_changed(self.score, self.moves_remaining);
        match self.state {
            SessionState::Playing { .. } => {}
            SessionState::LevelComplete { level } => presenter.level_complete(level),
            SessionState::GameComplete => presenter.game_complete(),
        }
    }
}

/// A game in progress: the board of the current level plus score, moves, and
/// level bookkeeping.
///
/// The session owns its [`TileSource`], so the whole game is reproducible from
/// the source's starting state. It never sleeps and never talks to a
/// presentation layer; drivers call [`request_swap`](Self::request_swap),
/// show the returned [`SwapOutcome`], and call
/// [`advance_level`](Self::advance_level) once their inter-level delay is over.
///
/// # Examples
///
/// ```
/// use tilecrush_game::{GameConfig, Session, find_matching_swap};
/// use tilecrush_generator::BoardSeed;
///
/// let mut session = Session::with_seed(GameConfig::move_limited(), BoardSeed::from_u64(7))?;
/// assert_eq!(session.level(), 1);
/// assert_eq!(session.moves_remaining(), Some(30));
///
/// if let Some((a, b)) = find_matching_swap(session.board()) {
///     let outcome = session.request_swap(a, b).expect("hinted swaps are accepted");
///     assert!(outcome.cleared_count() >= 3);
///     assert_eq!(outcome.score, session.score());
///     assert_eq!(session.moves_remaining(), Some(29));
/// }
/// # Ok::<(), tilecrush_game::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session<S> {
    config: GameConfig,
    size: BoardSize,
    generator: BoardGenerator,
    resolver: Resolver,
    source: S,
    board: Board,
    state: SessionState,
    score: u32,
    moves_remaining: Option<u32>,
}

impl Session<RandomSource> {
    /// Starts a game whose tiles come from a PCG stream seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn with_seed(config: GameConfig, seed: BoardSeed) -> Result<Self, ConfigError> {
        Self::new(config, RandomSource::from_seed(seed))
    }

    /// Starts a game from a freshly drawn seed.
    ///
    /// The seed is available through [`source`](Self::source).
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn with_random_seed(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, BoardSeed::random())
    }
}

impl<S> Session<S>
where
    S: TileSource,
{
    /// Starts a game at level 1 with a board dealt from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn new(config: GameConfig, mut source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let size = config.board_size()?;
        let palette = config.palette()?;
        let generator =
            BoardGenerator::new(size, palette).with_policy(config.initial_match_policy);
        let board = generator.generate(&mut source);
        log::info!("starting level 1 of {}", config.total_levels());
        Ok(Self::assemble(config, size, generator, source, board, 1))
    }

    /// Resumes play at `level` on a given board.
    ///
    /// The board is used as is; no initial match policy is applied. Score starts
    /// at 0 and the move budget is full.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Config`] if `config` is invalid.
    /// Returns [`SessionError::LevelOutOfRange`] if `level` does not exist.
    /// Returns [`SessionError::BoardSizeMismatch`] if `board` does not have the
    /// configured size.
    pub fn from_board(
        config: GameConfig,
        level: usize,
        board: Board,
        source: S,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        let size = config.board_size()?;
        let palette = config.palette()?;
        check_level(&config, level)?;
        if board.size() != size {
            return Err(SessionError::BoardSizeMismatch {
                expected: size.edge(),
                actual: board.size().edge(),
            });
        }
        let generator =
            BoardGenerator::new(size, palette).with_policy(config.initial_match_policy);
        Ok(Self::assemble(config, size, generator, source, board, level))
    }

    fn assemble(
        config: GameConfig,
        size: BoardSize,
        generator: BoardGenerator,
        source: S,
        board: Board,
        level: usize,
    ) -> Self {
        let moves_remaining = config.move_budget.map(NonZero::get);
        Self {
            resolver: Resolver::new(generator.palette()),
            config,
            size,
            generator,
            source,
            board,
            state: SessionState::Playing { level },
            score: 0,
            moves_remaining,
        }
    }

    /// Checks whether [`request_swap`](Self::request_swap) would accept the swap,
    /// without changing anything.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectedReason`] the swap would be turned down with. The
    /// session is checked before the cells: [`NotPlaying`](RejectedReason::NotPlaying)
    /// and [`OutOfMoves`](RejectedReason::OutOfMoves) win over
    /// [`OutOfBounds`](RejectedReason::OutOfBounds),
    /// [`NotAdjacent`](RejectedReason::NotAdjacent),
    /// [`SourceEmpty`](RejectedReason::SourceEmpty) and
    /// [`TargetEmpty`](RejectedReason::TargetEmpty), in that order.
    pub fn swap_capability(&self, a: usize, b: usize) -> Result<(), RejectedReason> {
        if !self.state.is_playing() {
            return Err(RejectedReason::NotPlaying);
        }
        if self.is_out_of_moves() {
            return Err(RejectedReason::OutOfMoves);
        }
        if !self.size.contains(a) || !self.size.contains(b) {
            return Err(RejectedReason::OutOfBounds);
        }
        if !self.size.are_neighbors(a, b) {
            return Err(RejectedReason::NotAdjacent);
        }
        if self.board.is_empty(a) {
            return Err(RejectedReason::SourceEmpty);
        }
        if self.board.is_empty(b) {
            return Err(RejectedReason::TargetEmpty);
        }
        Ok(())
    }

    /// Swaps two adjacent tiles and settles the board.
    ///
    /// The swap is kept even when it produces no match. Every cleared cell
    /// scores [`GameConfig::points_per_tile`] once, whatever pass it clears in,
    /// and the move budget drops by one per accepted swap. When the score
    /// reaches the level target the state moves to
    /// [`LevelComplete`](SessionState::LevelComplete), or to
    /// [`GameComplete`](SessionState::GameComplete) on the last level.
    ///
    /// # Errors
    ///
    /// Returns the reason a swap is rejected; see
    /// [`swap_capability`](Self::swap_capability). A rejected swap changes
    /// nothing.
    pub fn request_swap(&mut self, a: usize, b: usize) -> Result<SwapOutcome, RejectedReason> {
        if let Err(reason) = self.swap_capability(a, b) {
            log::trace!("swap {a} <-> {b} rejected: {reason}");
            return Err(reason);
        }
        let level = self.level();
        let before = self.board.clone();

        self.board.swap(a, b);
        let resolution = self.resolver.settle(&mut self.board, &mut self.source);
        for pass in resolution.passes() {
            log::debug!(
                "pass {}: cleared {} cells, {} falls, {} refills",
                pass.number(),
                pass.cleared().len(),
                pass.falls().len(),
                pass.refills().len()
            );
        }

        let points = self.points_for(resolution.total_cleared());
        self.score = self.score.saturating_add(points);
        if let Some(moves) = &mut self.moves_remaining {
            *moves = moves.saturating_sub(1);
        }

        if self.score >= self.level_target() {
            if level == self.total_levels() {
                log::info!("level {level} complete with {} points; game complete", self.score);
                self.state = SessionState::GameComplete;
            } else {
                log::info!("level {level} complete with {} points", self.score);
                self.state = SessionState::LevelComplete { level };
            }
        }

        let mut touched = vec![false; before.cells().len()];
        touched[a] = true;
        touched[b] = true;
        for event in resolution.clear_events() {
            touched[event.index] = true;
        }
        let changed = before
            .cells()
            .iter()
            .zip(self.board.cells())
            .enumerate()
            .filter(|&(index, (old, new))| touched[index] || old != new)
            .filter_map(|(index, (_, new))| new.map(|tile| TileUpdate { index, tile }))
            .collect();

        Ok(SwapOutcome {
            from: a,
            to: b,
            resolution,
            points,
            score: self.score,
            moves_remaining: self.moves_remaining,
            state: self.state,
            changed,
        })
    }

    /// Deals a fresh board for `level` and starts playing it.
    ///
    /// Score resets to 0 and the move budget is refilled.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameOver`] once the game is complete.
    /// Returns [`SessionError::LevelOutOfRange`] if `level` does not exist.
    pub fn start_level(&mut self, level: usize) -> Result<&Board, SessionError> {
        if self.state.is_game_complete() {
            return Err(SessionError::GameOver);
        }
        check_level(&self.config, level)?;
        self.board = self.generator.generate(&mut self.source);
        self.score = 0;
        self.moves_remaining = self.config.move_budget.map(NonZero::get);
        self.state = SessionState::Playing { level };
        log::info!("starting level {level} of {}", self.total_levels());
        Ok(&self.board)
    }

    /// Moves from a completed level to the next one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotLevelComplete`] unless the state is
    /// [`LevelComplete`](SessionState::LevelComplete).
    pub fn advance_level(&mut self) -> Result<SessionState, SessionError> {
        let SessionState::LevelComplete { level } = self.state else {
            return Err(SessionError::NotLevelComplete);
        };
        self.start_level(level + 1)?;
        Ok(self.state)
    }

    /// Re-deals the current level, typically after its move budget ran out.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotPlaying`] unless a level is in progress.
    pub fn restart_level(&mut self) -> Result<&Board, SessionError> {
        let SessionState::Playing { level } = self.state else {
            return Err(SessionError::NotPlaying);
        };
        log::info!("restarting level {level}");
        self.start_level(level)
    }

    fn points_for(&self, cleared: usize) -> u32 {
        u32::try_from(cleared)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.config.points_per_tile)
    }
}

impl<S> Session<S> {
    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the current 1-based level; the last level once the game is
    /// complete.
    #[must_use]
    pub fn level(&self) -> usize {
        match self.state {
            SessionState::Playing { level } | SessionState::LevelComplete { level } => level,
            SessionState::GameComplete => self.total_levels(),
        }
    }

    /// Returns the score of the current level.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the swaps left on this level, if the level has a budget.
    #[must_use]
    pub fn moves_remaining(&self) -> Option<u32> {
        self.moves_remaining
    }

    /// Returns whether the move budget is used up.
    #[must_use]
    pub fn is_out_of_moves(&self) -> bool {
        self.moves_remaining == Some(0)
    }

    /// Returns the score needed to complete the current level.
    #[must_use]
    pub fn level_target(&self) -> u32 {
        self.config.level_target(self.level()).unwrap_or(u32::MAX)
    }

    /// Returns the number of levels.
    #[must_use]
    pub fn total_levels(&self) -> usize {
        self.config.total_levels()
    }

    /// Returns the board of the current level.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the configuration the session was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the pause drivers should take before [`advance_level`](Self::advance_level).
    #[must_use]
    pub fn level_delay(&self) -> Duration {
        self.config.level_delay
    }

    /// Returns the tile source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}

fn check_level(config: &GameConfig, level: usize) -> Result<(), SessionError> {
    let total = config.total_levels();
    if (1..=total).contains(&level) {
        Ok(())
    } else {
        Err(SessionError::LevelOutOfRange { level, total })
    }
}
