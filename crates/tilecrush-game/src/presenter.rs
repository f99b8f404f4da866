use tilecrush_core::TileType;

/// Receiver of the events a processed swap produces.
///
/// Presentation layers implement the methods they care about; every method
/// defaults to doing nothing. [`SwapOutcome::replay`](crate::SwapOutcome::replay)
/// calls them in a fixed order: clears pass by pass, then the final color of
/// every changed cell, then the score, then at most one of
/// [`level_complete`](Self::level_complete) and
/// [`game_complete`](Self::game_complete).
///
/// The session itself never calls a presenter, so the timing of any animation
/// stays entirely with the implementor.
pub trait Presenter {
    /// The tile at `index` was cleared during the 1-based settle `pass`.
    fn tile_cleared(&mut self, _index: usize, _pass: usize) {}

    /// The cell at `index` now shows `tile`.
    fn tile_changed(&mut self, _index: usize, _tile: TileType) {}

    /// Score and remaining moves after the swap.
    fn score_changed(&mut self, _score: u32, _moves_remaining: Option<u32>) {}

    /// The swap completed `level`, and another level follows.
    fn level_complete(&mut self, _level: usize) {}

    /// The swap completed the last level.
    fn game_complete(&mut self) {}
}
