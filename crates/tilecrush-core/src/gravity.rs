//! Gravity and refill.

use crate::{Board, Palette, TileSource, TileType};

/// A tile that moved down during [`apply_gravity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileFall {
    /// Index the tile left.
    pub from: usize,
    /// Index the tile landed on.
    pub to: usize,
}

/// A cell that received a new color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileUpdate {
    /// Cell index.
    pub index: usize,
    /// Color now in the cell.
    pub tile: TileType,
}

/// Lets every tile sink as far down its column as possible.
///
/// Columns are compacted independently from the bottom up, so the surviving
/// tiles of a column keep their relative order and all empty cells end up at the
/// top. Returns the moves made, bottom-most first within each column.
///
/// # Examples
///
/// ```
/// use tilecrush_core::{Board, apply_gravity};
///
/// let mut board: Board = "
///     AB.
///     .CD
///     E..
/// "
/// .parse()?;
///
/// let falls = apply_gravity(&mut board);
/// assert_eq!(board.to_string(), "...\nAB.\nECD");
/// assert_eq!(falls.len(), 4);
/// # Ok::<(), tilecrush_core::BoardParseError>(())
/// ```
pub fn apply_gravity(board: &mut Board) -> Vec<TileFall> {
    let size = board.size();
    let edge = size.edge();
    let mut falls = Vec::new();

    for col in 0..edge {
        // Rows at or below `floor` are already settled.
        let mut floor = edge;
        for row in (0..edge).rev() {
            let from = size.index(row, col);
            if board.is_empty(from) {
                continue;
            }
            floor -= 1;
            if floor != row {
                let to = size.index(floor, col);
                board.swap(from, to);
                falls.push(TileFall { from, to });
            }
        }
    }

    falls
}

/// Fills every empty cell with a fresh color from `source`.
///
/// Cells are visited in ascending index order. After [`apply_gravity`] the empty
/// cells are exactly the top of each column, so this is the respawn step of a
/// resolver pass.
pub fn refill<S>(board: &mut Board, palette: Palette, source: &mut S) -> Vec<TileUpdate>
where
    S: TileSource + ?Sized,
{
    let mut updates = Vec::new();
    for index in 0..board.size().cell_count() {
        if board.is_empty(index) {
            let tile = source.next_tile(palette);
            board.set_type(index, tile);
            updates.push(TileUpdate { index, tile });
        }
    }
    updates
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{BoardSize, SequenceSource};

    #[test]
    fn test_gravity_preserves_column_order() {
        let mut board: Board = "
            A..
            .B.
            C..
        "
        .parse()
        .unwrap();
        // Column 0 holds A above C with a gap between.
        apply_gravity(&mut board);
        assert_eq!(board.to_string(), "...\nA..\nCB.");
    }

    #[test]
    fn test_gravity_reports_moves() {
        let mut board: Board = "A.. ... ...".parse().unwrap();
        let falls = apply_gravity(&mut board);
        assert_eq!(falls, [TileFall { from: 0, to: 6 }]);
    }

    #[test]
    fn test_full_board_does_not_move() {
        let mut board: Board = "AB BA".parse().unwrap();
        let before = board.clone();
        assert!(apply_gravity(&mut board).is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_refill_fills_top_cells() {
        let palette = Palette::new(4).unwrap();
        let mut board: Board = "... A.. AB.".parse().unwrap();
        let mut source = SequenceSource::from_letters("D");

        let updates = refill(&mut board, palette, &mut source);

        assert!(board.is_full());
        assert_eq!(board.to_string(), "DDD\nADD\nABD");
        assert_eq!(
            updates.iter().map(|u| u.index).collect::<Vec<_>>(),
            [0, 1, 2, 4, 5, 8]
        );
        assert_eq!(source.drawn(), 6);
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        (1usize..=7).prop_flat_map(|edge| {
            prop::collection::vec(prop::option::weighted(0.6, 0u8..5), edge * edge).prop_map(
                move |cells| {
                    let cells = cells.into_iter().map(|c| c.map(TileType::new)).collect();
                    Board::from_cells(BoardSize::new(edge).unwrap(), cells).unwrap()
                },
            )
        })
    }

    fn column(board: &Board, col: usize) -> Vec<Option<TileType>> {
        let size = board.size();
        (0..size.edge())
            .map(|row| board.type_at(size.index(row, col)))
            .collect()
    }

    proptest! {
        #[test]
        fn gravity_conserves_column_tiles(board in arb_board()) {
            let mut after = board.clone();
            apply_gravity(&mut after);
            for col in 0..board.size().edge() {
                let before_tiles = column(&board, col).into_iter().flatten().collect::<Vec<_>>();
                let after_column = column(&after, col);
                let after_tiles = after_column.iter().flatten().copied().collect::<Vec<_>>();
                // Same tiles in the same order.
                prop_assert_eq!(&before_tiles, &after_tiles);
                // Empties sit on top, tiles below.
                let empties = after_column.iter().take_while(|c| c.is_none()).count();
                prop_assert_eq!(empties + after_tiles.len(), board.size().edge());
            }
        }

        #[test]
        fn refill_after_gravity_only_touches_empty_cells(board in arb_board(), seed in 0u8..5) {
            let palette = Palette::new(5).unwrap();
            let mut settled = board.clone();
            apply_gravity(&mut settled);
            let fallen = settled.clone();
            let updates = refill(&mut settled, palette, &mut SequenceSource::new([TileType::new(seed)]));
            prop_assert!(settled.is_full());
            prop_assert_eq!(updates.len(), board.empty_count());
            for update in updates {
                prop_assert!(fallen.is_empty(update.index));
            }
        }
    }
}
