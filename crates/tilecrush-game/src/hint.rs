use tilecrush_core::{Board, Direction, MIN_MATCH_LEN, run_through};

/// Returns whether swapping `a` and `b` lines up a match through either cell.
///
/// Both cells must be filled neighbors; otherwise the answer is `false`.
///
/// # Examples
///
/// ```
/// use tilecrush_core::Board;
/// use tilecrush_game::swap_creates_match;
///
/// let board: Board = "ABC BCA BAC".parse()?;
/// assert!(swap_creates_match(&board, 0, 1));
/// assert!(!swap_creates_match(&board, 6, 7));
/// # Ok::<(), tilecrush_core::BoardParseError>(())
/// ```
#[must_use]
pub fn swap_creates_match(board: &Board, a: usize, b: usize) -> bool {
    let mut trial = board.clone();
    try_swap(&mut trial, a, b)
}

/// Finds the first swap, in ascending index order, that would produce a match.
///
/// Pairs are visited by their lower index, right neighbor before the one
/// below. Returns `None` when the board has no productive swap.
///
/// # Examples
///
/// ```
/// use tilecrush_core::Board;
/// use tilecrush_game::find_matching_swap;
///
/// let board: Board = "
///     ABC
///     BAC
///     ACB
/// "
/// .parse()?;
/// assert_eq!(find_matching_swap(&board), Some((3, 4)));
/// # Ok::<(), tilecrush_core::BoardParseError>(())
/// ```
#[must_use]
pub fn find_matching_swap(board: &Board) -> Option<(usize, usize)> {
    let size = board.size();
    let mut trial = board.clone();
    (0..size.cell_count()).find_map(|a| {
        [a + 1, a + size.edge()]
            .into_iter()
            .find(|&b| try_swap(&mut trial, a, b))
            .map(|b| (a, b))
    })
}

/// Swaps `a` and `b` on `board`, checks for a match, and swaps back.
fn try_swap(board: &mut Board, a: usize, b: usize) -> bool {
    if !board.are_neighbors(a, b) || board.is_empty(a) || board.is_empty(b) {
        return false;
    }
    board.swap(a, b);
    let found = [a, b].into_iter().any(|index| {
        Direction::ALL
            .into_iter()
            .any(|direction| run_through(board, index, direction).len() >= MIN_MATCH_LEN)
    });
    board.swap(a, b);
    found
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tilecrush_core::{BoardSize, Palette, find_all_matches};
    use tilecrush_generator::{BoardGenerator, BoardSeed};

    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_no_swap_without_three_of_a_color() {
        let board = board("ABC DEF GHI");
        assert_eq!(find_matching_swap(&board), None);
    }

    #[test]
    fn test_vertical_swap_found() {
        // Moving the A at 0 down completes row 1.
        let board = board("ABC DAA BCB");
        assert!(!swap_creates_match(&board, 0, 1));
        assert_eq!(find_matching_swap(&board), Some((0, 3)));
    }

    #[test]
    fn test_rejects_non_neighbors_and_empty_cells() {
        let board = board("AAB ..A CCA");
        assert!(swap_creates_match(&board, 2, 5));
        assert!(!swap_creates_match(&board, 2, 4));
        assert!(!swap_creates_match(&board, 2, 8));
        assert!(!swap_creates_match(&board, 3, 6));
        assert!(!swap_creates_match(&board, 0, 9));
    }

    #[test]
    fn test_board_is_left_untouched() {
        let original = board("ABC BAC ACB");
        let copy = original.clone();
        let _ = find_matching_swap(&original);
        assert_eq!(original, copy);
    }

    proptest! {
        #[test]
        fn hinted_swap_produces_a_match(seed in any::<u64>()) {
            let generator = BoardGenerator::new(BoardSize::new(6).unwrap(), Palette::new(4).unwrap());
            let dealt = generator.generate_with_seed(BoardSeed::from_u64(seed));
            if let Some((a, b)) = find_matching_swap(&dealt.board) {
                prop_assert!(dealt.board.are_neighbors(a, b));
                let mut board = dealt.board.clone();
                board.swap(a, b);
                prop_assert!(!find_all_matches(&board).is_empty());
            }
        }
    }
}
