//! Match detection.
//!
//! A *run* is a maximal sequence of same-colored, non-empty cells along one row
//! or column. A run of at least [`MIN_MATCH_LEN`] cells is a *match*, and every
//! cell in it is cleared by the next resolver pass.

use tinyvec::TinyVec;

use crate::{Board, Direction};

/// Minimum run length that counts as a match.
pub const MIN_MATCH_LEN: usize = 3;

/// Indices of a run, in ascending order.
pub type Run = TinyVec<[usize; 8]>;

/// Returns the run through `index` in the given direction.
///
/// The run extends from `index` in both directions while neighboring cells hold
/// the same color, stopping at the first different or empty cell or at the board
/// edge. The origin is always included, so the run has at least one cell unless
/// the origin itself is empty, in which case the run is empty.
///
/// # Examples
///
/// ```
/// use tilecrush_core::{Board, Direction, run_through};
///
/// let board: Board = "
///     ABBB
///     CBDA
///     DBAC
///     ACDB
/// "
/// .parse()?;
///
/// assert_eq!(run_through(&board, 2, Direction::Horizontal).as_slice(), &[1, 2, 3]);
/// assert_eq!(run_through(&board, 5, Direction::Vertical).as_slice(), &[1, 5, 9]);
/// assert_eq!(run_through(&board, 0, Direction::Vertical).as_slice(), &[0]);
/// # Ok::<(), tilecrush_core::BoardParseError>(())
/// ```
#[must_use]
pub fn run_through(board: &Board, index: usize, direction: Direction) -> Run {
    let Some(tile) = board.type_at(index) else {
        return Run::new();
    };
    let size = board.size();
    let (line, pos) = size.line_of(direction, index);
    let at = |pos: usize| size.line_index(direction, line, pos);

    let mut first = pos;
    while first > 0 && board.type_at(at(first - 1)) == Some(tile) {
        first -= 1;
    }
    let mut last = pos;
    while last + 1 < size.edge() && board.type_at(at(last + 1)) == Some(tile) {
        last += 1;
    }
    (first..=last).map(at).collect()
}

/// Cells marked for clearing.
///
/// Marking is idempotent: a cell that belongs to both a horizontal and a vertical
/// match is stored once, so [`len`](Self::len) counts each cell exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet {
    marked: Vec<bool>,
    len: usize,
}

impl MatchSet {
    /// Creates an empty set for a board with `cell_count` cells.
    #[must_use]
    pub fn new(cell_count: usize) -> Self {
        Self {
            marked: vec![false; cell_count],
            len: 0,
        }
    }

    /// Marks `index`. Returns `true` if it was not already marked.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the board the set was created for.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.marked[index] {
            return false;
        }
        self.marked[index] = true;
        self.len += 1;
        true
    }

    /// Returns `true` if `index` is marked.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.marked.get(index).copied().unwrap_or(false)
    }

    /// Returns the number of marked cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no cell is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the marked indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(index, &marked)| marked.then_some(index))
    }
}

impl Extend<usize> for MatchSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        for index in iter {
            self.insert(index);
        }
    }
}

/// Finds every cell that belongs to a horizontal or vertical match.
///
/// This is the single source of truth for what the next pass clears. Empty cells
/// never match. An L- or T-shaped intersection of two matches is reported once.
///
/// # Examples
///
/// ```
/// use tilecrush_core::{Board, find_all_matches};
///
/// let board: Board = "
///     AAA
///     ABC
///     ACB
/// "
/// .parse()?;
///
/// let matches = find_all_matches(&board);
/// assert_eq!(matches.iter().collect::<Vec<_>>(), [0, 1, 2, 3, 6]);
/// # Ok::<(), tilecrush_core::BoardParseError>(())
/// ```
#[must_use]
pub fn find_all_matches(board: &Board) -> MatchSet {
    let size = board.size();
    let edge = size.edge();
    let mut matches = MatchSet::new(size.cell_count());

    for direction in Direction::ALL {
        for line in 0..edge {
            let at = |pos: usize| size.line_index(direction, line, pos);
            let mut start = 0;
            while start < edge {
                let Some(tile) = board.type_at(at(start)) else {
                    start += 1;
                    continue;
                };
                let mut end = start + 1;
                while end < edge && board.type_at(at(end)) == Some(tile) {
                    end += 1;
                }
                if end - start >= MIN_MATCH_LEN {
                    matches.extend((start..end).map(at));
                }
                start = end;
            }
        }
    }

    matches
}

/// Returns `true` if the board is full and holds no match.
#[must_use]
pub fn is_stable(board: &Board) -> bool {
    board.is_full() && find_all_matches(board).is_empty()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{BoardSize, TileType};

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_run_stops_at_different_and_empty_cells() {
        let board = board(
            "
            AA.AA
            BBBAB
            CACCC
            AABAA
            BACAB
        ",
        );
        assert_eq!(run_through(&board, 0, Direction::Horizontal).as_slice(), &[0, 1]);
        assert_eq!(run_through(&board, 3, Direction::Horizontal).as_slice(), &[3, 4]);
        assert!(run_through(&board, 2, Direction::Horizontal).is_empty());
        assert_eq!(run_through(&board, 6, Direction::Horizontal).as_slice(), &[5, 6, 7]);
        assert_eq!(run_through(&board, 8, Direction::Vertical).as_slice(), &[3, 8]);
        assert_eq!(run_through(&board, 11, Direction::Vertical).as_slice(), &[11, 16, 21]);
    }

    #[test]
    fn test_basic_top_row_match() {
        let board = board("AAA BCB CBC");
        let matches = find_all_matches(&board);
        assert_eq!(matches.iter().collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_intersection_is_counted_once() {
        // T shape: row 0 and column 1 share index 1.
        let board = board(
            "
            AAAB
            CADB
            DACC
            BCDD
        ",
        );
        let matches = find_all_matches(&board);
        assert_eq!(matches.iter().collect::<Vec<_>>(), [0, 1, 2, 5, 9]);
        assert_eq!(matches.len(), 5);
    }

    #[test]
    fn test_long_runs_and_empty_cells() {
        let board = board(
            "
            AAAA
            BB.B
            C.CC
            DDDB
        ",
        );
        let matches = find_all_matches(&board);
        assert_eq!(matches.iter().collect::<Vec<_>>(), [0, 1, 2, 3, 12, 13, 14]);
        assert!(!is_stable(&board));
    }

    #[test]
    fn test_stable_board() {
        let board = board("ABA BAB ABA");
        assert!(find_all_matches(&board).is_empty());
        assert!(is_stable(&board));
        assert!(!is_stable(&"AB. BAB ABA".parse().unwrap()));
    }

    #[test]
    fn test_match_set_insert_is_idempotent() {
        let mut set = MatchSet::new(4);
        assert!(set.insert(2));
        assert!(!set.insert(2));
        assert_eq!(set.len(), 1);
        assert!(set.contains(2));
        assert!(!set.contains(3));
        assert!(!set.contains(10));
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        (1usize..=7).prop_flat_map(|edge| {
            prop::collection::vec(prop::option::weighted(0.9, 0u8..3), edge * edge).prop_map(
                move |cells| {
                    let cells = cells.into_iter().map(|c| c.map(TileType::new)).collect();
                    Board::from_cells(BoardSize::new(edge).unwrap(), cells).unwrap()
                },
            )
        })
    }

    proptest! {
        #[test]
        fn matches_are_union_of_long_runs(board in arb_board()) {
            let mut expected = MatchSet::new(board.size().cell_count());
            for index in 0..board.size().cell_count() {
                for direction in Direction::ALL {
                    let run = run_through(&board, index, direction);
                    if run.len() >= MIN_MATCH_LEN {
                        expected.extend(run);
                    }
                }
            }
            prop_assert_eq!(find_all_matches(&board), expected);
        }

        #[test]
        fn runs_contain_origin_and_share_color(board in arb_board(), index in 0usize..49) {
            let index = index % board.size().cell_count();
            for direction in Direction::ALL {
                let run = run_through(&board, index, direction);
                match board.type_at(index) {
                    None => prop_assert!(run.is_empty()),
                    Some(tile) => {
                        prop_assert!(run.contains(&index));
                        prop_assert!(run.iter().all(|&i| board.type_at(i) == Some(tile)));
                        prop_assert!(run.windows(2).all(|w| w[0] < w[1]));
                    }
                }
            }
        }
    }
}
