//! The tile grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{BoardSize, BoardSizeError, Cell, Palette, TileSource, TileType};

/// A square grid of cells stored in row-major order.
///
/// The board only holds values; it knows nothing about matches, scoring, or
/// colors on screen. Between settle cycles every cell is filled; empty cells are
/// a transient state while a [`Resolver`](crate::Resolver) pass is running.
///
/// # Text form
///
/// Boards print and parse as one row per line, with `A`-`Z` for tiles and `.`
/// for empty cells. Whitespace is ignored when parsing, so the cell count alone
/// determines the edge length.
///
/// ```
/// use tilecrush_core::{Board, TileType};
///
/// let board: Board = "
///     AB.
///     CAB
///     BCA
/// "
/// .parse()?;
///
/// assert_eq!(board.size().edge(), 3);
/// assert_eq!(board.type_at(1), Some(TileType::new(1)));
/// assert!(board.is_empty(2));
/// assert_eq!(board.to_string(), "AB.\nCAB\nBCA");
/// # Ok::<(), tilecrush_core::BoardParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board with every cell empty.
    #[must_use]
    pub fn empty(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![None; size.cell_count()],
        }
    }

    /// Creates a board from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellCountMismatch`] if `cells` does not hold exactly
    /// `size.cell_count()` entries.
    pub fn from_cells(size: BoardSize, cells: Vec<Cell>) -> Result<Self, BoardError> {
        if cells.len() != size.cell_count() {
            return Err(BoardError::CellCountMismatch {
                expected: size.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Creates a board with every cell drawn independently from `source`.
    ///
    /// Cells are drawn in ascending index order. No attempt is made to avoid
    /// initial matches; callers decide whether to settle them.
    #[must_use]
    pub fn random<S>(size: BoardSize, palette: Palette, source: &mut S) -> Self
    where
        S: TileSource + ?Sized,
    {
        let cells = (0..size.cell_count())
            .map(|_| Some(source.next_tile(palette)))
            .collect();
        Self { size, cells }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns `true` if the two cells are horizontally or vertically adjacent.
    #[must_use]
    pub fn are_neighbors(&self, a: usize, b: usize) -> bool {
        self.size.are_neighbors(a, b)
    }

    /// Returns the contents of the cell at `index`, or `None` if it is empty or
    /// outside the board.
    #[must_use]
    pub fn type_at(&self, index: usize) -> Cell {
        self.cells.get(index).copied().flatten()
    }

    /// Returns `true` if the cell at `index` holds no tile.
    ///
    /// Indices outside the board are reported as empty.
    #[must_use]
    pub fn is_empty(&self, index: usize) -> bool {
        self.type_at(index).is_none()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Places a tile at `index`, replacing whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the board.
    pub fn set_type(&mut self, index: usize, tile: TileType) {
        self.cells[index] = Some(tile);
    }

    /// Empties the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the board.
    pub fn clear(&mut self, index: usize) {
        self.cells[index] = None;
    }

    /// Exchanges the contents of two cells, empty or not.
    ///
    /// No adjacency check is made; callers validate the request first.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the board.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(self.size.edge()).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                match cell {
                    Some(tile) => write!(f, "{tile}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| match ch {
                '.' => Ok(None),
                _ => TileType::from_letter(ch)
                    .map(Some)
                    .ok_or(BoardParseError::InvalidChar { ch }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let edge = cells.len().isqrt();
        if edge * edge != cells.len() {
            return Err(BoardParseError::NotSquare { len: cells.len() });
        }
        let size = BoardSize::new(edge)?;
        Ok(Self { size, cells })
    }
}

/// Errors returned by [`Board::from_cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The number of cells does not match the board size.
    #[display("expected {expected} cells, got {actual}")]
    CellCountMismatch {
        /// Cells required by the board size.
        expected: usize,
        /// Cells supplied.
        actual: usize,
    },
}

/// Errors returned when parsing a [`Board`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum BoardParseError {
    /// A character other than `A`-`Z`, `.`, or whitespace.
    #[display("invalid board character {ch:?}")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
    /// The cell count is not a perfect square.
    #[display("{len} cells do not form a square board")]
    NotSquare {
        /// Number of cells parsed.
        len: usize,
    },
    /// The square is empty or too large.
    #[display("invalid board size: {_0}")]
    #[from]
    Size(BoardSizeError),
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::SequenceSource;

    fn tile(letter: char) -> Cell {
        TileType::from_letter(letter)
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "AB CD".parse().unwrap();
        assert_eq!(board.size().edge(), 2);
        assert_eq!(board.cells(), &[tile('A'), tile('B'), tile('C'), tile('D')]);
        assert_eq!(board.to_string(), "AB\nCD");

        let board: Board = "A.. .B. ..C".parse().unwrap();
        assert_eq!(board.empty_count(), 6);
        assert!(!board.is_full());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "ABC".parse::<Board>(),
            Err(BoardParseError::NotSquare { len: 3 })
        );
        assert_eq!(
            "ab cd".parse::<Board>(),
            Err(BoardParseError::InvalidChar { ch: 'a' })
        );
        assert_eq!(
            "".parse::<Board>(),
            Err(BoardParseError::Size(BoardSizeError::OutOfRange { edge: 0 }))
        );
        assert_eq!(
            BoardParseError::from(BoardSizeError::OutOfRange { edge: 65 }),
            BoardParseError::Size(BoardSizeError::OutOfRange { edge: 65 })
        );
    }

    #[test]
    fn test_from_cells_checks_length() {
        let size = BoardSize::new(3).unwrap();
        assert_eq!(
            Board::from_cells(size, vec![None; 8]),
            Err(BoardError::CellCountMismatch {
                expected: 9,
                actual: 8
            })
        );
        assert_eq!(Board::from_cells(size, vec![None; 9]), Ok(Board::empty(size)));
    }

    #[test]
    fn test_accessors() {
        let mut board = Board::empty(BoardSize::new(3).unwrap());
        assert!(board.is_empty(4));

        board.set_type(4, TileType::new(2));
        assert_eq!(board.type_at(4), Some(TileType::new(2)));
        assert!(!board.is_empty(4));

        board.clear(4);
        assert!(board.is_empty(4));

        // Out-of-range reads are empty rather than panicking.
        assert_eq!(board.type_at(9), None);
        assert!(board.is_empty(100));
    }

    #[test]
    fn test_swap_moves_empty_cells_too() {
        let mut board: Board = "A.. ... ...".parse().unwrap();
        board.swap(0, 1);
        assert_eq!(board.to_string(), ".A.\n...\n...");
    }

    #[test]
    fn test_random_fills_every_cell_in_order() {
        let palette = Palette::new(3).unwrap();
        let mut source = SequenceSource::from_letters("ABC");
        let board = Board::random(BoardSize::new(3).unwrap(), palette, &mut source);
        assert!(board.is_full());
        assert_eq!(board.to_string(), "ABC\nABC\nABC");
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        (1usize..=6).prop_flat_map(|edge| {
            prop::collection::vec(prop::option::weighted(0.8, 0u8..5), edge * edge).prop_map(
                move |cells| {
                    let cells = cells.into_iter().map(|c| c.map(TileType::new)).collect();
                    Board::from_cells(BoardSize::new(edge).unwrap(), cells).unwrap()
                },
            )
        })
    }

    proptest! {
        #[test]
        fn swap_twice_restores_board(board in arb_board(), a in 0usize..36, b in 0usize..36) {
            let n = board.size().cell_count();
            let (a, b) = (a % n, b % n);
            let mut swapped = board.clone();
            swapped.swap(a, b);
            swapped.swap(a, b);
            prop_assert_eq!(swapped, board);
        }

        #[test]
        fn text_form_parses_back(board in arb_board()) {
            let parsed: Board = board.to_string().parse().unwrap();
            prop_assert_eq!(parsed, board);
        }
    }
}
