//! Grid dimensions and index arithmetic.
//!
//! Boards are square and stored row-major, so a cell is addressed by the linear
//! index `row * edge + col`. [`BoardSize`] owns every conversion between linear
//! indices and `(row, col)` pairs, and between indices and the rows and columns
//! ("lines") the matcher scans.

/// Scan direction for runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along a row (left to right).
    Horizontal,
    /// Along a column (top to bottom).
    Vertical,
}

impl Direction {
    /// Both directions, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];
}

/// Edge length of a square board.
///
/// # Examples
///
/// ```
/// use tilecrush_core::BoardSize;
///
/// let size = BoardSize::new(8)?;
/// assert_eq!(size.cell_count(), 64);
/// assert_eq!(size.index(2, 3), 19);
/// assert_eq!((size.row(19), size.col(19)), (2, 3));
///
/// assert!(size.are_neighbors(19, 20));
/// assert!(size.are_neighbors(19, 27));
/// assert!(!size.are_neighbors(19, 28)); // diagonal
/// assert!(!size.are_neighbors(7, 8)); // wraps to the next row
/// # Ok::<(), tilecrush_core::BoardSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    edge: usize,
}

impl BoardSize {
    /// Largest supported edge length.
    pub const MAX_EDGE: usize = 64;

    /// Creates a size for an `edge × edge` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError::OutOfRange`] if `edge` is zero or larger than
    /// [`MAX_EDGE`](Self::MAX_EDGE).
    pub fn new(edge: usize) -> Result<Self, BoardSizeError> {
        if (1..=Self::MAX_EDGE).contains(&edge) {
            Ok(Self { edge })
        } else {
            Err(BoardSizeError::OutOfRange { edge })
        }
    }

    /// Returns the number of cells along one side.
    #[must_use]
    pub const fn edge(self) -> usize {
        self.edge
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.edge * self.edge
    }

    /// Returns `true` if `index` addresses a cell on this board.
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        index < self.cell_count()
    }

    /// Returns the linear index of `(row, col)`.
    #[must_use]
    pub const fn index(self, row: usize, col: usize) -> usize {
        row * self.edge + col
    }

    /// Returns the row of `index`.
    #[must_use]
    pub const fn row(self, index: usize) -> usize {
        index / self.edge
    }

    /// Returns the column of `index`.
    #[must_use]
    pub const fn col(self, index: usize) -> usize {
        index % self.edge
    }

    /// Returns `true` if the two cells are horizontally or vertically adjacent.
    ///
    /// Equal indices, diagonal pairs, and indices outside the board are never
    /// neighbors.
    #[must_use]
    pub fn are_neighbors(self, a: usize, b: usize) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        let distance = self.row(a).abs_diff(self.row(b)) + self.col(a).abs_diff(self.col(b));
        distance == 1
    }

    /// Returns the line (row or column) through `index` and the position of
    /// `index` along that line.
    #[must_use]
    pub const fn line_of(self, direction: Direction, index: usize) -> (usize, usize) {
        match direction {
            Direction::Horizontal => (self.row(index), self.col(index)),
            Direction::Vertical => (self.col(index), self.row(index)),
        }
    }

    /// Returns the linear index of position `pos` along `line`.
    ///
    /// Inverse of [`line_of`](Self::line_of).
    #[must_use]
    pub const fn line_index(self, direction: Direction, line: usize, pos: usize) -> usize {
        match direction {
            Direction::Horizontal => self.index(line, pos),
            Direction::Vertical => self.index(pos, line),
        }
    }
}

/// Errors returned when constructing a [`BoardSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardSizeError {
    /// The edge length is zero or too large.
    #[display("board edge {edge} is outside 1..={}", BoardSize::MAX_EDGE)]
    OutOfRange {
        /// The rejected edge length.
        edge: usize,
    },
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_bounds() {
        assert!(BoardSize::new(0).is_err());
        assert!(BoardSize::new(1).is_ok());
        assert!(BoardSize::new(64).is_ok());
        assert_eq!(
            BoardSize::new(65),
            Err(BoardSizeError::OutOfRange { edge: 65 })
        );
    }

    #[test]
    fn test_neighbors_on_8x8() {
        let size = BoardSize::new(8).unwrap();

        assert!(size.are_neighbors(0, 1));
        assert!(size.are_neighbors(0, 8));
        assert!(!size.are_neighbors(0, 0));
        assert!(!size.are_neighbors(0, 2));
        assert!(!size.are_neighbors(0, 9));
        // Last cell of a row and first cell of the next are not adjacent.
        assert!(!size.are_neighbors(7, 8));
        assert!(!size.are_neighbors(63, 64));
        assert!(!size.are_neighbors(64, 65));
    }

    #[test]
    fn test_line_round_trip() {
        let size = BoardSize::new(5).unwrap();
        for direction in Direction::ALL {
            for index in 0..size.cell_count() {
                let (line, pos) = size.line_of(direction, index);
                assert_eq!(size.line_index(direction, line, pos), index);
            }
        }
        assert_eq!(size.line_of(Direction::Vertical, 7), (2, 1));
    }

    proptest! {
        #[test]
        fn neighbors_are_symmetric(edge in 1usize..=10, a in 0usize..120, b in 0usize..120) {
            let size = BoardSize::new(edge).unwrap();
            prop_assert_eq!(size.are_neighbors(a, b), size.are_neighbors(b, a));
        }

        #[test]
        fn every_inner_cell_has_four_neighbors(edge in 3usize..=10) {
            let size = BoardSize::new(edge).unwrap();
            let center = size.index(1, 1);
            let count = (0..size.cell_count())
                .filter(|&other| size.are_neighbors(center, other))
                .count();
            prop_assert_eq!(count, 4);
        }
    }
}
