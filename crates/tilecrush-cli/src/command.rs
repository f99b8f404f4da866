use tilecrush_core::BoardSize;

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Swap the tiles at two linear indices.
    Swap { a: usize, b: usize },
    /// Suggest a productive swap.
    Hint,
    /// Print the board again.
    Board,
    /// Leave the game.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandParseError {
    #[display("empty command")]
    Empty,
    #[display("unknown command {word:?}")]
    Unknown {
        word: String,
    },
    #[display("a swap needs exactly two cells")]
    SwapArity,
    #[display("invalid cell {text:?}; use an index or row,col")]
    InvalidCell {
        text: String,
    },
    #[display("cell {row},{col} is outside the {edge}x{edge} board")]
    CoordinateOutOfRange { row: usize, col: usize, edge: usize },
}

impl Command {
    /// Parses one input line.
    ///
    /// Cells are either linear indices (`12`) or `row,col` pairs (`1,4`).
    /// Linear indices are passed through unchecked so the session can report
    /// them; `row,col` pairs must lie on the board.
    pub fn parse(line: &str, size: BoardSize) -> Result<Self, CommandParseError> {
        let words = line.split_whitespace().collect::<Vec<_>>();
        match words.as_slice() {
            [] => Err(CommandParseError::Empty),
            ["hint" | "h"] => Ok(Self::Hint),
            ["board" | "b"] => Ok(Self::Board),
            ["quit" | "q" | "exit"] => Ok(Self::Quit),
            [a, b] => Ok(Self::Swap {
                a: parse_cell(a, size)?,
                b: parse_cell(b, size)?,
            }),
            [first, ..] if first.starts_with(|c: char| c.is_ascii_digit()) => {
                Err(CommandParseError::SwapArity)
            }
            [word, ..] => Err(CommandParseError::Unknown {
                word: (*word).to_owned(),
            }),
        }
    }
}

fn parse_cell(text: &str, size: BoardSize) -> Result<usize, CommandParseError> {
    let invalid = || CommandParseError::InvalidCell {
        text: text.to_owned(),
    };
    let Some((row, col)) = text.split_once(',') else {
        return text.parse().map_err(|_| invalid());
    };
    let row = row.trim().parse::<usize>().map_err(|_| invalid())?;
    let col = col.trim().parse::<usize>().map_err(|_| invalid())?;
    let edge = size.edge();
    if row >= edge || col >= edge {
        return Err(CommandParseError::CoordinateOutOfRange { row, col, edge });
    }
    Ok(size.index(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> BoardSize {
        BoardSize::new(8).unwrap()
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse("hint", size()), Ok(Command::Hint));
        assert_eq!(Command::parse("  b  ", size()), Ok(Command::Board));
        assert_eq!(Command::parse("quit", size()), Ok(Command::Quit));
        assert_eq!(Command::parse("q", size()), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_swaps() {
        assert_eq!(
            Command::parse("0 1", size()),
            Ok(Command::Swap { a: 0, b: 1 })
        );
        assert_eq!(
            Command::parse("1,2 2,2", size()),
            Ok(Command::Swap { a: 10, b: 18 })
        );
        assert_eq!(
            Command::parse("9 1,1", size()),
            Ok(Command::Swap { a: 9, b: 9 })
        );
        // Out-of-range indices are left for the session to reject.
        assert_eq!(
            Command::parse("63 64", size()),
            Ok(Command::Swap { a: 63, b: 64 })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("", size()), Err(CommandParseError::Empty));
        assert_eq!(
            Command::parse("swap", size()),
            Err(CommandParseError::Unknown {
                word: "swap".to_owned()
            })
        );
        assert_eq!(
            Command::parse("1 2 3", size()),
            Err(CommandParseError::SwapArity)
        );
        assert_eq!(Command::parse("1", size()), Err(CommandParseError::SwapArity));
        assert_eq!(
            Command::parse("1 x", size()),
            Err(CommandParseError::InvalidCell {
                text: "x".to_owned()
            })
        );
        assert_eq!(
            Command::parse("1,a 0", size()),
            Err(CommandParseError::InvalidCell {
                text: "1,a".to_owned()
            })
        );
        assert_eq!(
            Command::parse("0,8 0,7", size()),
            Err(CommandParseError::CoordinateOutOfRange {
                row: 0,
                col: 8,
                edge: 8
            })
        );
    }
}
