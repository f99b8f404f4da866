use std::fmt::Write as _;

use tilecrush_core::{Board, TileType};
use tilecrush_game::{Presenter, Session};

/// Renders `board` with row and column numbers.
///
/// Empty cells show as `.`.
#[must_use]
pub fn board(board: &Board) -> String {
    let edge = board.size().edge();
    let width = (edge - 1).to_string().len();
    let mut out = String::new();

    let _ = write!(out, "{:width$} ", "");
    for col in 0..edge {
        let _ = write!(out, " {col:>width$}");
    }
    for (row, cells) in board.cells().chunks(edge).enumerate() {
        let _ = write!(out, "\n{row:>width$} ");
        for cell in cells {
            let letter = cell.map_or('.', TileType::letter);
            let _ = write!(out, " {letter:>width$}");
        }
    }
    out
}

/// Renders the level, score, and move counter of `session`.
#[must_use]
pub fn status<S>(session: &Session<S>) -> String {
    let mut out = format!(
        "Level {}/{}  Score {}/{}",
        session.level(),
        session.total_levels(),
        session.score(),
        session.level_target()
    );
    if let Some(moves) = session.moves_remaining() {
        let _ = write!(out, "  Moves {moves}");
    }
    out
}

/// Collects the events of a swap as lines of text.
///
/// Clears are summarized one line per settle pass.
#[derive(Debug, Default)]
pub struct TextPresenter {
    lines: Vec<String>,
    pass: Option<(usize, Vec<usize>)>,
    cleared_any: bool,
}

impl TextPresenter {
    /// Returns the collected lines and resets the presenter.
    pub fn take_lines(&mut self) -> Vec<String> {
        self.flush_pass();
        self.cleared_any = false;
        std::mem::take(&mut self.lines)
    }

    fn flush_pass(&mut self) {
        if let Some((pass, cleared)) = self.pass.take() {
            let label = if pass == 1 { "Match" } else { "Cascade" };
            let cells = cleared
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            self.lines
                .push(format!("{label} {pass}: cleared {} [{cells}]", cleared.len()));
        }
    }
}

impl Presenter for TextPresenter {
    fn tile_cleared(&mut self, index: usize, pass: usize) {
        self.cleared_any = true;
        if let Some((current, cleared)) = &mut self.pass
            && *current == pass
        {
            cleared.push(index);
            return;
        }
        self.flush_pass();
        self.pass = Some((pass, vec![index]));
    }

    fn score_changed(&mut self, score: u32, moves_remaining: Option<u32>) {
        self.flush_pass();
        if !self.cleared_any {
            self.lines.push("No match.".to_owned());
        }
        let mut line = format!("Score {score}");
        if let Some(moves) = moves_remaining {
            let _ = write!(line, ", {moves} moves left");
        }
        self.lines.push(line);
    }

    fn level_complete(&mut self, level: usize) {
        self.lines.push(format!("Level {level} complete!"));
    }

    fn game_complete(&mut self) {
        self.lines.push("All levels complete!".to_owned());
    }
}
