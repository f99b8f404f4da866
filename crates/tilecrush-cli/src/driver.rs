use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

use tilecrush_core::TileSource;
use tilecrush_game::{Session, SessionError, SessionState, find_matching_swap};
use tilecrush_generator::RandomSource;

use crate::{
    command::Command,
    render::{self, TextPresenter},
};

/// Errors that end a driver loop early.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant)]
pub enum DriverError {
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    #[display("session error: {_0}")]
    Session(#[from] SessionError),
}

/// How moves are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Mode {
    /// Commands are read from the input, one per line.
    Interactive,
    /// The hint search plays every move.
    Autoplay,
}

/// Runs `session` until the game is complete, the player quits, or the input
/// ends.
///
/// Between levels a countdown of [`Session::level_delay`] runs before the next
/// board is dealt. When the move budget is used up the level is dealt again.
pub fn run<S, R, W>(
    session: &mut Session<S>,
    mode: Mode,
    mut input: R,
    out: &mut W,
) -> Result<(), DriverError>
where
    S: TileSource,
    R: BufRead,
    W: Write,
{
    let mut presenter = TextPresenter::default();
    show_board(session, out)?;

    loop {
        match session.state() {
            SessionState::GameComplete => {
                writeln!(out, "Thanks for playing.")?;
                return Ok(());
            }
            SessionState::LevelComplete { level } => {
                countdown(session.level_delay(), level + 1, out)?;
                session.advance_level()?;
                show_board(session, out)?;
                continue;
            }
            SessionState::Playing { level } => {
                if session.is_out_of_moves() {
                    writeln!(out, "Out of moves. Dealing level {level} again.")?;
                    session.restart_level()?;
                    show_board(session, out)?;
                    continue;
                }
            }
        }

        let command = match mode {
            Mode::Autoplay => match find_matching_swap(session.board()) {
                Some((a, b)) => {
                    writeln!(out, "> {a} {b}")?;
                    Command::Swap { a, b }
                }
                None => {
                    writeln!(out, "No productive swap. Dealing a new board.")?;
                    session.restart_level()?;
                    show_board(session, out)?;
                    continue;
                }
            },
            Mode::Interactive => {
                write!(out, "> ")?;
                out.flush()?;
                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    writeln!(out)?;
                    return Ok(());
                }
                match Command::parse(&line, session.board().size()) {
                    Ok(command) => command,
                    Err(e) => {
                        writeln!(out, "{e}")?;
                        continue;
                    }
                }
            }
        };

        match command {
            Command::Swap { a, b } => match session.request_swap(a, b) {
                Ok(outcome) => {
                    outcome.replay(&mut presenter);
                    for line in presenter.take_lines() {
                        writeln!(out, "{line}")?;
                    }
                    if outcome.state.is_playing() {
                        show_board(session, out)?;
                    }
                }
                Err(reason) => {
                    log::debug!("rejected swap {a} <-> {b}: {reason:?}");
                    writeln!(out, "Rejected: {reason}.")?;
                }
            },
            Command::Hint => match find_matching_swap(session.board()) {
                Some((a, b)) => writeln!(out, "Try {a} {b}.")?,
                None => writeln!(out, "No productive swap on this board.")?,
            },
            Command::Board => show_board(session, out)?,
            Command::Quit => return Ok(()),
        }
    }
}

/// Prints the seed of `session`, then [`run`]s it.
///
/// The seed line lets a game be replayed with `--seed`.
pub fn run_seeded<R, W>(
    session: &mut Session<RandomSource>,
    mode: Mode,
    input: R,
    out: &mut W,
) -> Result<(), DriverError>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Seed: {}", session.source().seed())?;
    run(session, mode, input, out)
}

fn show_board<S, W>(session: &Session<S>, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(out)?;
    writeln!(out, "{}", render::status(session))?;
    writeln!(out, "{}", render::board(session.board()))?;
    Ok(())
}

fn countdown<W>(delay: Duration, next_level: usize, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    let mut remaining = delay;
    while !remaining.is_zero() {
        let step = remaining.min(Duration::from_secs(1));
        let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
        write!(out, "\rLevel {next_level} in {secs}s ")?;
        out.flush()?;
        thread::sleep(step);
        remaining -= step;
    }
    if !delay.is_zero() {
        writeln!(out)?;
    }
    Ok(())
}
