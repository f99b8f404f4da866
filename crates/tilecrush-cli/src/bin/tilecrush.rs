//! Tilecrush terminal game.
//!
//! Reads swap commands from standard input and plays through the configured
//! levels. Run with `--help` for the options.

use std::{io, process::ExitCode};

use clap::Parser as _;
use tilecrush_cli::{
    args::Args,
    driver::{self, Mode},
};
use tilecrush_game::Session;
use tilecrush_generator::BoardSeed;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(BoardSeed::random);
    log::info!("starting tilecrush, seed={seed}");

    let mut session = match Session::with_seed(args.config(), seed) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let mode = if args.autoplay {
        Mode::Autoplay
    } else {
        Mode::Interactive
    };
    let mut stdout = io::stdout().lock();
    match driver::run_seeded(&mut session, mode, io::stdin().lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
