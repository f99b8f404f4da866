//! Session controller for tile-matching games.
//!
//! A [`Session`] owns the board of the current level and the bookkeeping around
//! it: score, optional move budget, level number, and target. Drivers feed it
//! swap requests and decide what to do with the [`SwapOutcome`] it returns; the
//! session performs no I/O and never waits.
//!
//! # Overview
//!
//! - [`GameConfig`]: board size, palette, level targets, move budget, delay
//! - [`Session`]: the level state machine ([`SessionState`])
//! - [`RejectedReason`]: why a swap was turned down
//! - [`Presenter`]: receiver of replayed swap events
//! - [`find_matching_swap`]: hint search
//!
//! # Examples
//!
//! ```
//! use tilecrush_game::{GameConfig, Session, SessionState, find_matching_swap};
//! use tilecrush_generator::BoardSeed;
//!
//! let config = GameConfig {
//!     level_targets: vec![30],
//!     ..GameConfig::classic()
//! };
//! let mut session = Session::with_seed(config, BoardSeed::from_u64(3))?;
//!
//! while let SessionState::Playing { .. } = session.state() {
//!     let Some((a, b)) = find_matching_swap(session.board()) else {
//!         break;
//!     };
//!     let outcome = session.request_swap(a, b).expect("hinted swaps are accepted");
//!     println!("+{} -> {}", outcome.points, outcome.score);
//! }
//! # Ok::<(), tilecrush_game::ConfigError>(())
//! ```

pub use self::{config::*, error::*, hint::*, presenter::*, session::*};

mod config;
mod error;
mod hint;
mod presenter;
mod session;
