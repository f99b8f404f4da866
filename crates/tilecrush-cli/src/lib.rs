//! Terminal driver for the tile-matching engine.
#![allow(missing_docs, clippy::missing_errors_doc)]

pub mod args;
pub mod command;
pub mod driver;
pub mod render;
