//! Strictly Arena - headless tic-tac-toe matches between strategies.
//!
//! The arena drives the `strictly_noughts` engine through its public API
//! only: it builds strategies from a difficulty setting, plays them
//! against each other, and reports exact scores for a position.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod config;

pub use arena::{ArenaError, GameReport, MoveScore, SolveReport, play, solve};
pub use config::{ArenaConfig, ConfigError};
