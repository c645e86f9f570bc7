//! Strictly Noughts - tic-tac-toe game logic and move selection.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and pure queries over it
//! - **Rules**: win, draw and terminal detection
//! - **Strategies**: random, heuristic and exact (minimax) move selection
//! - **Engine**: turn alternation and phase derivation for one game
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{Difficulty, GameEngine, GamePhase, Player};
//!
//! let mut game = GameEngine::new(Player::X);
//! game.apply_move(4, Player::X)?;
//!
//! let mut ai = Difficulty::Hard.strategy(None);
//! let phase = game.advance(ai.as_mut())?;
//! assert_eq!(phase, GamePhase::InProgress(Player::X));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod phases;
mod position;
mod types;

pub mod invariants;
pub mod rules;
pub mod strategy;

pub use action::{Move, MoveError};
pub use engine::{AdvanceError, GameEngine};
pub use phases::GamePhase;
pub use position::Position;
pub use strategy::{
    Difficulty, ExactStrategy, HeuristicStrategy, MoveStrategy, RandomStrategy, StrategyError,
};
pub use types::{BOARD_SIZE, Board, BoardParseError, Player, Square};

/// Alias for the symbol a player places.
pub type Mark = Player;
