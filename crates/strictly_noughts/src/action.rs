//! First-class move events for tic-tac-toe.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a board index.
///
/// The engine records every applied move, which makes a game replayable
/// and lets the debug-build invariants cross-check history against the
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The board index (0-8) where the mark is placed.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the board index of this move.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the named position, if the index is on the board.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.index)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(pos) => write!(f, "{} -> {}", self.player, pos.label()),
            None => write!(f, "{} -> #{}", self.player, self.index),
        }
    }
}

/// Error that can occur when applying a move.
///
/// A failed move never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is off the board or the square is already occupied.
    #[display("Illegal move: square {} is not an empty square on the board", _0)]
    IllegalMove(usize),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
