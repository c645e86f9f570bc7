//! Move selection strategies.
//!
//! Every strategy answers the same question: given a board and the mark to
//! move, which empty square should be played? Strategies borrow the board
//! mutably so they can try moves in place, and must hand it back exactly as
//! they found it.

mod exact;
mod heuristic;
mod lookahead;
mod random;

pub use exact::ExactStrategy;
pub use heuristic::HeuristicStrategy;
pub use random::RandomStrategy;

use crate::action::MoveError;
use crate::{Board, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Error raised by a strategy.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum StrategyError {
    /// The strategy was asked to move on a board with no empty squares.
    #[display("No legal moves available")]
    NoLegalMove,

    /// A lookahead placement was rejected by the board.
    #[display("Lookahead failed: {}", _0)]
    #[from]
    Board(MoveError),
}

impl std::error::Error for StrategyError {}

/// Trait for anything that can choose a move.
pub trait MoveStrategy {
    /// Chooses a legal move for `player`.
    ///
    /// The board must be identical before and after the call.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::NoLegalMove`] if the board is full.
    fn select(&mut self, board: &mut Board, player: Player) -> Result<usize, StrategyError>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}

/// Difficulty level, mapping onto one of the three strategies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Win, block, centre, corner, then random.
    #[default]
    Medium,
    /// Full minimax search; never loses.
    Hard,
}

impl Difficulty {
    /// Builds the strategy for this difficulty.
    ///
    /// With a seed, the random choices made by `Easy` and `Medium` are
    /// reproducible. `Hard` is deterministic either way.
    pub fn strategy(self, seed: Option<u64>) -> Box<dyn MoveStrategy> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        match self {
            Difficulty::Easy => Box::new(RandomStrategy::with_rng(rng)),
            Difficulty::Medium => Box::new(HeuristicStrategy::with_rng(rng)),
            Difficulty::Hard => Box::new(ExactStrategy::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_difficulty_parses_case_insensitively() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("impossible".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn test_every_difficulty_moves_on_empty_board_and_fails_on_full() {
        let full: Board = "XOXOXXOXO".parse().unwrap();
        for difficulty in Difficulty::iter() {
            let mut strategy = difficulty.strategy(Some(3));
            let mut board = Board::new();
            let index = strategy.select(&mut board, Player::X).unwrap();
            assert!(index < 9);
            assert_eq!(board, Board::new());

            let mut full = full.clone();
            assert_eq!(
                strategy.select(&mut full, Player::O),
                Err(StrategyError::NoLegalMove)
            );
        }
    }
}
