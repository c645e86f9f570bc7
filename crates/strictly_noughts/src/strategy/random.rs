//! Uniformly random move selection.

use super::{MoveStrategy, StrategyError};
use crate::{Board, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks one of `candidates` uniformly.
pub(super) fn pick_uniform<R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[usize],
) -> Result<usize, StrategyError> {
    candidates
        .choose(rng)
        .copied()
        .ok_or(StrategyError::NoLegalMove)
}

/// Strategy that plays any empty square with equal probability.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a random strategy seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a reproducible random strategy.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a random strategy driven by `rng`.
    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for RandomStrategy {
    #[instrument(skip(self, board))]
    fn select(&mut self, board: &mut Board, player: Player) -> Result<usize, StrategyError> {
        let index = pick_uniform(&mut self.rng, &board.legal_moves())?;
        debug!(index, "Random pick");
        Ok(index)
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_only_picks_empty_squares() {
        let mut board: Board = "XOX OXO  ".parse().unwrap();
        let mut strategy = RandomStrategy::seeded(11);
        for _ in 0..50 {
            let index = strategy.select(&mut board, Player::X).unwrap();
            assert!([3, 7, 8].contains(&index));
        }
    }

    #[test]
    fn test_reaches_every_empty_square() {
        let mut board = Board::new();
        let mut strategy = RandomStrategy::seeded(5);
        let seen: HashSet<usize> = (0..500)
            .map(|_| strategy.select(&mut board, Player::O).unwrap())
            .collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let mut board = Board::new();
        let mut a = RandomStrategy::seeded(42);
        let mut b = RandomStrategy::seeded(42);
        for _ in 0..20 {
            assert_eq!(
                a.select(&mut board, Player::X),
                b.select(&mut board, Player::X)
            );
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board: Board = "XOXOXXOXO".parse().unwrap();
        assert_eq!(
            RandomStrategy::seeded(0).select(&mut board, Player::X),
            Err(StrategyError::NoLegalMove)
        );
    }
}
