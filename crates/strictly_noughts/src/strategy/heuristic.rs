//! Rule-of-thumb move selection.

use super::lookahead::Hypothetical;
use super::random::pick_uniform;
use super::{MoveStrategy, StrategyError};
use crate::rules::check_winner;
use crate::{Board, Player, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Strategy that follows a fixed priority list:
///
/// 1. complete a line of its own,
/// 2. block the opponent's completing square,
/// 3. take the centre,
/// 4. take a random free corner,
/// 5. otherwise play randomly.
///
/// Win and block scans run in ascending index order, so the first
/// qualifying square is chosen.
#[derive(Debug, Clone)]
pub struct HeuristicStrategy {
    rng: StdRng,
}

impl HeuristicStrategy {
    /// Creates a heuristic strategy seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a reproducible heuristic strategy.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a heuristic strategy driven by `rng`.
    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

/// First empty square where `player` would complete a line.
fn completing_square(
    board: &mut Board,
    moves: &[usize],
    player: Player,
) -> Result<Option<usize>, StrategyError> {
    for &index in moves {
        let trial = Hypothetical::place(board, index, player)?;
        if check_winner(&trial) == Some(player) {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

impl MoveStrategy for HeuristicStrategy {
    #[instrument(skip(self, board))]
    fn select(&mut self, board: &mut Board, player: Player) -> Result<usize, StrategyError> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(StrategyError::NoLegalMove);
        }

        if let Some(index) = completing_square(board, &moves, player)? {
            debug!(index, "Taking winning square");
            return Ok(index);
        }

        if let Some(index) = completing_square(board, &moves, player.opponent())? {
            debug!(index, "Blocking opponent");
            return Ok(index);
        }

        let center = Position::Center.to_index();
        if board.is_empty(center) {
            debug!("Taking center");
            return Ok(center);
        }

        let corners: Vec<usize> = Position::CORNERS
            .iter()
            .map(|pos| pos.to_index())
            .filter(|&index| board.is_empty(index))
            .collect();
        if !corners.is_empty() {
            let index = pick_uniform(&mut self.rng, &corners)?;
            debug!(index, "Taking corner");
            return Ok(index);
        }

        let index = pick_uniform(&mut self.rng, &moves)?;
        debug!(index, "Falling back to random edge");
        Ok(index)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
