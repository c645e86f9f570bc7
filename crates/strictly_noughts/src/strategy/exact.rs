//! Exhaustive minimax search.
//!
//! Scores are relative to the player choosing the move: +1 for a win,
//! -1 for a loss, 0 for a draw. The search has no pruning and no
//! transposition table; the full 3x3 tree is small enough to walk.
//!
//! Scores are not discounted by depth, so among equally scored moves the
//! search has no preference for a quicker win or a slower loss. The lowest
//! index wins ties. The search still never loses.

use super::lookahead::Hypothetical;
use super::{MoveStrategy, StrategyError};
use crate::rules::check_winner;
use crate::{Board, Player};
use tracing::{debug, instrument};

/// Strategy that plays a game-theoretically optimal move.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactStrategy;

impl ExactStrategy {
    /// Creates a new exact strategy.
    pub fn new() -> Self {
        Self
    }

    /// Returns the minimax score of every legal move for `player`,
    /// in ascending index order.
    ///
    /// The board is restored before returning.
    #[instrument(skip(self, board))]
    pub fn evaluate(
        &self,
        board: &mut Board,
        player: Player,
    ) -> Result<Vec<(usize, i8)>, StrategyError> {
        let mut nodes = 0u64;
        let mut scores = Vec::new();
        for index in board.legal_moves() {
            let mut trial = Hypothetical::place(board, index, player)?;
            let score = minimax(&mut trial, player.opponent(), player, &mut nodes)?;
            scores.push((index, score));
        }
        debug!(nodes, "Search complete");
        Ok(scores)
    }
}

/// Value of `board` for `maximizer`, with `to_move` about to play.
fn minimax(
    board: &mut Board,
    to_move: Player,
    maximizer: Player,
    nodes: &mut u64,
) -> Result<i8, StrategyError> {
    *nodes += 1;

    if let Some(winner) = check_winner(board) {
        return Ok(if winner == maximizer { 1 } else { -1 });
    }
    if board.is_full() {
        return Ok(0);
    }

    let maximizing = to_move == maximizer;
    let mut best = if maximizing { i8::MIN } else { i8::MAX };
    for index in board.legal_moves() {
        let mut trial = Hypothetical::place(board, index, to_move)?;
        let score = minimax(&mut trial, to_move.opponent(), maximizer, nodes)?;
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    Ok(best)
}

impl MoveStrategy for ExactStrategy {
    #[instrument(skip(self, board))]
    fn select(&mut self, board: &mut Board, player: Player) -> Result<usize, StrategyError> {
        let scores = self.evaluate(board, player)?;

        // Strict comparison keeps the lowest index among equal scores.
        let mut best: Option<(usize, i8)> = None;
        for (index, score) in scores {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        let (index, score) = best.ok_or(StrategyError::NoLegalMove)?;
        debug!(index, score, "Exact pick");
        Ok(index)
    }

    fn name(&self) -> &str {
        "exact"
    }
}
