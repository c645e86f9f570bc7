//! Strategy-versus-strategy games and position solving.

use crate::config::ArenaConfig;
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use serde::Serialize;
use strictly_noughts::{
    AdvanceError, Board, ExactStrategy, GameEngine, GamePhase, Move, MoveStrategy, Player,
    StrategyError,
};
use tracing::{debug, info, instrument};

/// Error raised while running the arena.
#[derive(Debug, Clone, Display, Error, From)]
pub enum ArenaError {
    /// A strategy failed to take its turn.
    #[display("Game failed: {}", _0)]
    Advance(AdvanceError),
    /// The position could not be searched.
    #[display("Search failed: {}", _0)]
    Strategy(StrategyError),
}

/// Outcome of one arena game.
#[derive(Debug, Clone, Getters, Serialize)]
pub struct GameReport {
    /// Final phase.
    phase: GamePhase,
    /// Moves in the order played.
    moves: Vec<Move>,
    /// Final board.
    board: Board,
    /// Completed line, if the game was won.
    winning_line: Option<[usize; 3]>,
}

/// Plays one game between the two configured strategies.
#[instrument(skip(config), fields(x = %config.x(), o = %config.o(), first = %config.first()))]
pub fn play(config: &ArenaConfig) -> Result<GameReport, ArenaError> {
    // Distinct seeds so two random players don't mirror each other.
    let mut x = config.difficulty_for(Player::X).strategy(*config.seed());
    let mut o = config
        .difficulty_for(Player::O)
        .strategy(config.seed().map(|seed| seed.wrapping_add(1)));

    let mut game = GameEngine::new(*config.first());
    while let GamePhase::InProgress(to_move) = game.current_phase() {
        let strategy: &mut dyn MoveStrategy = match to_move {
            Player::X => x.as_mut(),
            Player::O => o.as_mut(),
        };
        let phase = game.advance(strategy)?;
        if let Some(last) = game.history().last() {
            info!(ply = game.history().len(), %last, %phase, "Move played");
        }
        debug!(board = %game.current_board().display(), "Board");
    }

    Ok(GameReport {
        phase: game.current_phase(),
        moves: game.history().to_vec(),
        board: game.current_board().clone(),
        winning_line: game.winning_line(),
    })
}

/// Minimax score of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct MoveScore {
    /// Board index of the move.
    index: usize,
    /// +1 forced win, 0 draw, -1 forced loss.
    score: i8,
}

/// Exact analysis of a position.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct SolveReport {
    /// Player to move.
    player: Player,
    /// Score of every legal move, ascending by index.
    scores: Vec<MoveScore>,
    /// The move the exact strategy plays.
    best: usize,
}

/// Scores every legal move for `player` and picks the exact strategy's move.
#[instrument(skip(board))]
pub fn solve(board: &Board, player: Player) -> Result<SolveReport, ArenaError> {
    let mut scratch = board.clone();
    let mut exact = ExactStrategy::new();

    let scores = exact
        .evaluate(&mut scratch, player)?
        .into_iter()
        .map(|(index, score)| MoveScore { index, score })
        .collect();
    let best = exact.select(&mut scratch, player)?;
    info!(best, "Position solved");

    Ok(SolveReport {
        player,
        scores,
        best,
    })
}
