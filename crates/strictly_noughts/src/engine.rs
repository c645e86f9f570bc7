//! Turn-taking game engine.
//!
//! The engine owns the board for the lifetime of one game. It stores only
//! the board, the side to move and the history; the phase is derived from
//! them on demand so the two can never disagree.

use super::action::{Move, MoveError};
use super::phases::GamePhase;
use super::rules;
use super::strategy::{MoveStrategy, StrategyError};
use super::{Board, Player};
use tracing::{debug, info, instrument, warn};

#[cfg(debug_assertions)]
use super::invariants::{EngineInvariants, InvariantSet};

/// Error from letting a strategy take a turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum AdvanceError {
    /// The chosen move was rejected by the engine.
    #[display("{}", _0)]
    Move(MoveError),
    /// The strategy could not produce a move.
    #[display("{}", _0)]
    Strategy(StrategyError),
}

impl std::error::Error for AdvanceError {}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    first_player: Player,
    to_move: Player,
    history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game with `first_player` to move.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            first_player,
            to_move: first_player,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by applying `moves` in order.
    ///
    /// # Errors
    ///
    /// Fails with the first move the engine rejects.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(first_player: Player, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new(first_player);
        for mov in moves {
            game.apply_move(mov.index, mov.player)?;
        }
        Ok(game)
    }

    /// Returns the current phase, recomputed from the board.
    pub fn current_phase(&self) -> GamePhase {
        if let Some(winner) = rules::check_winner(&self.board) {
            GamePhase::Won(winner)
        } else if rules::is_draw(&self.board) {
            GamePhase::Drawn
        } else {
            GamePhase::InProgress(self.to_move)
        }
    }

    /// Returns a read-only view of the board.
    pub fn current_board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the moves applied so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the indices of the completed line once the game is won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        rules::winning_line(&self.board)
    }

    /// Places `player`'s mark at `index` and returns the resulting phase.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has been won or drawn.
    /// - [`MoveError::WrongTurn`] if `player` is not the side to move.
    /// - [`MoveError::IllegalMove`] if `index` is off the board or taken.
    ///
    /// The game is unchanged whenever an error is returned.
    #[instrument(skip(self), fields(ply = self.history.len()))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<GamePhase, MoveError> {
        let to_move = match self.current_phase() {
            GamePhase::InProgress(to_move) => to_move,
            phase => {
                warn!(%phase, "Move submitted after game end");
                return Err(MoveError::GameOver);
            }
        };
        if player != to_move {
            return Err(MoveError::WrongTurn(player));
        }

        self.board.place(index, player)?;
        self.history.push(Move::new(player, index));
        self.to_move = player.opponent();

        #[cfg(debug_assertions)]
        if let Err(err) = self.check_invariants() {
            self.history.pop();
            self.board.clear(index);
            self.to_move = player;
            return Err(err);
        }

        let phase = self.current_phase();
        if phase.is_terminal() {
            info!(%phase, moves = self.history.len(), "Game over");
        } else {
            debug!(%phase, "Move applied");
        }
        Ok(phase)
    }

    /// Lets `strategy` choose and play a move for the side to move.
    ///
    /// The strategy's choice goes through [`GameEngine::apply_move`] exactly
    /// like a human move. On error the board is restored to what it was
    /// before the strategy saw it.
    #[instrument(skip(self, strategy), fields(strategy = strategy.name()))]
    pub fn advance<S>(&mut self, strategy: &mut S) -> Result<GamePhase, AdvanceError>
    where
        S: MoveStrategy + ?Sized,
    {
        let player = self.current_phase().to_move().ok_or(MoveError::GameOver)?;
        let snapshot = self.board.clone();
        let result = strategy
            .select(&mut self.board, player)
            .map_err(AdvanceError::from)
            .and_then(|index| Ok(self.apply_move(index, player)?));
        if result.is_err() {
            self.board = snapshot;
        }
        result
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), MoveError> {
        EngineInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::ExactStrategy;

    /// Strategy that writes a stray mark before answering.
    struct StrayMark;

    impl MoveStrategy for StrayMark {
        fn select(&mut self, board: &mut Board, player: Player) -> Result<usize, StrategyError> {
            board.place(8, player)?;
            Ok(0)
        }

        fn name(&self) -> &str {
            "stray"
        }
    }

    #[test]
    fn test_new_game_in_progress() {
        let game = GameEngine::new(Player::O);
        assert_eq!(game.current_phase(), GamePhase::InProgress(Player::O));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameEngine::default();
        assert_eq!(game.apply_move(4, Player::X), Ok(GamePhase::InProgress(Player::O)));
        assert_eq!(game.apply_move(0, Player::O), Ok(GamePhase::InProgress(Player::X)));
    }

    #[test]
    fn test_wrong_turn_rejected_without_change() {
        let mut game = GameEngine::default();
        let before = game.clone();
        assert_eq!(game.apply_move(4, Player::O), Err(MoveError::WrongTurn(Player::O)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_advance_with_strategy() {
        let mut game = GameEngine::default();
        game.apply_move(0, Player::X).unwrap();
        let phase = game.advance(&mut ExactStrategy::new()).unwrap();
        assert_eq!(phase, GamePhase::InProgress(Player::X));
        assert_eq!(game.history().last(), Some(&Move::new(Player::O, 4)));
    }

    #[test]
    fn test_advance_after_game_over() {
        let moves = [
            Move::new(Player::X, 0),
            Move::new(Player::O, 3),
            Move::new(Player::X, 1),
            Move::new(Player::O, 4),
            Move::new(Player::X, 2),
        ];
        let mut game = GameEngine::replay(Player::X, &moves).unwrap();
        assert_eq!(game.current_phase(), GamePhase::Won(Player::X));
        assert_eq!(game.winning_line(), Some([0, 1, 2]));
        assert_eq!(
            game.advance(&mut ExactStrategy::new()),
            Err(AdvanceError::Move(MoveError::GameOver))
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_invariant_violation_leaves_game_unchanged() {
        let mut game = GameEngine::default();
        game.apply_move(4, Player::X).unwrap();
        let before = game.clone();

        let result = game.advance(&mut StrayMark);
        assert!(matches!(
            result,
            Err(AdvanceError::Move(MoveError::InvariantViolation(_)))
        ));
        assert_eq!(game.history().len(), 1);
        assert_eq!(game, before);
        assert_eq!(game.current_phase(), GamePhase::InProgress(Player::O));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_apply_move_rolls_back_on_invariant_violation() {
        let mut game = GameEngine::default();
        game.apply_move(4, Player::X).unwrap();
        game.board.place(8, Player::O).unwrap();
        let before = game.clone();

        let result = game.apply_move(0, Player::O);
        assert!(matches!(result, Err(MoveError::InvariantViolation(_))));
        assert_eq!(game, before);
    }
}
