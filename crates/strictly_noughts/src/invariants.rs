//! First-class invariants for a running game.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The engine checks them in debug builds; they are also testable on
//! their own.

use super::engine::GameEngine;
use super::{Board, BOARD_SIZE};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        warn!(invariant = I::description(), "Invariant violated");
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the two marks alternate, so the side that moved first has
/// either as many marks as its opponent or exactly one more, and the side
/// to move is the one that restores balance.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let first = game.first_player();
        let board = game.current_board();
        let leader = board.count(first);
        let follower = board.count(first.opponent());

        let balanced = leader == follower || leader == follower + 1;
        match game.current_phase().to_move() {
            Some(to_move) => {
                let expected = if leader == follower { first } else { first.opponent() };
                balanced && to_move == expected
            }
            None => balanced,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

/// Invariant: replaying the history onto an empty board reproduces the
/// current board, with no square written twice.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut reconstructed = Board::new();
        for mov in game.history() {
            if reconstructed.place(mov.index, mov.player).is_err() {
                return false;
            }
        }
        reconstructed == *game.current_board()
    }

    fn description() -> &'static str {
        "History is consistent with the board"
    }
}

/// Invariant: every square is either a legal move or occupied.
pub struct LegalMovesCompleteInvariant;

impl Invariant<GameEngine> for LegalMovesCompleteInvariant {
    fn holds(game: &GameEngine) -> bool {
        let board = game.current_board();
        board.legal_moves().len() + board.occupied_count() == BOARD_SIZE
    }

    fn description() -> &'static str {
        "Legal moves and occupied squares cover the board"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    LegalMovesCompleteInvariant,
);
