//! Game phase derived from the board.

use super::Player;
use serde::{Deserialize, Serialize};

/// Where a game stands.
///
/// The phase is always recomputed from the board and the side to move; it
/// is never stored alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Game is ongoing with the given player to move.
    InProgress(Player),
    /// Game ended in a win.
    Won(Player),
    /// Board is full with no winner.
    Drawn,
}

impl GamePhase {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::InProgress(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GamePhase::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns the player to move while the game is running.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            GamePhase::InProgress(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::InProgress(player) => write!(f, "{} to move", player),
            GamePhase::Won(player) => write!(f, "Player {} wins", player),
            GamePhase::Drawn => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_json_shape() {
        assert_eq!(
            serde_json::to_string(&GamePhase::Won(Player::X)).unwrap(),
            r#"{"Won":"X"}"#
        );
        assert_eq!(
            serde_json::to_string(&GamePhase::Drawn).unwrap(),
            r#""Drawn""#
        );
        let phase: GamePhase = serde_json::from_str(r#"{"InProgress":"O"}"#).unwrap();
        assert_eq!(phase, GamePhase::InProgress(Player::O));
        assert_eq!(phase.to_move(), Some(Player::O));
    }
}
