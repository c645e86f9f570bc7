//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (conventionally moves first).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order:
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
///
/// The board only knows about occupancy. Turn order and mark balance are
/// the engine's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as an array in row-major order.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Returns the indices of all empty squares in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Places a mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] if `index` is outside 0-8 or the
    /// square is already occupied. The board is untouched on error.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(index) {
            return Err(MoveError::IllegalMove(index));
        }
        self.squares[index] = Square::Occupied(player);
        Ok(())
    }

    /// Resets a square to empty.
    ///
    /// Only lookahead code may undo a placement, so this stays crate-private.
    pub(crate) fn clear(&mut self, index: usize) {
        if let Some(square) = self.squares.get_mut(index) {
            *square = Square::Empty;
        }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their index so a caller can prompt with it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.squares[index] {
                    Square::Empty => index.to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Input did not contain exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),

    /// Input contained a character that is not a mark or an empty marker.
    #[display("Unexpected character {:?} at square {}", character, index)]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Square index where it appeared.
        index: usize,
    },
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine characters in row-major order.
    ///
    /// `X`/`O` (either case) are marks; space, `.`, `-` and `_` are empty.
    /// Newlines and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !matches!(c, '\n' | '\r' | '|')).collect();
        if cells.len() != BOARD_SIZE {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (index, character) in cells.into_iter().enumerate() {
            board.squares[index] = match character {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                ' ' | '.' | '-' | '_' => Square::Empty,
                other => {
                    return Err(BoardParseError::UnexpectedCharacter {
                        character: other,
                        index,
                    });
                }
            };
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let mut board = Board::new();
        board.place(4, Player::X).unwrap();
        let before = board.clone();

        assert_eq!(board.place(4, Player::O), Err(MoveError::IllegalMove(4)));
        assert_eq!(board.place(9, Player::O), Err(MoveError::IllegalMove(9)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_legal_moves_ascending_and_complementary() {
        let mut board = Board::new();
        for (index, player) in [(8, Player::X), (0, Player::O), (4, Player::X)] {
            board.place(index, player).unwrap();
            assert_eq!(board.legal_moves().len() + board.occupied_count(), BOARD_SIZE);
        }
        assert_eq!(board.legal_moves(), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_clear_restores_empty() {
        let mut board = Board::new();
        board.place(2, Player::O).unwrap();
        board.clear(2);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "OO XX    ".parse().unwrap();
        assert_eq!(board.count(Player::O), 2);
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.get(2), Some(Square::Empty));

        let separated: Board = "x|o|.\n.|x|.\n.|.|o".parse().unwrap();
        assert_eq!(separated.get(4), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_parse_board_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XO?      ".parse::<Board>(),
            Err(BoardParseError::UnexpectedCharacter {
                character: '?',
                index: 2
            })
        );
    }

    #[test]
    fn test_display_shows_indices_for_empty() {
        let board: Board = "X   O    ".parse().unwrap();
        assert_eq!(board.display(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_board_json_round_trip() {
        let board: Board = "X   O    ".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert!(json.contains(r#"{"Occupied":"X"}"#));
        assert!(json.contains(r#""Empty""#));

        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }
}
