//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the player holding it.
fn first_completed(board: &Board) -> Option<([Position; 3], Player)> {
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|pos| board.get(pos.to_index()));
        match a {
            Some(Square::Occupied(player)) if a == b && b == c => Some((line, player)),
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in declaration order. Boards reached through
/// alternating play can have at most one winning mark, so the first hit
/// is the answer.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    first_completed(board).map(|(_, player)| player)
}

/// Returns the board indices of the first completed line, if any.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    first_completed(board).map(|(line, _)| line.map(Position::to_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(check_winner(&board("XXXOO    ")), Some(Player::X));
        assert_eq!(winning_line(&board("XXXOO    ")), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(check_winner(&board("XO XO  OX")), Some(Player::O));
        assert_eq!(winning_line(&board("XO XO  OX")), Some([1, 4, 7]));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(check_winner(&board("O X O X O")), Some(Player::O));
        assert_eq!(check_winner(&board("  X X X  ")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX O     ")), None);
        assert_eq!(winning_line(&board("XX O     ")), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in WIN_LINES {
            let mut b = Board::new();
            for pos in line {
                b.place(pos.to_index(), Player::O).unwrap();
            }
            assert_eq!(check_winner(&b), Some(Player::O));
            assert_eq!(winning_line(&b), Some(line.map(Position::to_index)));
        }
    }
}
