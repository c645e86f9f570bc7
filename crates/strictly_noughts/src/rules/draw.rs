//! Draw and terminal detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// A full board with no winner is a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    check_winner(board).is_none() && board.is_full()
}

/// The game is over once someone has won or the board is drawn.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("valid board")
    }

    #[test]
    fn test_empty_board_not_terminal() {
        let b = Board::new();
        assert!(!b.is_full());
        assert!(!is_draw(&b));
        assert!(!is_terminal(&b));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let b = board("XOXOXXOXO");
        assert!(b.is_full());
        assert!(is_draw(&b));
        assert!(is_terminal(&b));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let b = board("XXXOO    ");
        assert!(!is_draw(&b));
        assert!(is_terminal(&b));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X X X / O O X / X O O
        let b = board("XXXOOXXOO");
        assert!(b.is_full());
        assert!(!is_draw(&b));
        assert!(is_terminal(&b));
    }
}
