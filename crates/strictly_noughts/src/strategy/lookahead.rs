//! Scoped hypothetical placements for search.

use crate::action::MoveError;
use crate::{Board, Player};
use std::ops::{Deref, DerefMut};

/// A mark placed on a borrowed board for the lifetime of the guard.
///
/// Dropping the guard clears the square again, so every exit path out of
/// a search (early return, `?`, panic unwinding) restores the board.
#[derive(Debug)]
pub(crate) struct Hypothetical<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Hypothetical<'a> {
    /// Places `player` at `index`, failing exactly like [`Board::place`].
    pub(crate) fn place(
        board: &'a mut Board,
        index: usize,
        player: Player,
    ) -> Result<Self, MoveError> {
        board.place(index, player)?;
        Ok(Self { board, index })
    }
}

impl Deref for Hypothetical<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Hypothetical<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Hypothetical<'_> {
    fn drop(&mut self) {
        self.board.clear(self.index);
    }
}
