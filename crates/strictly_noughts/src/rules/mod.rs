//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board according to tic-tac-toe rules.
//! They are kept apart from board storage so the engine, the strategies
//! and the invariants can all share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_terminal};
pub use win::{WIN_LINES, check_winner, winning_line};
