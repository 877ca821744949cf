//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use super::win::is_winning_for;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board on which neither mark owns a line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !is_winning_for(board, Mark::X) && !is_winning_for(board, Mark::O)
}
