//! Game rules for tic-tac-toe.
//!
//! Pure functions over an immutable board snapshot. Nothing here
//! knows who the human or the computer is.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_PATTERNS, WinPattern, is_winning_for, winner, winning_pattern};

use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner and at least one empty square.
    Undecided,
    /// `mark` completed `pattern`.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The first completed line in enumeration order.
        pattern: WinPattern,
    },
    /// Full board, no winner.
    Draw,
}

impl Outcome {
    /// True for wins and draws.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::Won { mark, .. } => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a board as won, drawn or undecided.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(pattern) = winning_pattern(board) {
        if let Some(mark) = board.get(pattern.cells()[0]).mark() {
            return Outcome::Won { mark, pattern };
        }
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_undecided() {
        assert_eq!(evaluate(&Board::new()), Outcome::Undecided);
    }

    #[test]
    fn test_evaluate_win_reports_pattern() {
        let board: Board = "OOO|XX_|X__".parse().unwrap();
        match evaluate(&board) {
            Outcome::Won { mark, pattern } => {
                assert_eq!(mark, Mark::O);
                assert_eq!(pattern, WIN_PATTERNS[0]);
            }
            other => panic!("expected a win, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_draw() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert!(evaluate(&board).is_terminal());
    }
}
