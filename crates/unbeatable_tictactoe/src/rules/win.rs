//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight three-in-a-row lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinPattern([Position; 3]);

impl WinPattern {
    /// The three cells of this line.
    pub fn cells(&self) -> [Position; 3] {
        self.0
    }

    /// The three cells as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// True when `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    fn is_filled_by(&self, board: &Board, mark: Mark) -> bool {
        self.0
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(mark))
    }
}

/// All winning lines: rows, then columns, then diagonals.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    // Rows
    WinPattern([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinPattern([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinPattern([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinPattern([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinPattern([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinPattern([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinPattern([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinPattern([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks whether `mark` owns a complete line.
pub fn is_winning_for(board: &Board, mark: Mark) -> bool {
    WIN_PATTERNS.iter().any(|p| p.is_filled_by(board, mark))
}

/// Returns the first complete line in enumeration order, if any.
#[instrument(skip(board), fields(board = %board))]
pub fn winning_pattern(board: &Board) -> Option<WinPattern> {
    WIN_PATTERNS.iter().copied().find(|pattern| {
        let [a, b, c] = pattern.cells();
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Returns the mark owning the first complete line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    winning_pattern(board).and_then(|p| board.get(p.cells()[0]).mark())
}
