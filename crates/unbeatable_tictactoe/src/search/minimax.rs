//! Depth-adjusted minimax.

use super::Searcher;
use crate::rules::is_winning_for;
use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// Base score of a computer win, before the depth penalty.
pub const WIN_SCORE: i32 = 10;

/// Base score of a human win, before the depth bonus.
pub const LOSS_SCORE: i32 = -10;

impl Searcher {
    /// Value of optimal play from `board`.
    ///
    /// `maximizing` is true when the computer is next to move. The caller's
    /// board is never touched; exploration happens on a private copy.
    #[instrument(skip(self, board), fields(board = %board, computer = %self.computer))]
    pub fn minimax(&mut self, board: &Board, depth: i32, maximizing: bool) -> i32 {
        let mut scratch = *board;
        self.search(&mut scratch, depth, maximizing)
    }

    /// Recursive step. Every placement is undone before returning, so
    /// `board` leaves this call exactly as it came in.
    pub(super) fn search(&mut self, board: &mut Board, depth: i32, maximizing: bool) -> i32 {
        self.stats.nodes += 1;

        if let Some(score) = self.terminal_score(board, depth) {
            self.stats.terminal_nodes += 1;
            return score;
        }

        let (mark, mut best): (Mark, i32) = if maximizing {
            (self.computer, i32::MIN)
        } else {
            (self.human, i32::MAX)
        };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(mark));
            let score = self.search(board, depth + 1, !maximizing);
            board.set(pos, Square::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    fn terminal_score(&self, board: &Board, depth: i32) -> Option<i32> {
        if is_winning_for(board, self.computer) {
            Some(WIN_SCORE - depth)
        } else if is_winning_for(board, self.human) {
            Some(depth + LOSS_SCORE)
        } else if board.is_full() {
            Some(0)
        } else {
            None
        }
    }
}

/// Value of optimal play from `board` with `computer` as the maximizer.
///
/// Convenience wrapper over [`Searcher::minimax`] for one-off queries.
pub fn minimax(board: &Board, depth: i32, maximizing: bool, computer: Mark) -> i32 {
    Searcher::for_computer(computer).minimax(board, depth, maximizing)
}
