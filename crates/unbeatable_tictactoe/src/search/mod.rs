//! Exhaustive adversarial search.
//!
//! The game tree of 3x3 tic-tac-toe is small enough to search completely
//! before every move, so there is no pruning, no depth limit and no
//! transposition table. Scores are from the computer's point of view:
//!
//! - computer wins: `10 - depth`
//! - human wins: `depth - 10`
//! - draw: `0`
//!
//! The depth term makes the computer take the fastest win and put off an
//! unavoidable loss as long as possible.
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{Board, Mark, Position, best_move};
//!
//! let board: Board = "XX_|OO_|___".parse().unwrap();
//! assert_eq!(best_move(&board, Mark::O, Mark::X), Some(Position::MiddleRight));
//! ```

mod minimax;
mod selector;

pub use minimax::{LOSS_SCORE, WIN_SCORE, minimax};
pub use selector::{ScoredMove, best_move, pick_best, scored_moves};

use super::Mark;
use serde::{Deserialize, Serialize};

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, terminal and interior.
    pub nodes: u64,
    /// Nodes that ended in a win, loss or draw.
    pub terminal_nodes: u64,
}

/// Minimax searcher bound to a computer/human mark assignment.
#[derive(Debug, Clone)]
pub struct Searcher {
    computer: Mark,
    human: Mark,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher playing `computer` against `human`.
    pub fn new(computer: Mark, human: Mark) -> Self {
        debug_assert_ne!(computer, human, "computer and human need distinct marks");
        Self {
            computer,
            human,
            stats: SearchStats::default(),
        }
    }

    /// Creates a searcher for `computer` against its opponent.
    pub fn for_computer(computer: Mark) -> Self {
        Self::new(computer, computer.opponent())
    }

    /// The mark this searcher maximizes for.
    pub fn computer(&self) -> Mark {
        self.computer
    }

    /// The mark this searcher minimizes for.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Statistics accumulated since creation or the last [`reset_stats`](Self::reset_stats).
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Clears the accumulated statistics.
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }
}
