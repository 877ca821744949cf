//! Root move selection.

use super::Searcher;
use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A candidate move with the minimax value of playing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The candidate cell.
    pub position: Position,
    /// Value of optimal play after the computer takes `position`.
    pub score: i32,
}

impl Searcher {
    /// Scores every empty cell in ascending index order.
    #[instrument(skip(self, board), fields(board = %board, computer = %self.computer))]
    pub fn scored_moves(&mut self, board: &Board) -> Vec<ScoredMove> {
        let mut scratch = *board;
        let mut scored = Vec::new();

        for position in Position::ALL {
            if !scratch.is_empty(position) {
                continue;
            }
            scratch.set(position, Square::Occupied(self.computer));
            let score = self.search(&mut scratch, 0, false);
            scratch.set(position, Square::Empty);
            scored.push(ScoredMove { position, score });
        }

        scored
    }

    /// Picks the move with the strictly greatest score.
    ///
    /// Ties go to the lowest index. Returns `None` only for a full board,
    /// which callers must never ask about.
    #[instrument(skip(self, board), fields(board = %board, computer = %self.computer))]
    pub fn best_move(&mut self, board: &Board) -> Option<Position> {
        let best = pick_best(&self.scored_moves(board));

        debug!(
            chosen = ?best.map(|b| b.position),
            score = ?best.map(|b| b.score),
            nodes = self.stats.nodes,
            "Move selected"
        );
        best.map(|b| b.position)
    }
}

/// The first candidate with the strictly greatest score.
///
/// Given [`Searcher::scored_moves`] output this is the move
/// [`Searcher::best_move`] plays, without searching again.
pub fn pick_best(moves: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for &candidate in moves {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best
}

/// Best cell for `computer` to play on `board` against `human`.
pub fn best_move(board: &Board, computer: Mark, human: Mark) -> Option<Position> {
    Searcher::new(computer, human).best_move(board)
}

/// Every empty cell scored for `computer` against `human`.
pub fn scored_moves(board: &Board, computer: Mark, human: Mark) -> Vec<ScoredMove> {
    Searcher::new(computer, human).scored_moves(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "XX_|OO_|___".parse().unwrap();
        assert_eq!(best_move(&board, Mark::O, Mark::X), Some(Position::MiddleRight));
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        // X threatens the top row; O has nothing of its own.
        let board: Board = "XX_|_O_|___".parse().unwrap();
        assert_eq!(best_move(&board, Mark::O, Mark::X), Some(Position::TopRight));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX|OXO|OXO".parse().unwrap();
        assert_eq!(best_move(&board, Mark::X, Mark::O), None);
        assert!(scored_moves(&board, Mark::X, Mark::O).is_empty());
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // Every opening move draws, so the first cell wins the tie.
        assert_eq!(
            best_move(&Board::new(), Mark::X, Mark::O),
            Some(Position::TopLeft)
        );
    }

    #[test]
    fn test_pick_best_keeps_first_of_equal_scores() {
        let moves = [
            ScoredMove { position: Position::TopCenter, score: -9 },
            ScoredMove { position: Position::MiddleLeft, score: 0 },
            ScoredMove { position: Position::Center, score: 0 },
        ];
        assert_eq!(pick_best(&moves).map(|m| m.position), Some(Position::MiddleLeft));
        assert_eq!(pick_best(&[]), None);
    }

    #[test]
    fn test_pick_best_agrees_with_best_move() {
        let board: Board = "X__|_O_|__X".parse().unwrap();
        let moves = scored_moves(&board, Mark::O, Mark::X);
        assert_eq!(
            pick_best(&moves).map(|m| m.position),
            best_move(&board, Mark::O, Mark::X)
        );
    }

    #[test]
    fn test_scored_moves_ascending_and_only_empty() {
        let board: Board = "X__|_O_|__X".parse().unwrap();
        let scored = scored_moves(&board, Mark::O, Mark::X);
        let cells: Vec<usize> = scored.iter().map(|s| s.position.to_index()).collect();
        assert_eq!(cells, vec![1, 2, 3, 5, 6, 7]);
    }
}
