//! Board analysis for the `analyze` command.

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::instrument;
use unbeatable_tictactoe::rules::evaluate;
use unbeatable_tictactoe::search::pick_best;
use unbeatable_tictactoe::{Board, Mark, Position, ScoredMove, SearchStats, Searcher};

/// Scores of every candidate move and the one the computer would play.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// The analyzed board.
    pub board: Board,
    /// The mark the computer plays.
    pub computer: Mark,
    /// Every empty cell with its minimax score, ascending by index.
    pub moves: Vec<ScoredMove>,
    /// The selected move.
    pub best: Position,
    /// Search counters.
    pub stats: SearchStats,
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board.display())?;
        writeln!(f)?;
        writeln!(f, "Computer plays {}", self.computer)?;
        for scored in &self.moves {
            let marker = if scored.position == self.best { " <- best" } else { "" };
            writeln!(
                f,
                "  {} ({:>13}): {:>3}{}",
                scored.position.to_index() + 1,
                scored.position.label(),
                scored.score,
                marker
            )?;
        }
        write!(f, "Searched {} nodes", self.stats.nodes)
    }
}

/// Analyzes `board` for `computer`, defaulting to the side to move.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, computer: Option<Mark>) -> Result<Analysis> {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        bail!("Board {} is already decided: {}", board, outcome);
    }

    let computer = computer.unwrap_or_else(|| board.next_to_move());
    let mut searcher = Searcher::for_computer(computer);
    let moves = searcher.scored_moves(board);
    let Some(best) = pick_best(&moves) else {
        bail!("No empty cell on {}", board);
    };

    Ok(Analysis {
        board: *board,
        computer,
        moves,
        best: best.position,
        stats: searcher.stats(),
    })
}
