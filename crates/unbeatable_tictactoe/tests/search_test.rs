//! Tests for the minimax search and move selector.

use std::collections::HashSet;
use unbeatable_tictactoe::rules::evaluate;
use unbeatable_tictactoe::search::scored_moves;
use unbeatable_tictactoe::{Board, Mark, Position, Searcher, Square, best_move, minimax};

/// Every board reachable from the empty board that is not yet decided.
fn reachable_open_boards() -> HashSet<Board> {
    fn walk(board: Board, seen: &mut HashSet<Board>) {
        if evaluate(&board).is_terminal() || !seen.insert(board) {
            return;
        }
        let mark = board.next_to_move();
        for pos in board.empty_positions() {
            let mut next = board;
            next.set(pos, Square::Occupied(mark));
            walk(next, seen);
        }
    }

    let mut seen = HashSet::new();
    walk(Board::new(), &mut seen);
    seen
}

#[test]
fn test_takes_winning_cell_on_middle_row() {
    let board: Board = "XX_|OO_|___".parse().unwrap();
    let chosen = best_move(&board, Mark::O, Mark::X).unwrap();
    assert_eq!(chosen.to_index(), 5);
}

#[test]
fn test_finds_drawing_reply_against_opposite_corners() {
    let board: Board = "X__|_O_|__X".parse().unwrap();
    let chosen = best_move(&board, Mark::O, Mark::X).unwrap();

    // An edge holds the draw; either free corner loses to a fork.
    assert_eq!(chosen, Position::TopCenter);
    let scored = scored_moves(&board, Mark::O, Mark::X);
    let score_of = |pos: Position| scored.iter().find(|s| s.position == pos).unwrap().score;
    assert_eq!(score_of(chosen), 0);
    assert!(score_of(Position::TopRight) < 0);
    assert!(score_of(Position::BottomLeft) < 0);

    let mut after = board;
    after.set(chosen, Square::Occupied(Mark::O));
    assert_eq!(minimax(&after, 0, false, Mark::O), 0);
}

#[test]
fn test_prefers_faster_win() {
    // O can win now at 5, or set up slower wins elsewhere.
    let board: Board = "XX_|OO_|X__".parse().unwrap();
    let scored = scored_moves(&board, Mark::O, Mark::X);
    let best = scored.iter().max_by_key(|s| s.score).unwrap();
    assert_eq!(best.position, Position::MiddleRight);
    assert_eq!(best.score, 10);
}

#[test]
fn test_prefers_slower_loss() {
    // O opened on an edge and is lost: X threatens the main diagonal now
    // and forks after the block. Blocking still delays the loss by two plies.
    let board: Board = "XO_|_X_|___".parse().unwrap();
    let chosen = best_move(&board, Mark::O, Mark::X).unwrap();
    assert_eq!(chosen, Position::BottomRight);

    let scored = scored_moves(&board, Mark::O, Mark::X);
    let score_of = |pos: Position| scored.iter().find(|s| s.position == pos).unwrap().score;
    assert_eq!(score_of(chosen), -7);
    assert_eq!(score_of(Position::TopRight), -9);
    assert!(scored.iter().all(|s| s.score <= -7));
}

#[test]
fn test_selector_is_deterministic() {
    let board: Board = "_X_|_O_|___".parse().unwrap();
    let first = best_move(&board, Mark::X, Mark::O);
    for _ in 0..5 {
        assert_eq!(best_move(&board, Mark::X, Mark::O), first);
    }
}

#[test]
fn test_selector_never_picks_occupied_cell() {
    let mut searcher_x = Searcher::for_computer(Mark::X);
    let mut searcher_o = Searcher::for_computer(Mark::O);

    for board in reachable_open_boards() {
        let searcher = match board.next_to_move() {
            Mark::X => &mut searcher_x,
            Mark::O => &mut searcher_o,
        };
        let chosen = searcher
            .best_move(&board)
            .expect("open board must have a move");
        assert!(board.is_empty(chosen), "picked occupied {chosen} on {board}");
    }
}

#[test]
fn test_selector_does_not_mutate_board() {
    let board: Board = "X__|_O_|__X".parse().unwrap();
    let copy = board;
    let mut searcher = Searcher::for_computer(Mark::O);
    searcher.best_move(&board);
    searcher.scored_moves(&board);
    assert_eq!(board, copy);
    assert!(searcher.stats().nodes > 0);
}
