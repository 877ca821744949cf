//! Tests for the match controller state machine.

use unbeatable_tictactoe::{
    IgnoredReason, Mark, MatchController, MatchStatus, MoveResponse, Position, audit_all_lines,
};

/// Plays the human's cells in order, skipping any the computer already took,
/// until the match ends.
fn play_out(controller: &mut MatchController, preferred: &[Position]) {
    for &pos in preferred {
        if controller.status() != MatchStatus::InProgress {
            return;
        }
        if controller.board().is_empty(pos) {
            controller.apply_human_move(pos);
        }
    }
    while controller.status() == MatchStatus::InProgress {
        let pos = controller.board().empty_positions()[0];
        controller.apply_human_move(pos);
    }
}

#[test]
fn test_computer_wins_against_careless_human() {
    let mut controller = MatchController::new();
    controller.choose_mark(Mark::X);

    // Human X: corner then edges that never block.
    controller.apply_human_move(Position::TopLeft);
    assert_eq!(controller.board().get(Position::Center).mark(), Some(Mark::O));
    play_out(
        &mut controller,
        &[Position::BottomCenter, Position::TopRight, Position::MiddleRight],
    );

    assert!(matches!(
        controller.status(),
        MatchStatus::ComputerWon | MatchStatus::Tied
    ));
    assert_eq!(controller.tally().human_wins(), 0);
    assert_eq!(controller.tally().total(), 1);
}

#[test]
fn test_terminal_state_ignores_moves() {
    let mut controller = MatchController::new();
    controller.choose_mark(Mark::O);
    play_out(&mut controller, &[]);
    // Computer X finishes the left column with cells still open.
    assert_eq!(controller.status(), MatchStatus::ComputerWon);
    assert_eq!(controller.board().to_string(), "XOOX__X__");

    let before = controller.snapshot();
    let free = controller.board().empty_positions()[0];
    assert_eq!(
        controller.apply_human_move(free),
        MoveResponse::Ignored(IgnoredReason::MatchOver)
    );
    assert_eq!(controller.snapshot(), before);
    assert_eq!(controller.to_move(), None);
}

#[test]
fn test_winning_pattern_reported_on_computer_win() {
    let mut controller = MatchController::new();
    controller.choose_mark(Mark::O);
    // Computer X opens top-left; a passive human lets it finish a line.
    play_out(&mut controller, &[]);
    assert_eq!(controller.status(), MatchStatus::ComputerWon);

    let pattern = controller.winning_pattern().unwrap();
    assert_eq!(
        pattern.cells(),
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
    );
    for cell in pattern.cells() {
        assert_eq!(controller.board().get(cell).mark(), Some(Mark::X));
    }
    assert_eq!(controller.snapshot().winning_pattern, Some(pattern));
}

#[test]
fn test_no_winning_pattern_while_in_progress() {
    let mut controller = MatchController::new();
    controller.choose_mark(Mark::X);
    controller.apply_human_move(Position::Center);
    assert_eq!(controller.status(), MatchStatus::InProgress);
    assert_eq!(controller.winning_pattern(), None);
}

#[test]
fn test_reset_match_preserves_tally_and_mark() {
    let mut controller = MatchController::new();
    controller.choose_mark(Mark::X);
    play_out(&mut controller, &[]);
    let tally = *controller.tally();
    assert_eq!(tally.total(), 1);

    assert!(controller.reset_match().is_applied());
    assert_eq!(controller.status(), MatchStatus::InProgress);
    assert_eq!(controller.human_mark(), Some(Mark::X));
    assert!(controller.history().is_empty());
    assert_eq!(controller.board().empty_positions().len(), 9);
    assert_eq!(*controller.tally(), tally);
}

#[test]
fn test_reset_match_mid_game_restarts_computer_opening() {
    let mut controller = MatchController::new();
    controller.choose_mark(Mark::O);
    controller.apply_human_move(Position::Center);

    let response = controller.reset_match();
    assert_eq!(
        response,
        MoveResponse::Applied {
            computer_reply: Some(Position::TopLeft)
        }
    );
    assert_eq!(controller.history().len(), 1);
    assert_eq!(controller.to_move(), Some(Mark::O));
}

#[test]
fn test_reset_score_zeroes_everything() {
    let mut controller = MatchController::new();
    for _ in 0..3 {
        if controller.status() == MatchStatus::AwaitingMarkChoice {
            controller.choose_mark(Mark::X);
        } else {
            controller.reset_match();
        }
        play_out(&mut controller, &[]);
    }
    assert_eq!(controller.tally().total(), 3);

    let status = controller.status();
    controller.reset_score();
    assert_eq!(controller.tally().human_wins(), 0);
    assert_eq!(controller.tally().computer_wins(), 0);
    assert_eq!(controller.tally().ties(), 0);
    assert_eq!(controller.status(), status);
}

#[test]
fn test_choose_mark_after_match_switches_sides() {
    let mut controller = MatchController::new();
    controller.choose_mark(Mark::X);
    play_out(&mut controller, &[]);

    let response = controller.choose_mark(Mark::O);
    assert!(response.is_applied());
    assert_eq!(controller.human_mark(), Some(Mark::O));
    assert_eq!(controller.computer_mark(), Some(Mark::X));
    assert_eq!(controller.board().count(Mark::X), 1);
}

#[test]
fn test_independent_controllers_do_not_share_state() {
    let mut a = MatchController::new();
    let b = MatchController::new();
    a.choose_mark(Mark::X);
    a.apply_human_move(Position::Center);
    assert_eq!(b.status(), MatchStatus::AwaitingMarkChoice);
    assert!(b.history().is_empty());
}

#[test]
fn test_snapshot_serializes() {
    let mut controller = MatchController::new();
    controller.choose_mark(Mark::X);
    controller.apply_human_move(Position::Center);
    let json = serde_json::to_string(&controller.snapshot()).unwrap();
    assert!(json.contains("\"status\":\"InProgress\""));
}

#[test]
fn test_computer_never_loses_as_o() {
    let report = audit_all_lines(Mark::X);
    assert!(report.lines > 0);
    assert_eq!(report.human_wins, 0, "losing lines: {:?}", report.losing_lines);
    assert_eq!(report.lines, report.computer_wins + report.ties);
}

#[test]
fn test_computer_never_loses_as_x() {
    let report = audit_all_lines(Mark::O);
    assert!(report.lines > 0);
    assert!(report.computer_never_loses());
}
