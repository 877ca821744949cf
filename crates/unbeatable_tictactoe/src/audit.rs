//! Exhaustive audit of the computer opponent.
//!
//! Plays every possible sequence of human moves against a fresh
//! [`MatchController`] and tallies how each line ends. The computer is
//! deterministic, so the human's choices alone span the whole space of
//! matches for one mark assignment.

use super::{Mark, MatchController, MatchStatus, Move};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// How every explored line ended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// The mark the human played.
    pub human: Option<Mark>,
    /// Complete matches explored.
    pub lines: u64,
    /// Lines the human won.
    pub human_wins: u64,
    /// Lines the computer won.
    pub computer_wins: u64,
    /// Lines that ended in a tie.
    pub ties: u64,
    /// Move sequences of every human win.
    pub losing_lines: Vec<Vec<Move>>,
}

impl AuditReport {
    /// True when no line ended in a human win.
    pub fn computer_never_loses(&self) -> bool {
        self.human_wins == 0
    }
}

impl std::fmt::Display for AuditReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let human = self.human.map_or('?', Mark::symbol);
        write!(
            f,
            "human as {}: {} lines, {} human wins, {} computer wins, {} ties",
            human, self.lines, self.human_wins, self.computer_wins, self.ties
        )
    }
}

/// Explores every human line with the human playing `human`.
#[instrument]
pub fn audit_all_lines(human: Mark) -> AuditReport {
    let mut controller = MatchController::new();
    controller.choose_mark(human);

    let mut report = AuditReport {
        human: Some(human),
        ..AuditReport::default()
    };
    explore(&controller, &mut report);

    if report.computer_never_loses() {
        info!(report = %report, "Audit complete");
    } else {
        warn!(report = %report, "Audit found human wins");
    }
    report
}

fn explore(controller: &MatchController, report: &mut AuditReport) {
    match controller.status() {
        MatchStatus::InProgress => {
            for position in controller.board().empty_positions() {
                let mut next = controller.clone();
                if next.apply_human_move(position).is_applied() {
                    explore(&next, report);
                }
            }
        }
        MatchStatus::HumanWon => {
            report.lines += 1;
            report.human_wins += 1;
            report.losing_lines.push(controller.history().to_vec());
        }
        MatchStatus::ComputerWon => {
            report.lines += 1;
            report.computer_wins += 1;
        }
        MatchStatus::Tied => {
            report.lines += 1;
            report.ties += 1;
        }
        MatchStatus::AwaitingMarkChoice => {}
    }
}
