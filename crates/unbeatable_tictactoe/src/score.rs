//! Session score tally.

use serde::{Deserialize, Serialize};

/// Match results across one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    human_wins: u32,
    computer_wins: u32,
    ties: u32,
}

impl ScoreTally {
    /// Creates an all-zero tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches won by the human.
    pub fn human_wins(&self) -> u32 {
        self.human_wins
    }

    /// Matches won by the computer.
    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    /// Matches that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total matches recorded.
    pub fn total(&self) -> u32 {
        self.human_wins + self.computer_wins + self.ties
    }

    pub(crate) fn record_human_win(&mut self) {
        self.human_wins += 1;
    }

    pub(crate) fn record_computer_win(&mut self) {
        self.computer_wins += 1;
    }

    pub(crate) fn record_tie(&mut self) {
        self.ties += 1;
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} | Computer {} | Ties {}",
            self.human_wins, self.computer_wins, self.ties
        )
    }
}
