//! Match state machine.
//!
//! ```text
//! AwaitingMarkChoice --choose_mark--> InProgress --(terminal move)--> HumanWon | ComputerWon | Tied
//!                                        ^                                   |
//!                                        +------ choose_mark / reset_match --+
//! ```
//!
//! Input that does not fit the current state (a click on an occupied
//! cell, a click while the computer is to move, a move after the match
//! ended) is ignored. The UI may send stray input at any time and none of
//! it is an error.

use super::rules::{self, Outcome, WinPattern};
use super::search::Searcher;
use super::{Board, Mark, Move, Position, ScoreTally, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

static EMPTY_BOARD: Board = Board::new();

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchStatus {
    /// No mark has been chosen yet.
    #[default]
    AwaitingMarkChoice,
    /// Moves are being played.
    InProgress,
    /// The human completed a line.
    HumanWon,
    /// The computer completed a line.
    ComputerWon,
    /// Full board, no line.
    Tied,
}

impl MatchStatus {
    /// True once a match has ended.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            MatchStatus::HumanWon | MatchStatus::ComputerWon | MatchStatus::Tied
        )
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::AwaitingMarkChoice => write!(f, "Choose X or O to start"),
            MatchStatus::InProgress => write!(f, "In progress"),
            MatchStatus::HumanWon => write!(f, "You win!"),
            MatchStatus::ComputerWon => write!(f, "Computer wins!"),
            MatchStatus::Tied => write!(f, "It's a tie!"),
        }
    }
}

/// Why an input was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoredReason {
    /// No mark has been chosen, so there is no match to act on.
    #[display("No mark chosen yet")]
    NoMatch,
    /// The match is already running.
    #[display("A match is already in progress")]
    AlreadyInProgress,
    /// The match has ended.
    #[display("The match is over")]
    MatchOver,
    /// The computer is to move.
    #[display("Not your turn")]
    NotHumanTurn,
    /// The target cell holds a mark.
    #[display("{} is already taken", _0)]
    SquareOccupied(Position),
}

/// What an entry point did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResponse {
    /// The input was applied. `computer_reply` is the cell the computer
    /// took afterwards, if it got to move.
    Applied {
        /// The computer's answering move.
        computer_reply: Option<Position>,
    },
    /// The input did not fit the current state; nothing changed.
    Ignored(IgnoredReason),
}

impl MoveResponse {
    /// True when the input changed the match.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveResponse::Applied { .. })
    }
}

/// The state of one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    board: Board,
    human: Mark,
    computer: Mark,
    to_move: Mark,
    history: Vec<Move>,
}

impl MatchState {
    fn new(human: Mark) -> Self {
        Self {
            board: Board::new(),
            human,
            computer: human.opponent(),
            to_move: Mark::FIRST,
            history: Vec::new(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The human's mark.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// The computer's mark.
    pub fn computer(&self) -> Mark {
        self.computer
    }

    /// The mark whose turn it is (the last mover once the match ended).
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

/// Read-only view of a controller, for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Current board.
    pub board: Board,
    /// Current status.
    pub status: MatchStatus,
    /// The mark to move while the match is in progress.
    pub to_move: Option<Mark>,
    /// The human's mark, once chosen.
    pub human: Option<Mark>,
    /// The computer's mark, once chosen.
    pub computer: Option<Mark>,
    /// The line to highlight after a win.
    pub winning_pattern: Option<WinPattern>,
    /// Session tally.
    pub tally: ScoreTally,
    /// Moves of the current match.
    pub history: Vec<Move>,
}

/// Owns one session: the current match and the running score.
///
/// Every mutating entry point is synchronous. When the human's move hands
/// the turn to the computer, the computer's reply is searched and applied
/// before the call returns.
#[derive(Debug, Clone, Default)]
pub struct MatchController {
    state: Option<MatchState>,
    status: MatchStatus,
    tally: ScoreTally,
}

impl MatchController {
    /// Creates a controller waiting for the human to pick a mark.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────
    //  Observers
    // ─────────────────────────────────────────────────────────────

    /// Current board (empty before the first mark choice).
    pub fn board(&self) -> &Board {
        self.state.as_ref().map_or(&EMPTY_BOARD, |s| &s.board)
    }

    /// Current match status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// The mark to move, while a match is in progress.
    pub fn to_move(&self) -> Option<Mark> {
        match (&self.state, self.status) {
            (Some(state), MatchStatus::InProgress) => Some(state.to_move),
            _ => None,
        }
    }

    /// The human's mark, once chosen.
    pub fn human_mark(&self) -> Option<Mark> {
        self.state.as_ref().map(|s| s.human)
    }

    /// The computer's mark, once chosen.
    pub fn computer_mark(&self) -> Option<Mark> {
        self.state.as_ref().map(|s| s.computer)
    }

    /// The state of the current match, if one has started.
    pub fn match_state(&self) -> Option<&MatchState> {
        self.state.as_ref()
    }

    /// Moves of the current match.
    pub fn history(&self) -> &[Move] {
        self.state.as_ref().map_or(&[][..], |s| s.history.as_slice())
    }

    /// Session score.
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// The completed line, when the match ended in a win.
    pub fn winning_pattern(&self) -> Option<WinPattern> {
        match self.status {
            MatchStatus::HumanWon | MatchStatus::ComputerWon => {
                rules::winning_pattern(self.board())
            }
            _ => None,
        }
    }

    /// Serializable view of everything above.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            board: *self.board(),
            status: self.status,
            to_move: self.to_move(),
            human: self.human_mark(),
            computer: self.computer_mark(),
            winning_pattern: self.winning_pattern(),
            tally: self.tally,
            history: self.history().to_vec(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Entry points
    // ─────────────────────────────────────────────────────────────

    /// Starts a match with the human playing `mark`.
    ///
    /// Only accepted before the first match or after one has ended. X
    /// always opens, so choosing O makes the computer move at once.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn choose_mark(&mut self, mark: Mark) -> MoveResponse {
        if self.status == MatchStatus::InProgress {
            return self.ignore(IgnoredReason::AlreadyInProgress);
        }
        self.start(mark)
    }

    /// Places the human's mark on `position`.
    ///
    /// Ignored unless a match is in progress, it is the human's turn and
    /// the cell is empty.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn apply_human_move(&mut self, position: Position) -> MoveResponse {
        let Some(state) = self.state.as_ref() else {
            return self.ignore(IgnoredReason::NoMatch);
        };
        if self.status != MatchStatus::InProgress {
            return self.ignore(IgnoredReason::MatchOver);
        }
        if state.to_move != state.human {
            return self.ignore(IgnoredReason::NotHumanTurn);
        }
        if !state.board.is_empty(position) {
            return self.ignore(IgnoredReason::SquareOccupied(position));
        }

        let human = state.human;
        self.place(human, position);

        let computer_reply = if self.computer_to_move() {
            self.trigger_computer_move()
        } else {
            None
        };
        MoveResponse::Applied { computer_reply }
    }

    /// Clears the board and starts over with the same marks.
    ///
    /// Ignored until a mark has been chosen. The tally is kept.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn reset_match(&mut self) -> MoveResponse {
        let Some(human) = self.human_mark() else {
            return self.ignore(IgnoredReason::NoMatch);
        };
        self.start(human)
    }

    /// Zeroes the session score. The current match is untouched.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        self.tally.reset();
        info!("Score reset");
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    fn start(&mut self, human: Mark) -> MoveResponse {
        self.state = Some(MatchState::new(human));
        self.status = MatchStatus::InProgress;
        info!(human = %human, computer = %human.opponent(), "Match started");

        let computer_reply = if self.computer_to_move() {
            self.trigger_computer_move()
        } else {
            None
        };
        MoveResponse::Applied { computer_reply }
    }

    fn computer_to_move(&self) -> bool {
        self.status == MatchStatus::InProgress
            && self
                .state
                .as_ref()
                .is_some_and(|s| s.to_move == s.computer)
    }

    /// Searches for and applies the computer's move.
    #[instrument(skip(self))]
    fn trigger_computer_move(&mut self) -> Option<Position> {
        let state = self.state.as_ref()?;
        debug_assert!(self.computer_to_move(), "computer moved out of turn");

        let mut searcher = Searcher::new(state.computer, state.human);
        let Some(position) = searcher.best_move(&state.board) else {
            debug_assert!(false, "move selector invoked on a full board");
            error!(board = %state.board, "No move available for the computer");
            return None;
        };
        debug!(
            position = %position,
            nodes = searcher.stats().nodes,
            "Computer chose move"
        );

        let computer = state.computer;
        self.place(computer, position);
        Some(position)
    }

    /// Applies `mark` at `position`, then either ends the match or passes the turn.
    fn place(&mut self, mark: Mark, position: Position) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.board.set(position, Square::Occupied(mark));
        state.history.push(Move::new(mark, position));
        debug!(mark = %mark, position = %position, "Mark placed");

        match rules::evaluate(&state.board) {
            Outcome::Won { mark: winner, .. } if winner == state.human => {
                self.status = MatchStatus::HumanWon;
                self.tally.record_human_win();
            }
            Outcome::Won { .. } => {
                self.status = MatchStatus::ComputerWon;
                self.tally.record_computer_win();
            }
            Outcome::Draw => {
                self.status = MatchStatus::Tied;
                self.tally.record_tie();
            }
            Outcome::Undecided => {
                state.to_move = mark.opponent();
                return;
            }
        }
        info!(status = ?self.status, tally = %self.tally, "Match finished");
    }

    fn ignore(&self, reason: IgnoredReason) -> MoveResponse {
        debug!(reason = %reason, status = ?self.status, "Input ignored");
        MoveResponse::Ignored(reason)
    }
}
