//! Unbeatable tic-tac-toe - pure game logic.
//!
//! A human plays against a computer opponent that searches the complete
//! game tree before every move and therefore never loses.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid of [`Square`]s, addressed by [`Position`]
//! - **Rules**: pure win/draw evaluation over a board snapshot
//! - **Search**: depth-adjusted minimax and the move selector built on it
//! - **Controller**: the match state machine and the session [`ScoreTally`]
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{Mark, MatchController, MatchStatus, Position};
//!
//! let mut controller = MatchController::new();
//! controller.choose_mark(Mark::X);
//! controller.apply_human_move(Position::TopLeft);
//!
//! // The computer has already answered.
//! assert_eq!(controller.board().empty_positions().len(), 7);
//! assert_eq!(controller.status(), MatchStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod audit;
mod controller;
mod error;
mod position;
pub mod rules;
mod score;
pub mod search;
mod types;

pub use action::Move;
pub use audit::{AuditReport, audit_all_lines};
pub use controller::{
    IgnoredReason, MatchController, MatchSnapshot, MatchState, MatchStatus, MoveResponse,
};
pub use error::ParseError;
pub use position::Position;
pub use rules::{Outcome, WinPattern};
pub use score::ScoreTally;
pub use search::{ScoredMove, SearchStats, Searcher, best_move, minimax};
pub use types::{Board, Mark, Square};
