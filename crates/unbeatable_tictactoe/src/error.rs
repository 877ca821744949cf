//! Parse error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error raised when text cannot be turned into a board, mark or position.
#[derive(Debug, Clone, Display, Error)]
#[display("Parse error: {} at {}:{}", message, file, line)]
pub struct ParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
