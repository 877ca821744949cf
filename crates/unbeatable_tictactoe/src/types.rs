//! Core domain types for tic-tac-toe.

use super::error::ParseError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// The mark that opens every match.
    pub const FIRST: Mark = Mark::X;

    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol for display.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Mark {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Mark::X),
            "o" | "O" => Ok(Mark::O),
            other => Err(ParseError::new(format!("Unknown mark: {:?}", other))),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Anything that wants to explore
/// hypothetical moves takes its own copy.
///
/// Deserialization applies the same mark-count check as parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "BoardSquares")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    ///
    /// Mark counts are not checked; use [`Board::try_from_squares`] for
    /// boards that must be reachable in play.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Builds a board, rejecting mark counts that differ by more than one.
    pub fn try_from_squares(squares: [Square; 9]) -> Result<Self, ParseError> {
        let board = Self { squares };
        if !board.is_balanced() {
            return Err(ParseError::new(format!(
                "Unreachable board: {} X marks vs {} O marks",
                board.count(Mark::X),
                board.count(Mark::O)
            )));
        }
        Ok(board)
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns the empty positions in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Whose turn it is, judged from mark counts (X opens).
    pub fn next_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// True when the mark counts differ by at most one.
    pub fn is_balanced(&self) -> bool {
        self.count(Mark::X).abs_diff(self.count(Mark::O)) <= 1
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based cell number so the grid doubles
    /// as an input legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => char::from_digit((pos + 1) as u32, 10).unwrap_or('?'),
                    Square::Occupied(mark) => mark.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            let c = match square {
                Square::Empty => '_',
                Square::Occupied(mark) => mark.symbol(),
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `_`, `.`, `-` are empty. Whitespace,
    /// `|` and `,` are ignored so `"XX_|OO_|___"` is accepted.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            match c {
                'x' | 'X' => squares.push(Square::Occupied(Mark::X)),
                'o' | 'O' => squares.push(Square::Occupied(Mark::O)),
                '_' | '.' | '-' => squares.push(Square::Empty),
                '|' | ',' => {}
                c if c.is_whitespace() => {}
                other => {
                    return Err(ParseError::new(format!(
                        "Unexpected character {:?} in board",
                        other
                    )));
                }
            }
        }

        let squares: [Square; 9] = squares.try_into().map_err(|v: Vec<Square>| {
            ParseError::new(format!("Board needs 9 cells, found {}", v.len()))
        })?;

        Board::try_from_squares(squares)
    }
}

#[derive(Deserialize)]
struct BoardSquares {
    squares: [Square; 9],
}

impl TryFrom<BoardSquares> for Board {
    type Error = ParseError;

    fn try_from(raw: BoardSquares) -> Result<Self, Self::Error> {
        Board::try_from_squares(raw.squares)
    }
}
