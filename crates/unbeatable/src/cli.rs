//! Command-line interface for unbeatable.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unbeatable_tictactoe::{Board, Mark};

/// Unbeatable - tic-tac-toe against a computer that searches every line
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Mark to play (x or o); X moves first
        #[arg(short, long)]
        mark: Option<Mark>,

        /// Path to the play configuration file
        #[arg(short, long, default_value = "unbeatable.toml")]
        config: PathBuf,
    },

    /// Score every move available to the computer on a board
    Analyze {
        /// Board in row-major order, e.g. "XX_|OO_|___" (`_`, `.` or `-` for empty)
        #[arg(short, long)]
        board: Board,

        /// Mark the computer plays (defaults to the side to move)
        #[arg(long)]
        computer: Option<Mark>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play every possible human line against the computer and tally results
    Audit {
        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_mark() {
        let cli = Cli::try_parse_from(["unbeatable", "play", "--mark", "o"]).unwrap();
        match cli.command {
            Command::Play { mark, config } => {
                assert_eq!(mark, Some(Mark::O));
                assert_eq!(config, PathBuf::from("unbeatable.toml"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_analyze_board() {
        let cli =
            Cli::try_parse_from(["unbeatable", "analyze", "--board", "XX_|OO_|___"]).unwrap();
        match cli.command {
            Command::Analyze {
                board,
                computer,
                json,
            } => {
                assert_eq!(board.count(Mark::X), 2);
                assert_eq!(computer, None);
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_board() {
        assert!(Cli::try_parse_from(["unbeatable", "analyze", "--board", "XXX"]).is_err());
    }
}
