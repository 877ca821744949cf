//! Unbeatable - terminal front end for unbeatable tic-tac-toe.
//!
//! # Architecture
//!
//! - **CLI**: clap command definitions
//! - **Config**: TOML play settings with environment overrides
//! - **Terminal**: line-based match loop around a [`MatchController`](unbeatable_tictactoe::MatchController)
//! - **Analysis**: scores every candidate move for a given board

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod cli;
mod config;
mod terminal;

pub use analysis::{Analysis, analyze};
pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig, THINK_DELAY_ENV};
pub use terminal::{Input, parse_input, run_session};
