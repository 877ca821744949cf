//! Unbeatable - tic-tac-toe CLI.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable::{Cli, Command, PlayConfig, analyze, run_session};
use unbeatable_tictactoe::{Board, Mark, audit_all_lines};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play { mark, config } => run_play(mark, config).await,
        Command::Analyze {
            board,
            computer,
            json,
        } => run_analyze(board, computer, json),
        Command::Audit { json } => run_audit(json),
    }
}

fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,unbeatable=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive match on stdin/stdout
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(mark: Option<Mark>, config_path: PathBuf) -> Result<()> {
    let config = PlayConfig::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?
        .with_default_mark(mark);
    info!(?config, "Starting terminal session");

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run_session(config, stdin, stdout).await?;
    Ok(())
}

/// Print move scores for a board
#[instrument(skip(board), fields(board = %board))]
fn run_analyze(board: Board, computer: Option<Mark>, json: bool) -> Result<()> {
    let analysis = analyze(&board, computer)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", analysis);
    }
    Ok(())
}

/// Exhaustively check that the computer never loses
#[instrument]
fn run_audit(json: bool) -> Result<()> {
    let reports = [audit_all_lines(Mark::X), audit_all_lines(Mark::O)];
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report);
        }
    }

    if reports.iter().all(|r| r.computer_never_loses()) {
        Ok(())
    } else {
        anyhow::bail!("The computer lost at least one line")
    }
}
