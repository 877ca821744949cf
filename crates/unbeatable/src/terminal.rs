//! Line-based terminal session.
//!
//! Reads commands from any async line source and writes the board, status
//! and score to any async sink, so tests can drive a whole session from a
//! byte slice.

use crate::config::PlayConfig;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument};
use unbeatable_tictactoe::{
    Mark, MatchController, MatchStatus, MoveResponse, Position, ScoreTally,
};

const HELP: &str = "\
Commands:
  1-9 or a label (e.g. center, top-left)  place your mark
  x | o                                   start a match with that mark
  reset                                   restart the match, same mark
  score                                   show the score
  reset-score                             zero the score
  help                                    show this help
  quit                                    leave";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the human's mark.
    Cell(Position),
    /// Start a match with this mark.
    Choose(Mark),
    /// Restart the current match.
    Reset,
    /// Print the tally.
    Score,
    /// Zero the tally.
    ResetScore,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Parses one line of input. Returns `None` for anything unrecognized.
pub fn parse_input(line: &str) -> Option<Input> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => None,
        "x" => Some(Input::Choose(Mark::X)),
        "o" => Some(Input::Choose(Mark::O)),
        "reset" | "new" | "r" => Some(Input::Reset),
        "score" | "s" => Some(Input::Score),
        "reset-score" | "reset score" => Some(Input::ResetScore),
        "help" | "h" | "?" => Some(Input::Help),
        "quit" | "q" | "exit" => Some(Input::Quit),
        _ => Position::from_cell_or_label(trimmed).map(Input::Cell),
    }
}

struct Session<W> {
    controller: MatchController,
    config: PlayConfig,
    out: W,
}

impl<W: AsyncWrite + Unpin> Session<W> {
    async fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        self.out
            .write_all(text.as_ref().as_bytes())
            .await
            .context("Failed to write to terminal")?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await?;
        Ok(())
    }

    async fn show_board(&mut self) -> Result<()> {
        let board = self.controller.board().display();
        self.say(format!("\n{}\n", board)).await
    }

    /// Reveals the computer's move after the configured pause.
    async fn reveal_computer_move(&mut self, reply: Option<Position>) -> Result<()> {
        let Some(position) = reply else {
            return Ok(());
        };
        self.say("Computer is thinking...").await?;
        tokio::time::sleep(self.config.think_delay()).await;
        self.say(format!(
            "Computer plays {} ({})",
            position.to_index() + 1,
            position.label()
        ))
        .await
    }

    async fn report_status(&mut self) -> Result<()> {
        self.show_board().await?;
        let status = self.controller.status();
        match status {
            MatchStatus::InProgress => {
                let human = self.controller.human_mark().map_or('?', Mark::symbol);
                self.say(format!("You are {}. Your turn!", human)).await?;
            }
            MatchStatus::AwaitingMarkChoice => {
                self.say(status.to_string()).await?;
            }
            MatchStatus::HumanWon | MatchStatus::ComputerWon | MatchStatus::Tied => {
                self.say(status.to_string()).await?;
                if let Some(pattern) = self.controller.winning_pattern() {
                    let cells: Vec<&str> = pattern.cells().iter().map(|p| p.label()).collect();
                    self.say(format!("Winning line: {}", cells.join(", "))).await?;
                }
                if *self.config.show_scores_each_match() {
                    let tally = self.controller.tally().to_string();
                    self.say(tally).await?;
                }
                self.say("Type 'reset' to play again, or 'x' / 'o' to switch sides.")
                    .await?;
            }
        }
        Ok(())
    }

    async fn handle_response(&mut self, response: MoveResponse) -> Result<()> {
        match response {
            MoveResponse::Applied { computer_reply } => {
                self.reveal_computer_move(computer_reply).await?;
                self.report_status().await
            }
            MoveResponse::Ignored(reason) => self.say(format!("Ignored: {}", reason)).await,
        }
    }

    /// Handles one input. Returns `false` when the session should end.
    #[instrument(skip(self))]
    async fn handle(&mut self, input: Input) -> Result<bool> {
        match input {
            Input::Cell(position) => {
                let response = self.controller.apply_human_move(position);
                self.handle_response(response).await?;
            }
            Input::Choose(mark) => {
                let response = self.controller.choose_mark(mark);
                self.handle_response(response).await?;
            }
            Input::Reset => {
                let response = self.controller.reset_match();
                self.handle_response(response).await?;
            }
            Input::Score => {
                let tally = self.controller.tally().to_string();
                self.say(tally).await?;
            }
            Input::ResetScore => {
                self.controller.reset_score();
                let tally = self.controller.tally().to_string();
                self.say(format!("Score reset. {}", tally)).await?;
            }
            Input::Help => self.say(HELP).await?,
            Input::Quit => return Ok(false),
        }
        Ok(true)
    }
}

/// Runs an interactive session until `quit` or end of input.
///
/// Returns the final tally.
#[instrument(skip_all)]
pub async fn run_session<R, W>(config: PlayConfig, input: R, output: W) -> Result<ScoreTally>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session {
        controller: MatchController::new(),
        config,
        out: output,
    };
    info!("Session started");

    session.say("Unbeatable tic-tac-toe. Type 'help' for commands.").await?;
    match *session.config.default_mark() {
        Some(mark) => {
            session.handle(Input::Choose(mark)).await?;
        }
        None => session.say("Choose your mark: x (moves first) or o").await?,
    }

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let Some(parsed) = parse_input(&line) else {
            debug!(line = %line, "Unrecognized input");
            session
                .say(format!("Unrecognized input {:?}. Type 'help'.", line.trim()))
                .await?;
            continue;
        };
        if !session.handle(parsed).await? {
            break;
        }
    }

    let tally = *session.controller.tally();
    session.say(format!("Final score: {}", tally)).await?;
    info!(tally = %tally, "Session ended");
    Ok(tally)
}
