//! Interactive shell - reads commands and drives the game manager
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - input loop
//! - Level 2: execute_line() - parse and report
//! - Level 3: execute() - one handler per command
//! - Level 4: output formatting helpers

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use anyhow::{bail, Result};

use hex_core::{
    Command, GameManager, HexError, Position, SwitchOutcome, DEFAULT_GAME_NAME,
};

/// Prefix for every message on the error stream
const ERROR_PREFIX: &str = "Error: ";

/// Why a command was not carried out
#[derive(Debug, thiserror::Error)]
enum Rejection {
    #[error(transparent)]
    Game(#[from] HexError),

    #[error("Switch to current game not allowed.")]
    SwitchToCurrent,
}

/// Text loop around a `GameManager`
///
/// Results go to `out`, failures to `err`. When the player on turn is an AI
/// its command is executed instead of reading a line.
pub struct Shell<R, W, E> {
    manager: GameManager,
    input: R,
    out: W,
    err: E,
    running: bool,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    pub fn new(manager: GameManager, input: R, out: W, err: E) -> Self {
        Self {
            manager,
            input,
            out,
            err,
            running: false,
        }
    }

    pub fn manager(&self) -> &GameManager {
        &self.manager
    }

    // ========================================================================
    // LEVEL 1 - INPUT LOOP
    // ========================================================================

    /// Greet, then execute commands until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        self.running = true;
        let greeting = self.session_banner(DEFAULT_GAME_NAME);
        self.out.write_all(greeting.as_bytes())?;

        while self.running {
            if let Some(cmd) = self.manager.next_ai_command() {
                let line = cmd.to_string();
                tracing::debug!(%line, "ai command");
                if !self.execute_line(&line)? {
                    bail!("AI produced a rejected command: {line}");
                }
                continue;
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input");
                break;
            }
            self.execute_line(&line)?;
        }

        self.out.flush()?;
        Ok(())
    }

    // ========================================================================
    // LEVEL 2 - PARSE AND REPORT
    // ========================================================================

    /// Execute one line; returns false if it was rejected
    pub fn execute_line(&mut self, line: &str) -> Result<bool> {
        if line.trim().is_empty() {
            return Ok(true);
        }

        let outcome = Command::parse(line)
            .map_err(Rejection::from)
            .and_then(|cmd| self.execute(cmd));
        match outcome {
            Ok(text) => {
                self.out.write_all(text.as_bytes())?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.err, "{ERROR_PREFIX}{e}")?;
                Ok(false)
            }
        }
    }

    // ========================================================================
    // LEVEL 3 - COMMAND HANDLERS
    // ========================================================================

    fn execute(&mut self, cmd: Command) -> Result<String, Rejection> {
        match cmd {
            Command::Place { x, y } => Ok(self.place(Position::new(x, y))?),
            Command::Swap => Ok(self.swap()?),
            Command::NewGame(name) => {
                self.manager.add_new_game(&name)?;
                Ok(self.session_banner(&name))
            }
            Command::SwitchGame(name) => match self.manager.switch_game(&name)? {
                SwitchOutcome::Switched => Ok(format!("Switched to {name}\n")),
                SwitchOutcome::AlreadyActive => Err(Rejection::SwitchToCurrent),
            },
            Command::History(count) => Ok(self.history(count)?),
            Command::ListGames => Ok(self.list_games()),
            Command::Print => Ok(self.manager.current_game().board().render()),
            Command::Help => Ok(Command::HELP
                .iter()
                .map(|line| format!("{line}\n"))
                .collect()),
            Command::Quit => {
                self.running = false;
                Ok(String::new())
            }
        }
    }

    fn place(&mut self, pos: Position) -> Result<String, HexError> {
        let mover = self.manager.current_player().clone();
        self.manager.current_game_mut().place_token(pos)?;

        let mut text = String::new();
        if mover.controller().is_ai() {
            let _ = writeln!(text, "{} places at {}", mover.name(), pos);
        }

        let game = self.manager.current_game();
        if let Some(winner) = game.winning_player() {
            let _ = writeln!(text, "{} wins!", winner.name());
            if let Some(path) = game.board().win_path_representation(winner.token()) {
                text.push_str(&path);
            }
            return Ok(text);
        }

        text.push_str(&self.turn_report());
        Ok(text)
    }

    fn swap(&mut self) -> Result<String, HexError> {
        let game = self.manager.current_game_mut();
        let name = game.current_player().name().to_string();
        game.swap_tokens()?;

        Ok(format!("{name} swaps\n{}", self.turn_report()))
    }

    fn history(&self, count: usize) -> Result<String, HexError> {
        let game = self.manager.current_game();
        Ok(game
            .retrieve_recent_moves(count)?
            .into_iter()
            .map(|m| format!("{}: {}\n", game.player(m.seat).name(), m.position))
            .collect())
    }

    /// One "name: moves" line per session in progress; a blank line if none
    fn list_games(&self) -> String {
        let lines: Vec<String> = self
            .manager
            .game_list()
            .iter()
            .map(|g| format!("{}: {}", g.name, g.moves))
            .collect();
        format!("{}\n", lines.join("\n"))
    }

    // ========================================================================
    // LEVEL 4 - FORMATTING
    // ========================================================================

    /// "Welcome to <name>", the board if auto-print, and whose turn it is
    fn session_banner(&self, name: &str) -> String {
        format!("Welcome to {name}\n{}", self.turn_report())
    }

    /// The board if auto-print, then whose turn it is
    fn turn_report(&self) -> String {
        let mut text = String::new();
        if self.manager.auto_print() {
            text.push_str(&self.manager.current_game().board().render());
        }
        let _ = writeln!(text, "{}'s turn", self.manager.current_player().name());
        text
    }
}
