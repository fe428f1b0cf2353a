//! Registry of named game sessions

use crate::ai;
use crate::board::{Position, Token};
use crate::command::Command;
use crate::config::GameConfig;
use crate::error::{HexError, Result};
use crate::game::{Controller, HexGame, Player, Seat};

/// Name of the session created at startup
pub const DEFAULT_GAME_NAME: &str = "Prime";

/// Outcome of `switch_game`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The active session changed
    Switched,
    /// The requested session was already active; nothing changed
    AlreadyActive,
}

/// One line of `list-games`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub name: String,
    pub moves: usize,
}

/// Owns every session of a run and tracks the active one
#[derive(Debug)]
pub struct GameManager {
    config: GameConfig,
    /// Seeds for every new session; each session receives clones
    templates: [Player; 2],
    /// Registration order
    sessions: Vec<HexGame>,
    active: usize,
}

impl GameManager {
    /// Validate `config` and open the default session
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let templates = [
            Player::human(config.first_player.clone(), Token::A),
            Player::new(config.second_player.clone(), Token::B, config.second_controller()),
        ];
        let first = HexGame::new(DEFAULT_GAME_NAME, config.size, templates.clone());

        tracing::debug!(size = config.size, "game manager created");
        Ok(Self {
            config,
            templates,
            sessions: vec![first],
            active: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn auto_print(&self) -> bool {
        self.config.auto_print
    }

    pub fn current_game(&self) -> &HexGame {
        &self.sessions[self.active]
    }

    pub fn current_game_mut(&mut self) -> &mut HexGame {
        &mut self.sessions[self.active]
    }

    pub fn current_player(&self) -> &Player {
        self.current_game().current_player()
    }

    /// Look up a session by name
    pub fn game(&self, name: &str) -> Option<&HexGame> {
        self.sessions.iter().find(|g| g.name() == name)
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.sessions.iter().position(|g| g.name() == name)
    }

    /// Register a new session and make it active
    pub fn add_new_game(&mut self, name: &str) -> Result<()> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(HexError::InvalidGameName);
        }
        if self.position_of(name).is_some() {
            return Err(HexError::GameAlreadyExists(name.to_string()));
        }

        self.sessions
            .push(HexGame::new(name, self.config.size, self.templates.clone()));
        self.active = self.sessions.len() - 1;
        tracing::debug!(game = name, "session created");
        Ok(())
    }

    /// Activate an existing session
    pub fn switch_game(&mut self, name: &str) -> Result<SwitchOutcome> {
        let index = self
            .position_of(name)
            .ok_or_else(|| HexError::GameNotFound(name.to_string()))?;
        if index == self.active {
            return Ok(SwitchOutcome::AlreadyActive);
        }
        self.active = index;
        tracing::debug!(game = name, "session switched");
        Ok(SwitchOutcome::Switched)
    }

    /// Move of `seat` in the active session, `skip` steps back
    pub fn last_move_for_player(&self, seat: Seat, skip: usize) -> Option<Position> {
        self.current_game().last_move_for(seat, skip)
    }

    /// Sessions still in progress, in registration order
    pub fn game_list(&self) -> Vec<GameSummary> {
        self.sessions
            .iter()
            .filter(|g| g.is_active())
            .map(|g| GameSummary {
                name: g.name().to_string(),
                moves: g.move_count(),
            })
            .collect()
    }

    /// Controller of the player on turn in the active session
    pub fn current_controller(&self) -> Controller {
        self.current_player().controller()
    }

    /// Ask the AI on turn for its command
    ///
    /// `None` when the player on turn is human or the session is over.
    pub fn next_ai_command(&self) -> Option<Command> {
        let game = self.current_game();
        if !game.is_active() {
            return None;
        }
        ai::next_command(self.current_controller(), game)
    }
}
