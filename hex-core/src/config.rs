//! Startup configuration shared by every session of a manager

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{HexError, Result};
use crate::game::Controller;

/// Reserved name selecting the mirror-move AI
pub const BOGO_AI_NAME: &str = "BogoAI";

/// Reserved name selecting the pathfinding AI
pub const HERO_AI_NAME: &str = "HeroAI";

/// Characters a player name may not contain
const FORBIDDEN_NAME_CHARS: &[char] = &[';', '\n', '\r'];

/// Board size, player names and output options
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Odd edge length of the board
    pub size: usize,
    /// Name of the player moving first
    pub first_player: String,
    /// Name of the second player, or one of the reserved AI names
    pub second_player: String,
    /// Print the board after every state-changing command
    #[serde(default)]
    pub auto_print: bool,
}

impl GameConfig {
    pub fn new(
        size: usize,
        first_player: impl Into<String>,
        second_player: impl Into<String>,
    ) -> Self {
        Self {
            size,
            first_player: first_player.into(),
            second_player: second_player.into(),
            auto_print: false,
        }
    }

    /// Enable auto-print
    pub fn with_auto_print(mut self, auto_print: bool) -> Self {
        self.auto_print = auto_print;
        self
    }

    /// Check size bounds and player names
    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_BOARD_SIZE || self.size > MAX_BOARD_SIZE || self.size % 2 != 1 {
            return Err(HexError::InvalidBoardSize(self.size));
        }
        if self.first_player == self.second_player {
            return Err(HexError::SameNames);
        }
        if controller_for(&self.first_player).is_ai() {
            return Err(HexError::FirstPlayerIsAi);
        }
        if self.first_player.is_empty() || self.second_player.is_empty() {
            return Err(HexError::EmptyName);
        }
        for name in [&self.first_player, &self.second_player] {
            if name.contains(FORBIDDEN_NAME_CHARS) {
                return Err(HexError::InvalidName(name.clone()));
            }
        }
        Ok(())
    }

    /// Controller of the second seat, picked by name
    pub fn second_controller(&self) -> Controller {
        controller_for(&self.second_player)
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn controller_for(name: &str) -> Controller {
    match name {
        BOGO_AI_NAME => Controller::Bogo,
        HERO_AI_NAME => Controller::Hero,
        _ => Controller::Human,
    }
}
