//! Hex Core - Game engine and AI
//!
//! This crate provides the core logic for playing Hex:
//! - Board geometry (hex adjacency on a square array)
//! - Connectivity-based win detection
//! - Turn state machine with pie-rule swap and move history
//! - Registry of named game sessions
//! - Two scripted AI opponents (BogoAI, HeroAI)
//! - The command API consumed by the shell

pub mod board;
pub mod connectivity;
pub mod game;
pub mod manager;
pub mod ai;
pub mod command;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use board::{Board, Cell, Position, Token, DIRECTIONS, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use connectivity::ConnectivityChecker;
pub use game::{Controller, GameStatus, HexGame, Move, Player, Seat};
pub use manager::{GameManager, GameSummary, SwitchOutcome, DEFAULT_GAME_NAME};
pub use ai::{BogoAi, HeroAi};
pub use command::Command;
pub use config::{GameConfig, BOGO_AI_NAME, HERO_AI_NAME};
pub use error::{HexError, Result};
