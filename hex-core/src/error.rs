//! Error types for board, session and command handling
//!
//! Every variant is recoverable and scoped to a single command: the shell
//! reports it and keeps reading input.

/// Result alias used throughout the core crate
pub type Result<T> = std::result::Result<T, HexError>;

/// Errors raised by the Hex engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    // ------------------------------------------------------------------------
    // Board / game
    // ------------------------------------------------------------------------
    #[error("The given location lies outside of the boundaries")]
    OutOfBounds,

    #[error("Tile already placed.")]
    Occupied,

    #[error("The game has already been won by {winner}. No further moves allowed.")]
    GameAlreadyWon { winner: String },

    #[error("Swap not allowed.")]
    SwapNotAllowed,

    #[error("The requested number of recent moves exceeds the available history.")]
    HistoryExceeded,

    // ------------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------------
    #[error("No game session found with the name {0}.")]
    GameNotFound(String),

    #[error("A game with the name {0} already exists.")]
    GameAlreadyExists(String),

    #[error("Game name is invalid")]
    InvalidGameName,

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------
    #[error("Given arguments are invalid.")]
    InvalidArguments,

    #[error("Invalid number of arguments.")]
    WrongArgumentCount,

    #[error("Command '{0}' not found")]
    UnknownCommand(String),

    #[error("quit does not allow args.")]
    QuitWithArguments,

    // ------------------------------------------------------------------------
    // Startup configuration
    // ------------------------------------------------------------------------
    #[error("Invalid Argument for board size: {0}")]
    InvalidBoardSize(usize),

    #[error("The names of the players cannot be the same.")]
    SameNames,

    #[error("The first player's name cannot be the name of an AI.")]
    FirstPlayerIsAi,

    #[error("Player names cannot be empty.")]
    EmptyName,

    #[error("Player name {0:?} is in an invalid format.")]
    InvalidName(String),
}
