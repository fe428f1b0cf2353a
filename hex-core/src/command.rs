//! Command API shared by human input and the AI players

use std::fmt;

use crate::board::Position;
use crate::error::{HexError, Result};

/// Default number of moves shown by `history`
const DEFAULT_HISTORY_COUNT: usize = 1;

/// A single tokenized command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Place { x: i32, y: i32 },
    Swap,
    NewGame(String),
    SwitchGame(String),
    History(usize),
    ListGames,
    Print,
    Help,
    Quit,
}

impl Command {
    /// Lines printed by `help`
    pub const HELP: &'static [&'static str] = &[
        "* help: Prints this help message",
        "* history: Shows the move history of the current game",
        "* list-games: Lists all active games being managed",
        "* new-game: Starts a new game with the given name",
        "* place: Places the current player's token on the board at the specified (x, y) coordinates",
        "* print: Displays the current state of the game board",
        "* quit: Quit all games and end program",
        "* swap: Swaps the players",
        "* switch-game: Switches to another game session with the provided name",
    ];

    pub fn place(pos: Position) -> Self {
        Command::Place { x: pos.x, y: pos.y }
    }

    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        match name {
            "place" => {
                let [x, y] = expect_args::<2>(&args)?;
                Ok(Command::Place {
                    x: x.parse().map_err(|_| HexError::InvalidArguments)?,
                    y: y.parse().map_err(|_| HexError::InvalidArguments)?,
                })
            }
            "swap" => expect_args::<0>(&args).map(|_| Command::Swap),
            "new-game" => {
                let [game] = expect_args::<1>(&args)?;
                Ok(Command::NewGame(game.to_string()))
            }
            "switch-game" => {
                let [game] = expect_args::<1>(&args)?;
                Ok(Command::SwitchGame(game.to_string()))
            }
            "history" => match args.as_slice() {
                [] => Ok(Command::History(DEFAULT_HISTORY_COUNT)),
                [count] => match count.parse::<usize>() {
                    Ok(n) if n > 0 => Ok(Command::History(n)),
                    _ => Err(HexError::InvalidArguments),
                },
                _ => Err(HexError::WrongArgumentCount),
            },
            "list-games" => expect_args::<0>(&args).map(|_| Command::ListGames),
            "print" => expect_args::<0>(&args).map(|_| Command::Print),
            "help" => expect_args::<0>(&args).map(|_| Command::Help),
            "quit" if args.is_empty() => Ok(Command::Quit),
            "quit" => Err(HexError::QuitWithArguments),
            other => Err(HexError::UnknownCommand(other.to_string())),
        }
    }
}

fn expect_args<'a, const N: usize>(args: &[&'a str]) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| HexError::WrongArgumentCount)
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place { x, y } => write!(f, "place {} {}", x, y),
            Command::Swap => f.write_str("swap"),
            Command::NewGame(name) => write!(f, "new-game {}", name),
            Command::SwitchGame(name) => write!(f, "switch-game {}", name),
            Command::History(count) => write!(f, "history {}", count),
            Command::ListGames => f.write_str("list-games"),
            Command::Print => f.write_str("print"),
            Command::Help => f.write_str("help"),
            Command::Quit => f.write_str("quit"),
        }
    }
}
