//! Parsing of typed commands and cell coordinates.

use derive_more::Display;
use mnk_engine::Position;
use std::str::FromStr;

/// A line typed at the terminal prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Activate the cell at a position.
    Activate(Position),
    /// Start a new game.
    Reset,
    /// Leave the session.
    Quit,
}

/// Error parsing a command or coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseMoveError {
    /// Input was blank.
    #[display("Expected a move like `row,col`")]
    Empty,
    /// Wrong number of coordinates.
    #[display("Expected two coordinates, got `{}`", _0)]
    WrongArity(String),
    /// A coordinate was not a non-negative integer.
    #[display("`{}` is not a valid coordinate", _0)]
    InvalidNumber(String),
}

impl std::error::Error for ParseMoveError {}

/// Parses `row,col`, `row col` or `row, col` into a position.
pub fn parse_position(input: &str) -> Result<Position, ParseMoveError> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [] => Err(ParseMoveError::Empty),
        [row, column] => Ok(Position::new(parse_index(row)?, parse_index(column)?)),
        _ => Err(ParseMoveError::WrongArity(input.trim().to_string())),
    }
}

fn parse_index(part: &str) -> Result<usize, ParseMoveError> {
    part.parse()
        .map_err(|_| ParseMoveError::InvalidNumber(part.to_string()))
}

impl FromStr for PlayerCommand {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" => Ok(PlayerCommand::Quit),
            "r" | "reset" | "new" => Ok(PlayerCommand::Reset),
            other => parse_position(other).map(PlayerCommand::Activate),
        }
    }
}
