//! Core domain types for m,n,k boards.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has opened this cell yet.
    #[default]
    Empty,
    /// Cell opened and claimed by a player.
    Occupied(Player),
}

/// A zero-based (row, column) coordinate on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
    derive_new::new,
)]
#[display("({row}, {column})")]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub column: usize,
}

impl Position {
    /// Moves one step by `(d_row, d_col)`, returning `None` when the step
    /// leaves a `rows` x `columns` board.
    pub fn step(self, d_row: isize, d_col: isize, rows: usize, columns: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let column = self.column.checked_add_signed(d_col)?;
        (row < rows && column < columns).then_some(Self { row, column })
    }
}

/// One board position together with its ownership.
///
/// Ownership and the opened flag share a single [`Square`], so a cell can
/// never be opened without an owner or owned without being opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    square: Square,
}

impl Cell {
    /// Creates an empty cell at `position`.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            square: Square::Empty,
        }
    }

    /// Where this cell sits on the board.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Raw square contents.
    pub fn square(&self) -> Square {
        self.square
    }

    /// The player holding this cell, if any.
    pub fn owner(&self) -> Option<Player> {
        match self.square {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Whether the cell has been opened.
    pub fn is_opened(&self) -> bool {
        self.square != Square::Empty
    }

    pub(crate) fn claim(&mut self, player: Player) {
        self.square = Square::Occupied(player);
    }

    pub(crate) fn clear(&mut self) {
        self.square = Square::Empty;
    }
}

/// Current state of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GameState {
    /// Moves are being accepted.
    #[display("in progress")]
    InProgress,
    /// A player completed a winning line.
    #[display("{_0} won")]
    Won(Player),
    /// The board filled up without a winning line.
    #[display("draw")]
    Draw,
}

impl GameState {
    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Won(player) => Some(*player),
            _ => None,
        }
    }
}
