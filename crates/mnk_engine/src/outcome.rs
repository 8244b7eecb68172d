//! Results of opening a cell.

use crate::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Why an `open_cell` call left the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum IgnoredMove {
    /// The game is already won or drawn.
    #[display("game is already over")]
    GameOver,
    /// The cell was opened earlier.
    #[display("cell is already opened")]
    AlreadyOpened,
    /// The position is not on the board.
    #[display("position is off the board")]
    OutOfBounds,
}

/// What happened when a cell was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Cell claimed; the game continues and the turn has not switched yet.
    #[display("placed")]
    Placed,
    /// Cell claimed and it completed at least one winning line.
    #[display("{_0} won")]
    Won(Player),
    /// Cell claimed and it was the last empty cell, with no winning line.
    #[display("draw")]
    Draw,
    /// Nothing changed.
    #[display("ignored: {_0}")]
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// Returns true if the move changed the board.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }

    /// Returns true if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Won(_) | MoveOutcome::Draw)
    }
}
