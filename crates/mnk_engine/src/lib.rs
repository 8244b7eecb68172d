//! Board engine for m,n,k games.
//!
//! Tic-tac-toe generalized to an N×M board where a run of `k` same-owner
//! cells along a row, column or diagonal wins.
//!
//! # Architecture
//!
//! - **Board**: owns the cells, the active player and the game state
//! - **Rules**: pure line-walking functions that find winning lines
//! - **Invariants**: composable checks the board asserts in debug builds
//!
//! # Example
//!
//! ```
//! use mnk_engine::{Board, GameState, MoveOutcome, Player, Position};
//!
//! let mut board = Board::new(3, 3, None)?;
//! for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     if board.open_cell(Position::new(row, column)) == MoveOutcome::Placed {
//!         board.switch_turn();
//!     }
//! }
//! assert_eq!(board.state(), GameState::Won(Player::X));
//! # Ok::<(), mnk_engine::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod invariants;
mod outcome;
pub mod rules;
mod types;

pub use board::Board;
pub use error::{BoardError, ConfigurationIssue};
pub use outcome::{IgnoredMove, MoveOutcome};
pub use rules::{Axis, WinningLine};
pub use types::{Cell, GameState, Player, Position, Square};
