//! Game rules for m,n,k boards.
//!
//! Pure functions over a [`Board`](crate::Board) that find winning lines.
//! The board applies their results; nothing here mutates state.

pub mod line;
pub mod win;

pub use line::{Axis, WinningLine};
pub use win::{collect_run, winning_lines_through};
