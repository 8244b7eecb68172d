//! m,n,k game controller and terminal driver.
//!
//! Wraps the [`mnk_engine`] board with a session lifecycle and turns every
//! activation into plain [`ViewEvent`]s for a presentation layer.
//!
//! # Architecture
//!
//! - **Controller**: owns the board, handles activations and resets
//! - **Onboarding**: one-time hints for the first moves of a session
//! - **Config**: TOML file plus command-line overrides
//! - **Terminal**: text rendering and a line-based play loop
//!
//! # Example
//!
//! ```
//! use mnk_game::{GameConfig, GameController, ViewEvent};
//! use mnk_engine::Position;
//!
//! let config = GameConfig::default().with_onboarding(false);
//! let (mut controller, _) = GameController::start(&config)?;
//! let events = controller.handle_cell_activation(Position::new(2, 3));
//! assert!(matches!(events[0], ViewEvent::CellOpened { .. }));
//! # Ok::<(), mnk_engine::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod controller;
mod events;
mod input;
mod onboarding;
mod render;
mod terminal;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use controller::{DRAW_ANNOUNCEMENT, GameController};
pub use events::ViewEvent;
pub use input::{ParseMoveError, PlayerCommand, parse_position};
pub use onboarding::{ONBOARDING_MOVES, Onboarding};
pub use render::{render_board, render_status};
pub use terminal::{EventFormat, run_session, write_events};
