//! Plain-data events the controller hands to a presentation layer.

use mnk_engine::{Player, Position, WinningLine};
use serde::Serialize;
use std::fmt;

/// Something the presentation layer should show.
///
/// Events are emitted in the order they should be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ViewEvent {
    /// Replace the prompt label. An empty text clears it.
    Prompt {
        /// Label text.
        text: String,
    },
    /// A cell was claimed.
    CellOpened {
        /// Where.
        position: Position,
        /// By whom.
        owner: Player,
    },
    /// Lines to stroke and highlight after a win.
    WinningLines {
        /// Every line the winning move completed.
        lines: Vec<WinningLine>,
    },
    /// End-of-game message.
    Announcement {
        /// Message text.
        text: String,
    },
    /// The board was cleared; redraw every cell.
    BoardReset,
}

impl ViewEvent {
    pub(crate) fn prompt(text: impl Into<String>) -> Self {
        ViewEvent::Prompt { text: text.into() }
    }

    pub(crate) fn announcement(text: impl Into<String>) -> Self {
        ViewEvent::Announcement { text: text.into() }
    }
}

impl fmt::Display for ViewEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewEvent::Prompt { text } => write!(f, "{text}"),
            ViewEvent::CellOpened { position, owner } => write!(f, "{owner} takes {position}"),
            ViewEvent::WinningLines { lines } => {
                let spans = lines
                    .iter()
                    .map(|line| format!("{} -> {}", line.first(), line.last()))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Winning line: {spans}")
            }
            ViewEvent::Announcement { text } => write!(f, "{text}"),
            ViewEvent::BoardReset => write!(f, "New game"),
        }
    }
}
