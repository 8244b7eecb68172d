//! Line-based terminal presentation.

use crate::controller::GameController;
use crate::events::ViewEvent;
use crate::input::PlayerCommand;
use crate::render::{render_board, render_status};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How events are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes events in the requested format. Empty prompts are skipped in
/// text mode since they only clear a label.
pub fn write_events<W: Write>(
    output: &mut W,
    events: &[ViewEvent],
    format: EventFormat,
) -> io::Result<()> {
    for event in events {
        match format {
            EventFormat::Text => {
                if matches!(event, ViewEvent::Prompt { text } if text.is_empty()) {
                    continue;
                }
                writeln!(output, "{event}")?;
            }
            EventFormat::Json => {
                let line = serde_json::to_string(event).map_err(io::Error::other)?;
                writeln!(output, "{line}")?;
            }
        }
    }
    Ok(())
}

fn write_board<W: Write>(output: &mut W, controller: &GameController) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", render_board(controller.board()))?;
    writeln!(output, "{}", render_status(controller.board()))
}

/// Runs an interactive session until `quit` or end of input.
///
/// `opening` are the events returned by [`GameController::start`].
#[instrument(skip_all)]
pub fn run_session<R: BufRead, W: Write>(
    controller: &mut GameController,
    opening: &[ViewEvent],
    input: R,
    output: &mut W,
) -> io::Result<()> {
    write_events(output, opening, EventFormat::Text)?;
    write_board(output, controller)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let events = match line.parse::<PlayerCommand>() {
            Ok(PlayerCommand::Quit) => {
                info!("Session ended by player");
                return Ok(());
            }
            Ok(PlayerCommand::Reset) => controller.reset(),
            Ok(PlayerCommand::Activate(position)) => {
                debug!(%position, "Cell activated");
                controller.handle_cell_activation(position)
            }
            Err(e) => {
                warn!(input = %line, error = %e, "Unrecognized input");
                writeln!(output, "{e}")?;
                continue;
            }
        };
        write_events(output, &events, EventFormat::Text)?;
        write_board(output, controller)?;
    }

    info!("Input closed");
    Ok(())
}
