//! Game controller: board lifecycle and presentation events.

use crate::config::GameConfig;
use crate::events::ViewEvent;
use crate::onboarding::Onboarding;
use mnk_engine::{Board, BoardError, MoveOutcome, Position};
use tracing::{debug, info, instrument};

/// Announcement shown when the board fills without a winner.
pub const DRAW_ANNOUNCEMENT: &str = "CAT GAME";

/// Owns the board for one session and turns activations into view events.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    onboarding: Onboarding,
}

impl GameController {
    /// Builds a board from `config` and returns the opening events.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfiguration`] if the board cannot be
    /// built.
    #[instrument(skip(config), fields(rows = config.rows(), columns = config.columns()))]
    pub fn start(config: &GameConfig) -> Result<(Self, Vec<ViewEvent>), BoardError> {
        let board = Board::new(*config.rows(), *config.columns(), *config.win_length())?;
        let onboarding = Onboarding::new(*config.onboarding());

        let events = onboarding
            .intro(board.active_player())
            .map(ViewEvent::prompt)
            .into_iter()
            .collect();

        info!(win_length = board.win_length(), "Game started");
        Ok((Self { board, onboarding }, events))
    }

    /// Read access to the board for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Onboarding progress.
    pub fn onboarding(&self) -> &Onboarding {
        &self.onboarding
    }

    /// Handles a click on the cell at `position`.
    ///
    /// After a win or draw, any activation is a request for a new game and
    /// resets the board. Otherwise the active player opens the cell; moves
    /// the board ignores produce no events.
    #[instrument(
        skip(self),
        fields(player = %self.board.active_player(), state = %self.board.state())
    )]
    pub fn handle_cell_activation(&mut self, position: Position) -> Vec<ViewEvent> {
        if self.board.state().is_terminal() {
            debug!("Activation after game end, resetting");
            return self.reset();
        }

        let player = self.board.active_player();
        let outcome = self.board.open_cell(position);
        if !outcome.is_applied() {
            return Vec::new();
        }

        let mut events = vec![ViewEvent::CellOpened {
            position,
            owner: player,
        }];

        match outcome {
            MoveOutcome::Won(winner) => {
                events.push(ViewEvent::WinningLines {
                    lines: self.board.winning_lines().to_vec(),
                });
                events.push(ViewEvent::announcement(format!("{winner} won!")));
            }
            MoveOutcome::Draw => {
                events.push(ViewEvent::announcement(DRAW_ANNOUNCEMENT));
            }
            MoveOutcome::Placed => {
                self.board.switch_turn();
                if let Some(hint) = self.onboarding.hint(
                    self.board.opened_cells(),
                    self.board.active_player(),
                    self.board.win_length(),
                ) {
                    events.push(ViewEvent::prompt(hint));
                }
            }
            MoveOutcome::Ignored(_) => {}
        }

        events
    }

    /// Clears the board and the prompt label for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Vec<ViewEvent> {
        self.board.reset();
        vec![ViewEvent::prompt(""), ViewEvent::BoardReset]
    }
}
