//! The board engine: cell ownership, turns and game state.

use crate::error::{BoardError, ConfigurationIssue};
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::outcome::{IgnoredMove, MoveOutcome};
use crate::rules::{WinningLine, winning_lines_through};
use crate::types::{Cell, GameState, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// An N×M board with a minimum winning run length.
///
/// The board owns every cell for its whole lifetime. [`Board::reset`]
/// clears them in place; dimensions and win length never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) win_length: usize,
    /// Cells in row-major order.
    pub(crate) cells: Vec<Cell>,
    pub(crate) opened_cells: usize,
    pub(crate) total_cells: usize,
    pub(crate) active_player: Player,
    pub(crate) state: GameState,
    /// Lines completed by the winning move; empty unless the game is won.
    pub(crate) winning_lines: Vec<WinningLine>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// `win_length` of `None` defaults to `min(rows, columns)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfiguration`] when either dimension is
    /// zero, the win length is zero, or the win length is longer than any
    /// straight line on the board.
    #[instrument]
    pub fn new(rows: usize, columns: usize, win_length: Option<usize>) -> Result<Self, BoardError> {
        if rows == 0 {
            return Err(ConfigurationIssue::NoRows.into());
        }
        if columns == 0 {
            return Err(ConfigurationIssue::NoColumns.into());
        }
        let win_length = win_length.unwrap_or_else(|| rows.min(columns));
        if win_length == 0 {
            return Err(ConfigurationIssue::ZeroWinLength.into());
        }
        if win_length > rows.max(columns) {
            return Err(ConfigurationIssue::WinLengthTooLong {
                win_length,
                rows,
                columns,
            }
            .into());
        }

        let cells = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| Cell::new(Position::new(row, column))))
            .collect::<Vec<_>>();
        let total_cells = cells.len();

        info!(rows, columns, win_length, "Board created");
        Ok(Self {
            rows,
            columns,
            win_length,
            cells,
            opened_cells: 0,
            total_cells,
            active_player: Player::X,
            state: GameState::InProgress,
            winning_lines: Vec::new(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Minimum run of same-owner cells that wins.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Cells opened since creation or the last reset.
    pub fn opened_cells(&self) -> usize {
        self.opened_cells
    }

    /// Total number of cells on the board.
    pub fn total_cells(&self) -> usize {
        self.total_cells
    }

    /// The player whose move is expected.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Lines completed by the winning move, in axis order.
    pub fn winning_lines(&self) -> &[WinningLine] {
        &self.winning_lines
    }

    fn index(&self, position: Position) -> Option<usize> {
        (position.row < self.rows && position.column < self.columns)
            .then(|| position.row * self.columns + position.column)
    }

    /// Returns the cell at `position`, or `None` off the board.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).map(|index| &self.cells[index])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.columns..(row + 1) * self.columns])
    }

    /// Positions of all cells that are still empty.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| !cell.is_opened())
            .map(Cell::position)
            .collect()
    }

    /// Returns true while at least one cell is empty.
    pub fn has_open_cells(&self) -> bool {
        self.total_cells > self.opened_cells
    }

    /// Opens the cell at `position` for the active player.
    ///
    /// Does nothing when the game is over, the cell is already opened, or
    /// the position is off the board. Otherwise claims the cell and
    /// evaluates the win condition around it. The turn is not switched;
    /// call [`Board::switch_turn`] after a [`MoveOutcome::Placed`].
    #[instrument(skip(self), fields(player = %self.active_player, opened = self.opened_cells))]
    pub fn open_cell(&mut self, position: Position) -> MoveOutcome {
        if self.state.is_terminal() {
            debug!(state = %self.state, "Move ignored, game is over");
            return MoveOutcome::Ignored(IgnoredMove::GameOver);
        }
        let Some(index) = self.index(position) else {
            debug!("Move ignored, position off the board");
            return MoveOutcome::Ignored(IgnoredMove::OutOfBounds);
        };
        if self.cells[index].is_opened() {
            debug!("Move ignored, cell already opened");
            return MoveOutcome::Ignored(IgnoredMove::AlreadyOpened);
        }

        self.cells[index].claim(self.active_player);
        self.opened_cells += 1;

        let outcome = if self.evaluate_win(position) {
            MoveOutcome::Won(self.active_player)
        } else if self.state == GameState::Draw {
            MoveOutcome::Draw
        } else {
            MoveOutcome::Placed
        };

        debug_assert!(
            BoardInvariants::check_all(self).is_ok(),
            "board invariants violated after move"
        );
        debug!(%outcome, "Cell opened");
        outcome
    }

    /// Evaluates the win condition centred on `position`.
    ///
    /// Records every winning line through the cell and moves the game to
    /// [`GameState::Won`]; otherwise moves it to [`GameState::Draw`] if no
    /// empty cells remain. Returns whether a win was found. An empty or
    /// off-board position is never a win and changes nothing.
    ///
    /// A finished game is left as it is; the result reports whether it was
    /// won.
    #[instrument(skip(self))]
    pub fn evaluate_win(&mut self, position: Position) -> bool {
        if self.state.is_terminal() {
            debug!(state = %self.state, "Game already decided");
            return self.state.winner().is_some();
        }
        let Some(owner) = self.cell(position).and_then(|cell| cell.owner()) else {
            return false;
        };

        let lines = winning_lines_through(self, position);
        if !lines.is_empty() {
            info!(winner = %owner, lines = lines.len(), "Winning move");
            self.winning_lines = lines;
            self.state = GameState::Won(owner);
            return true;
        }

        if !self.has_open_cells() {
            info!("Board full with no winning line");
            self.state = GameState::Draw;
        }
        false
    }

    /// Hands the move to the other player. Does nothing once the game is
    /// over.
    #[instrument(skip(self), fields(from = %self.active_player))]
    pub fn switch_turn(&mut self) {
        if self.state.is_terminal() {
            debug!(state = %self.state, "Turn not switched, game is over");
            return;
        }
        self.active_player = self.active_player.opponent();
    }

    /// Clears every cell and starts a fresh game with X to move.
    #[instrument(skip(self), fields(state = %self.state, opened = self.opened_cells))]
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
        self.opened_cells = 0;
        self.active_player = Player::X;
        self.state = GameState::InProgress;
        self.winning_lines.clear();

        debug_assert!(
            BoardInvariants::check_all(self).is_ok(),
            "board invariants violated after reset"
        );
        info!("Board reset");
    }

    /// Claims a cell without checking turn, state or win condition.
    #[cfg(test)]
    pub(crate) fn place_unchecked(&mut self, position: Position, player: Player) {
        let index = self.index(position).expect("position on board");
        if !self.cells[index].is_opened() {
            self.opened_cells += 1;
        }
        self.cells[index].claim(player);
    }
}
