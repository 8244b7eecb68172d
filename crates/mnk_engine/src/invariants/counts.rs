//! Cell-count invariants.

use super::Invariant;
use crate::Board;

/// Invariant: opened cells never exceed the number of cells.
pub struct OpenedWithinTotal;

impl Invariant<Board> for OpenedWithinTotal {
    fn holds(board: &Board) -> bool {
        board.opened_cells() <= board.total_cells()
    }

    fn description() -> &'static str {
        "Opened cell count never exceeds total cell count"
    }
}

/// Invariant: the opened counter agrees with the cells themselves.
pub struct OpenedCountMatchesCells;

impl Invariant<Board> for OpenedCountMatchesCells {
    fn holds(board: &Board) -> bool {
        board.cells().filter(|cell| cell.is_opened()).count() == board.opened_cells()
    }

    fn description() -> &'static str {
        "Opened cell count equals the number of owned cells"
    }
}

/// Invariant: a full board has finished, either won or drawn.
pub struct FullBoardIsTerminal;

impl Invariant<Board> for FullBoardIsTerminal {
    fn holds(board: &Board) -> bool {
        board.has_open_cells() || board.state().is_terminal()
    }

    fn description() -> &'static str {
        "A full board is won or drawn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Player, Position};

    #[test]
    fn test_counts_hold_after_moves() {
        let mut board = Board::new(3, 3, None).unwrap();
        board.open_cell(Position::new(0, 0));
        board.switch_turn();
        board.open_cell(Position::new(2, 2));

        assert!(OpenedWithinTotal::holds(&board));
        assert!(OpenedCountMatchesCells::holds(&board));
        assert!(FullBoardIsTerminal::holds(&board));
    }

    #[test]
    fn test_corrupted_count_violates() {
        let mut board = Board::new(3, 3, None).unwrap();
        board.place_unchecked(Position::new(1, 1), Player::O);
        board.opened_cells = 0;

        assert!(!OpenedCountMatchesCells::holds(&board));
        board.opened_cells = 10;
        assert!(!OpenedWithinTotal::holds(&board));
    }

    #[test]
    fn test_full_board_in_progress_violates() {
        let mut board = Board::new(1, 2, Some(2)).unwrap();
        board.place_unchecked(Position::new(0, 0), Player::X);
        board.place_unchecked(Position::new(0, 1), Player::O);
        assert!(!FullBoardIsTerminal::holds(&board));

        board.state = GameState::Draw;
        assert!(FullBoardIsTerminal::holds(&board));
    }
}
