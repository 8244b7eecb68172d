//! Stateless text rendering of a board.

use mnk_engine::{Board, Cell, GameState};

/// Width of one rendered cell column.
const CELL_WIDTH: usize = 4;

/// Renders the board as a grid with row and column indices.
///
/// Empty cells show as `.`; cells on a winning line are bracketed.
pub fn render_board(board: &Board) -> String {
    let label_width = board.rows().saturating_sub(1).to_string().len();
    let mut lines = Vec::with_capacity(board.rows() + 1);

    let mut header = " ".repeat(label_width + 1);
    for column in 0..board.columns() {
        header.push_str(&format!("{column:^CELL_WIDTH$}"));
    }
    lines.push(header.trim_end().to_string());

    for row in 0..board.rows() {
        let mut line = format!("{row:>label_width$} ");
        for cell in board.row(row).unwrap_or_default() {
            line.push_str(&format!("{:^CELL_WIDTH$}", cell_symbol(board, cell)));
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn cell_symbol(board: &Board, cell: &Cell) -> String {
    match cell.owner() {
        None => ".".to_string(),
        Some(player) => {
            let on_line = board
                .winning_lines()
                .iter()
                .any(|line| line.contains(cell.position()));
            if on_line {
                format!("[{player}]")
            } else {
                player.to_string()
            }
        }
    }
}

/// One-line summary of whose turn it is or how the game ended.
pub fn render_status(board: &Board) -> String {
    match board.state() {
        GameState::InProgress => format!(
            "{} to move ({} in a row wins)",
            board.active_player(),
            board.win_length()
        ),
        GameState::Won(player) => format!("{player} won"),
        GameState::Draw => "Draw".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnk_engine::Position;

    #[test]
    fn test_empty_board() {
        let board = Board::new(2, 3, None).unwrap();
        assert_eq!(render_board(&board), "   0   1   2\n0  .   .   .\n1  .   .   .");
    }

    #[test]
    fn test_winning_cells_are_bracketed() {
        let mut board = Board::new(2, 2, Some(2)).unwrap();
        board.open_cell(Position::new(0, 0));
        board.switch_turn();
        board.open_cell(Position::new(1, 1));
        board.switch_turn();
        board.open_cell(Position::new(0, 1));

        assert_eq!(render_board(&board), "   0   1\n0 [X] [X]\n1  .   O");
    }

    #[test]
    fn test_wide_row_labels_align() {
        let board = Board::new(11, 1, Some(1)).unwrap();
        let rendered = render_board(&board);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "    0");
        assert_eq!(lines[1], " 0  .");
        assert_eq!(lines[11], "10  .");
    }

    #[test]
    fn test_status() {
        let mut board = Board::new(3, 3, None).unwrap();
        assert_eq!(render_status(&board), "X to move (3 in a row wins)");
        board.open_cell(Position::new(0, 0));
        board.switch_turn();
        assert_eq!(render_status(&board), "O to move (3 in a row wins)");
    }
}
