//! Win detection by walking runs outward from a single cell.

use super::line::{Axis, WinningLine};
use crate::{Board, Position};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Collects the contiguous cells owned by `origin`'s owner, walking from
/// `origin` (exclusive) one `(d_row, d_col)` step at a time.
///
/// Cells are returned nearest first. The walk stops at the first empty,
/// off-board or opponent cell. An unowned origin yields an empty run.
pub fn collect_run(board: &Board, origin: Position, direction: (isize, isize)) -> Vec<Position> {
    let Some(owner) = board.cell(origin).and_then(|cell| cell.owner()) else {
        return Vec::new();
    };
    let (d_row, d_col) = direction;

    let mut run = Vec::new();
    let mut cursor = origin;
    while let Some(next) = cursor.step(d_row, d_col, board.rows(), board.columns()) {
        match board.cell(next).and_then(|cell| cell.owner()) {
            Some(player) if player == owner => {
                run.push(next);
                cursor = next;
            }
            _ => break,
        }
    }
    run
}

/// Returns every line of at least `board.win_length()` cells passing
/// through `origin`, one per qualifying axis.
#[instrument(skip(board), fields(win_length = board.win_length()))]
pub fn winning_lines_through(board: &Board, origin: Position) -> Vec<WinningLine> {
    let mut lines: Vec<WinningLine> = Vec::new();

    for axis in Axis::iter() {
        let behind = collect_run(board, origin, axis.reverse());
        let ahead = collect_run(board, origin, axis.direction());
        if behind.len() + 1 + ahead.len() < board.win_length() {
            continue;
        }

        let cells: Vec<Position> = behind
            .into_iter()
            .rev()
            .chain(std::iter::once(origin))
            .chain(ahead)
            .collect();

        // A one-cell line is the same on every axis.
        if lines.iter().any(|line| line.cells() == cells.as_slice()) {
            continue;
        }
        lines.push(WinningLine::new(axis, cells));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn board_with(
        rows: usize,
        columns: usize,
        k: usize,
        marks: &[(usize, usize, Player)],
    ) -> Board {
        let mut board = Board::new(rows, columns, Some(k)).unwrap();
        for &(row, column, player) in marks {
            board.place_unchecked(Position::new(row, column), player);
        }
        board
    }

    #[test]
    fn test_collect_run_stops_at_opponent() {
        let board = board_with(
            1,
            5,
            3,
            &[(0, 0, Player::X), (0, 1, Player::X), (0, 2, Player::X), (0, 3, Player::O)],
        );
        let run = collect_run(&board, Position::new(0, 0), Axis::Horizontal.direction());
        assert_eq!(run, vec![Position::new(0, 1), Position::new(0, 2)]);
    }

    #[test]
    fn test_collect_run_from_empty_origin() {
        let board = board_with(3, 3, 3, &[(0, 1, Player::X)]);
        assert!(collect_run(&board, Position::new(0, 0), (0, 1)).is_empty());
    }

    #[test]
    fn test_collect_run_stops_at_edge() {
        let board = board_with(3, 3, 3, &[(1, 1, Player::O), (2, 2, Player::O)]);
        let run = collect_run(&board, Position::new(1, 1), Axis::Diagonal.direction());
        assert_eq!(run, vec![Position::new(2, 2)]);
    }

    #[test]
    fn test_line_ordered_from_negative_end() {
        // Middle cell of an anti-diagonal: the line starts at the top-right.
        let board = board_with(
            3,
            3,
            3,
            &[(0, 2, Player::X), (1, 1, Player::X), (2, 0, Player::X)],
        );
        let lines = winning_lines_through(&board, Position::new(1, 1));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].axis(), Axis::AntiDiagonal);
        assert_eq!(
            lines[0].cells(),
            &[Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_short_run_is_not_a_line() {
        let board = board_with(4, 4, 3, &[(0, 0, Player::X), (0, 1, Player::X)]);
        assert!(winning_lines_through(&board, Position::new(0, 1)).is_empty());
    }

    #[test]
    fn test_runs_longer_than_win_length_are_kept_whole() {
        let board = board_with(
            1,
            5,
            3,
            &[
                (0, 0, Player::O),
                (0, 1, Player::O),
                (0, 2, Player::O),
                (0, 3, Player::O),
            ],
        );
        let lines = winning_lines_through(&board, Position::new(0, 2));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 4);
        assert_eq!(lines[0].first(), Position::new(0, 0));
        assert_eq!(lines[0].last(), Position::new(0, 3));
    }

    #[test]
    fn test_single_cell_win_reported_once() {
        let board = board_with(2, 2, 1, &[(0, 0, Player::X)]);
        let lines = winning_lines_through(&board, Position::new(0, 0));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].cells(), &[Position::new(0, 0)]);
    }
}
