//! Winning-line invariant.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: winning lines exist only in a won game, and every recorded
/// line is long enough and owned by the winner.
pub struct WinningLinesConsistent;

impl Invariant<Board> for WinningLinesConsistent {
    fn holds(board: &Board) -> bool {
        match board.state() {
            GameState::Won(winner) => {
                !board.winning_lines().is_empty()
                    && board.winning_lines().iter().all(|line| {
                        line.len() >= board.win_length()
                            && line.cells().iter().all(|&position| {
                                board.cell(position).and_then(|cell| cell.owner()) == Some(winner)
                            })
                    })
            }
            GameState::InProgress | GameState::Draw => board.winning_lines().is_empty(),
        }
    }

    fn description() -> &'static str {
        "Winning lines are owned by the winner and only recorded for won games"
    }
}
