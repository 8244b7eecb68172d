//! First-class invariants for m,n,k boards.
//!
//! Invariants are logical properties that must hold after every move and
//! reset. The board checks them in debug builds; they can also be tested
//! independently.

pub mod counts;
pub mod lines;

pub use counts::{FullBoardIsTerminal, OpenedCountMatchesCells, OpenedWithinTotal};
pub use lines::WinningLinesConsistent;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        into_result(violations)
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (
    OpenedWithinTotal,
    OpenedCountMatchesCells,
    FullBoardIsTerminal,
    WinningLinesConsistent,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameState, Position};

    #[test]
    fn test_invariant_set_holds_for_new_board() {
        let board = Board::new(4, 4, Some(3)).unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut board = Board::new(2, 2, None).unwrap();
        board.opened_cells = 4;
        board.state = GameState::InProgress;

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        // Count disagrees with the empty cells, and a "full" board is still running.
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let mut board = Board::new(3, 3, None).unwrap();
        board.open_cell(Position::new(0, 0));

        type Counts = (OpenedWithinTotal, OpenedCountMatchesCells);
        assert!(Counts::check_all(&board).is_ok());
    }
}
