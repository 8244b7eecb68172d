//! Axes and winning lines.

use crate::Position;
use serde::{Deserialize, Deserializer, Serialize, de};

/// One of the four straight-line axes through a cell.
///
/// Each axis has a positive direction; walking a line means stepping in the
/// direction and in its negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Axis {
    /// Down a column: (1, 0).
    Vertical,
    /// Along a row: (0, 1).
    Horizontal,
    /// Top-left to bottom-right: (1, 1).
    Diagonal,
    /// Top-right to bottom-left: (1, -1).
    AntiDiagonal,
}

impl Axis {
    /// Row and column step of the positive direction.
    pub fn direction(self) -> (isize, isize) {
        match self {
            Axis::Vertical => (1, 0),
            Axis::Horizontal => (0, 1),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }

    /// Row and column step of the negative direction.
    pub fn reverse(self) -> (isize, isize) {
        let (d_row, d_col) = self.direction();
        (-d_row, -d_col)
    }
}

/// A run of same-owner cells long enough to win, ordered end to end.
///
/// Never empty; deserializing a line without cells fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinningLine {
    axis: Axis,
    cells: Vec<Position>,
}

impl<'de> Deserialize<'de> for WinningLine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields {
            axis: Axis,
            cells: Vec<Position>,
        }

        let Fields { axis, cells } = Fields::deserialize(deserializer)?;
        if cells.is_empty() {
            return Err(de::Error::custom("winning line has no cells"));
        }
        Ok(Self { axis, cells })
    }
}

impl WinningLine {
    pub(crate) fn new(axis: Axis, cells: Vec<Position>) -> Self {
        debug_assert!(!cells.is_empty(), "winning line must contain the move");
        Self { axis, cells }
    }

    /// Axis the line runs along.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Cells in order from one end to the other.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// First end of the line.
    pub fn first(&self) -> Position {
        self.cells[0]
    }

    /// Last end of the line.
    pub fn last(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells in the line.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a winning line holds at least the winning move.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if `position` lies on this line.
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_axes_cover_four_distinct_directions() {
        let directions: Vec<_> = Axis::iter().map(Axis::direction).collect();
        assert_eq!(directions, vec![(1, 0), (0, 1), (1, 1), (1, -1)]);
        assert_eq!(Axis::AntiDiagonal.reverse(), (-1, 1));
    }

    #[test]
    fn test_line_endpoints() {
        let line = WinningLine::new(
            Axis::Horizontal,
            vec![Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
        );
        assert_eq!(line.first(), Position::new(2, 0));
        assert_eq!(line.last(), Position::new(2, 2));
        assert_eq!(line.len(), 3);
        assert!(line.contains(Position::new(2, 1)));
        assert!(!line.contains(Position::new(1, 1)));
    }
}
