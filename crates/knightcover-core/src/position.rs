//! Board coordinates.

use std::fmt::{self, Display};

use crate::BoardSize;

/// A cell coordinate on a board, 0-based.
///
/// `row` grows downward and `col` grows to the right. A `Position` carries no
/// board size; bounds are checked against a [`BoardSize`].
///
/// `Display` renders the 1-based form used in reports (`r1 c1` is the top-left
/// cell).
///
/// # Examples
///
/// ```
/// use knightcover_core::{BoardSize, Position};
///
/// let size = BoardSize::new(3, 3)?;
/// let pos = Position::new(0, 1);
/// assert_eq!(pos.to_string(), "r1 c2");
///
/// assert_eq!(pos.offset(2, 1, size), Some(Position::new(2, 2)));
/// assert_eq!(pos.offset(-1, 0, size), None);
/// # Ok::<(), knightcover_core::BoardSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the 0-based row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the 0-based column.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position shifted by `(d_row, d_col)`, or `None` if the
    /// result falls outside `size`.
    #[must_use]
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize, size: BoardSize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let pos = Self::new(row, col);
        size.contains(pos).then_some(pos)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{} c{}", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_in_bounds() {
        let size = BoardSize::new(4, 5).unwrap();
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(-1, 2, size), None);
        assert_eq!(corner.offset(1, -2, size), None);
        assert_eq!(corner.offset(1, 2, size), Some(Position::new(1, 2)));

        let far = Position::new(3, 4);
        assert_eq!(far.offset(1, 0, size), None);
        assert_eq!(far.offset(0, 1, size), None);
        assert_eq!(far.offset(-2, -1, size), Some(Position::new(1, 3)));
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "r1 c1");
        assert_eq!(Position::new(9, 2).to_string(), "r10 c3");
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut positions = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0)
            ]
        );
    }
}
