//! Board occupancy.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{BoardSize, Position};

/// The state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Cell {
    /// A knight stands on the cell.
    Occupied,
    /// The cell is vacant.
    Empty,
}

impl Cell {
    /// Returns `1` for occupied and `0` for empty cells.
    #[must_use]
    pub const fn as_bit(self) -> u8 {
        match self {
            Cell::Occupied => 1,
            Cell::Empty => 0,
        }
    }
}

/// Occupancy of every cell of a fixed-size board.
///
/// The dimensions never change after construction; only cell states do.
///
/// # Text format
///
/// `Display` and `FromStr` use one line per row, `N` for an occupied cell and
/// `.` for an empty one. When parsing, `#` and `1` are also accepted for
/// occupied cells, `0` and `_` for empty ones, blank lines are skipped and
/// each line is trimmed.
///
/// # Examples
///
/// ```
/// use knightcover_core::{Cell, Grid, Position};
///
/// let grid: Grid = "
///     N.N
///     ...
/// ".parse()?;
/// assert_eq!(grid.size().rows(), 2);
/// assert_eq!(grid.size().cols(), 3);
/// assert_eq!(grid.cell(Position::new(0, 2)), Cell::Occupied);
/// assert_eq!(grid.occupied_count(), 2);
/// assert_eq!(grid.to_string(), "N.N\n...\n");
/// # Ok::<(), knightcover_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell occupied.
    ///
    /// A fully occupied grid is trivially a full cover.
    #[must_use]
    pub fn filled(size: BoardSize) -> Self {
        Self::with_cell(size, Cell::Occupied)
    }

    /// Creates a grid with every cell empty.
    #[must_use]
    pub fn empty(size: BoardSize) -> Self {
        Self::with_cell(size, Cell::Empty)
    }

    fn with_cell(size: BoardSize, cell: Cell) -> Self {
        Self {
            size,
            cells: vec![cell; size.cell_count()],
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the state of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    #[inline]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[self.size.index_of(pos)]
    }

    /// Returns `true` if the cell at `pos` is inside the board and occupied.
    #[must_use]
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.size.contains(pos) && self.cell(pos).is_occupied()
    }

    /// Sets the state of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[inline]
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let index = self.size.index_of(pos);
        self.cells[index] = cell;
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Returns the occupied positions in row-major order.
    pub fn occupied_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.size.positions().filter(|&pos| self.cell(pos).is_occupied())
    }

    /// Returns the cells of row `row`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the board.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(row < self.size.rows());
        let cols = self.size.cols();
        &self.cells[row * cols..(row + 1) * cols]
    }

    /// Returns every row, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.size.cols())
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let ch = match cell {
                    Cell::Occupied => 'N',
                    Cell::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`Grid`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The text contained no rows.
    #[display("grid text contains no rows")]
    NoRows,
    /// A row's length differed from the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// 1-based row number.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of this row.
        found: usize,
    },
    /// A character was not a recognised cell marker.
    #[display("unexpected character {ch:?} at row {row}, column {col}")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// 1-based row number.
        row: usize,
        /// 1-based column number.
        col: usize,
    },
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = 0;

        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let row_start = cells.len();
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'N' | '#' | '1' => Cell::Occupied,
                    '.' | '_' | '0' => Cell::Empty,
                    _ => {
                        return Err(GridParseError::InvalidChar {
                            ch,
                            row: rows + 1,
                            col: col + 1,
                        });
                    }
                };
                cells.push(cell);
            }
            let found = cells.len() - row_start;
            if rows == 0 {
                cols = found;
            } else if found != cols {
                return Err(GridParseError::RaggedRow {
                    row: rows + 1,
                    expected: cols,
                    found,
                });
            }
            rows += 1;
        }

        let size = BoardSize::new(rows, cols).map_err(|_| GridParseError::NoRows)?;
        Ok(Self { size, cells })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn size(rows: usize, cols: usize) -> BoardSize {
        BoardSize::new(rows, cols).unwrap()
    }

    #[test]
    fn test_filled_and_empty() {
        let filled = Grid::filled(size(3, 4));
        assert_eq!(filled.occupied_count(), 12);
        assert!(filled.size().positions().all(|pos| filled.is_occupied(pos)));

        let empty = Grid::empty(size(3, 4));
        assert_eq!(empty.occupied_count(), 0);
        assert_eq!(empty.occupied_positions().count(), 0);
    }

    #[test]
    fn test_set_changes_only_one_cell() {
        let mut grid = Grid::filled(size(2, 3));
        grid.set(Position::new(1, 1), Cell::Empty);
        assert_eq!(grid.size(), size(2, 3));
        assert_eq!(grid.occupied_count(), 5);
        assert_eq!(grid.cell(Position::new(1, 1)), Cell::Empty);
        assert_eq!(grid.row(1), &[Cell::Occupied, Cell::Empty, Cell::Occupied]);
    }

    #[test]
    fn test_is_occupied_outside_board_is_false() {
        let grid = Grid::filled(size(2, 2));
        assert!(!grid.is_occupied(Position::new(2, 0)));
        assert!(!grid.is_occupied(Position::new(0, 2)));
    }

    #[test]
    fn test_occupied_positions_are_row_major() {
        let grid: Grid = "
            .N.
            N.N
        "
        .parse()
        .unwrap();
        let positions: Vec<_> = grid.occupied_positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2)
            ]
        );
    }

    #[test]
    fn test_parse_alternative_markers() {
        let grid: Grid = "#_1\n0N.".parse().unwrap();
        assert_eq!(grid.to_string(), "N.N\n.N.\n");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(GridParseError::NoRows));
        assert_eq!("\n  \n".parse::<Grid>(), Err(GridParseError::NoRows));
        assert_eq!(
            "NN\nN".parse::<Grid>(),
            Err(GridParseError::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            "N.\n.x".parse::<Grid>(),
            Err(GridParseError::InvalidChar {
                ch: 'x',
                row: 2,
                col: 2
            })
        );
    }

    proptest! {
        #[test]
        fn occupied_count_matches_set_cells(rows in 1usize..8, cols in 1usize..8, bits in proptest::collection::vec(any::<bool>(), 64)) {
            let mut grid = Grid::empty(size(rows, cols));
            let mut expected = 0;
            for (pos, bit) in grid.size().positions().zip(bits) {
                if bit {
                    grid.set(pos, Cell::Occupied);
                    expected += 1;
                }
            }
            prop_assert_eq!(grid.occupied_count(), expected);
            prop_assert_eq!(grid.occupied_positions().count(), expected);
            prop_assert_eq!(grid.rows().len(), rows);
        }
    }
}
