//! Board dimensions.

use std::fmt::{self, Display};

use crate::Position;

/// Validated dimensions of a rectangular board.
///
/// Both `rows` and `cols` are at least 1, and the board has at most
/// [`BoardSize::MAX_CELL_COUNT`] cells. The value is immutable; boards of a
/// different shape are built from a new `BoardSize`.
///
/// # Examples
///
/// ```
/// use knightcover_core::{BoardSize, BoardSizeError};
///
/// let size = BoardSize::new(5, 7)?;
/// assert_eq!(size.rows(), 5);
/// assert_eq!(size.cols(), 7);
/// assert_eq!(size.cell_count(), 35);
///
/// assert_eq!(BoardSize::new(0, 7), Err(BoardSizeError::ZeroRows));
/// # Ok::<(), BoardSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    rows: usize,
    cols: usize,
}

/// Errors returned when constructing a [`BoardSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardSizeError {
    /// The row count was zero.
    #[display("board must have at least one row")]
    ZeroRows,
    /// The column count was zero.
    #[display("board must have at least one column")]
    ZeroCols,
    /// The board would have more than [`BoardSize::MAX_CELL_COUNT`] cells.
    #[display("a {rows}×{cols} board has more than {} cells", BoardSize::MAX_CELL_COUNT)]
    TooLarge {
        /// The requested row count.
        rows: usize,
        /// The requested column count.
        cols: usize,
    },
}

impl BoardSize {
    /// The 8×8 chessboard.
    pub const CHESSBOARD: Self = Self { rows: 8, cols: 8 };

    /// Largest number of cells a board may have.
    pub const MAX_CELL_COUNT: usize = 1 << 20;

    /// Creates board dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError`] if either dimension is zero or the board
    /// has more than [`BoardSize::MAX_CELL_COUNT`] cells.
    pub const fn new(rows: usize, cols: usize) -> Result<Self, BoardSizeError> {
        if rows == 0 {
            return Err(BoardSizeError::ZeroRows);
        }
        if cols == 0 {
            return Err(BoardSizeError::ZeroCols);
        }
        match rows.checked_mul(cols) {
            Some(count) if count <= Self::MAX_CELL_COUNT => Ok(Self { rows, cols }),
            _ => Err(BoardSizeError::TooLarge { rows, cols }),
        }
    }

    /// Parses the text of the row and column input fields.
    ///
    /// Surrounding whitespace is ignored. Each field must be an integer of at
    /// least 1, and together they must describe a board [`BoardSize::new`]
    /// accepts.
    ///
    /// # Errors
    ///
    /// Returns [`SizeInputError`] naming the first offending field.
    ///
    /// # Examples
    ///
    /// ```
    /// use knightcover_core::{BoardSize, SizeField, SizeInputError};
    ///
    /// let size = BoardSize::parse_fields(" 6", "9 ")?;
    /// assert_eq!((size.rows(), size.cols()), (6, 9));
    ///
    /// assert!(matches!(
    ///     BoardSize::parse_fields("6", "x"),
    ///     Err(SizeInputError::NotANumber { field: SizeField::Cols, .. })
    /// ));
    /// # Ok::<(), SizeInputError>(())
    /// ```
    pub fn parse_fields(rows: &str, cols: &str) -> Result<Self, SizeInputError> {
        let rows = parse_field(SizeField::Rows, rows)?;
        let cols = parse_field(SizeField::Cols, cols)?;
        Self::new(rows, cols).map_err(|err| match err {
            BoardSizeError::ZeroRows => SizeInputError::NotPositive {
                field: SizeField::Rows,
                value: 0,
            },
            BoardSizeError::ZeroCols => SizeInputError::NotPositive {
                field: SizeField::Cols,
                value: 0,
            },
            BoardSizeError::TooLarge { rows, cols } => SizeInputError::TooLarge { rows, cols },
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if `pos` lies inside the board.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row() < self.rows && pos.col() < self.cols
    }

    /// Returns the row-major index of `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    #[inline]
    pub fn index_of(self, pos: Position) -> usize {
        assert!(self.contains(pos), "{pos} is outside a {self} board");
        pos.row() * self.cols + pos.col()
    }

    /// Returns the position at row-major index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.cell_count()`.
    #[must_use]
    #[inline]
    pub fn position_at(self, index: usize) -> Position {
        assert!(index < self.cell_count());
        Position::new(index / self.cols, index % self.cols)
    }

    /// Returns every position of the board in row-major order.
    pub fn positions(self) -> impl DoubleEndedIterator<Item = Position> + ExactSizeIterator {
        (0..self.cell_count()).map(move |index| self.position_at(index))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CHESSBOARD
    }
}

impl Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Identifies a size input field in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SizeField {
    /// The row count field.
    #[display("rows")]
    Rows,
    /// The column count field.
    #[display("columns")]
    Cols,
}

/// Errors returned by [`BoardSize::parse_fields`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SizeInputError {
    /// The field was blank.
    #[display("{field} must not be empty")]
    Empty {
        /// The offending field.
        field: SizeField,
    },
    /// The field did not contain an integer.
    #[display("{field} must be a whole number, got {input:?}")]
    NotANumber {
        /// The offending field.
        field: SizeField,
        /// The trimmed text that failed to parse.
        input: String,
    },
    /// The field contained an integer below 1.
    #[display("{field} must be at least 1, got {value}")]
    NotPositive {
        /// The offending field.
        field: SizeField,
        /// The parsed value.
        value: i64,
    },
    /// Both fields were valid but the board would be too large.
    #[display("a {rows}×{cols} board has more than {} cells", BoardSize::MAX_CELL_COUNT)]
    TooLarge {
        /// The parsed row count.
        rows: usize,
        /// The parsed column count.
        cols: usize,
    },
}

fn parse_field(field: SizeField, text: &str) -> Result<usize, SizeInputError> {
    let input = text.trim();
    if input.is_empty() {
        return Err(SizeInputError::Empty { field });
    }
    let value: i64 = input.parse().map_err(|_| SizeInputError::NotANumber {
        field,
        input: input.to_owned(),
    })?;
    if value < 1 {
        return Err(SizeInputError::NotPositive { field, value });
    }
    usize::try_from(value).map_err(|_| SizeInputError::NotANumber {
        field,
        input: input.to_owned(),
    })
}
