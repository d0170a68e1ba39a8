//! Attack oracle.

use knightcover_core::{Grid, KNIGHT_OFFSETS, Position};

/// Returns `true` if a knight on an occupied cell attacks `pos`.
///
/// Only the eight knight offsets are inspected, so the cost does not depend on
/// the board size. The state of `pos` itself is ignored.
///
/// # Panics
///
/// Panics if `pos` is outside the board.
///
/// # Examples
///
/// ```
/// use knightcover_core::{Grid, Position};
/// use knightcover_solver::attack::is_attacked;
///
/// let grid: Grid = "
///     N..
///     ...
///     ...
/// ".parse()?;
/// assert!(is_attacked(&grid, Position::new(1, 2)));
/// assert!(is_attacked(&grid, Position::new(2, 1)));
/// assert!(!is_attacked(&grid, Position::new(1, 1)));
/// # Ok::<(), knightcover_core::GridParseError>(())
/// ```
#[must_use]
#[inline]
pub fn is_attacked(grid: &Grid, pos: Position) -> bool {
    let size = grid.size();
    assert!(size.contains(pos), "{pos} is outside a {size} board");
    KNIGHT_OFFSETS.iter().any(|&(d_row, d_col)| {
        pos.offset(d_row, d_col, size)
            .is_some_and(|from| grid.cell(from).is_occupied())
    })
}
