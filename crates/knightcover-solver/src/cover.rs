//! Full-cover predicate.
//!
//! Both reduction algorithms use [`is_full_cover`] as their only correctness
//! check, evaluated from scratch after every tentative change. Vacating a
//! single cell changes the attacked status of up to eight neighbours, so no
//! result is cached between calls.

use knightcover_core::{Cell, Grid, Position};

use crate::attack;

/// Returns the empty cells that no knight attacks, in row-major order.
pub fn uncovered(grid: &Grid) -> impl Iterator<Item = Position> + '_ {
    grid.size()
        .positions()
        .filter(|&pos| grid.cell(pos).is_empty() && !attack::is_attacked(grid, pos))
}

/// Returns `true` if every empty cell is attacked by a knight.
///
/// Scans row-major and stops at the first uncovered cell.
///
/// # Examples
///
/// ```
/// use knightcover_core::{BoardSize, Grid};
/// use knightcover_solver::cover::is_full_cover;
///
/// assert!(is_full_cover(&Grid::filled(BoardSize::CHESSBOARD)));
/// assert!(!is_full_cover(&Grid::empty(BoardSize::CHESSBOARD)));
/// ```
#[must_use]
pub fn is_full_cover(grid: &Grid) -> bool {
    uncovered(grid).next().is_none()
}

/// Returns `true` if `grid` is a full cover and vacating any single occupied
/// cell breaks it.
#[must_use]
pub fn is_locally_minimal(grid: &Grid) -> bool {
    if !is_full_cover(grid) {
        return false;
    }
    let mut probe = grid.clone();
    grid.occupied_positions().all(|pos| {
        probe.set(pos, Cell::Empty);
        let required = !is_full_cover(&probe);
        probe.set(pos, Cell::Occupied);
        required
    })
}
