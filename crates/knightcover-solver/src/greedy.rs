//! Fixed-point minimisation.
//!
//! Starting from a full cover, each pass visits the cells in row-major order.
//! An occupied cell is tentatively vacated and restored if the board stops
//! being a full cover. Passes repeat until one removes nothing, so the result
//! is locally minimal.

use knightcover_core::{Cell, Grid};

use crate::cover;

/// Counters describing a completed minimisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimizeStats {
    passes: usize,
    removed: usize,
}

impl MinimizeStats {
    /// Returns the number of row-major passes, including the final pass that
    /// removed nothing.
    #[must_use]
    pub const fn passes(&self) -> usize {
        self.passes
    }

    /// Returns the total number of knights removed.
    #[must_use]
    pub const fn removed(&self) -> usize {
        self.removed
    }
}

/// Runs one row-major pass and returns the number of knights removed.
///
/// The input must be a full cover; the output is again a full cover.
pub fn reduce_pass(grid: &mut Grid) -> usize {
    let mut removed = 0;
    for pos in grid.size().positions() {
        if grid.cell(pos).is_empty() {
            continue;
        }
        grid.set(pos, Cell::Empty);
        if cover::is_full_cover(grid) {
            removed += 1;
        } else {
            grid.set(pos, Cell::Occupied);
        }
    }
    removed
}

/// Repeats [`reduce_pass`] until a pass removes nothing.
///
/// The input must be a full cover. Knights kept by a pass stay required
/// after later removals, so the second pass never removes anything and
/// the loop ends after at most two passes.
///
/// # Examples
///
/// ```
/// use knightcover_core::{BoardSize, Grid};
/// use knightcover_solver::greedy;
///
/// let mut grid = Grid::filled(BoardSize::new(1, 4)?);
/// let stats = greedy::minimize(&mut grid);
///
/// // No knight moves exist on a single row, so nothing can be removed.
/// assert_eq!(grid.occupied_count(), 4);
/// assert_eq!(stats.passes(), 1);
/// assert_eq!(stats.removed(), 0);
/// # Ok::<(), knightcover_core::BoardSizeError>(())
/// ```
pub fn minimize(grid: &mut Grid) -> MinimizeStats {
    debug_assert!(cover::is_full_cover(grid), "minimisation requires a full cover");

    let mut stats = MinimizeStats::default();
    loop {
        let removed = reduce_pass(grid);
        stats.passes += 1;
        stats.removed += removed;
        log::debug!(
            "pass {} on {} board removed {removed} knights, {} remain",
            stats.passes,
            grid.size(),
            grid.occupied_count()
        );
        if removed == 0 {
            return stats;
        }
    }
}
