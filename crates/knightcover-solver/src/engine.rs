//! Ownership of the current cover.

use knightcover_core::{BoardSize, Grid};

use crate::{MinimizeStats, greedy};

/// Errors returned by [`CoverEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// A replacement grid had different dimensions from the current one.
    #[display("grid size {found} does not match the board size {expected}")]
    SizeMismatch {
        /// Current board size.
        expected: BoardSize,
        /// Size of the rejected grid.
        found: BoardSize,
    },
}

/// Holds the grid shown to the user.
///
/// Every resize rebuilds the board from a fully occupied grid and minimises
/// it, so the result depends only on the size.
///
/// # Examples
///
/// ```
/// use knightcover_core::BoardSize;
/// use knightcover_solver::{CoverEngine, cover};
///
/// let mut engine = CoverEngine::new(BoardSize::CHESSBOARD);
/// assert!(cover::is_locally_minimal(engine.grid()));
///
/// engine.resize(BoardSize::new(1, 1)?);
/// assert_eq!(engine.occupied_count(), 1);
/// # Ok::<(), knightcover_core::BoardSizeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverEngine {
    grid: Grid,
}

impl CoverEngine {
    /// Creates an engine holding the minimised cover of `size`.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        let (grid, _) = minimized(size);
        Self { grid }
    }

    /// Replaces the grid with the minimised cover of `size`.
    pub fn resize(&mut self, size: BoardSize) -> MinimizeStats {
        let (grid, stats) = minimized(size);
        log::info!(
            "resized board to {size}: {} knights after {} passes",
            grid.occupied_count(),
            stats.passes()
        );
        self.grid = grid;
        stats
    }

    /// Returns the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the current board size.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.grid.size()
    }

    /// Returns the number of knights on the board.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.grid.occupied_count()
    }

    /// Replaces the grid with one computed elsewhere, such as the result of a
    /// stepped reduction.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SizeMismatch`] if `grid` has a different size.
    pub fn replace_grid(&mut self, grid: Grid) -> Result<(), EngineError> {
        if grid.size() != self.size() {
            return Err(EngineError::SizeMismatch {
                expected: self.size(),
                found: grid.size(),
            });
        }
        self.grid = grid;
        Ok(())
    }

    /// Installs a grid produced by [`minimized`] on another thread.
    pub fn install(&mut self, grid: Grid) {
        self.grid = grid;
    }
}

/// Builds the fully occupied grid of `size` and minimises it.
#[must_use]
pub fn minimized(size: BoardSize) -> (Grid, MinimizeStats) {
    let mut grid = Grid::filled(size);
    let stats = greedy::minimize(&mut grid);
    (grid, stats)
}
