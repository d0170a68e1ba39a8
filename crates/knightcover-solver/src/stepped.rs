//! Observable single-pass reduction.
//!
//! [`SteppedReducer`] applies the same vacate/test/restore rule as
//! [`greedy::reduce_pass`](crate::greedy::reduce_pass) but advances one cell
//! per call, so a caller can pace the pass, watch each tentative change, and
//! stop between cells.
//!
//! Removing knights never makes a kept knight removable, so a completed pass
//! is already locally minimal. A cancelled pass is not: cells after the stop
//! point were never tried.

use knightcover_core::{Cell, Grid, Position};

use crate::{CancelToken, cover};

/// The result of visiting one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepOutcome {
    /// The cell was already empty.
    Skipped,
    /// The knight was removed and the board is still a full cover.
    Removed,
    /// Removing the knight broke the cover, so it was put back.
    Restored,
}

/// A visited cell and what happened to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionStep {
    /// The visited cell.
    pub position: Position,
    /// What happened to it.
    pub outcome: StepOutcome,
}

/// Notifications delivered to the observer of a stepped pass.
///
/// For an occupied cell the observer sees `Vacated`, possibly `Restored`, and
/// then `Visited`. An empty cell produces only `Visited`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ReductionEvent {
    /// The knight at the position was tentatively removed.
    Vacated(Position),
    /// The knight at the position was put back.
    Restored(Position),
    /// The cell has been fully processed.
    Visited(ReductionStep),
}

/// How a [`SteppedReducer::run`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PassOutcome {
    /// Every cell was visited.
    Completed {
        /// Knights removed during the pass.
        removed: usize,
    },
    /// The token was cancelled before the pass finished.
    Cancelled {
        /// Cells visited before the pass stopped.
        visited: usize,
        /// Knights removed before the pass stopped.
        removed: usize,
    },
}

impl PassOutcome {
    /// Returns the number of knights removed.
    #[must_use]
    pub const fn removed(&self) -> usize {
        match *self {
            Self::Completed { removed } | Self::Cancelled { removed, .. } => removed,
        }
    }
}

/// A row-major reduction pass that advances one cell at a time.
///
/// The grid is a full cover before and after every step.
///
/// # Examples
///
/// ```
/// use knightcover_core::{BoardSize, Grid};
/// use knightcover_solver::{StepOutcome, SteppedReducer, cover};
///
/// let mut reducer = SteppedReducer::new(Grid::filled(BoardSize::new(3, 3)?));
/// let first = reducer.step().unwrap();
/// assert_eq!(first.outcome, StepOutcome::Removed);
///
/// let rest = reducer.by_ref().count();
/// assert_eq!(rest, 8);
/// assert!(reducer.is_finished());
/// assert!(cover::is_full_cover(reducer.grid()));
/// # Ok::<(), knightcover_core::BoardSizeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SteppedReducer {
    grid: Grid,
    cursor: usize,
    removed: usize,
}

impl SteppedReducer {
    /// Starts a pass over `grid`, which must be a full cover.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        debug_assert!(cover::is_full_cover(&grid), "reduction requires a full cover");
        Self {
            grid,
            cursor: 0,
            removed: 0,
        }
    }

    /// Returns the grid in its current state.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the reducer and returns the grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Returns the number of cells visited so far.
    #[must_use]
    pub fn visited(&self) -> usize {
        self.cursor
    }

    /// Returns the number of knights removed so far.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Returns `true` once every cell has been visited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.grid.size().cell_count()
    }

    /// Visits the next cell, or returns `None` if the pass is finished.
    pub fn step(&mut self) -> Option<ReductionStep> {
        self.step_with(|_, _| {})
    }

    /// Visits the next cell and reports each change to `observe`.
    ///
    /// `observe` receives the grid as it is right after the reported event.
    pub fn step_with<F>(&mut self, mut observe: F) -> Option<ReductionStep>
    where
        F: FnMut(&Grid, ReductionEvent),
    {
        if self.is_finished() {
            return None;
        }
        let position = self.grid.size().position_at(self.cursor);
        self.cursor += 1;

        let outcome = if self.grid.cell(position).is_empty() {
            StepOutcome::Skipped
        } else {
            self.grid.set(position, Cell::Empty);
            observe(&self.grid, ReductionEvent::Vacated(position));
            if cover::is_full_cover(&self.grid) {
                self.removed += 1;
                StepOutcome::Removed
            } else {
                self.grid.set(position, Cell::Occupied);
                observe(&self.grid, ReductionEvent::Restored(position));
                StepOutcome::Restored
            }
        };

        let step = ReductionStep { position, outcome };
        observe(&self.grid, ReductionEvent::Visited(step));
        Some(step)
    }

    /// Runs the rest of the pass, checking `cancel` before every cell.
    ///
    /// On cancellation the grid keeps the changes made so far.
    pub fn run<F>(&mut self, cancel: &CancelToken, mut observe: F) -> PassOutcome
    where
        F: FnMut(&Grid, ReductionEvent),
    {
        loop {
            if cancel.is_cancelled() {
                return PassOutcome::Cancelled {
                    visited: self.cursor,
                    removed: self.removed,
                };
            }
            if self.step_with(&mut observe).is_none() {
                return PassOutcome::Completed {
                    removed: self.removed,
                };
            }
        }
    }
}

impl Iterator for SteppedReducer {
    type Item = ReductionStep;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.size().cell_count() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SteppedReducer {}
