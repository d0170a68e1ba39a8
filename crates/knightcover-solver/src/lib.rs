//! Knight cover algorithms.
//!
//! A board configuration is a *full cover* when every empty cell is attacked
//! by a knight standing on an occupied cell. This crate decides that property
//! and reduces a full cover to a *locally minimal* one, where no single knight
//! can be removed without breaking it.
//!
//! # Overview
//!
//! - [`attack`]: whether a cell is attacked by any knight on the board
//! - [`cover`]: the full-cover predicate and local-minimality check
//! - [`greedy`]: fixed-point minimisation, repeating row-major passes until stable
//! - [`stepped`]: a single row-major pass driven one cell at a time, with
//!   observation events and cooperative cancellation
//! - [`engine`]: owns the current grid and rebuilds it on resize
//!
//! Neither reduction searches for a globally minimum cover. The result depends
//! on the row-major scan order and the fully occupied starting board.
//!
//! # Examples
//!
//! ```
//! use knightcover_core::{BoardSize, Grid};
//! use knightcover_solver::{cover, greedy};
//!
//! let mut grid = Grid::filled(BoardSize::new(5, 5)?);
//! let stats = greedy::minimize(&mut grid);
//!
//! assert!(cover::is_full_cover(&grid));
//! assert!(cover::is_locally_minimal(&grid));
//! assert!(grid.occupied_count() < 25);
//! assert_eq!(stats.removed(), 25 - grid.occupied_count());
//! # Ok::<(), knightcover_core::BoardSizeError>(())
//! ```

pub mod attack;
pub mod cancel;
pub mod cover;
pub mod engine;
pub mod greedy;
pub mod stepped;

pub use self::{
    cancel::CancelToken,
    engine::{CoverEngine, EngineError},
    greedy::MinimizeStats,
    stepped::{PassOutcome, ReductionEvent, ReductionStep, StepOutcome, SteppedReducer},
};
