//! Core data structures for knight cover computations.
//!
//! This crate provides the board representation shared by the solver, the
//! report generator, and the desktop application.
//!
//! # Overview
//!
//! 1. **Dimensions and coordinates**
//!    - [`board_size`]: validated board dimensions and parsing of user-entered sizes
//!    - [`position`]: 0-based `(row, col)` coordinates in row-major order
//!
//! 2. **Knight geometry**
//!    - [`knight`]: the eight knight offsets and in-bounds target iteration
//!
//! 3. **Board state**
//!    - [`grid`]: per-cell occupancy of a fixed-size board
//!
//! # Examples
//!
//! ```
//! use knightcover_core::{BoardSize, Cell, Grid, Position};
//!
//! let size = BoardSize::new(3, 4)?;
//! let mut grid = Grid::filled(size);
//! assert_eq!(grid.occupied_count(), 12);
//!
//! grid.set(Position::new(1, 2), Cell::Empty);
//! assert!(grid.cell(Position::new(1, 2)).is_empty());
//! assert_eq!(grid.occupied_count(), 11);
//! # Ok::<(), knightcover_core::BoardSizeError>(())
//! ```

pub mod board_size;
pub mod grid;
pub mod knight;
pub mod position;

pub use self::{
    board_size::{BoardSize, BoardSizeError, SizeField, SizeInputError},
    grid::{Cell, Grid, GridParseError},
    knight::KNIGHT_OFFSETS,
    position::Position,
};
