use knightcover_core::{BoardSize, SizeInputError};
use knightcover_solver::CoverEngine;

use crate::state::Settings;

// AppState holds the board and persisted preferences. Only the board size and
// settings survive a restart; the grid is rebuilt from the size.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) engine: CoverEngine,
    pub(crate) size_input: SizeInput,
    pub(crate) settings: Settings,
    pub(crate) cover_status: CoverStatus,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(size: BoardSize, settings: Settings) -> Self {
        Self {
            engine: CoverEngine::new(size),
            size_input: SizeInput::from_size(size),
            settings,
            cover_status: CoverStatus::Minimized,
            dirty: false,
        }
    }

    pub(crate) fn access(&mut self) -> AppStateAccess<'_> {
        AppStateAccess { app_state: self }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BoardSize::default(), Settings::default())
    }
}

#[derive(Debug)]
pub(crate) struct AppStateAccess<'a> {
    app_state: &'a mut AppState,
}

impl AppStateAccess<'_> {
    #[must_use]
    pub(crate) fn as_ref(&self) -> &AppState {
        self.app_state
    }

    pub(crate) fn as_mut(&mut self) -> &mut AppState {
        self.app_state.dirty = true;
        self.app_state
    }
}

/// Text of the row and column fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SizeInput {
    pub(crate) rows: String,
    pub(crate) cols: String,
}

impl SizeInput {
    #[must_use]
    pub(crate) fn from_size(size: BoardSize) -> Self {
        Self {
            rows: size.rows().to_string(),
            cols: size.cols().to_string(),
        }
    }

    pub(crate) fn parse(&self) -> Result<BoardSize, SizeInputError> {
        BoardSize::parse_fields(&self.rows, &self.cols)
    }
}

/// How the grid currently on the board was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum CoverStatus {
    /// Built by the fixed-point minimiser.
    Minimized,
    /// Left by a demonstration that ran to the end.
    DemoCompleted,
    /// Left by a demonstration stopped during reduction.
    DemoStopped,
}
