use std::{fmt, sync::Arc};

use eframe::egui::Context;
use knightcover_solver::CancelToken;

use crate::{
    action::{ModalRequest, SpinnerId, SpinnerKind},
    demo::DemoEvent,
    flow::FlowExecutor,
};

// UiState holds ephemeral UI-only state (modals, spinners, the running demo).
// It is not persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalRequest>,
    pub(crate) executor: FlowExecutor,
    pub(crate) spinner_state: SpinnerState,
    pub(crate) demo: Option<DemoSession>,
    pub(crate) repaint: RepaintSignal,
}

impl UiState {
    #[must_use]
    pub(crate) fn new(repaint: RepaintSignal) -> Self {
        Self {
            active_modal: None,
            executor: FlowExecutor::new(),
            spinner_state: SpinnerState::default(),
            demo: None,
            repaint,
        }
    }

    #[must_use]
    pub(crate) fn is_demo_running(&self) -> bool {
        self.demo.is_some()
    }
}

/// Foreground view of a demonstration running on its own thread.
#[derive(Debug)]
pub(crate) struct DemoSession {
    pub(crate) cancel: CancelToken,
    pub(crate) frame: Option<DemoEvent>,
}

impl DemoSession {
    #[must_use]
    pub(crate) fn new(cancel: CancelToken) -> Self {
        Self {
            cancel,
            frame: None,
        }
    }

    #[must_use]
    pub(crate) fn is_stopping(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Asks the UI to redraw; callable from any thread.
#[derive(Clone)]
pub(crate) struct RepaintSignal(Arc<dyn Fn() + Send + Sync>);

impl RepaintSignal {
    #[must_use]
    pub(crate) fn from_context(ctx: &Context) -> Self {
        let ctx = ctx.clone();
        Self(Arc::new(move || ctx.request_repaint()))
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn noop() -> Self {
        Self(Arc::new(|| {}))
    }

    pub(crate) fn request(&self) {
        (self.0)();
    }
}

impl fmt::Debug for RepaintSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepaintSignal").finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub(crate) struct SpinnerState {
    active: Vec<SpinnerEntry>,
}

impl SpinnerState {
    pub(crate) fn start(&mut self, id: SpinnerId, kind: SpinnerKind) {
        self.active.push(SpinnerEntry { id, kind });
    }

    pub(crate) fn stop(&mut self, id: SpinnerId) {
        if let Some(index) = self.active.iter().position(|entry| entry.id == id) {
            self.active.remove(index);
        }
    }

    #[must_use]
    pub(crate) fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    #[must_use]
    pub(crate) fn active_kind(&self) -> Option<SpinnerKind> {
        self.active.first().map(|entry| entry.kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SpinnerEntry {
    id: SpinnerId,
    kind: SpinnerKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_stop_removes_only_matching_id() {
        let mut spinners = SpinnerState::default();
        spinners.start(SpinnerId::new(1), SpinnerKind::Minimize);
        spinners.start(SpinnerId::new(2), SpinnerKind::Minimize);

        spinners.stop(SpinnerId::new(1));
        assert!(spinners.is_active());
        spinners.stop(SpinnerId::new(1));
        assert!(spinners.is_active());
        spinners.stop(SpinnerId::new(2));
        assert!(!spinners.is_active());
        assert_eq!(spinners.active_kind(), None);
    }
}
