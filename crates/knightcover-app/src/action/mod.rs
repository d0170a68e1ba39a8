use std::{mem, path::PathBuf};

use knightcover_core::{Grid, SizeInputError};

use crate::{
    demo::{DemoEvent, DemoOutcome},
    state::Settings,
};

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    App(AppAction),
    Ui(UiAction),
    Flow(FlowAction),
}

#[derive(Debug, derive_more::From)]
pub(crate) enum AppAction {
    Board(BoardAction),
    SizeInput(SizeInputAction),
    Demo(DemoAction),
    Export(ExportAction),
    Settings(SettingsAction),
}

#[derive(Debug)]
pub(crate) enum BoardAction {
    /// Installs a minimised grid computed by the background worker.
    InstallMinimized(Grid),
}

#[derive(Debug)]
pub(crate) enum SizeInputAction {
    Update { rows: String, cols: String },
}

#[derive(Debug)]
pub(crate) enum DemoAction {
    ShowFrame(DemoEvent),
    Finish(DemoOutcome),
    Stop,
}

#[derive(Debug)]
pub(crate) enum ExportAction {
    Open,
    Save,
}

#[derive(Debug)]
pub(crate) enum SettingsAction {
    UpdateSettings(Settings),
}

#[derive(Debug)]
pub(crate) enum UiAction {
    OpenModal(ModalRequest),
    CloseModal,
    StartSpinner { id: SpinnerId, kind: SpinnerKind },
    StopSpinner { id: SpinnerId },
}

#[derive(Debug)]
pub(crate) enum FlowAction {
    Generate,
    StartDemo,
}

impl From<BoardAction> for Action {
    fn from(action: BoardAction) -> Self {
        Action::App(action.into())
    }
}

impl From<SizeInputAction> for Action {
    fn from(action: SizeInputAction) -> Self {
        Action::App(action.into())
    }
}

impl From<DemoAction> for Action {
    fn from(action: DemoAction) -> Self {
        Action::App(action.into())
    }
}

impl From<ExportAction> for Action {
    fn from(action: ExportAction) -> Self {
        Action::App(action.into())
    }
}

impl From<SettingsAction> for Action {
    fn from(action: SettingsAction) -> Self {
        Action::App(action.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SpinnerId(u64);

impl SpinnerId {
    #[must_use]
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpinnerKind {
    Minimize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AlertResult {
    Ok,
}

pub(crate) type Responder<T> = futures_channel::oneshot::Sender<T>;
pub(crate) type AlertResponder = Responder<AlertResult>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AlertKind {
    InvalidSize(SizeInputError),
    DemoAlreadyRunning,
    DemoComplete { knights: usize, passes: usize },
    ReportSaved { path: PathBuf },
    ReportSaveFailed { message: String },
    GenerateFailed { message: String },
}

#[derive(Debug)]
pub(crate) enum ModalRequest {
    Alert {
        kind: AlertKind,
        responder: Option<AlertResponder>,
    },
    Export(ExportDialog),
}

impl ModalRequest {
    #[must_use]
    pub(crate) fn alert(kind: AlertKind) -> Self {
        Self::Alert {
            kind,
            responder: None,
        }
    }
}

/// Contents of the export dialog; `path` is edited in place by the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportDialog {
    pub(crate) report: String,
    pub(crate) path: String,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue, AppAction, DemoAction, FlowAction};

    #[test]
    fn take_all_returns_actions_in_order_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(FlowAction::Generate.into());
        queue.request(DemoAction::Stop.into());

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], Action::Flow(FlowAction::Generate)));
        assert!(matches!(
            drained[1],
            Action::App(AppAction::Demo(DemoAction::Stop))
        ));

        assert!(queue.take_all().is_empty());
    }
}
