use crate::{
    demo::{DemoEvent, Probe},
    state::{AppState, CoverStatus, UiState},
    ui::{
        board::{BoardViewModel, CellVisualState},
        control_panel::ControlPanelViewModel,
        main_screen::MainScreenViewModel,
        sidebar::SidebarViewModel,
        status_line::{BoardStatus, StatusLineViewModel},
    },
};

/// The board shows the demo's latest frame while one is running, and the
/// engine grid otherwise.
#[must_use]
pub(crate) fn build_main_screen_vm(app_state: &AppState, ui_state: &UiState) -> MainScreenViewModel {
    let frame = ui_state
        .demo
        .as_ref()
        .and_then(|session| session.frame.as_ref());

    let (board_vm, knights) = match frame {
        Some(event) => (build_demo_board_vm(event), event.grid.occupied_count()),
        None => (
            BoardViewModel::from_grid(app_state.engine.grid()),
            app_state.engine.occupied_count(),
        ),
    };

    let status = match (&ui_state.demo, frame) {
        (Some(session), Some(event)) => BoardStatus::DemoRunning {
            phase: event.phase,
            stopping: session.is_stopping(),
        },
        _ => match app_state.cover_status {
            CoverStatus::Minimized => BoardStatus::Minimized,
            CoverStatus::DemoCompleted => BoardStatus::DemoCompleted,
            CoverStatus::DemoStopped => BoardStatus::DemoStopped,
        },
    };

    MainScreenViewModel::new(board_vm, StatusLineViewModel::new(status, knights))
}

fn build_demo_board_vm(event: &DemoEvent) -> BoardViewModel {
    let mut vm = BoardViewModel::from_grid(&event.grid);
    if let Some(focus) = event.focus {
        let state = match focus.probe {
            Probe::Placed => CellVisualState::PLACED,
            Probe::Vacated => CellVisualState::VACATED,
            Probe::Restored => CellVisualState::RESTORED,
            Probe::Removed => CellVisualState::REMOVED,
        };
        vm.highlight(focus.position, state);
    }
    vm
}

#[must_use]
pub(crate) fn build_control_panel_vm<'a>(
    app_state: &'a AppState,
    ui_state: &UiState,
) -> ControlPanelViewModel<'a> {
    let knights = ui_state
        .demo
        .as_ref()
        .and_then(|session| session.frame.as_ref())
        .map_or_else(
            || app_state.engine.occupied_count(),
            |event| event.grid.occupied_count(),
        );
    ControlPanelViewModel::new(
        &app_state.size_input.rows,
        &app_state.size_input.cols,
        knights,
        ui_state.is_demo_running(),
        ui_state
            .demo
            .as_ref()
            .is_some_and(crate::state::DemoSession::is_stopping),
    )
}

#[must_use]
pub(crate) fn build_sidebar_vm(app_state: &AppState) -> SidebarViewModel<'_> {
    SidebarViewModel::new(&app_state.settings)
}
