use std::{
    env,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use knightcover_core::Grid;

use crate::{
    action::{
        Action, ActionRequestQueue, AlertKind, AppAction, BoardAction, DemoAction, ExportAction,
        ExportDialog, FlowAction, ModalRequest, SettingsAction, SizeInputAction, UiAction,
    },
    demo::{self, DemoConfig, DemoEvent, DemoOutcome},
    flow::tasks,
    state::{AppState, AppStateAccess, CoverStatus, DemoSession, SizeInput, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: AppStateAccess<'a>,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state: app_state.access(),
        ui_state,
    };

    match action {
        Action::App(action) => match action {
            AppAction::Board(BoardAction::InstallMinimized(grid)) => ctx.install_minimized(grid),
            AppAction::SizeInput(SizeInputAction::Update { rows, cols }) => {
                ctx.app_state.as_mut().size_input = SizeInput { rows, cols };
            }
            AppAction::Demo(action) => match action {
                DemoAction::ShowFrame(event) => ctx.show_demo_frame(event),
                DemoAction::Finish(outcome) => ctx.finish_demo(outcome),
                DemoAction::Stop => ctx.stop_demo(),
            },
            AppAction::Export(ExportAction::Open) => ctx.open_export(),
            AppAction::Export(ExportAction::Save) => ctx.save_export(),
            AppAction::Settings(SettingsAction::UpdateSettings(settings)) => {
                ctx.app_state.as_mut().settings = settings;
            }
        },
        Action::Ui(action) => match action {
            UiAction::OpenModal(modal_request) => {
                ctx.ui_state.active_modal = Some(modal_request);
            }
            UiAction::CloseModal => {
                ctx.ui_state.active_modal = None;
            }
            UiAction::StartSpinner { id, kind } => {
                ctx.ui_state.spinner_state.start(id, kind);
            }
            UiAction::StopSpinner { id } => {
                ctx.ui_state.spinner_state.stop(id);
            }
        },
        Action::Flow(action) => match action {
            FlowAction::Generate => ctx.start_generate(),
            FlowAction::StartDemo => ctx.start_demo(),
        },
    }
}

impl ActionContext<'_> {
    fn start_generate(&mut self) {
        if self.ui_state.is_demo_running() {
            log::debug!("ignoring generate while a demo is running");
            return;
        }
        match self.app_state.as_ref().size_input.parse() {
            Ok(size) => tasks::spawn_generate_flow(&mut self.ui_state.executor, size),
            Err(err) => {
                log::warn!("rejected board size: {err}");
                self.open_alert(AlertKind::InvalidSize(err));
            }
        }
    }

    fn install_minimized(&mut self, grid: Grid) {
        let app_state = self.app_state.as_mut();
        app_state.size_input = SizeInput::from_size(grid.size());
        app_state.engine.install(grid);
        app_state.cover_status = CoverStatus::Minimized;
    }

    fn start_demo(&mut self) {
        if self.ui_state.is_demo_running() {
            log::warn!("demo already running");
            self.open_alert(AlertKind::DemoAlreadyRunning);
            return;
        }
        let app_state = self.app_state.as_ref();
        let size = app_state.engine.size();
        let config = DemoConfig::from(&app_state.settings.demo);

        let handle = demo::spawn(size, config, self.ui_state.repaint.clone());
        self.ui_state.demo = Some(DemoSession::new(handle.cancel_token()));
        tasks::spawn_demo_flow(&mut self.ui_state.executor, handle);
    }

    fn stop_demo(&mut self) {
        if let Some(session) = &self.ui_state.demo {
            log::info!("stopping demo");
            session.cancel.cancel();
        }
    }

    fn show_demo_frame(&mut self, event: DemoEvent) {
        if let Some(session) = &mut self.ui_state.demo {
            session.frame = Some(event);
        }
    }

    fn finish_demo(&mut self, outcome: DemoOutcome) {
        self.ui_state.demo = None;
        let (grid, status) = match outcome {
            DemoOutcome::Completed { grid, .. } => (grid, CoverStatus::DemoCompleted),
            DemoOutcome::Stopped { grid } => (grid, CoverStatus::DemoStopped),
            DemoOutcome::Abandoned => return,
        };
        let app_state = self.app_state.as_mut();
        match app_state.engine.replace_grid(grid) {
            Ok(()) => app_state.cover_status = status,
            Err(err) => log::error!("discarding demo result: {err}"),
        }
    }

    fn open_export(&mut self) {
        let report = knightcover_report::generate_report(self.app_state.as_ref().engine.grid());
        println!("{report}");

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis());
        self.ui_state.active_modal = Some(ModalRequest::Export(ExportDialog {
            report,
            path: knightcover_report::default_file_name(millis),
        }));
    }

    fn save_export(&mut self) {
        let Some(ModalRequest::Export(dialog)) = &self.ui_state.active_modal else {
            return;
        };
        let path = PathBuf::from(dialog.path.trim());
        let kind = match knightcover_report::save_report(&path, &dialog.report) {
            Ok(()) => AlertKind::ReportSaved {
                path: absolute(&path),
            },
            Err(err) => {
                log::warn!("{err}");
                AlertKind::ReportSaveFailed {
                    message: err.to_string(),
                }
            }
        };
        self.open_alert(kind);
    }

    fn open_alert(&mut self, kind: AlertKind) {
        self.ui_state.active_modal = Some(ModalRequest::alert(kind));
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_owned();
    }
    env::current_dir().map_or_else(|_| path.to_owned(), |dir| dir.join(path))
}

#[cfg(test)]
mod tests {
    use std::{fs, process, thread, time::Duration};

    use knightcover_core::{BoardSize, Cell, Position, SizeField, SizeInputError};
    use knightcover_solver::{CancelToken, cover};

    use super::*;
    use crate::{
        demo::{DemoPhase, Focus, Probe},
        state::{DemoMode, RepaintSignal, Settings},
    };

    fn size(rows: usize, cols: usize) -> BoardSize {
        BoardSize::new(rows, cols).unwrap()
    }

    fn states(rows: usize, cols: usize) -> (AppState, UiState) {
        (
            AppState::new(size(rows, cols), Settings::default()),
            UiState::new(RepaintSignal::noop()),
        )
    }

    fn alert_kind(ui_state: &UiState) -> Option<&AlertKind> {
        match &ui_state.active_modal {
            Some(ModalRequest::Alert { kind, .. }) => Some(kind),
            _ => None,
        }
    }

    #[test]
    fn invalid_size_opens_alert_and_keeps_board() {
        let (mut app_state, mut ui_state) = states(5, 5);
        let before = app_state.engine.clone();

        handle(
            &mut app_state,
            &mut ui_state,
            SizeInputAction::Update {
                rows: String::new(),
                cols: "4".to_owned(),
            }
            .into(),
        );
        handle(&mut app_state, &mut ui_state, FlowAction::Generate.into());

        assert_eq!(
            alert_kind(&ui_state),
            Some(&AlertKind::InvalidSize(SizeInputError::Empty {
                field: SizeField::Rows
            }))
        );
        assert_eq!(app_state.engine, before);
        assert!(ui_state.executor.is_idle());
    }

    #[test]
    fn oversized_board_is_rejected_before_reaching_worker() {
        let (mut app_state, mut ui_state) = states(5, 5);
        let before = app_state.engine.clone();

        handle(
            &mut app_state,
            &mut ui_state,
            SizeInputAction::Update {
                rows: "4294967296".to_owned(),
                cols: "4294967296".to_owned(),
            }
            .into(),
        );
        handle(&mut app_state, &mut ui_state, FlowAction::Generate.into());

        assert_eq!(
            alert_kind(&ui_state),
            Some(&AlertKind::InvalidSize(SizeInputError::TooLarge {
                rows: 4_294_967_296,
                cols: 4_294_967_296
            }))
        );
        assert_eq!(app_state.engine, before);
        assert!(ui_state.executor.is_idle());
    }

    #[test]
    fn valid_size_spawns_generate_flow() {
        let (mut app_state, mut ui_state) = states(5, 5);
        app_state.size_input = SizeInput::from_size(size(3, 7));

        handle(&mut app_state, &mut ui_state, FlowAction::Generate.into());

        assert!(!ui_state.executor.is_idle());
        assert!(ui_state.active_modal.is_none());
    }

    #[test]
    fn install_minimized_replaces_board_and_fields() {
        let (mut app_state, mut ui_state) = states(5, 5);
        app_state.cover_status = CoverStatus::DemoStopped;
        let (grid, _) = knightcover_solver::engine::minimized(size(4, 9));

        handle(
            &mut app_state,
            &mut ui_state,
            BoardAction::InstallMinimized(grid.clone()).into(),
        );

        assert_eq!(app_state.engine.grid(), &grid);
        assert_eq!(app_state.size_input, SizeInput::from_size(size(4, 9)));
        assert_eq!(app_state.cover_status, CoverStatus::Minimized);
        assert!(app_state.is_dirty());
    }

    #[test]
    fn second_demo_is_rejected_with_alert() {
        let (mut app_state, mut ui_state) = states(4, 4);
        ui_state.demo = Some(DemoSession::new(CancelToken::new()));

        handle(&mut app_state, &mut ui_state, FlowAction::StartDemo.into());

        assert_eq!(alert_kind(&ui_state), Some(&AlertKind::DemoAlreadyRunning));
        assert!(ui_state.executor.is_idle());
    }

    #[test]
    fn generate_is_ignored_while_demo_runs() {
        let (mut app_state, mut ui_state) = states(4, 4);
        ui_state.demo = Some(DemoSession::new(CancelToken::new()));

        handle(&mut app_state, &mut ui_state, FlowAction::Generate.into());

        assert!(ui_state.executor.is_idle());
        assert!(ui_state.active_modal.is_none());
    }

    #[test]
    fn start_demo_then_stop_cancels_worker() {
        let (mut app_state, mut ui_state) = states(4, 4);
        app_state.settings.demo.clear_delay_ms = 60_000;

        handle(&mut app_state, &mut ui_state, FlowAction::StartDemo.into());
        assert!(ui_state.is_demo_running());
        assert!(!ui_state.executor.is_idle());

        handle(&mut app_state, &mut ui_state, DemoAction::Stop.into());
        assert!(ui_state.demo.as_ref().unwrap().is_stopping());

        let mut queue = ActionRequestQueue::default();
        for _ in 0..5_000 {
            ui_state.executor.poll(&mut queue);
            handle_all(&mut app_state, &mut ui_state, &mut queue);
            if !ui_state.is_demo_running() {
                break;
            }
            thread::sleep(Duration::from_millis(1));
        }
        assert!(!ui_state.is_demo_running());
        assert_eq!(app_state.cover_status, CoverStatus::Minimized);
    }

    #[test]
    fn frames_are_kept_on_the_session() {
        let (mut app_state, mut ui_state) = states(3, 3);
        ui_state.demo = Some(DemoSession::new(CancelToken::new()));
        let event = DemoEvent {
            grid: Grid::filled(size(3, 3)),
            phase: DemoPhase::Reducing { pass: 1 },
            focus: Some(Focus {
                position: Position::new(1, 1),
                probe: Probe::Vacated,
            }),
        };

        handle(
            &mut app_state,
            &mut ui_state,
            DemoAction::ShowFrame(event.clone()).into(),
        );

        assert_eq!(ui_state.demo.as_ref().unwrap().frame, Some(event));
    }

    #[test]
    fn stopped_demo_grid_replaces_board() {
        let (mut app_state, mut ui_state) = states(3, 3);
        ui_state.demo = Some(DemoSession::new(CancelToken::new()));
        let mut grid = Grid::filled(size(3, 3));
        grid.set(Position::new(0, 0), Cell::Empty);

        handle(
            &mut app_state,
            &mut ui_state,
            DemoAction::Finish(DemoOutcome::Stopped { grid: grid.clone() }).into(),
        );

        assert!(!ui_state.is_demo_running());
        assert_eq!(app_state.engine.grid(), &grid);
        assert!(cover::is_full_cover(app_state.engine.grid()));
        assert_eq!(app_state.cover_status, CoverStatus::DemoStopped);
    }

    #[test]
    fn abandoned_demo_keeps_board() {
        let (mut app_state, mut ui_state) = states(3, 3);
        ui_state.demo = Some(DemoSession::new(CancelToken::new()));
        let before = app_state.engine.clone();

        handle(
            &mut app_state,
            &mut ui_state,
            DemoAction::Finish(DemoOutcome::Abandoned).into(),
        );

        assert!(!ui_state.is_demo_running());
        assert_eq!(app_state.engine, before);
        assert_eq!(app_state.cover_status, CoverStatus::Minimized);
    }

    #[test]
    fn completed_demo_of_other_size_is_discarded() {
        let (mut app_state, mut ui_state) = states(3, 3);
        let before = app_state.engine.clone();

        handle(
            &mut app_state,
            &mut ui_state,
            DemoAction::Finish(DemoOutcome::Completed {
                grid: Grid::filled(size(2, 2)),
                passes: 1,
            })
            .into(),
        );

        assert_eq!(app_state.engine, before);
        assert_eq!(app_state.cover_status, CoverStatus::Minimized);
    }

    #[test]
    fn export_opens_dialog_with_report() {
        let (mut app_state, mut ui_state) = states(2, 3);

        handle(&mut app_state, &mut ui_state, ExportAction::Open.into());

        let Some(ModalRequest::Export(dialog)) = &ui_state.active_modal else {
            panic!("export dialog not opened");
        };
        assert_eq!(
            dialog.report,
            knightcover_report::generate_report(app_state.engine.grid())
        );
        assert!(dialog.path.starts_with("minimal_knight_cover_"));
        assert!(dialog.path.ends_with(".txt"));
    }

    #[test]
    fn export_save_reports_absolute_path() {
        let (mut app_state, mut ui_state) = states(2, 2);
        let path = env::temp_dir().join(format!("knightcover-export-{}.txt", process::id()));
        ui_state.active_modal = Some(ModalRequest::Export(ExportDialog {
            report: "report".to_owned(),
            path: path.display().to_string(),
        }));

        handle(&mut app_state, &mut ui_state, ExportAction::Save.into());

        assert_eq!(
            alert_kind(&ui_state),
            Some(&AlertKind::ReportSaved { path: path.clone() })
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "report");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn export_save_failure_opens_error_alert() {
        let (mut app_state, mut ui_state) = states(2, 2);
        let path = env::temp_dir()
            .join("knightcover-missing-dir")
            .join("out.txt");
        ui_state.active_modal = Some(ModalRequest::Export(ExportDialog {
            report: "report".to_owned(),
            path: path.display().to_string(),
        }));

        handle(&mut app_state, &mut ui_state, ExportAction::Save.into());

        assert!(matches!(
            alert_kind(&ui_state),
            Some(AlertKind::ReportSaveFailed { message }) if message.contains("out.txt")
        ));
    }

    #[test]
    fn settings_update_marks_dirty() {
        let (mut app_state, mut ui_state) = states(2, 2);
        let mut settings = Settings::default();
        settings.demo.mode = DemoMode::UntilStable;

        handle(
            &mut app_state,
            &mut ui_state,
            SettingsAction::UpdateSettings(settings.clone()).into(),
        );

        assert_eq!(app_state.settings, settings);
        assert!(app_state.is_dirty());
    }

    #[test]
    fn close_modal_clears_active_modal() {
        let (mut app_state, mut ui_state) = states(2, 2);
        ui_state.active_modal = Some(ModalRequest::alert(AlertKind::DemoAlreadyRunning));

        handle(&mut app_state, &mut ui_state, UiAction::CloseModal.into());

        assert!(ui_state.active_modal.is_none());
    }
}
