use knightcover_core::{BoardSize, Grid};
use knightcover_solver::MinimizeStats;

use crate::{
    action::{AlertKind, BoardAction, SpinnerKind},
    flow::{FlowExecutor, FlowHandle, helpers},
    worker::{self, WorkError},
};

/// Spawns a flow that minimises `size` in the background.
///
/// Ignored while another flow is running.
pub(crate) fn spawn_generate_flow(executor: &mut FlowExecutor, size: BoardSize) {
    if !executor.is_idle() {
        return;
    }
    let handle = executor.handle();
    executor.spawn(generate_flow(handle, size));
}

async fn generate_flow(handle: FlowHandle, size: BoardSize) {
    let work = worker::request_minimize(size);
    let result = helpers::with_spinner(&handle, SpinnerKind::Minimize, work).await;
    finish_generate(&handle, size, result).await;
}

async fn finish_generate(
    handle: &FlowHandle,
    size: BoardSize,
    result: Result<(Grid, MinimizeStats), WorkError>,
) {
    match result {
        Ok((grid, stats)) => {
            log::info!(
                "generated {size} cover: {} knights after {} passes",
                grid.occupied_count(),
                stats.passes()
            );
            handle.request_action(BoardAction::InstallMinimized(grid).into());
        }
        Err(err) => {
            log::error!("failed to minimise {size} board: {err}");
            let message = err.to_string();
            let _ = helpers::show_alert_dialog(handle, AlertKind::GenerateFailed { message }).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use super::*;
    use crate::action::{Action, ActionRequestQueue, AppAction, ModalRequest, UiAction};

    #[test]
    fn generate_flow_installs_minimized_grid() {
        let size = BoardSize::new(4, 6).unwrap();
        let mut executor = FlowExecutor::new();
        spawn_generate_flow(&mut executor, size);

        let mut queue = ActionRequestQueue::default();
        let mut actions = Vec::new();
        for _ in 0..10_000 {
            executor.poll(&mut queue);
            actions.extend(queue.take_all());
            if executor.is_idle() {
                break;
            }
            thread::sleep(Duration::from_millis(1));
        }
        assert!(executor.is_idle(), "flow did not finish");

        assert!(matches!(
            actions.first(),
            Some(Action::Ui(UiAction::StartSpinner { .. }))
        ));
        let installed = actions.iter().find_map(|action| match action {
            Action::App(AppAction::Board(BoardAction::InstallMinimized(grid))) => Some(grid),
            _ => None,
        });
        assert_eq!(installed.map(knightcover_core::Grid::size), Some(size));
        assert!(
            actions
                .iter()
                .any(|action| matches!(action, Action::Ui(UiAction::StopSpinner { .. })))
        );
    }

    #[test]
    fn worker_failure_opens_alert() {
        let size = BoardSize::new(3, 3).unwrap();
        let mut executor = FlowExecutor::new();
        let handle = executor.handle();
        executor.spawn(async move {
            finish_generate(&handle, size, Err(WorkError::WorkerDisconnected)).await;
        });

        let mut queue = ActionRequestQueue::default();
        executor.poll(&mut queue);
        let actions = queue.take_all();

        assert!(matches!(
            actions.as_slice(),
            [Action::Ui(UiAction::OpenModal(ModalRequest::Alert {
                kind: AlertKind::GenerateFailed { message },
                ..
            }))] if message == "worker disconnected"
        ));
        assert!(!executor.is_idle(), "flow waits for the alert to close");
    }

    #[test]
    fn second_flow_is_ignored_while_busy() {
        let mut executor = FlowExecutor::new();
        executor.spawn(std::future::pending());
        spawn_generate_flow(&mut executor, BoardSize::default());

        let mut queue = ActionRequestQueue::default();
        executor.poll(&mut queue);
        assert!(queue.take_all().is_empty());
    }
}
