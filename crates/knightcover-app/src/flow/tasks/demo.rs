use crate::{
    action::{AlertKind, DemoAction},
    demo::{DemoHandle, DemoMessage, DemoOutcome},
    flow::{FlowExecutor, FlowHandle, helpers},
};

/// Spawns the flow that relays a running demonstration to the UI.
pub(crate) fn spawn_demo_flow(executor: &mut FlowExecutor, demo: DemoHandle) {
    let handle = executor.handle();
    executor.spawn(demo_flow(handle, demo));
}

// Only the newest snapshot of each batch is shown; intermediate ones would be
// drawn over within the same frame.
async fn demo_flow(handle: FlowHandle, mut demo: DemoHandle) {
    let outcome = loop {
        let messages = match demo.next_batch().await {
            Ok(messages) => messages,
            Err(err) => {
                log::error!("{err}");
                break DemoOutcome::Abandoned;
            }
        };

        let mut latest = None;
        let mut finished = None;
        for message in messages {
            match message {
                DemoMessage::Step(event) => latest = Some(event),
                DemoMessage::Finished(outcome) => finished = Some(outcome),
            }
        }
        if let Some(event) = latest {
            handle.request_action(DemoAction::ShowFrame(event).into());
        }
        if let Some(outcome) = finished {
            break outcome;
        }
    };

    let summary = match &outcome {
        DemoOutcome::Completed { grid, passes } => Some(AlertKind::DemoComplete {
            knights: grid.occupied_count(),
            passes: *passes,
        }),
        DemoOutcome::Stopped { .. } | DemoOutcome::Abandoned => None,
    };
    handle.request_action(DemoAction::Finish(outcome).into());
    if let Some(kind) = summary {
        let _ = helpers::show_alert_dialog(&handle, kind).await;
    }
}
