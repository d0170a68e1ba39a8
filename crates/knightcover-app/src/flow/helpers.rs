use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures_channel::oneshot;
use portable_atomic::AtomicU64;

use crate::{
    action::{AlertKind, AlertResult, ModalRequest, SpinnerId, SpinnerKind, UiAction},
    flow::FlowHandle,
};

/// Opens an alert and waits until it is dismissed.
pub(super) async fn show_alert_dialog(handle: &FlowHandle, kind: AlertKind) -> AlertResult {
    let (responder, receiver) = oneshot::channel();
    handle.request_action(
        UiAction::OpenModal(ModalRequest::Alert {
            kind,
            responder: Some(responder),
        })
        .into(),
    );
    // A replaced modal drops the responder; treat that as dismissal.
    receiver.await.unwrap_or(AlertResult::Ok)
}

#[must_use]
pub(super) fn with_spinner<F>(
    handle: &FlowHandle,
    kind: SpinnerKind,
    future: F,
) -> WithSpinnerFuture<F>
where
    F: Future,
{
    WithSpinnerFuture::new(handle.clone(), kind, future)
}

/// Shows a spinner while the inner future runs.
pub(super) struct WithSpinnerFuture<F>
where
    F: Future,
{
    handle: FlowHandle,
    id: SpinnerId,
    kind: SpinnerKind,
    started: bool,
    stopped: bool,
    inner: Pin<Box<F>>,
}

impl<F> WithSpinnerFuture<F>
where
    F: Future,
{
    fn new(handle: FlowHandle, kind: SpinnerKind, future: F) -> Self {
        static NEXT_SPINNER_ID: AtomicU64 = AtomicU64::new(1);

        let id = SpinnerId::new(NEXT_SPINNER_ID.fetch_add(1, portable_atomic::Ordering::Relaxed));
        Self {
            handle,
            id,
            kind,
            started: false,
            stopped: false,
            inner: Box::pin(future),
        }
    }

    fn stop(&mut self) {
        if self.started && !self.stopped {
            self.stopped = true;
            self.handle
                .request_action(UiAction::StopSpinner { id: self.id }.into());
        }
    }
}

impl<F> Future for WithSpinnerFuture<F>
where
    F: Future,
{
    type Output = F::Output;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if !self.started {
            self.started = true;
            let (id, kind) = (self.id, self.kind);
            self.handle
                .request_action(UiAction::StartSpinner { id, kind }.into());
        }

        let result = self.inner.as_mut().poll(cx);
        if result.is_ready() {
            self.stop();
        }
        result
    }
}

impl<F> Drop for WithSpinnerFuture<F>
where
    F: Future,
{
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::{future, task::Poll};

    use super::*;
    use crate::{
        action::{Action, ActionRequestQueue},
        flow::FlowExecutor,
    };

    fn spinner_events(actions: &[Action]) -> Vec<(&'static str, SpinnerId)> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::Ui(UiAction::StartSpinner { id, .. }) => Some(("start", *id)),
                Action::Ui(UiAction::StopSpinner { id }) => Some(("stop", *id)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn with_spinner_starts_and_stops_once() {
        let mut executor = FlowExecutor::new();
        let handle = executor.handle();
        let mut remaining = 1;
        executor.spawn(async move {
            let work = future::poll_fn(move |_| {
                if remaining == 0 {
                    Poll::Ready(())
                } else {
                    remaining -= 1;
                    Poll::Pending
                }
            });
            with_spinner(&handle, SpinnerKind::Minimize, work).await;
        });

        let mut queue = ActionRequestQueue::default();
        executor.poll(&mut queue);
        let first = queue.take_all();
        let events = spinner_events(&first);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "start");

        executor.poll(&mut queue);
        let second = queue.take_all();
        assert_eq!(spinner_events(&second), vec![("stop", events[0].1)]);
        assert!(executor.is_idle());
    }

    #[test]
    fn alert_resolves_when_responder_is_dropped() {
        let mut executor = FlowExecutor::new();
        let handle = executor.handle();
        let done = std::rc::Rc::new(std::cell::Cell::new(false));
        let flag = std::rc::Rc::clone(&done);
        executor.spawn(async move {
            let result = show_alert_dialog(&handle, AlertKind::DemoAlreadyRunning).await;
            assert_eq!(result, AlertResult::Ok);
            flag.set(true);
        });

        let mut queue = ActionRequestQueue::default();
        executor.poll(&mut queue);
        let mut actions = queue.take_all();
        assert!(!done.get());
        let Some(Action::Ui(UiAction::OpenModal(ModalRequest::Alert { responder, .. }))) =
            actions.pop()
        else {
            panic!("expected an alert request");
        };
        drop(responder);

        executor.poll(&mut queue);
        assert!(done.get());
    }
}
