//! Animated demonstration of the reduction.
//!
//! The demonstration runs on a dedicated thread. It never touches the board
//! shown by the UI; instead it sends an owned snapshot for every visible step
//! over a channel, in order, and calls a repaint callback after each send.
//! The foreground drains the channel from a flow once per frame.
//!
//! Stopping is cooperative: the thread checks its [`CancelToken`] between
//! cells and while pacing, then reports how far it got.

use std::{
    future::Future,
    pin::Pin,
    sync::mpsc,
    task::{Context, Poll},
    thread,
    time::Duration,
};

use knightcover_core::{BoardSize, Grid, Position};
use knightcover_solver::CancelToken;

use crate::state::{DemoMode, DemoSettings, RepaintSignal};

mod script;

pub(crate) use self::script::run;

/// Timing and pass policy of one demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DemoConfig {
    pub(crate) mode: DemoMode,
    pub(crate) clear_delay: Duration,
    pub(crate) fill_delay: Duration,
    pub(crate) probe_delay: Duration,
}

impl DemoConfig {
    #[cfg(test)]
    #[must_use]
    pub(crate) fn instant(mode: DemoMode) -> Self {
        Self {
            mode,
            clear_delay: Duration::ZERO,
            fill_delay: Duration::ZERO,
            probe_delay: Duration::ZERO,
        }
    }
}

impl From<&DemoSettings> for DemoConfig {
    fn from(settings: &DemoSettings) -> Self {
        Self {
            mode: settings.mode,
            clear_delay: settings.clear_delay(),
            fill_delay: settings.fill_delay(),
            probe_delay: settings.probe_delay(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum DemoPhase {
    Clearing,
    Filling,
    Reducing { pass: usize },
}

/// What is happening to the highlighted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum Probe {
    Placed,
    Vacated,
    Restored,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Focus {
    pub(crate) position: Position,
    pub(crate) probe: Probe,
}

/// A snapshot of the demonstration board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DemoEvent {
    pub(crate) grid: Grid,
    pub(crate) phase: DemoPhase,
    pub(crate) focus: Option<Focus>,
}

/// How a demonstration ended.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum DemoOutcome {
    /// Every pass ran; `grid` is a full cover.
    Completed { grid: Grid, passes: usize },
    /// Stopped during reduction; `grid` is a full cover that may still be
    /// reducible.
    Stopped { grid: Grid },
    /// Stopped before reduction began, so no cover was produced.
    Abandoned,
}

#[derive(Debug)]
pub(crate) enum DemoMessage {
    Step(DemoEvent),
    Finished(DemoOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum DemoError {
    /// The demonstration thread exited without reporting an outcome.
    #[display("demo thread disconnected")]
    Disconnected,
}

/// Receiving end of a running demonstration.
#[derive(Debug)]
pub(crate) struct DemoHandle {
    receiver: mpsc::Receiver<DemoMessage>,
    cancel: CancelToken,
}

impl DemoHandle {
    #[must_use]
    pub(crate) fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Takes every message sent so far.
    ///
    /// Returns `Ok` with an empty vector when nothing is pending.
    pub(crate) fn drain(&mut self) -> Result<Vec<DemoMessage>, DemoError> {
        let mut messages = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(message) => messages.push(message),
                Err(mpsc::TryRecvError::Empty) => return Ok(messages),
                Err(mpsc::TryRecvError::Disconnected) if messages.is_empty() => {
                    return Err(DemoError::Disconnected);
                }
                Err(mpsc::TryRecvError::Disconnected) => return Ok(messages),
            }
        }
    }

    /// Resolves once at least one message is available.
    #[must_use]
    pub(crate) fn next_batch(&mut self) -> NextBatch<'_> {
        NextBatch { handle: self }
    }
}

/// Future returned by [`DemoHandle::next_batch`].
#[derive(Debug)]
pub(crate) struct NextBatch<'a> {
    handle: &'a mut DemoHandle,
}

impl Future for NextBatch<'_> {
    type Output = Result<Vec<DemoMessage>, DemoError>;

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.handle.drain() {
            Ok(messages) if messages.is_empty() => Poll::Pending,
            result => Poll::Ready(result),
        }
    }
}

/// Starts a demonstration of `size` on a new thread.
pub(crate) fn spawn(size: BoardSize, config: DemoConfig, repaint: RepaintSignal) -> DemoHandle {
    let (sender, receiver) = mpsc::channel();
    let cancel = CancelToken::new();
    let worker_cancel = cancel.clone();

    log::info!("starting demo on {size} board ({:?})", config.mode);
    thread::spawn(move || {
        let outcome = run(size, &config, &worker_cancel, |event| {
            let _ = sender.send(DemoMessage::Step(event));
            repaint.request();
        });
        match &outcome {
            DemoOutcome::Completed { grid, passes } => log::info!(
                "demo finished: {} knights after {passes} passes",
                grid.occupied_count()
            ),
            DemoOutcome::Stopped { grid } => {
                log::info!("demo stopped with {} knights", grid.occupied_count());
            }
            DemoOutcome::Abandoned => log::info!("demo stopped before reduction"),
        }
        let _ = sender.send(DemoMessage::Finished(outcome));
        repaint.request();
    });

    DemoHandle { receiver, cancel }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn wait_for_outcome(handle: &mut DemoHandle) -> (Vec<DemoEvent>, DemoOutcome) {
        let deadline = Instant::now() + Duration::from_secs(10);
        let mut events = Vec::new();
        loop {
            for message in handle.drain().unwrap() {
                match message {
                    DemoMessage::Step(event) => events.push(event),
                    DemoMessage::Finished(outcome) => return (events, outcome),
                }
            }
            assert!(Instant::now() < deadline, "demo did not finish");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn spawned_demo_reports_outcome_after_steps() {
        let size = BoardSize::new(4, 4).unwrap();
        let mut handle = spawn(
            size,
            DemoConfig::instant(DemoMode::SinglePass),
            RepaintSignal::noop(),
        );
        let (events, outcome) = wait_for_outcome(&mut handle);

        assert!(events.first().unwrap().phase.is_clearing());
        assert!(outcome.is_completed());
        assert!(events.iter().any(|event| event.phase.is_reducing()));
    }

    #[test]
    fn cancelled_demo_stops_promptly() {
        let size = BoardSize::new(6, 6).unwrap();
        let config = DemoConfig {
            clear_delay: Duration::from_secs(30),
            ..DemoConfig::instant(DemoMode::SinglePass)
        };
        let mut handle = spawn(size, config, RepaintSignal::noop());
        handle.cancel_token().cancel();

        let started = Instant::now();
        let (_, outcome) = wait_for_outcome(&mut handle);
        assert_eq!(outcome, DemoOutcome::Abandoned);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
