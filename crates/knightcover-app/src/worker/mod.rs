//! Background work on a shared thread.
//!
//! Requests are handled in order by one long-lived worker thread. Each
//! request gets its own response channel, polled from a UI flow.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use knightcover_core::{BoardSize, Grid};
use knightcover_solver::{MinimizeStats, engine};

use self::native::{WorkHandle, enqueue};

mod native;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkRequest {
    /// Build and minimise the cover of a board size.
    Minimize(BoardSize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum WorkResponse {
    Minimized { grid: Grid, stats: MinimizeStats },
    Error(WorkError),
}

/// Errors that can occur while scheduling or receiving background work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum WorkError {
    /// The worker thread exited before responding.
    #[display("worker disconnected")]
    WorkerDisconnected,
}

impl WorkRequest {
    #[must_use]
    fn handle(self) -> WorkResponse {
        match self {
            WorkRequest::Minimize(size) => {
                let (grid, stats) = engine::minimized(size);
                log::debug!(
                    "worker minimised {size}: {} knights, {} passes",
                    grid.occupied_count(),
                    stats.passes()
                );
                WorkResponse::Minimized { grid, stats }
            }
        }
    }
}

/// Future that resolves to a background work response.
struct WorkResponseFuture {
    handle: Option<WorkHandle>,
    response: Option<WorkResponse>,
}

impl WorkResponseFuture {
    fn new(result: Result<WorkHandle, WorkError>) -> Self {
        match result {
            Ok(handle) => Self {
                handle: Some(handle),
                response: None,
            },
            Err(err) => Self {
                handle: None,
                response: Some(WorkResponse::Error(err)),
            },
        }
    }
}

impl Future for WorkResponseFuture {
    type Output = WorkResponse;

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(response) = self.response.take() {
            return Poll::Ready(response);
        }

        let Some(handle) = self.handle.as_mut() else {
            return Poll::Ready(WorkResponse::Error(WorkError::WorkerDisconnected));
        };

        match handle.poll() {
            Ok(Some(response)) => Poll::Ready(response),
            Ok(None) => Poll::Pending,
            Err(err) => Poll::Ready(WorkResponse::Error(err)),
        }
    }
}

fn request(request: WorkRequest) -> WorkResponseFuture {
    WorkResponseFuture::new(enqueue(request))
}

/// Minimises the cover of `size` on the worker thread.
pub(crate) async fn request_minimize(size: BoardSize) -> Result<(Grid, MinimizeStats), WorkError> {
    match request(WorkRequest::Minimize(size)).await {
        WorkResponse::Minimized { grid, stats } => Ok((grid, stats)),
        WorkResponse::Error(err) => Err(err),
    }
}
