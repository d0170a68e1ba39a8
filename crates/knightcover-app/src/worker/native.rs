//! Worker backend using a background thread and channels.

use std::{
    fmt,
    sync::{OnceLock, mpsc},
    thread,
};

use super::{WorkError, WorkRequest, WorkResponse};

struct WorkRequestEnvelope {
    request: WorkRequest,
    response_tx: mpsc::Sender<WorkResponse>,
}

static WORKER_SENDER: OnceLock<mpsc::Sender<WorkRequestEnvelope>> = OnceLock::new();

pub(super) struct WorkHandle {
    receiver: mpsc::Receiver<WorkResponse>,
}

impl fmt::Debug for WorkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkHandle").finish_non_exhaustive()
    }
}

impl WorkHandle {
    /// Returns the response if it has arrived.
    pub(super) fn poll(&mut self) -> Result<Option<WorkResponse>, WorkError> {
        match self.receiver.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(WorkError::WorkerDisconnected),
        }
    }
}

fn worker_sender() -> &'static mpsc::Sender<WorkRequestEnvelope> {
    WORKER_SENDER.get_or_init(|| {
        let (tx, rx) = mpsc::channel::<WorkRequestEnvelope>();
        thread::spawn(move || {
            while let Ok(envelope) = rx.recv() {
                let response = envelope.request.handle();
                let _ = envelope.response_tx.send(response);
            }
        });
        tx
    })
}

/// Queues `request` on the shared worker thread.
pub(super) fn enqueue(request: WorkRequest) -> Result<WorkHandle, WorkError> {
    let (response_tx, response_rx) = mpsc::channel();
    worker_sender()
        .send(WorkRequestEnvelope {
            request,
            response_tx,
        })
        .map_err(|_| WorkError::WorkerDisconnected)?;

    Ok(WorkHandle {
        receiver: response_rx,
    })
}
