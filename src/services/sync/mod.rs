//! Load/save against a transport without blocking the UI thread.
//!
//! Each request runs on its own worker thread and reports back over a channel
//! that the UI drains once per frame. Requests are not cancelled; when two
//! saves overlap, whichever finishes last is the outcome the user sees last.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::models::slot::AvailabilityPayload;
use crate::services::grid::{GridController, RenderSink};
use crate::services::transport::{AvailabilityTransport, SharedTransport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Load,
    Save,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    Loaded(AvailabilityPayload),
    Saved,
    Failed { action: SyncAction, message: String },
}

pub struct SyncWorker {
    transport: SharedTransport,
    tx: Sender<SyncOutcome>,
    rx: Receiver<SyncOutcome>,
    in_flight: usize,
}

impl SyncWorker {
    pub fn new(transport: SharedTransport) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            transport,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn request_load(&mut self) {
        let transport = Arc::clone(&self.transport);
        self.spawn(move || match transport.fetch() {
            Ok(payload) => SyncOutcome::Loaded(payload),
            Err(err) => SyncOutcome::Failed {
                action: SyncAction::Load,
                message: format!("{:#}", err),
            },
        });
    }

    /// `payload` must already be a snapshot of the committed selection.
    pub fn request_save(&mut self, payload: AvailabilityPayload) {
        let transport = Arc::clone(&self.transport);
        self.spawn(move || match transport.persist(&payload) {
            Ok(()) => SyncOutcome::Saved,
            Err(err) => SyncOutcome::Failed {
                action: SyncAction::Save,
                message: format!("{:#}", err),
            },
        });
    }

    fn spawn<F>(&mut self, job: F)
    where
        F: FnOnce() -> SyncOutcome + Send + 'static,
    {
        let tx = self.tx.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            let outcome = job();
            if let SyncOutcome::Failed { action, message } = &outcome {
                log::warn!("Availability {:?} failed: {}", action, message);
            }
            let _ = tx.send(outcome);
        });
    }

    /// Next finished request, if any. Never blocks.
    pub fn poll(&mut self) -> Option<SyncOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(outcome)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Blocks up to `timeout` for the next finished request.
    pub fn wait(&mut self, timeout: Duration) -> Option<SyncOutcome> {
        let outcome = self.rx.recv_timeout(timeout).ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(outcome)
    }
}

/// Fetches and applies a payload on the calling thread. On any error the
/// selection is left exactly as it was.
pub fn load_blocking(
    transport: &dyn AvailabilityTransport,
    controller: &mut GridController,
    sink: &mut dyn RenderSink,
) -> Result<usize> {
    let payload = transport
        .fetch()
        .with_context(|| format!("Failed to load availability from {}", transport.describe()))?;
    let added = controller
        .load_payload(&payload, sink)
        .context("Persisted availability could not be applied")?;
    log::info!("Loaded {} slots from {}", added, transport.describe());
    Ok(added)
}

/// Compresses the committed selection and persists it on the calling thread.
pub fn save_blocking(transport: &dyn AvailabilityTransport, controller: &GridController) -> Result<()> {
    let payload = controller.save_payload();
    transport
        .persist(&payload)
        .with_context(|| format!("Failed to save availability to {}", transport.describe()))?;
    log::info!(
        "Saved {} day(s) of availability to {}",
        payload.len(),
        transport.describe()
    );
    Ok(())
}
