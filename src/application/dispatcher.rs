//! Runs exactly one store insert per user-initiated submission.
//!
//! The insert happens on a worker thread so the UI keeps drawing while it is
//! pending. The outcome comes back over a channel that the event loop polls.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use thiserror::Error;

use crate::domain::ContactSubmission;
use crate::infrastructure::{ContactStore, StoreError};

/// How a dispatched submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    /// The store answered and refused the record.
    Rejected(String),
    /// The request did not complete.
    Transport(String),
}

impl From<Result<(), StoreError>> for SubmissionOutcome {
    fn from(result: Result<(), StoreError>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Success,
            Err(StoreError::Rejected { status, message }) => {
                SubmissionOutcome::Rejected(format!("{status}: {message}"))
            }
            Err(StoreError::Transport(message)) => SubmissionOutcome::Transport(message),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("a submission is already in flight")]
    InFlight,
}

pub struct SubmissionDispatcher {
    store: Arc<dyn ContactStore>,
    pending: Option<Receiver<SubmissionOutcome>>,
}

impl SubmissionDispatcher {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store, pending: None }
    }

    pub fn store_description(&self) -> String {
        self.store.describe()
    }

    pub fn is_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts the insert for `record`. Refused while another one is pending.
    pub fn dispatch(&mut self, record: ContactSubmission) -> Result<(), DispatchError> {
        if self.pending.is_some() {
            tracing::debug!("submission ignored, one is already in flight");
            return Err(DispatchError::InFlight);
        }

        let (tx, rx) = mpsc::channel();
        let store = Arc::clone(&self.store);
        let spawned = thread::Builder::new()
            .name("contact-submit".to_string())
            .spawn(move || {
                let outcome = SubmissionOutcome::from(store.insert(&record));
                // The receiver may be gone if the app quit mid-request.
                let _ = tx.send(outcome);
            });

        if let Err(e) = spawned {
            // The sender was dropped with the closure, so `poll` reports a transport failure.
            tracing::error!(error = %e, "failed to start submission worker");
        }

        tracing::info!(store = %self.store.describe(), "contact submission dispatched");
        self.pending = Some(rx);
        Ok(())
    }

    /// Returns the outcome once the pending insert has finished.
    pub fn poll(&mut self) -> Option<SubmissionOutcome> {
        let outcome = match self.pending.as_ref()?.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Self::worker_lost(),
        };
        self.pending = None;
        Some(outcome)
    }

    /// Blocks until the pending insert finishes. `None` when nothing is pending.
    pub fn wait(&mut self) -> Option<SubmissionOutcome> {
        let rx = self.pending.take()?;
        Some(rx.recv().unwrap_or_else(|_| Self::worker_lost()))
    }

    fn worker_lost() -> SubmissionOutcome {
        SubmissionOutcome::Transport("submission worker exited without a result".to_string())
    }
}
