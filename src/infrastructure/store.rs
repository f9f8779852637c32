use thiserror::Error;

use crate::domain::ContactSubmission;

/// Errors from writing a contact submission to a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store received the request and refused it.
    #[error("store rejected the submission ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never completed.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

/// Somewhere contact submissions can be appended to.
///
/// Implementations perform exactly one write per call and never retry.
pub trait ContactStore: Send + Sync {
    fn insert(&self, record: &ContactSubmission) -> Result<(), StoreError>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}
