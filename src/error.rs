//! Error Types
//!
//! Validation errors stay local; sync errors come from the collection endpoint.

use thiserror::Error;

use crate::submit::SubmitPhase;

/// An entry whose amount cannot be submitted
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Entry #{position} has an invalid amount {amount:?}; enter a number greater than 0")]
pub struct ValidationError {
    /// 1-based position in the list
    pub position: usize,
    pub amount: String,
}

/// Failure talking to the remote collection
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("collection responded {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SyncError::Decode(err.to_string())
        } else {
            SyncError::Transport(err.to_string())
        }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;

/// Why a submit stopped
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{stage:?} step failed: {source}")]
    Sync {
        stage: SubmitPhase,
        #[source]
        source: SyncError,
    },
}
