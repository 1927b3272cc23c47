use crate::models::CommitOutcome;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered, but reported the commit as not applied. The
    /// full response is kept for diagnostics.
    #[error("Bulk commit rejected: {outcome}")]
    CommitRejected { outcome: CommitOutcome },
}
