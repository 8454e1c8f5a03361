//! Error types.

use thiserror::Error;

/// Failure of a key-value store backing the best-score table.
///
/// These never reach the player: `ScoreBook` logs them and carries on as
/// if no score were stored.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not valid JSON.
    #[error("malformed stored payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
