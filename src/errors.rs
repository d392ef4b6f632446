use thiserror::Error;

/// Errors that can arise while reading or writing session state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Wrapper around sled's error type.
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),

    /// Stored bytes could not be encoded or decoded as JSON.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Wrapper around IO errors (directory creation, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data decoded but violates a game invariant.
    #[error("corrupt session data: {0}")]
    Corrupt(String),

    /// A lock guarding in-memory state was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    Poisoned(String),
}
