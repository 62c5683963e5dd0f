//! Storage Error Hierarchy
//!
//! The store is memory-only, so the only conditions it reports while
//! serving the consensus engine are the two recoverable "not found" cases.
//! Configuration, hard-state encoding and metrics rendering have their own
//! variants.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Log and stable store failures
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Store configuration loading or validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Metrics registry failures
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No entry is retained at this index. Expected around compaction
    /// boundaries; the caller usually falls back to a snapshot.
    #[error("Log entry at index {0} not found")]
    LogNotFound(u64),

    /// The key was never written to the bytes namespace
    #[error("Key {} not found", String::from_utf8_lossy(.0))]
    KeyNotFound(Vec<u8>),

    /// Hard state (de)serialization failures
    #[error(transparent)]
    BincodeError(#[from] bincode::Error),
}

impl Error {
    /// `true` for [`StorageError::LogNotFound`]
    pub fn is_log_not_found(&self) -> bool {
        matches!(self, Error::Storage(StorageError::LogNotFound(_)))
    }

    /// `true` for [`StorageError::KeyNotFound`]
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::Storage(StorageError::KeyNotFound(_)))
    }
}
