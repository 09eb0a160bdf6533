//! Error types for store operations.

use thiserror::Error;

/// Errors surfaced by the remote event store.
///
/// Neither variant is retried and neither is fatal: a read failure leaves
/// the local list empty or stale, a write failure abandons the operation
/// and keeps the initiating form open. Both are diagnostics only.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to load events: {0}")]
    Read(String),

    #[error("Failed to update events: {0}")]
    Write(String),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
