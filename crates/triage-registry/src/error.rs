//! Error types for registry operations.

use thiserror::Error;
use triage_models::QueueLabel;
use triage_queue::QueueError;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A queue with the given label already exists.
    #[error("queue already exists: {0}")]
    DuplicateLabel(QueueLabel),

    /// No queue with the given label exists.
    #[error("queue not found: {0}")]
    QueueNotFound(QueueLabel),

    /// The registry has been torn down and accepts no further operations.
    #[error("registry destroyed")]
    Destroyed,

    /// An operation on a held queue failed.
    #[error("queue error: {0}")]
    Queue(#[from] QueueError),

    /// Lock poisoned (thread panicked while holding lock).
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
