//! Error types for priority queue operations.

use std::collections::TryReserveError;
use thiserror::Error;
use triage_models::ItemLabel;

/// Errors that can occur during priority queue operations.
#[derive(Debug, Error)]
pub enum QueueError {
    /// The queue holds no items.
    #[error("queue is empty")]
    Empty,

    /// No item with the given label exists in the queue.
    #[error("item not found: {0}")]
    ItemNotFound(ItemLabel),

    /// The queue could not grow to hold another item.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Result type alias for priority queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;
