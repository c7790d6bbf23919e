//! Queue item types for Triage.
//!
//! An item is a labeled, prioritized entry held by a single priority
//! queue. Items carry no links of their own; their position in the
//! owning queue is the ordering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::label::ItemLabel;

/// Urgency of a queue item.
///
/// Lower value = higher urgency: priority 0 dispatches before priority 1.
/// Equal priorities dispatch in insertion order (FIFO), which the owning
/// queue enforces by position rather than by anything stored here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Priority(u32);

impl Priority {
    /// The most urgent priority (0).
    pub const MOST_URGENT: Priority = Priority(0);

    /// Creates a priority from a raw value. Lower value = higher urgency.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw priority value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Priority {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A labeled, prioritized entry held by a priority queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Label identifying the item. Not required to be unique within a queue.
    pub label: ItemLabel,

    /// Urgency of the item; lower values dispatch first.
    pub priority: Priority,

    /// When the item was enqueued. Informational only: dispatch order
    /// within a priority level is decided by queue position, not by this
    /// timestamp.
    pub enqueued_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new item stamped with the current time.
    pub fn new(label: impl Into<ItemLabel>, priority: impl Into<Priority>) -> Self {
        Self {
            label: label.into(),
            priority: priority.into(),
            enqueued_at: Utc::now(),
        }
    }
}
