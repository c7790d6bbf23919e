//! Min-first priority queue of labeled items for Triage.
//!
//! This crate provides the `PriorityQueue` used by the registry, with:
//! - Min-first ordering (lower priority value dispatches sooner)
//! - FIFO ordering within a priority level
//! - Removal from the head (`remove_min`) or by item label
//!
//! # Example
//!
//! ```
//! use triage_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert("rotate-logs", 5).unwrap();
//! queue.insert("page-oncall", 0).unwrap();
//! queue.insert("restart-api", 2).unwrap();
//!
//! // Drains in dispatch order: page-oncall, restart-api, rotate-logs
//! while let Ok(item) = queue.remove_min() {
//!     println!("{} (priority {})", item.label, item.priority);
//! }
//! ```

pub mod error;
pub mod queue;

pub use error::{QueueError, Result};
pub use queue::PriorityQueue;
