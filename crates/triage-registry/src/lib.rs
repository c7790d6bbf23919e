//! Registry of named priority queues for Triage.
//!
//! This crate provides the `Registry` for managing labeled queues with:
//! - Unique queue labels with reject-on-duplicate creation
//! - Stable enumeration in queue creation order
//! - Explicit lifecycle ending in `teardown()`
//! - Thread-safe access through `SharedRegistry` (`Arc<RwLock<T>>`)
//!
//! # Example
//!
//! ```
//! use triage_registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.create_queue("incidents").unwrap();
//! registry.create_queue("maintenance").unwrap();
//!
//! // Work with a queue through the registry
//! let incidents = registry.queue_mut(&"incidents".into()).unwrap();
//! incidents.insert("db-down", 0).unwrap();
//! incidents.insert("slow-dashboard", 4).unwrap();
//!
//! let next = incidents.remove_min().unwrap();
//! assert_eq!(next.label.as_str(), "db-down");
//!
//! // Queues enumerate in creation order
//! let labels: Vec<_> = registry.labels().unwrap().collect();
//! assert_eq!(labels.len(), 2);
//!
//! registry.teardown().unwrap();
//! ```

pub mod error;
pub mod registry;
pub mod shared;

pub use error::{RegistryError, Result};
pub use registry::Registry;
pub use shared::SharedRegistry;
