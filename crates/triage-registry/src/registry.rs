//! Registry of named priority queues.

use std::collections::HashMap;

use tracing::{debug, info};
use triage_models::QueueLabel;
use triage_queue::PriorityQueue;

use crate::error::{RegistryError, Result};

/// An owning collection of named priority queues.
///
/// Queues are keyed by a label that is unique within the registry and are
/// enumerated in creation order. The registry starts out active and
/// accepts all operations until `teardown()` moves it to its terminal
/// destroyed state, after which create, lookup, delete, enumeration, and
/// teardown all fail with `RegistryError::Destroyed`.
///
/// # Reference Validity
///
/// `queue()` / `queue_mut()` hand out references that borrow from the
/// registry, so holding one across a later `delete_queue()` or
/// `teardown()` is rejected at compile time:
///
/// ```compile_fail
/// use triage_registry::Registry;
///
/// let mut registry = Registry::new();
/// registry.create_queue("incoming").unwrap();
///
/// let queue = registry.queue_mut(&"incoming".into()).unwrap();
/// registry.delete_queue(&"incoming".into()).unwrap();
/// queue.len(); // still borrowed: does not compile
/// ```
///
/// # Example
///
/// ```
/// use triage_registry::Registry;
///
/// let mut registry = Registry::new();
/// registry.create_queue("incidents").unwrap();
///
/// let incidents = registry.queue_mut(&"incidents".into()).unwrap();
/// incidents.insert("db-down", 0).unwrap();
/// incidents.insert("disk-warning", 3).unwrap();
///
/// let next = incidents.remove_min().unwrap();
/// assert_eq!(next.label.as_str(), "db-down");
///
/// registry.teardown().unwrap();
/// ```
#[derive(Debug)]
pub struct Registry {
    /// Queues keyed by label.
    entries: HashMap<QueueLabel, PriorityQueue>,
    /// Labels in creation order, for stable enumeration.
    order: Vec<QueueLabel>,
    /// Set once by `teardown()`; never cleared.
    destroyed: bool,
}

impl Registry {
    /// Creates a new empty registry in the active state.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            destroyed: false,
        }
    }

    fn ensure_active(&self) -> Result<()> {
        if self.destroyed {
            return Err(RegistryError::Destroyed);
        }
        Ok(())
    }

    /// Creates a new empty queue under the given label.
    ///
    /// An existing queue is never silently replaced: replacing it would
    /// drop its items while callers still expect them to be held.
    ///
    /// # Returns
    ///
    /// `RegistryError::DuplicateLabel` if a queue with the label already
    /// exists (the existing queue is untouched), or
    /// `RegistryError::Destroyed` after teardown.
    pub fn create_queue(&mut self, label: impl Into<QueueLabel>) -> Result<()> {
        self.ensure_active()?;

        let label = label.into();
        if self.entries.contains_key(&label) {
            return Err(RegistryError::DuplicateLabel(label));
        }

        self.order.push(label.clone());
        self.entries.insert(label.clone(), PriorityQueue::new());

        debug!(queue = %label, "created queue");
        Ok(())
    }

    /// Returns the queue under the given label.
    ///
    /// Fails with `RegistryError::QueueNotFound` if absent.
    pub fn queue(&self, label: &QueueLabel) -> Result<&PriorityQueue> {
        self.ensure_active()?;
        self.entries
            .get(label)
            .ok_or_else(|| RegistryError::QueueNotFound(label.clone()))
    }

    /// Returns the queue under the given label for mutation.
    ///
    /// Fails with `RegistryError::QueueNotFound` if absent. The returned
    /// reference borrows the registry; see the type-level docs.
    pub fn queue_mut(&mut self, label: &QueueLabel) -> Result<&mut PriorityQueue> {
        self.ensure_active()?;
        self.entries
            .get_mut(label)
            .ok_or_else(|| RegistryError::QueueNotFound(label.clone()))
    }

    /// Destroys the named queue, releasing all of its items.
    ///
    /// Fails with `RegistryError::QueueNotFound` if absent.
    pub fn delete_queue(&mut self, label: &QueueLabel) -> Result<()> {
        self.ensure_active()?;

        let queue = self
            .entries
            .remove(label)
            .ok_or_else(|| RegistryError::QueueNotFound(label.clone()))?;
        self.order.retain(|held| held != label);

        debug!(queue = %label, items = queue.len(), "deleted queue");
        Ok(())
    }

    /// Enumerates queue labels in creation order.
    ///
    /// A label deleted and created again enumerates at the end: the
    /// re-creation is a fresh creation.
    pub fn labels(&self) -> Result<impl Iterator<Item = &QueueLabel>> {
        self.ensure_active()?;
        Ok(self.order.iter())
    }

    /// Returns true if a queue with the given label exists.
    pub fn contains(&self, label: &QueueLabel) -> bool {
        self.entries.contains_key(label)
    }

    /// Returns the number of queues held. O(1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no queues are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Destroys every queue and moves the registry to its terminal state.
    ///
    /// The queue count drops to zero and every later operation, teardown
    /// included, fails with `RegistryError::Destroyed`.
    pub fn teardown(&mut self) -> Result<()> {
        self.ensure_active()?;

        let queues = self.entries.len();
        let items: usize = self.entries.values().map(PriorityQueue::len).sum();
        self.entries.clear();
        self.order.clear();
        self.destroyed = true;

        info!(queues, items, "registry torn down");
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(s: &str) -> QueueLabel {
        QueueLabel::new(s)
    }

    #[test]
    fn test_create_and_get() {
        let mut registry = Registry::new();

        registry.create_queue("incoming").unwrap();

        let queue = registry.queue(&label("incoming")).unwrap();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_insert_through_registry() {
        let mut registry = Registry::new();
        registry.create_queue("incoming").unwrap();

        let queue = registry.queue_mut(&label("incoming")).unwrap();
        queue.insert("build", 2).unwrap();
        queue.insert("page", 0).unwrap();

        let queue = registry.queue(&label("incoming")).unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek_min().unwrap().label.as_str(), "page");
    }

    #[test]
    fn test_create_duplicate_fails() {
        let mut registry = Registry::new();

        registry.create_queue("x").unwrap();
        registry
            .queue_mut(&label("x"))
            .unwrap()
            .insert("held", 1)
            .unwrap();

        let result = registry.create_queue("x");
        assert!(matches!(result, Err(RegistryError::DuplicateLabel(_))));

        // Queue count unchanged and the existing items untouched
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.queue(&label("x")).unwrap().len(), 1);
    }

    #[test]
    fn test_get_not_found() {
        let registry = Registry::new();
        let result = registry.queue(&label("absent"));
        assert!(matches!(result, Err(RegistryError::QueueNotFound(_))));
    }

    #[test]
    fn test_get_mut_not_found() {
        let mut registry = Registry::new();
        let result = registry.queue_mut(&label("absent"));
        assert!(matches!(result, Err(RegistryError::QueueNotFound(_))));
    }

    #[test]
    fn test_delete_queue() {
        let mut registry = Registry::new();

        registry.create_queue("doomed").unwrap();
        registry
            .queue_mut(&label("doomed"))
            .unwrap()
            .insert("item", 1)
            .unwrap();

        registry.delete_queue(&label("doomed")).unwrap();

        assert_eq!(registry.len(), 0);
        assert!(matches!(
            registry.queue(&label("doomed")),
            Err(RegistryError::QueueNotFound(_))
        ));
    }

    #[test]
    fn test_delete_not_found() {
        let mut registry = Registry::new();
        let result = registry.delete_queue(&label("absent"));
        assert!(matches!(result, Err(RegistryError::QueueNotFound(_))));
    }

    #[test]
    fn test_recreate_after_delete_is_empty() {
        let mut registry = Registry::new();

        registry.create_queue("q").unwrap();
        registry
            .queue_mut(&label("q"))
            .unwrap()
            .insert("old", 1)
            .unwrap();

        registry.delete_queue(&label("q")).unwrap();
        registry.create_queue("q").unwrap();

        assert!(registry.queue(&label("q")).unwrap().is_empty());
    }

    #[test]
    fn test_labels_in_creation_order() {
        let mut registry = Registry::new();

        registry.create_queue("c").unwrap();
        registry.create_queue("a").unwrap();
        registry.create_queue("b").unwrap();

        let labels: Vec<&str> = registry.labels().unwrap().map(QueueLabel::as_str).collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_labels_after_delete_and_recreate() {
        let mut registry = Registry::new();

        registry.create_queue("c").unwrap();
        registry.create_queue("a").unwrap();
        registry.create_queue("b").unwrap();

        registry.delete_queue(&label("a")).unwrap();
        registry.create_queue("a").unwrap();

        // Re-creation enumerates at the end
        let labels: Vec<&str> = registry.labels().unwrap().map(QueueLabel::as_str).collect();
        assert_eq!(labels, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_contains() {
        let mut registry = Registry::new();
        registry.create_queue("present").unwrap();

        assert!(registry.contains(&label("present")));
        assert!(!registry.contains(&label("absent")));
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut registry = Registry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        registry.create_queue("one").unwrap();
        registry.create_queue("two").unwrap();

        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_teardown_clears_everything() {
        let mut registry = Registry::new();

        registry.create_queue("a").unwrap();
        registry.create_queue("b").unwrap();
        registry
            .queue_mut(&label("a"))
            .unwrap()
            .insert("item", 1)
            .unwrap();

        registry.teardown().unwrap();

        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());
        assert!(!registry.contains(&label("a")));
    }

    #[test]
    fn test_teardown_twice_is_error_not_crash() {
        let mut registry = Registry::new();

        registry.teardown().unwrap();

        let result = registry.teardown();
        assert!(matches!(result, Err(RegistryError::Destroyed)));
    }

    #[test]
    fn test_operations_after_teardown_fail() {
        let mut registry = Registry::new();
        registry.create_queue("q").unwrap();
        registry.teardown().unwrap();

        assert!(matches!(
            registry.create_queue("q"),
            Err(RegistryError::Destroyed)
        ));
        assert!(matches!(
            registry.queue(&label("q")),
            Err(RegistryError::Destroyed)
        ));
        assert!(matches!(
            registry.queue_mut(&label("q")),
            Err(RegistryError::Destroyed)
        ));
        assert!(matches!(
            registry.delete_queue(&label("q")),
            Err(RegistryError::Destroyed)
        ));
        assert!(registry.labels().is_err());
    }

    #[test]
    fn test_queue_borrow_ends_before_delete() {
        // This test documents that a queue reference must be released
        // before the registry can be mutated again
        let mut registry = Registry::new();
        registry.create_queue("q").unwrap();

        {
            let queue = registry.queue_mut(&label("q")).unwrap();
            queue.insert("item", 1).unwrap();
            // queue goes out of scope here; keeping it alive across the
            // delete_queue call below would fail to compile
        }

        registry.delete_queue(&label("q")).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_default() {
        let registry = Registry::default();
        assert!(registry.is_empty());
    }
}
