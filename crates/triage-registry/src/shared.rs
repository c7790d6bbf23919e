//! SharedRegistry - thread-safe wrapper around a registry.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use triage_models::{Item, ItemLabel, Priority, QueueLabel};

use crate::error::{RegistryError, Result};
use crate::registry::Registry;

/// Thread-safe handle to a registry.
///
/// # Concurrency Pattern: `Arc<RwLock<T>>`
///
/// The whole registry sits behind one coarse-grained lock: mutations
/// (create, delete, insert, remove, teardown) serialize through the write
/// lock, while read-only operations (peek, counts, labels) share the read
/// lock and may run concurrently with each other but never with a
/// mutation. That is the single-writer discipline the plain `Registry`
/// leaves to its caller.
///
/// Handles are cheap to clone; all clones view the same registry.
///
/// Locked access cannot hand out references into the registry, so
/// per-queue operations route through the handle and item-returning
/// operations yield owned values. There is no lookup that outlives the
/// lock, which means a deleted queue cannot be used through a stale
/// reference.
///
/// # Example
///
/// ```
/// use std::thread;
/// use triage_registry::SharedRegistry;
///
/// let registry = SharedRegistry::new();
/// registry.create_queue("incoming").unwrap();
///
/// // Multiple threads can insert
/// let handle = {
///     let registry = registry.clone();
///     thread::spawn(move || {
///         registry.insert(&"incoming".into(), "build", 2).unwrap();
///     })
/// };
/// handle.join().unwrap();
///
/// assert_eq!(registry.queue_len(&"incoming".into()).unwrap(), 1);
/// ```
#[derive(Clone)]
pub struct SharedRegistry {
    /// Internal registry state, protected by the lock.
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    /// Creates a new handle around an empty registry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Registry::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Registry>> {
        self.inner
            .read()
            .map_err(|e| RegistryError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Registry>> {
        self.inner
            .write()
            .map_err(|e| RegistryError::LockPoisoned(e.to_string()))
    }

    /// Creates a new empty queue under the given label.
    pub fn create_queue(&self, label: impl Into<QueueLabel>) -> Result<()> {
        self.write()?.create_queue(label)
    }

    /// Destroys the named queue, releasing all of its items.
    pub fn delete_queue(&self, label: &QueueLabel) -> Result<()> {
        self.write()?.delete_queue(label)
    }

    /// Inserts an item into the named queue.
    pub fn insert(
        &self,
        queue: &QueueLabel,
        label: impl Into<ItemLabel>,
        priority: impl Into<Priority>,
    ) -> Result<()> {
        let mut registry = self.write()?;
        registry.queue_mut(queue)?.insert(label, priority)?;
        Ok(())
    }

    /// Returns a copy of the most urgent item in the named queue.
    ///
    /// Note: Returns a clone since a reference cannot be held across the
    /// lock.
    pub fn peek_min(&self, queue: &QueueLabel) -> Result<Item> {
        let registry = self.read()?;
        Ok(registry.queue(queue)?.peek_min()?.clone())
    }

    /// Removes and returns the most urgent item from the named queue.
    pub fn remove_min(&self, queue: &QueueLabel) -> Result<Item> {
        let mut registry = self.write()?;
        Ok(registry.queue_mut(queue)?.remove_min()?)
    }

    /// Removes the first item with the given label from the named queue.
    pub fn remove_by_label(&self, queue: &QueueLabel, label: &ItemLabel) -> Result<Item> {
        let mut registry = self.write()?;
        Ok(registry.queue_mut(queue)?.remove_by_label(label)?)
    }

    /// Returns the number of items in the named queue.
    pub fn queue_len(&self, queue: &QueueLabel) -> Result<usize> {
        Ok(self.read()?.queue(queue)?.len())
    }

    /// Releases every item in the named queue.
    pub fn clear_queue(&self, queue: &QueueLabel) -> Result<()> {
        self.write()?.queue_mut(queue)?.clear();
        Ok(())
    }

    /// Returns all queue labels in creation order.
    pub fn labels(&self) -> Result<Vec<QueueLabel>> {
        Ok(self.read()?.labels()?.cloned().collect())
    }

    /// Returns true if a queue with the given label exists.
    pub fn contains(&self, label: &QueueLabel) -> bool {
        self.inner
            .read()
            .map(|registry| registry.contains(label))
            .unwrap_or(false)
    }

    /// Returns the number of queues held.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|registry| registry.len())
            .unwrap_or(0)
    }

    /// Returns true if no queues are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Destroys every queue and moves the registry to its terminal state.
    pub fn teardown(&self) -> Result<()> {
        self.write()?.teardown()
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new()
    }
}
