//! PriorityQueue - sorted collection of labeled, prioritized items.

use std::collections::VecDeque;

use triage_models::{Item, ItemLabel, Priority};

use crate::error::{QueueError, Result};

/// An ordered collection of labeled, prioritized items.
///
/// # Ordering Rules
///
/// 1. Lower priority value dispatches first (min-first: 0 before 1)
/// 2. For the same priority, earlier-inserted items dispatch first
///    (FIFO within priority)
///
/// The sequence is sorted after every completed operation. Ties are kept
/// in order by *position*: a new item is placed after every held item of
/// equal priority, so fairness holds even for items inserted in the same
/// instant.
///
/// Insertion scans for the sorted position and is O(n) in the number of
/// held items; the intended domain is small registries of labeled queues,
/// not high-throughput event scheduling.
///
/// # Example
///
/// ```
/// use triage_queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.insert("restart-api", 2).unwrap();
/// queue.insert("page-oncall", 0).unwrap();
///
/// let next = queue.remove_min().unwrap();
/// assert_eq!(next.label.as_str(), "page-oncall");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue {
    /// Items in dispatch order: ascending priority, FIFO within ties.
    items: VecDeque<Item>,
}

impl PriorityQueue {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Inserts a new item at its sorted position.
    ///
    /// The item lands after every held item with priority less than or
    /// equal to its own, which keeps the sequence sorted and preserves
    /// FIFO order within a priority level.
    ///
    /// # Returns
    ///
    /// `QueueError::Allocation` if the queue cannot grow; the queue is
    /// left untouched in that case. Insertion never fails for any other
    /// reason.
    pub fn insert(
        &mut self,
        label: impl Into<ItemLabel>,
        priority: impl Into<Priority>,
    ) -> Result<()> {
        let item = Item::new(label, priority);

        // Reserve before linking so a failed grow has no effect.
        self.items.try_reserve(1)?;

        let position = self
            .items
            .iter()
            .position(|held| held.priority > item.priority)
            .unwrap_or(self.items.len());
        self.items.insert(position, item);

        Ok(())
    }

    /// Returns the most urgent item without removing it.
    ///
    /// Fails with `QueueError::Empty` if the queue holds no items.
    pub fn peek_min(&self) -> Result<&Item> {
        self.items.front().ok_or(QueueError::Empty)
    }

    /// Removes and returns the most urgent item.
    ///
    /// The next item in dispatch order (or none) becomes the new head.
    /// Fails with `QueueError::Empty` if the queue holds no items.
    pub fn remove_min(&mut self) -> Result<Item> {
        self.items.pop_front().ok_or(QueueError::Empty)
    }

    /// Removes and returns the first item with the given label.
    ///
    /// "First" means first in dispatch order: when duplicate labels
    /// exist, the most urgent of them is removed and the rest stay. The
    /// neighbors of the removed item are relinked around the gap.
    ///
    /// Fails with `QueueError::ItemNotFound` if no held item carries the
    /// label.
    pub fn remove_by_label(&mut self, label: &ItemLabel) -> Result<Item> {
        let position = self
            .items
            .iter()
            .position(|held| held.label == *label)
            .ok_or_else(|| QueueError::ItemNotFound(label.clone()))?;

        // The scan above guarantees the index is in bounds.
        Ok(self.items.remove(position).unwrap())
    }

    /// Returns the number of items held. O(1).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Releases every held item, leaving the queue empty.
    ///
    /// Safe to call on an already-empty queue.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over held items in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
