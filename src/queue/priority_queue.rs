//! Max-priority queue of items.

use std::fmt;

use log::{debug, trace, warn};

use super::config::QueueConfig;
use super::store::Store;
use super::types::{Action, Item, ItemId, Priority};
use crate::error::QueueError;
use crate::heap::{self, HeapOps};

/// Binary max-heap of [`Item`]s.
///
/// `pop` always returns the item with the highest priority. Items with
/// equal priority come out in unspecified relative order.
///
/// # Examples
///
/// ```
/// use u_fnpq::{Item, PriorityQueue};
///
/// let mut queue = PriorityQueue::new();
/// queue.push(Item::new("a", 5));
/// queue.push(Item::new("b", 1));
/// queue.push(Item::new("c", 3));
///
/// let order: Vec<&str> = queue.drain_sorted().map(|item| item.into_action()).collect();
/// assert_eq!(order, ["a", "c", "b"]);
/// ```
///
/// # Re-prioritizing
///
/// ```
/// use u_fnpq::{Item, PriorityQueue};
///
/// let mut queue = PriorityQueue::new();
/// let low = queue.push(Item::new("low", 1));
/// queue.push(Item::new("high", 10));
///
/// queue.update(low, "urgent", 100).unwrap();
/// assert_eq!(*queue.peek().unwrap().action(), "urgent");
/// ```
pub struct PriorityQueue<A = Action> {
    store: Store<A>,
    config: QueueConfig,
}

impl<A> PriorityQueue<A> {
    /// Creates an empty queue with the default configuration.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            config: QueueConfig::default(),
        }
    }

    /// Creates an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Store::with_capacity(capacity),
            config: QueueConfig::default().with_initial_capacity(capacity),
        }
    }

    /// Creates an empty queue from a validated configuration.
    pub fn with_config(config: QueueConfig) -> Result<Self, QueueError> {
        config.validate().map_err(QueueError::InvalidConfig)?;
        let store = Store::try_with_capacity(config.initial_capacity)
            .map_err(|e| QueueError::InvalidConfig(e.to_string()))?;
        Ok(Self { store, config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if no items are queued.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Inserts an item, returning a handle for later updates.
    ///
    /// O(log n).
    pub fn push(&mut self, item: Item<A>) -> ItemId {
        let priority = item.priority;
        let id = self.store.append(item);
        heap::push_fix(&mut self.store);
        trace!(
            "push {id} priority={priority} index={:?}",
            self.store.get(id).and_then(Item::index)
        );
        self.verify("push");
        id
    }

    /// Removes and returns the item with the highest priority, or `None` if
    /// the queue is empty.
    ///
    /// O(log n).
    pub fn pop(&mut self) -> Option<Item<A>> {
        heap::pop_fix(&mut self.store);
        let item = self.store.truncate_last()?;
        trace!("pop priority={} remaining={}", item.priority, self.len());
        self.verify("pop");
        Some(item)
    }

    /// Returns the item with the highest priority without removing it.
    pub fn peek(&self) -> Option<&Item<A>> {
        self.store.at(0)
    }

    /// Returns the handle of the item with the highest priority.
    pub fn peek_id(&self) -> Option<ItemId> {
        self.store.id_at(0)
    }

    /// Returns true if the handle refers to a queued item.
    pub fn contains(&self, id: ItemId) -> bool {
        self.store.get(id).is_some()
    }

    /// Looks up a queued item by handle.
    pub fn get(&self, id: ItemId) -> Option<&Item<A>> {
        self.store.get(id)
    }

    /// Returns a queued item's action mutably.
    ///
    /// Changing the action does not affect ordering.
    pub fn action_mut(&mut self, id: ItemId) -> Option<&mut A> {
        self.store.get_mut(id).map(Item::action_mut)
    }

    /// Replaces a queued item's action and priority, then restores heap
    /// order from the item's current position.
    ///
    /// O(log n). Fails with [`QueueError::StaleItem`] if the item has left
    /// the queue.
    pub fn update(&mut self, id: ItemId, action: A, priority: Priority) -> Result<(), QueueError> {
        let index = self.locate(id)?;
        if let Some(item) = self.store.get_mut(id) {
            item.action = action;
            item.priority = priority;
        }
        heap::fix(&mut self.store, index);
        trace!(
            "update {id} priority={priority} index={index}->{:?}",
            self.store.get(id).and_then(Item::index)
        );
        self.verify("update");
        Ok(())
    }

    /// Changes a queued item's priority, keeping its action.
    ///
    /// O(log n). Fails with [`QueueError::StaleItem`] if the item has left
    /// the queue.
    pub fn set_priority(&mut self, id: ItemId, priority: Priority) -> Result<(), QueueError> {
        let index = self.locate(id)?;
        if let Some(item) = self.store.get_mut(id) {
            item.priority = priority;
        }
        heap::fix(&mut self.store, index);
        trace!("set_priority {id} priority={priority}");
        self.verify("set_priority");
        Ok(())
    }

    /// Removes a queued item regardless of its priority.
    ///
    /// O(log n). Fails with [`QueueError::StaleItem`] if the item has left
    /// the queue.
    pub fn remove(&mut self, id: ItemId) -> Result<Item<A>, QueueError> {
        let index = self.locate(id)?;
        heap::remove_fix(&mut self.store, index);
        let item = self
            .store
            .truncate_last()
            .ok_or(QueueError::StaleItem(id))?;
        trace!("remove {id} priority={} from index={index}", item.priority);
        self.verify("remove");
        Ok(item)
    }

    /// Removes every item. All outstanding handles become stale.
    pub fn clear(&mut self) {
        debug!("clear {} items", self.len());
        self.store.clear();
    }

    /// Reserves room for at least `additional` more items.
    pub fn reserve(&mut self, additional: usize) {
        self.store.reserve(additional);
    }

    /// Iterates queued items with their handles, in heap-array order
    /// (not priority order).
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item<A>)> + '_ {
        self.store.iter()
    }

    /// Pops items in descending priority order until the queue is empty.
    ///
    /// Items not consumed from the iterator stay in the queue.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, A> {
        DrainSorted { queue: self }
    }

    /// Consumes the queue, returning its items in descending priority order.
    pub fn into_sorted_vec(mut self) -> Vec<Item<A>> {
        let mut items = Vec::with_capacity(self.len());
        items.extend(self.drain_sorted());
        items
    }

    /// Verifies the heap property and every item's index back-reference.
    pub fn check_invariants(&self) -> Result<(), QueueError> {
        self.store.check()
    }

    fn locate(&self, id: ItemId) -> Result<usize, QueueError> {
        match self.store.get(id).and_then(Item::index) {
            Some(index) => Ok(index),
            None => {
                warn!("stale item handle {id}");
                Err(QueueError::StaleItem(id))
            }
        }
    }

    fn verify(&self, op: &str) {
        if !self.config.verify_invariants {
            return;
        }
        let result = self.check_invariants();
        if let Err(e) = &result {
            warn!("{op}: {e}");
        }
        debug_assert!(result.is_ok(), "{op}: {result:?}");
    }
}

impl<A> Default for PriorityQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for PriorityQueue<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.len())
            .field("peek", &self.peek())
            .field("config", &self.config)
            .finish()
    }
}

impl<A> Extend<Item<A>> for PriorityQueue<A> {
    /// Appends all items, then rebuilds the heap in one O(n) pass.
    fn extend<I: IntoIterator<Item = Item<A>>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        let before = self.len();
        for item in iter {
            self.store.append(item);
        }
        heap::init(&mut self.store);
        debug!("heapify {} items ({} new)", self.len(), self.len() - before);
        self.verify("extend");
    }
}

impl<A> FromIterator<Item<A>> for PriorityQueue<A> {
    fn from_iter<I: IntoIterator<Item = Item<A>>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Iterator returned by [`PriorityQueue::drain_sorted`].
pub struct DrainSorted<'a, A> {
    queue: &'a mut PriorityQueue<A>,
}

impl<A> Iterator for DrainSorted<'_, A> {
    type Item = Item<A>;

    fn next(&mut self) -> Option<Item<A>> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.queue.len();
        (n, Some(n))
    }
}

impl<A> ExactSizeIterator for DrainSorted<'_, A> {}
