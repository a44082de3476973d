//! Slot arena and heap array backing a priority queue.
//!
//! Items live in `slots`; `heap` is the binary-heap array of slot numbers.
//! The raw primitives here (append, truncate-last, swap) do not keep heap
//! order on their own. [`PriorityQueue`](super::PriorityQueue) composes them
//! with [`crate::heap`] into complete operations.

use std::collections::TryReserveError;

use super::types::{Item, ItemId, Priority};
use crate::error::QueueError;
use crate::heap::{self, HeapOps};

struct Slot<A> {
    generation: u64,
    item: Option<Item<A>>,
}

pub(super) struct Store<A> {
    slots: Vec<Slot<A>>,
    free: Vec<usize>,
    heap: Vec<usize>,
}

impl<A> Store<A> {
    pub(super) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            heap: Vec::new(),
        }
    }

    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            heap: Vec::with_capacity(capacity),
        }
    }

    pub(super) fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut store = Self::new();
        store.slots.try_reserve_exact(capacity)?;
        store.heap.try_reserve_exact(capacity)?;
        Ok(store)
    }

    pub(super) fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        let spare = self.free.len();
        self.slots.reserve(additional.saturating_sub(spare));
    }

    /// Looks up a queued item by handle.
    pub(super) fn get(&self, id: ItemId) -> Option<&Item<A>> {
        self.slots
            .get(id.slot)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.item.as_ref())
    }

    pub(super) fn get_mut(&mut self, id: ItemId) -> Option<&mut Item<A>> {
        self.slots
            .get_mut(id.slot)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.item.as_mut())
    }

    /// Returns the item at heap position `pos`.
    pub(super) fn at(&self, pos: usize) -> Option<&Item<A>> {
        let slot = *self.heap.get(pos)?;
        self.slots.get(slot)?.item.as_ref()
    }

    /// Returns the handle of the item at heap position `pos`.
    pub(super) fn id_at(&self, pos: usize) -> Option<ItemId> {
        let slot = *self.heap.get(pos)?;
        let generation = self.slots.get(slot)?.generation;
        Some(ItemId { slot, generation })
    }

    /// Raw append: places the item at the end of the heap array and sets its
    /// index. Heap order is not restored.
    pub(super) fn append(&mut self, mut item: Item<A>) -> ItemId {
        item.index = Some(self.heap.len());
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    item: None,
                });
                self.slots.len() - 1
            }
        };
        let entry = &mut self.slots[slot];
        entry.item = Some(item);
        self.heap.push(slot);
        ItemId {
            slot,
            generation: entry.generation,
        }
    }

    /// Raw truncate: removes the last element of the heap array, frees its
    /// slot and clears the item's index. Heap order is not restored.
    pub(super) fn truncate_last(&mut self) -> Option<Item<A>> {
        let slot = self.heap.pop()?;
        let mut item = self.release(slot)?;
        item.index = None;
        Some(item)
    }

    /// Removes every item, invalidating all handles.
    pub(super) fn clear(&mut self) {
        let mut slots = std::mem::take(&mut self.heap);
        for &slot in &slots {
            self.release(slot);
        }
        slots.clear();
        self.heap = slots;
    }

    fn release(&mut self, slot: usize) -> Option<Item<A>> {
        let entry = self.slots.get_mut(slot)?;
        let item = entry.item.take()?;
        entry.generation += 1;
        self.free.push(slot);
        Some(item)
    }

    fn priority_at(&self, pos: usize) -> Priority {
        self.slots[self.heap[pos]]
            .item
            .as_ref()
            .map_or(Priority::MIN, |item| item.priority)
    }

    fn set_index(&mut self, pos: usize) {
        let slot = self.heap[pos];
        if let Some(item) = self.slots[slot].item.as_mut() {
            item.index = Some(pos);
        }
    }

    /// Iterates `(handle, item)` pairs in heap-array order.
    pub(super) fn iter(&self) -> impl Iterator<Item = (ItemId, &Item<A>)> + '_ {
        self.heap.iter().filter_map(move |&slot| {
            let entry = self.slots.get(slot)?;
            let item = entry.item.as_ref()?;
            Some((
                ItemId {
                    slot,
                    generation: entry.generation,
                },
                item,
            ))
        })
    }

    /// Verifies index back-references, then the heap property.
    pub(super) fn check(&self) -> Result<(), QueueError> {
        for (pos, &slot) in self.heap.iter().enumerate() {
            let consistent = self
                .slots
                .get(slot)
                .and_then(|entry| entry.item.as_ref())
                .is_some_and(|item| item.index == Some(pos));
            if !consistent {
                return Err(QueueError::InvariantViolated { position: pos });
            }
        }
        match heap::violation(self) {
            Some(position) => Err(QueueError::InvariantViolated { position }),
            None => Ok(()),
        }
    }
}

impl<A> HeapOps for Store<A> {
    fn len(&self) -> usize {
        self.heap.len()
    }

    /// Max-heap: the higher priority sits closer to the root.
    fn less(&self, i: usize, j: usize) -> bool {
        self.priority_at(i) > self.priority_at(j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.set_index(i);
        self.set_index(j);
    }
}
