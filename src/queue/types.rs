//! Item records and handles.

use std::fmt;

/// Item priority. Higher values are dequeued sooner.
pub type Priority = i64;

/// Default action type: a boxed zero-argument callable.
pub type Action = Box<dyn FnMut()>;

/// A zero-argument deferred operation.
///
/// The queue never calls actions; this trait lets the caller invoke an
/// action it got back from the queue, whatever its concrete type.
/// Implemented for every `FnMut()`, boxed or not.
pub trait Invocable {
    /// Runs the action.
    fn invoke(&mut self);
}

impl<F: FnMut() + ?Sized> Invocable for F {
    fn invoke(&mut self) {
        self()
    }
}

/// One enqueued unit of work: an opaque action and its priority.
///
/// While the item is queued, `index` is its current position in the heap
/// array, maintained by the queue on every swap. It is `None` before the
/// item is pushed and after it has been removed.
pub struct Item<A = Action> {
    pub(super) action: A,
    pub(super) priority: Priority,
    pub(super) index: Option<usize>,
}

impl<A> Item<A> {
    /// Creates an item that is not yet in any queue.
    pub fn new(action: A, priority: Priority) -> Self {
        Self {
            action,
            priority,
            index: None,
        }
    }

    /// Returns the action.
    pub fn action(&self) -> &A {
        &self.action
    }

    /// Returns the action mutably.
    pub fn action_mut(&mut self) -> &mut A {
        &mut self.action
    }

    /// Consumes the item, returning its action.
    pub fn into_action(self) -> A {
        self.action
    }

    /// Consumes the item, returning its action and priority.
    pub fn into_parts(self) -> (A, Priority) {
        (self.action, self.priority)
    }

    /// Returns the priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the item's position in the heap array, or `None` if the item
    /// is not queued.
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

impl<A: Invocable> Item<A> {
    /// Invokes the item's action.
    pub fn invoke(&mut self) {
        self.action.invoke();
    }
}

impl<A> fmt::Debug for Item<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("priority", &self.priority)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// Handle to an item inside a [`PriorityQueue`](super::PriorityQueue).
///
/// Returned by `push` and accepted by `update`, `set_priority`, `remove`
/// and lookups. A handle goes stale once its item leaves the queue; the
/// slot may be reused, but the generation check keeps an old handle from
/// reaching the new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId {
    pub(super) slot: usize,
    pub(super) generation: u64,
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.slot, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_new_item_not_indexed() {
        let item = Item::new("job", -3);
        assert_eq!(item.priority(), -3);
        assert_eq!(item.index(), None);
        assert_eq!(*item.action(), "job");
    }

    #[test]
    fn test_invoke_boxed_action() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let action: Action = Box::new(move || counter.set(counter.get() + 1));
        let mut item = Item::new(action, 1);

        item.invoke();
        item.invoke();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_into_parts() {
        let item = Item::new(7u8, 42);
        assert_eq!(item.into_parts(), (7u8, 42));
    }

    #[test]
    fn test_debug_omits_action() {
        let action: Action = Box::new(|| {});
        let item = Item::new(action, 5);
        let text = format!("{item:?}");
        assert!(text.contains("priority: 5"));
        assert!(text.contains("index: None"));
    }

    #[test]
    fn test_item_id_display() {
        let id = ItemId {
            slot: 3,
            generation: 2,
        };
        assert_eq!(id.to_string(), "#3v2");
    }
}
