//! Indexed max-priority queue of deferred actions.
//!
//! [`PriorityQueue`] keeps [`Item`]s in a binary max-heap ordered by
//! [`Priority`]. Each push returns an [`ItemId`] handle through which the
//! caller can later change the item's priority or action, or remove it,
//! in O(log n).
//!
//! # Design
//!
//! Items are owned by the queue in a slot arena. The heap array holds slot
//! numbers, and every item records its current heap position, refreshed on
//! each swap. Handles carry a slot generation, so a handle to an item that
//! has left the queue is rejected with [`QueueError::StaleItem`] rather than
//! touching whatever occupies the slot now.
//!
//! The queue never calls an item's action. Actions are opaque values of any
//! type `A`; the default [`Action`] is a boxed `FnMut()`, and the
//! [`Invocable`] trait lets callers run whatever they popped.
//!
//! [`QueueError::StaleItem`]: crate::QueueError::StaleItem

mod config;
mod priority_queue;
mod store;
mod types;

pub use config::QueueConfig;
pub use priority_queue::{DrainSorted, PriorityQueue};
pub use types::{Action, Invocable, Item, ItemId, Priority};
