//! Indexed priority queue of deferred actions.
//!
//! Provides a single data structure and the heap algorithm behind it:
//!
//! - **Heap**: Generic binary-heap maintenance (sift-up, sift-down, fix,
//!   heapify) over any array-like container that exposes `len`, `less`
//!   and `swap`.
//! - **Queue**: [`PriorityQueue`], a max-heap of [`Item`]s, each holding an
//!   opaque action and a signed priority. Items can be re-prioritized in
//!   place through the [`ItemId`] handle returned on insertion.
//!
//! # Architecture
//!
//! The queue owns its items in a slot arena and keeps every item's position
//! in the heap array as a back-reference, updated on every swap. Callers
//! never see raw array primitives; only logically complete operations
//! (`push`, `pop`, `update`, `remove`) are public.
//!
//! ```
//! use u_fnpq::{Item, PriorityQueue};
//!
//! let mut queue: PriorityQueue<&str> = PriorityQueue::new();
//! queue.push(Item::new("a", 5));
//! let b = queue.push(Item::new("b", 1));
//! queue.push(Item::new("c", 3));
//!
//! queue.set_priority(b, 10).unwrap();
//! assert_eq!(queue.pop().map(|i| *i.action()), Some("b"));
//! assert_eq!(queue.pop().map(|i| *i.action()), Some("a"));
//! ```

mod error;
pub mod heap;
pub mod queue;

pub use error::QueueError;
pub use queue::{Action, Invocable, Item, ItemId, Priority, PriorityQueue, QueueConfig};
