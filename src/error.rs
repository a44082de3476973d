//! Error type shared by queue operations.

use crate::queue::ItemId;

/// Errors reported by [`PriorityQueue`](crate::PriorityQueue).
///
/// All variants describe caller mistakes or broken internal state; none are
/// transient, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// The handle refers to an item that is no longer (or never was) queued.
    #[error("item {0} is not in the queue")]
    StaleItem(ItemId),

    /// The heap property or an item's index back-reference does not hold.
    #[error("heap invariant violated at position {position}")]
    InvariantViolated {
        /// First heap position found in violation.
        position: usize,
    },

    /// A [`QueueConfig`](crate::QueueConfig) failed validation.
    #[error("invalid queue config: {0}")]
    InvalidConfig(String),
}
