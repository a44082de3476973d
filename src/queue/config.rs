//! Queue configuration.

/// Configuration for a [`PriorityQueue`](super::PriorityQueue).
///
/// # Defaults
///
/// ```
/// use u_fnpq::QueueConfig;
///
/// let config = QueueConfig::default();
/// assert_eq!(config.initial_capacity, 0);
/// assert_eq!(config.verify_invariants, cfg!(debug_assertions));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_fnpq::{PriorityQueue, QueueConfig};
///
/// let config = QueueConfig::default()
///     .with_initial_capacity(1024)
///     .with_verify_invariants(false);
/// let queue: PriorityQueue<u32> = PriorityQueue::with_config(config).unwrap();
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueConfig {
    /// Number of items to pre-allocate room for.
    pub initial_capacity: usize,

    /// Whether to check the heap property and every index back-reference
    /// after each mutation.
    ///
    /// Each check is O(n). A failed check is logged and trips a
    /// `debug_assert!`. Defaults to on in debug builds only.
    pub verify_invariants: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            verify_invariants: cfg!(debug_assertions),
        }
    }
}

impl QueueConfig {
    /// Largest accepted `initial_capacity`: the size of the `u32` slot space.
    pub const MAX_INITIAL_CAPACITY: usize = u32::MAX as usize;

    /// Sets the pre-allocated capacity.
    pub fn with_initial_capacity(mut self, n: usize) -> Self {
        self.initial_capacity = n;
        self
    }

    /// Enables or disables invariant verification after each mutation.
    pub fn with_verify_invariants(mut self, verify: bool) -> Self {
        self.verify_invariants = verify;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_capacity > Self::MAX_INITIAL_CAPACITY {
            return Err(format!(
                "initial_capacity must be at most {}, got {}",
                Self::MAX_INITIAL_CAPACITY,
                self.initial_capacity
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = QueueConfig::default()
            .with_initial_capacity(64)
            .with_verify_invariants(true);
        assert_eq!(config.initial_capacity, 64);
        assert!(config.verify_invariants);
    }

    #[test]
    fn test_validate_ok() {
        assert!(QueueConfig::default().validate().is_ok());
        let config = QueueConfig::default().with_initial_capacity(u32::MAX as usize);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_capacity_beyond_u32_slots() {
        if let Some(beyond) = QueueConfig::MAX_INITIAL_CAPACITY.checked_add(1) {
            let config = QueueConfig::default().with_initial_capacity(beyond);
            assert!(config.validate().is_err());
        }

        let config = QueueConfig::default().with_initial_capacity(usize::MAX);
        assert!(config.validate().is_err());
    }
}
