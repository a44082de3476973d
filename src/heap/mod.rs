//! Generic binary-heap maintenance.
//!
//! Implements the sift-up / sift-down family of routines over any container
//! implementing [`HeapOps`]. The container supplies only three primitives
//! (`len`, `less`, `swap`); growing and shrinking the backing array stays with
//! the container, so that it can keep side tables (such as per-element
//! position back-references) consistent inside `swap`.
//!
//! # Composition
//!
//! | Logical operation | Container step            | Heap step            |
//! |-------------------|---------------------------|----------------------|
//! | insert            | append at the end         | [`push_fix`]         |
//! | extract root      | (nothing)                 | [`pop_fix`], then truncate last |
//! | remove at `i`     | (nothing)                 | [`remove_fix`], then truncate last |
//! | change at `i`     | mutate in place           | [`fix`]              |
//!
//! # References
//!
//! Williams, J.W.J. (1964), "Algorithm 232: Heapsort", *CACM* 7(6).
//! Floyd, R.W. (1964), "Algorithm 245: Treesort 3", *CACM* 7(12).

mod sift;
mod types;

pub use sift::{fix, init, pop_fix, push_fix, remove_fix, sift_down, sift_up, violation};
pub use types::HeapOps;
