//! Core trait for heap-ordered containers.

/// Primitive operations a container must provide to be maintained as a
/// binary heap by the functions in [`crate::heap`].
///
/// The element for which `less` holds against every other element ends up
/// at position 0. A max-heap therefore implements `less` as "strictly
/// greater than".
///
/// # Examples
///
/// ```
/// use u_fnpq::heap::{self, HeapOps};
///
/// // Max-heap of integers.
/// struct MaxHeap(Vec<i32>);
///
/// impl HeapOps for MaxHeap {
///     fn len(&self) -> usize { self.0.len() }
///     fn less(&self, i: usize, j: usize) -> bool { self.0[i] > self.0[j] }
///     fn swap(&mut self, i: usize, j: usize) { self.0.swap(i, j) }
/// }
///
/// let mut h = MaxHeap(vec![3, 9, 1, 7]);
/// heap::init(&mut h);
/// assert_eq!(h.0[0], 9);
/// ```
pub trait HeapOps {
    /// Number of elements currently in the container.
    fn len(&self) -> usize;

    /// Returns true if the element at `i` must sit closer to the root than
    /// the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`.
    ///
    /// Implementations must update any position bookkeeping they keep for
    /// the two elements.
    fn swap(&mut self, i: usize, j: usize);

    /// Returns true if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
