//! Sift routines.

use super::types::HeapOps;

/// Establishes the heap property over the whole container in O(n).
///
/// Sifts down every internal node, from the last parent towards the root.
pub fn init<H: HeapOps + ?Sized>(h: &mut H) {
    let n = h.len();
    for i in (0..n / 2).rev() {
        sift_down(h, i, n);
    }
}

/// Moves the element at `j` towards the root while it is `less` than its
/// parent.
pub fn sift_up<H: HeapOps + ?Sized>(h: &mut H, mut j: usize) {
    while j > 0 {
        let parent = (j - 1) / 2;
        if !h.less(j, parent) {
            break;
        }
        h.swap(parent, j);
        j = parent;
    }
}

/// Moves the element at `i0` away from the root, considering only the
/// prefix `[0, n)`.
///
/// At each level the element is swapped with the child that is `less` than
/// its sibling, as long as that child is `less` than the element.
///
/// Returns true if the element moved.
///
/// # Panics
///
/// May panic (through `less` or `swap`) if `n > h.len()`; debug builds
/// assert it.
pub fn sift_down<H: HeapOps + ?Sized>(h: &mut H, i0: usize, n: usize) -> bool {
    debug_assert!(n <= h.len(), "sift_down prefix {n} exceeds length {}", h.len());
    let mut i = i0;
    loop {
        let left = match i.checked_mul(2).and_then(|x| x.checked_add(1)) {
            Some(left) if left < n => left,
            _ => break,
        };
        let mut child = left;
        let right = left + 1;
        if right < n && h.less(right, left) {
            child = right;
        }
        if !h.less(child, i) {
            break;
        }
        h.swap(i, child);
        i = child;
    }
    i > i0
}

/// Re-establishes the heap property after the element at `i` changed.
///
/// Sifts down first; if the element did not move, sifts up. Equivalent to,
/// but cheaper than, removing the element and inserting it again.
///
/// # Panics
///
/// Panics if `i >= h.len()`.
pub fn fix<H: HeapOps + ?Sized>(h: &mut H, i: usize) {
    let n = h.len();
    assert!(i < n, "fix index {i} out of bounds for length {n}");
    if !sift_down(h, i, n) {
        sift_up(h, i);
    }
}

/// Restores order after the container appended an element at its end.
pub fn push_fix<H: HeapOps + ?Sized>(h: &mut H) {
    if let Some(last) = h.len().checked_sub(1) {
        sift_up(h, last);
    }
}

/// Moves the root to the last position and repairs the heap over the
/// remaining prefix.
///
/// The container must then remove its last element, which is the former
/// root. Does nothing on an empty container.
pub fn pop_fix<H: HeapOps + ?Sized>(h: &mut H) {
    let Some(last) = h.len().checked_sub(1) else {
        return;
    };
    h.swap(0, last);
    sift_down(h, 0, last);
}

/// Moves the element at `i` to the last position and repairs the heap over
/// the remaining prefix.
///
/// The container must then remove its last element, which is the former
/// element at `i`. `i` must be less than `h.len()`.
pub fn remove_fix<H: HeapOps + ?Sized>(h: &mut H, i: usize) {
    debug_assert!(i < h.len(), "remove_fix index {i} out of bounds");
    let Some(last) = h.len().checked_sub(1) else {
        return;
    };
    if i != last {
        h.swap(i, last);
        if !sift_down(h, i, last) {
            sift_up(h, i);
        }
    }
}

/// Returns the first position whose element is `less` than its parent, or
/// `None` if the heap property holds everywhere.
pub fn violation<H: HeapOps + ?Sized>(h: &H) -> Option<usize> {
    (1..h.len()).find(|&k| h.less(k, (k - 1) / 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Min-heap of integers, counting swaps.
    #[derive(Debug, Default)]
    struct IntHeap {
        data: Vec<i64>,
        swaps: usize,
    }

    impl IntHeap {
        fn from(data: Vec<i64>) -> Self {
            Self { data, swaps: 0 }
        }

        fn push(&mut self, x: i64) {
            self.data.push(x);
            push_fix(self);
        }

        fn pop(&mut self) -> Option<i64> {
            pop_fix(self);
            self.data.pop()
        }

        fn remove(&mut self, i: usize) -> i64 {
            remove_fix(self, i);
            self.data.pop().unwrap()
        }
    }

    impl HeapOps for IntHeap {
        fn len(&self) -> usize {
            self.data.len()
        }
        fn less(&self, i: usize, j: usize) -> bool {
            self.data[i] < self.data[j]
        }
        fn swap(&mut self, i: usize, j: usize) {
            self.data.swap(i, j);
            self.swaps += 1;
        }
    }

    #[test]
    fn test_init_all_equal() {
        let mut h = IntHeap::from(vec![0; 20]);
        init(&mut h);
        assert_eq!(violation(&h), None);
        assert_eq!(h.swaps, 0);
    }

    #[test]
    fn test_init_descending() {
        let mut h = IntHeap::from((0..20).rev().collect());
        init(&mut h);
        assert_eq!(violation(&h), None);
        for expected in 0..20 {
            assert_eq!(h.pop(), Some(expected));
        }
        assert_eq!(h.pop(), None);
    }

    #[test]
    fn test_push_pop_interleaved() {
        let mut h = IntHeap::default();
        for x in [20, 10, 5, 15] {
            h.push(x);
            assert_eq!(violation(&h), None);
        }
        assert_eq!(h.pop(), Some(5));
        h.push(1);
        assert_eq!(h.pop(), Some(1));
        assert_eq!(h.pop(), Some(10));
        assert_eq!(h.pop(), Some(15));
        assert_eq!(h.pop(), Some(20));
        assert!(h.is_empty());
    }

    #[test]
    fn test_pop_fix_empty_is_noop() {
        let mut h = IntHeap::default();
        pop_fix(&mut h);
        assert_eq!(h.swaps, 0);
    }

    #[test]
    fn test_remove_last_does_not_swap() {
        let mut h = IntHeap::from((0..10).collect());
        init(&mut h);
        let swaps = h.swaps;
        assert_eq!(h.remove(9), 9);
        assert_eq!(h.swaps, swaps);
        assert_eq!(violation(&h), None);
    }

    #[test]
    fn test_remove_root_and_middle() {
        let mut h = IntHeap::from((0..10).collect());
        init(&mut h);
        assert_eq!(h.remove(0), 0);
        assert_eq!(violation(&h), None);
        let removed = h.remove(3);
        assert_eq!(violation(&h), None);
        assert!(!h.data.contains(&removed));
        assert_eq!(h.len(), 8);
    }

    #[test]
    fn test_fix_raise_and_lower() {
        let mut h = IntHeap::from((0..10).collect());
        init(&mut h);

        // Lower the root's rank: it must sink.
        h.data[0] = 100;
        fix(&mut h, 0);
        assert_eq!(violation(&h), None);
        assert_eq!(h.data[0], 1);

        // Raise a leaf's rank: it must rise to the root.
        let leaf = h.len() - 1;
        h.data[leaf] = -1;
        fix(&mut h, leaf);
        assert_eq!(violation(&h), None);
        assert_eq!(h.data[0], -1);
    }

    #[test]
    fn test_sift_down_respects_prefix() {
        // Position 2 holds a smaller value but lies outside the prefix.
        let mut h = IntHeap::from(vec![5, 6, 1]);
        assert!(!sift_down(&mut h, 0, 2));
        assert_eq!(h.data, vec![5, 6, 1]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_fix_out_of_range_panics() {
        let mut h = IntHeap::from(vec![1, 2, 3]);
        fix(&mut h, 3);
    }

    #[test]
    #[should_panic]
    fn test_sift_down_prefix_beyond_len_panics() {
        // Reaching position 3 needs a prefix longer than the container.
        let mut h = IntHeap::from(vec![5, 1, 2]);
        sift_down(&mut h, 0, 10);
    }

    #[test]
    fn test_violation_reports_first_position() {
        let h = IntHeap::from(vec![1, 2, 3, 0, 4]);
        assert_eq!(violation(&h), Some(3));
    }

    proptest! {
        #[test]
        fn prop_init_then_pop_is_sorted(data in prop::collection::vec(-1000i64..1000, 0..200)) {
            let mut expected = data.clone();
            expected.sort_unstable();

            let mut h = IntHeap::from(data);
            init(&mut h);
            prop_assert_eq!(violation(&h), None);

            let mut out = Vec::with_capacity(expected.len());
            while let Some(x) = h.pop() {
                out.push(x);
            }
            prop_assert_eq!(out, expected);
        }

        #[test]
        fn prop_fix_after_arbitrary_change(
            data in prop::collection::vec(-1000i64..1000, 1..100),
            pick in any::<prop::sample::Index>(),
            value in -2000i64..2000,
        ) {
            let mut h = IntHeap::from(data);
            init(&mut h);
            let i = pick.index(h.len());
            h.data[i] = value;
            fix(&mut h, i);
            prop_assert_eq!(violation(&h), None);
        }
    }
}
