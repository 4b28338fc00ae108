use std::cmp::Reverse;
use std::collections::BinaryHeap;

use itertools::Itertools;

/// Keeps the `n` largest values seen so far.
///
/// Backed by a min-heap of at most `n` values, so the smallest kept value
/// is the one evicted when a larger one arrives.
#[derive(Debug, Clone)]
pub struct MaxN<T> {
    n: usize,
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> MaxN<T> {
    #[inline]
    pub fn new(n: usize) -> Self {
        Self {
            n,
            heap: BinaryHeap::with_capacity(n + 1),
        }
    }

    pub fn accumulate(&mut self, elt: T) {
        if self.n == 0 {
            return;
        }
        if self.heap.len() < self.n {
            self.heap.push(Reverse(elt));
            return;
        }
        let smallest_is_smaller = self
            .heap
            .peek()
            .map(|Reverse(smallest)| *smallest < elt)
            .unwrap_or(false);
        if smallest_is_smaller {
            self.heap.pop();
            self.heap.push(Reverse(elt));
        }

        debug_assert!(self.heap.len() <= self.n);
    }

    /// The kept values, largest first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let n = self.n;
        // Ascending in `Reverse` is descending in `T`.
        let sorted: Vec<T> = self
            .heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(elt)| elt)
            .collect();
        debug_assert!(Self::invariants_hold(n, &sorted));
        sorted
    }

    fn invariants_hold(n: usize, sorted: &[T]) -> bool {
        sorted.len() <= n && sorted.iter().tuple_windows().all(|(a, b)| a >= b)
    }
}
