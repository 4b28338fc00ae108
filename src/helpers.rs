/*
 * Helpers shared between solutions.
 * Example import from this file: `use advent_of_code_2022::helpers::slice_pair_mut;`.
 */

mod max_n;
pub mod parse;
mod split_by;

pub use max_n::MaxN;
pub use split_by::{SplitBy, SplitGroups};

pub trait Itertools: Iterator {
    /// Splits the iterator into groups separated by items matching
    /// `predicate`. Behaves like [`str::split_terminator`]: a trailing
    /// separator does not produce an empty last group.
    ///
    /// Iterate the result by reference; each group is a `Vec`.
    fn split_by<F>(self, predicate: F) -> SplitBy<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
        Self: Sized,
    {
        SplitBy::new(self, predicate)
    }

    /// Returns the `n` largest items, largest first.
    fn max_n(self, n: usize) -> Vec<Self::Item>
    where
        Self::Item: Ord,
        Self: Sized,
    {
        let mut max_n = MaxN::new(n);
        for elt in self {
            max_n.accumulate(elt);
        }
        max_n.into_sorted_vec()
    }
}

impl<I: Iterator> Itertools for I {}

/// Borrows two distinct elements of a slice mutably at once.
///
/// Returns `None` if `a == b` or either index is out of bounds.
pub fn slice_pair_mut<T>(slice: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b || a >= slice.len() || b >= slice.len() {
        return None;
    }
    if a < b {
        let (head, tail) = slice.split_at_mut(b);
        Some((&mut head[a], &mut tail[0]))
    } else {
        let (head, tail) = slice.split_at_mut(a);
        Some((&mut tail[0], &mut head[b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_pair_mut_swaps_order() {
        let mut v = vec![1, 2, 3];
        let (a, b) = slice_pair_mut(&mut v, 2, 0).unwrap();
        assert_eq!((*a, *b), (3, 1));
        std::mem::swap(a, b);
        assert_eq!(v, [3, 2, 1]);
    }

    #[test]
    fn slice_pair_mut_rejects_bad_indices() {
        let mut v = vec![1, 2, 3];
        assert!(slice_pair_mut(&mut v, 1, 1).is_none());
        assert!(slice_pair_mut(&mut v, 0, 3).is_none());
    }

    #[test]
    fn max_n_of_iterator() {
        assert_eq!([5, 1, 4, 2].into_iter().max_n(2), vec![5, 4]);
        assert_eq!([5, 1].iter().max_n(3), vec![&5, &1]);
    }
}
