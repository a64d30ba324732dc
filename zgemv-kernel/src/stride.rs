//! Strided traversal of BLAS-style vectors.
//!
//! A BLAS vector is described by a buffer, an element count and an increment.
//! For a positive increment logical element `i` lives at `i * inc`. For a
//! negative increment the vector is walked backwards: logical element 0 lives
//! at `(count - 1) * |inc|` and element `count - 1` at position 0.

use std::iter::FusedIterator;

/// Iterator over the storage positions of a strided vector, in logical order.
///
/// # Example
/// ```
/// use zgemv_kernel::StridedIndex;
///
/// let forward: Vec<usize> = StridedIndex::new(3, 2).collect();
/// assert_eq!(forward, vec![0, 2, 4]);
///
/// let backward: Vec<usize> = StridedIndex::new(3, -2).collect();
/// assert_eq!(backward, vec![4, 2, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct StridedIndex {
    front: usize,
    step: usize,
    descending: bool,
    remaining: usize,
}

impl StridedIndex {
    /// Positions of `count` logical elements with increment `inc`.
    pub fn new(count: usize, inc: isize) -> Self {
        let step = inc.unsigned_abs();
        let descending = inc < 0;
        let front = if descending && count > 0 {
            (count - 1) * step
        } else {
            0
        };
        Self {
            front,
            step,
            descending,
            remaining: count,
        }
    }
}

impl Iterator for StridedIndex {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let pos = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            if self.descending {
                self.front -= self.step;
            } else {
                self.front += self.step;
            }
        }
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for StridedIndex {
    #[inline]
    fn next_back(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let offset = self.remaining * self.step;
        if self.descending {
            Some(self.front - offset)
        } else {
            Some(self.front + offset)
        }
    }
}

impl ExactSizeIterator for StridedIndex {}

impl FusedIterator for StridedIndex {}

/// Minimum buffer length holding `count` elements with increment `inc`.
#[inline]
pub fn required_len(count: usize, inc: isize) -> usize {
    if count == 0 {
        return 0;
    }
    (count - 1)
        .saturating_mul(inc.unsigned_abs())
        .saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_stride_positions() {
        let pos: Vec<usize> = StridedIndex::new(4, 3).collect();
        assert_eq!(pos, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_negative_stride_positions() {
        let pos: Vec<usize> = StridedIndex::new(4, -3).collect();
        assert_eq!(pos, vec![9, 6, 3, 0]);
    }

    #[test]
    fn test_unit_strides() {
        assert_eq!(StridedIndex::new(3, 1).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(StridedIndex::new(3, -1).collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(StridedIndex::new(0, 5).count(), 0);
        assert_eq!(StridedIndex::new(0, -5).count(), 0);
        assert_eq!(StridedIndex::new(1, -5).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_reverse_matches_forward() {
        for inc in [-3isize, -1, 1, 2] {
            let forward: Vec<usize> = StridedIndex::new(5, inc).collect();
            let mut backward: Vec<usize> = StridedIndex::new(5, inc).rev().collect();
            backward.reverse();
            assert_eq!(forward, backward, "inc = {inc}");
        }
    }

    #[test]
    fn test_mixed_ends() {
        let mut it = StridedIndex::new(4, -2);
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(6));
        assert_eq!(it.next_back(), Some(0));
        assert_eq!(it.next(), Some(4));
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_required_len() {
        assert_eq!(required_len(0, 7), 0);
        assert_eq!(required_len(1, -7), 1);
        assert_eq!(required_len(3, 2), 5);
        assert_eq!(required_len(3, -2), 5);
    }
}
