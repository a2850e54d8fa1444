//! The array being sorted.
//!
//! [`ArrayState`] owns the sequence of integers a session mutates. All
//! access is bounds-checked and reported as [`ArrayError`] rather than
//! panicking, so a cursor bug aborts the session instead of the host.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::ArrayError;

/// A mutable sequence of integers with bounds-checked access.
///
/// Tracks how many swaps and writes actually changed the contents.
/// Swapping two equal values, or writing the value already stored,
/// leaves the array untouched and is not counted.
#[derive(Clone, Debug, Default)]
pub struct ArrayState {
    values: Vec<i32>,
    swaps: u64,
    writes: u64,
}

impl ArrayState {
    /// Generate `len` uniformly random integers in `[min, max]` using an
    /// entropy-seeded RNG.
    pub fn new(len: usize, min: i32, max: i32) -> Result<Self, ArrayError> {
        Self::with_seed(len, min, max, rand::random())
    }

    /// Generate `len` uniformly random integers in `[min, max]`.
    ///
    /// Identical `(len, min, max, seed)` always produce identical arrays.
    pub fn with_seed(len: usize, min: i32, max: i32, seed: u64) -> Result<Self, ArrayError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate(len, min, max, &mut rng)
    }

    /// Generate `len` uniformly random integers in `[min, max]` from `rng`.
    pub fn generate<R: Rng + ?Sized>(
        len: usize,
        min: i32,
        max: i32,
        rng: &mut R,
    ) -> Result<Self, ArrayError> {
        if min > max {
            return Err(ArrayError::InvalidRange { min, max });
        }
        let values = (0..len).map(|_| rng.random_range(min..=max)).collect();
        Ok(Self::from_vec(values))
    }

    /// Wrap an existing sequence.
    pub fn from_vec(values: Vec<i32>) -> Self {
        Self {
            values,
            swaps: 0,
            writes: 0,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<i32, ArrayError> {
        self.values
            .get(index)
            .copied()
            .ok_or(ArrayError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), ArrayError> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })?;
        if *slot != value {
            *slot = value;
            self.writes += 1;
        }
        Ok(())
    }

    /// Exchange the elements at `i` and `j`.
    ///
    /// Both indices are checked before anything moves, so a failed swap
    /// leaves the array unchanged.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), ArrayError> {
        let a = self.get(i)?;
        let b = self.get(j)?;
        if a != b {
            self.values.swap(i, j);
            self.swaps += 1;
        }
        Ok(())
    }

    /// Borrow the inclusive index range `range`.
    pub fn range(&self, range: RangeInclusive<usize>) -> Result<&[i32], ArrayError> {
        let (start, end) = range.into_inner();
        let len = self.values.len();
        if end >= len {
            return Err(ArrayError::IndexOutOfRange { index: end, len });
        }
        if start > end {
            return Ok(&[]);
        }
        Ok(&self.values[start..=end])
    }

    /// Borrow the current contents.
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Copy the current contents for rendering.
    pub fn snapshot(&self) -> Vec<i32> {
        self.values.clone()
    }

    /// Consume the state, returning the values.
    pub fn into_vec(self) -> Vec<i32> {
        self.values
    }

    /// Swaps that exchanged unequal values since construction.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Writes that changed a value since construction.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Whether the contents are in ascending order.
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl From<Vec<i32>> for ArrayState {
    fn from(values: Vec<i32>) -> Self {
        Self::from_vec(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn with_seed_is_deterministic() {
        let a = ArrayState::with_seed(50, 1, 99, 42).unwrap();
        let b = ArrayState::with_seed(50, 1, 99, 42).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn different_seeds_differ() {
        let a = ArrayState::with_seed(50, 1, 1000, 1).unwrap();
        let b = ArrayState::with_seed(50, 1, 1000, 2).unwrap();
        assert_ne!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn new_respects_bounds() {
        let a = ArrayState::new(200, -5, 5).unwrap();
        assert_eq!(a.len(), 200);
        assert!(a.as_slice().iter().all(|v| (-5..=5).contains(v)));
    }

    #[test]
    fn empty_range_rejected() {
        assert_eq!(
            ArrayState::with_seed(3, 10, 1, 0).unwrap_err(),
            ArrayError::InvalidRange { min: 10, max: 1 }
        );
    }

    #[test]
    fn single_value_range_allowed() {
        let a = ArrayState::with_seed(4, 7, 7, 0).unwrap();
        assert_eq!(a.as_slice(), &[7, 7, 7, 7]);
    }

    #[test]
    fn swap_exchanges_and_counts() {
        let mut a = ArrayState::from_vec(vec![1, 2, 3]);
        a.swap(0, 2).unwrap();
        assert_eq!(a.as_slice(), &[3, 2, 1]);
        assert_eq!(a.swaps(), 1);
    }

    #[test]
    fn swap_of_equal_values_not_counted() {
        let mut a = ArrayState::from_vec(vec![4, 4]);
        a.swap(0, 1).unwrap();
        a.swap(1, 1).unwrap();
        assert_eq!(a.swaps(), 0);
    }

    #[test]
    fn swap_out_of_range_leaves_array_intact() {
        let mut a = ArrayState::from_vec(vec![1, 2, 3]);
        let err = a.swap(0, 3).unwrap_err();
        assert_eq!(err, ArrayError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(a.swaps(), 0);
    }

    #[test]
    fn set_counts_only_changes() {
        let mut a = ArrayState::from_vec(vec![1, 2]);
        a.set(0, 1).unwrap();
        a.set(1, 5).unwrap();
        assert_eq!(a.as_slice(), &[1, 5]);
        assert_eq!(a.writes(), 1);
        assert!(a.set(2, 0).is_err());
    }

    #[test]
    fn range_is_bounds_checked() {
        let a = ArrayState::from_vec(vec![1, 2, 3, 4]);
        assert_eq!(a.range(1..=2).unwrap(), &[2, 3]);
        assert!(a.range(2..=4).is_err());
    }

    #[test]
    fn snapshot_is_detached() {
        let mut a = ArrayState::from_vec(vec![2, 1]);
        let snap = a.snapshot();
        a.swap(0, 1).unwrap();
        assert_eq!(snap, vec![2, 1]);
        assert_eq!(a.as_slice(), &[1, 2]);
    }

    proptest! {
        #[test]
        fn swap_preserves_multiset(
            values in proptest::collection::vec(-100i32..100, 1..64),
            i in 0usize..64,
            j in 0usize..64,
        ) {
            let len = values.len();
            let mut a = ArrayState::from_vec(values.clone());
            let _ = a.swap(i % len, j % len);
            let mut before = values;
            let mut after = a.snapshot();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn generated_values_within_bounds(
            len in 0usize..128,
            min in -1000i32..1000,
            span in 0i32..1000,
            seed in any::<u64>(),
        ) {
            let a = ArrayState::with_seed(len, min, min + span, seed).unwrap();
            prop_assert_eq!(a.len(), len);
            prop_assert!(a.as_slice().iter().all(|v| *v >= min && *v <= min + span));
        }
    }
}
