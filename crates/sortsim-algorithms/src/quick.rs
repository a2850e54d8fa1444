//! Quicksort over an explicit span stack, one partition per step.
//!
//! Recursion is replaced by a stack of pending [`Span`]s so array size
//! never threatens the call stack and cancellation can land between any
//! two partitions. Partitioning uses the Lomuto scheme with the last
//! element as pivot.

use smallvec::SmallVec;
use sortsim_core::{ArrayError, ArrayState, HighlightRole, HighlightSet};

use crate::cursor::{SortCursor, Step};
use crate::kind::AlgorithmKind;

/// An inclusive index range `[low, high]` awaiting partitioning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// First index (inclusive).
    pub low: usize,
    /// Last index (inclusive).
    pub high: usize,
}

impl Span {
    /// Whether the span holds at least two elements.
    fn is_nontrivial(self) -> bool {
        self.low < self.high
    }
}

/// Quicksort cursor.
///
/// Only non-trivial spans are ever pushed, so every step performs a real
/// partition and the sort is done exactly when the stack is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickCursor {
    stack: SmallVec<[Span; 16]>,
}

impl QuickCursor {
    /// Cursor for an array of `len` elements.
    pub fn new(len: usize) -> Self {
        let mut stack = SmallVec::new();
        if len >= 2 {
            stack.push(Span {
                low: 0,
                high: len - 1,
            });
        }
        Self { stack }
    }

    /// Spans still waiting to be partitioned, bottom of the stack first.
    pub fn pending(&self) -> &[Span] {
        &self.stack
    }
}

/// Lomuto partition of `span`; returns the pivot's final index.
///
/// Elements `<= pivot` are moved left of a boundary that grows as they
/// are found; the pivot is then swapped onto the boundary.
fn partition(array: &mut ArrayState, span: Span) -> Result<usize, ArrayError> {
    let pivot = array.get(span.high)?;
    let mut boundary = span.low;
    for j in span.low..span.high {
        if array.get(j)? <= pivot {
            array.swap(boundary, j)?;
            boundary += 1;
        }
    }
    array.swap(boundary, span.high)?;
    Ok(boundary)
}

impl SortCursor for QuickCursor {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Quick
    }

    fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    fn step(&mut self, array: &mut ArrayState) -> Result<Step, ArrayError> {
        let Some(span) = self.stack.pop() else {
            return Ok(Step::finished());
        };

        let pivot_index = match partition(array, span) {
            Ok(p) => p,
            Err(e) => {
                // Keep the span so the cursor state still describes the array.
                self.stack.push(span);
                return Err(e);
            }
        };

        if pivot_index > span.low {
            let left = Span {
                low: span.low,
                high: pivot_index - 1,
            };
            if left.is_nontrivial() {
                self.stack.push(left);
            }
        }
        let right = Span {
            low: pivot_index + 1,
            high: span.high,
        };
        if right.is_nontrivial() {
            self.stack.push(right);
        }

        let mut highlights = HighlightSet::new();
        highlights.mark(span.low, HighlightRole::Boundary);
        highlights.mark(span.high, HighlightRole::Boundary);
        highlights.mark(pivot_index, HighlightRole::Pivot);

        Ok(Step::new(highlights, self.is_done()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_places_pivot() {
        let mut array = ArrayState::from_vec(vec![7, 2, 9, 1, 5]);
        let p = partition(&mut array, Span { low: 0, high: 4 }).unwrap();
        assert_eq!(p, 2);
        assert_eq!(array.get(2).unwrap(), 5);
        assert!(array.as_slice()[..2].iter().all(|&v| v <= 5));
        assert!(array.as_slice()[3..].iter().all(|&v| v > 5));
    }

    #[test]
    fn first_step_highlights_range_and_pivot() {
        let mut array = ArrayState::from_vec(vec![3, 1, 2]);
        let mut cursor = QuickCursor::new(3);
        let s = cursor.step(&mut array).unwrap();
        assert_eq!(array.as_slice(), &[1, 2, 3]);
        assert_eq!(s.highlights.role(0), Some(HighlightRole::Boundary));
        assert_eq!(s.highlights.role(1), Some(HighlightRole::Pivot));
        assert_eq!(s.highlights.role(2), Some(HighlightRole::Boundary));
        // Both sides are single elements, nothing left to do.
        assert!(s.done);
    }

    #[test]
    fn only_nontrivial_spans_are_pushed() {
        let mut array = ArrayState::from_vec(vec![4, 3, 2, 1, 5]);
        let mut cursor = QuickCursor::new(5);
        cursor.step(&mut array).unwrap();
        // Pivot 5 lands at index 4; only [0, 3] remains.
        assert_eq!(cursor.pending(), &[Span { low: 0, high: 3 }]);
    }

    #[test]
    fn right_span_popped_first() {
        let mut array = ArrayState::from_vec(vec![6, 5, 1, 2, 3, 4, 9, 8, 7, 5]);
        let mut cursor = QuickCursor::new(10);
        cursor.step(&mut array).unwrap();
        let pending = cursor.pending().to_vec();
        assert_eq!(pending.len(), 2);
        assert!(pending[0].high < pending[1].low);
        let s = cursor.step(&mut array).unwrap();
        assert_eq!(s.highlights.role(pending[1].high), Some(HighlightRole::Boundary));
    }

    #[test]
    fn all_equal_makes_no_effective_swaps() {
        let mut array = ArrayState::from_vec(vec![2; 6]);
        let mut cursor = QuickCursor::new(6);
        while !cursor.step(&mut array).unwrap().done {}
        assert_eq!(array.swaps(), 0);
        assert_eq!(array.as_slice(), &[2; 6]);
    }

    #[test]
    fn failed_partition_keeps_span() {
        let mut array = ArrayState::from_vec(vec![1, 2]);
        let mut cursor = QuickCursor::new(4);
        assert!(cursor.step(&mut array).is_err());
        assert_eq!(cursor.pending(), &[Span { low: 0, high: 3 }]);
    }
}
