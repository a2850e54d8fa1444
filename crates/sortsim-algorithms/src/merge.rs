//! Merge sort over a precomputed range queue, one merge per step.
//!
//! The top-down split is flattened up front into a queue of
//! [`MergeRange`]s in post-order (both children before their parent), so
//! by the time a range is dequeued its two halves are already sorted.

use std::collections::VecDeque;

use sortsim_core::{ArrayError, ArrayState, HighlightRole, HighlightSet};

use crate::cursor::{SortCursor, Step};
use crate::kind::AlgorithmKind;

/// Merge `[left, mid]` with `[mid + 1, right]` (all inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeRange {
    /// First index of the left half.
    pub left: usize,
    /// Last index of the left half.
    pub mid: usize,
    /// Last index of the right half.
    pub right: usize,
}

/// Merge sort cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeCursor {
    queue: VecDeque<MergeRange>,
}

impl MergeCursor {
    /// Cursor for an array of `len` elements.
    pub fn new(len: usize) -> Self {
        Self {
            queue: merge_plan(len),
        }
    }

    /// Merges still to perform, next first.
    pub fn pending(&self) -> impl Iterator<Item = &MergeRange> + '_ {
        self.queue.iter()
    }
}

/// Post-order merge schedule for an array of `len` elements.
///
/// Built with an explicit stack: visiting root, then right, then left and
/// reversing the result yields left, right, root.
pub fn merge_plan(len: usize) -> VecDeque<MergeRange> {
    let mut plan = Vec::new();
    if len < 2 {
        return VecDeque::new();
    }

    let mut pending = vec![(0, len - 1)];
    while let Some((left, right)) = pending.pop() {
        if left >= right {
            continue;
        }
        let mid = left + (right - left) / 2;
        plan.push(MergeRange { left, mid, right });
        pending.push((left, mid));
        pending.push((mid + 1, right));
    }

    plan.reverse();
    plan.into()
}

fn merge(array: &mut ArrayState, range: MergeRange) -> Result<(), ArrayError> {
    let lo = array.range(range.left..=range.mid)?.to_vec();
    let hi = array.range(range.mid + 1..=range.right)?.to_vec();

    let (mut a, mut b) = (0, 0);
    for k in range.left..=range.right {
        // `<=` keeps equal elements in their original order.
        let take_lo = b >= hi.len() || (a < lo.len() && lo[a] <= hi[b]);
        if take_lo {
            array.set(k, lo[a])?;
            a += 1;
        } else {
            array.set(k, hi[b])?;
            b += 1;
        }
    }
    Ok(())
}

impl SortCursor for MergeCursor {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Merge
    }

    fn is_done(&self) -> bool {
        self.queue.is_empty()
    }

    fn step(&mut self, array: &mut ArrayState) -> Result<Step, ArrayError> {
        let Some(range) = self.queue.pop_front() else {
            return Ok(Step::finished());
        };

        if let Err(e) = merge(array, range) {
            self.queue.push_front(range);
            return Err(e);
        }

        let mut highlights = HighlightSet::new();
        highlights.mark(range.mid, HighlightRole::Compared);
        highlights.mark(range.left, HighlightRole::Boundary);
        highlights.mark(range.right, HighlightRole::Boundary);

        Ok(Step::new(highlights, self.is_done()))
    }
}
