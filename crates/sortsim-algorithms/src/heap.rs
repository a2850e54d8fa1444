//! Heap sort: one heap-build step, then one extraction per step.

use sortsim_core::{ArrayError, ArrayState, HighlightRole, HighlightSet};

use crate::cursor::{SortCursor, Step};
use crate::kind::AlgorithmKind;

/// Heap sort cursor.
///
/// Before the first step the array is not yet a heap. Step 0 builds a
/// max-heap over the whole array; each following step swaps the root
/// into position `extract` and restores the heap over `a[..extract]`.
/// A step that fails leaves the cursor where it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeapCursor {
    len: usize,
    heap_built: bool,
    heap_size: usize,
    extract: usize,
}

impl HeapCursor {
    /// Cursor for an array of `len` elements.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            heap_built: false,
            heap_size: len,
            extract: len.saturating_sub(1),
        }
    }

    /// Current `(heap size, extraction index)`.
    pub fn position(&self) -> (usize, usize) {
        (self.heap_size, self.extract)
    }
}

/// Restore the max-heap property below `node` within `a[..end]`.
fn sift_down(array: &mut ArrayState, mut node: usize, end: usize) -> Result<(), ArrayError> {
    loop {
        let left = 2 * node + 1;
        if left >= end {
            return Ok(());
        }
        let right = left + 1;

        let mut largest = node;
        if array.get(left)? > array.get(largest)? {
            largest = left;
        }
        if right < end && array.get(right)? > array.get(largest)? {
            largest = right;
        }
        if largest == node {
            return Ok(());
        }

        array.swap(node, largest)?;
        node = largest;
    }
}

impl SortCursor for HeapCursor {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Heap
    }

    fn is_done(&self) -> bool {
        self.len < 2 || (self.heap_built && self.extract == 0)
    }

    fn step(&mut self, array: &mut ArrayState) -> Result<Step, ArrayError> {
        if self.is_done() {
            return Ok(Step::finished());
        }

        // Every index this step touches lies in `a[..=extract]` (or
        // `a[..len]` for the build), so checking that range first means a
        // failed step leaves both the array and the cursor untouched.
        let mut highlights = HighlightSet::new();
        if !self.heap_built {
            array.range(0..=self.len - 1)?;
            for node in (0..self.len / 2).rev() {
                sift_down(array, node, self.len)?;
            }
            self.heap_built = true;
            highlights.mark(0, HighlightRole::Pivot);
            return Ok(Step::new(highlights, self.is_done()));
        }

        array.range(0..=self.extract)?;
        array.swap(0, self.extract)?;
        sift_down(array, 0, self.extract)?;
        highlights.mark(0, HighlightRole::Swapped);
        highlights.mark(self.extract, HighlightRole::Swapped);

        self.heap_size = self.extract;
        self.extract -= 1;

        Ok(Step::new(highlights, self.is_done()))
    }
}
