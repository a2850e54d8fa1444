//! Bubble sort, one adjacent comparison per step.

use sortsim_core::{ArrayError, ArrayState, HighlightRole, HighlightSet};

use crate::cursor::{SortCursor, Step};
use crate::kind::AlgorithmKind;

/// Bubble sort cursor.
///
/// `i` counts completed outer passes (the sorted tail length); `j` is the
/// left element of the next adjacent pair. Each step compares
/// `a[j]`, `a[j + 1]` and swaps them if out of order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BubbleCursor {
    len: usize,
    i: usize,
    j: usize,
}

impl BubbleCursor {
    /// Cursor for an array of `len` elements.
    pub fn new(len: usize) -> Self {
        Self { len, i: 0, j: 0 }
    }

    /// Current `(outer, inner)` position.
    pub fn position(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

impl SortCursor for BubbleCursor {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bubble
    }

    fn is_done(&self) -> bool {
        self.len < 2 || self.i >= self.len - 1
    }

    fn step(&mut self, array: &mut ArrayState) -> Result<Step, ArrayError> {
        if self.is_done() {
            return Ok(Step::finished());
        }

        let (left, right) = (self.j, self.j + 1);
        let mut highlights = HighlightSet::new();
        if array.get(left)? > array.get(right)? {
            array.swap(left, right)?;
            highlights.mark(left, HighlightRole::Swapped);
            highlights.mark(right, HighlightRole::Swapped);
        } else {
            highlights.mark(left, HighlightRole::Compared);
            highlights.mark(right, HighlightRole::Compared);
        }

        self.j += 1;
        if self.j >= self.len - self.i - 1 {
            self.j = 0;
            self.i += 1;
        }

        Ok(Step::new(highlights, self.is_done()))
    }
}
