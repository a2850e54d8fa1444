//! Selection sort, one placement per step.
//!
//! The minimum scan over the unsorted tail runs to completion inside a
//! single step; only the resulting swap is visualized.

use sortsim_core::{ArrayError, ArrayState, HighlightRole, HighlightSet};

use crate::cursor::{SortCursor, Step};
use crate::kind::AlgorithmKind;

/// Selection sort cursor. `i` is the boundary of the sorted prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionCursor {
    len: usize,
    i: usize,
}

impl SelectionCursor {
    /// Cursor for an array of `len` elements.
    pub fn new(len: usize) -> Self {
        Self { len, i: 0 }
    }

    /// Length of the sorted prefix.
    pub fn boundary(&self) -> usize {
        self.i
    }
}

impl SortCursor for SelectionCursor {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Selection
    }

    fn is_done(&self) -> bool {
        self.len < 2 || self.i >= self.len - 1
    }

    fn step(&mut self, array: &mut ArrayState) -> Result<Step, ArrayError> {
        if self.is_done() {
            return Ok(Step::finished());
        }

        let mut min_idx = self.i;
        let mut min = array.get(self.i)?;
        for j in self.i + 1..self.len {
            let v = array.get(j)?;
            if v < min {
                min = v;
                min_idx = j;
            }
        }

        let mut highlights = HighlightSet::new();
        highlights.mark(self.i, HighlightRole::Boundary);
        if min_idx != self.i {
            array.swap(self.i, min_idx)?;
            highlights.mark(min_idx, HighlightRole::Swapped);
        }

        self.i += 1;
        Ok(Step::new(highlights, self.is_done()))
    }
}
