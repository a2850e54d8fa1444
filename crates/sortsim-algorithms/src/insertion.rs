//! Insertion sort, one inserted element per step.

use sortsim_core::{ArrayError, ArrayState, HighlightRole, HighlightSet};

use crate::cursor::{SortCursor, Step};
use crate::kind::AlgorithmKind;

/// Insertion sort cursor. `i` is the next element to insert; `a[..i]` is
/// sorted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertionCursor {
    len: usize,
    i: usize,
}

impl InsertionCursor {
    /// Cursor for an array of `len` elements.
    pub fn new(len: usize) -> Self {
        Self { len, i: 1 }
    }
}

impl SortCursor for InsertionCursor {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Insertion
    }

    fn is_done(&self) -> bool {
        self.i >= self.len
    }

    fn step(&mut self, array: &mut ArrayState) -> Result<Step, ArrayError> {
        if self.is_done() {
            return Ok(Step::finished());
        }

        let key = array.get(self.i)?;
        let mut slot = self.i;
        while slot > 0 {
            let prev = array.get(slot - 1)?;
            if prev <= key {
                break;
            }
            array.set(slot, prev)?;
            slot -= 1;
        }
        array.set(slot, key)?;

        let mut highlights = HighlightSet::new();
        highlights.mark(self.i, HighlightRole::Compared);
        if slot != self.i {
            highlights.mark(slot, HighlightRole::Swapped);
        }

        self.i += 1;
        Ok(Step::new(highlights, self.is_done()))
    }
}
