//! Reusable cursor fixtures.
//!
//! - [`FailingCursor`]: fails deterministically after N steps.
//! - [`trace`]: runs an algorithm to completion and records every step.

use sortsim_algorithms::{AlgorithmKind, SortCursor, Step};
use sortsim_core::{ArrayError, ArrayState, HighlightRole, HighlightSet};

/// Fails with `IndexOutOfRange` after a configurable number of
/// successful steps.
///
/// Each successful step swaps the first two elements, so the array stays
/// a permutation of its input. Useful for testing how the scheduler
/// aborts a session.
pub struct FailingCursor {
    pub kind: AlgorithmKind,
    pub succeed_count: usize,
    calls: usize,
}

impl FailingCursor {
    /// Succeed `succeed_count` times, then fail.
    pub fn new(kind: AlgorithmKind, succeed_count: usize) -> Self {
        Self {
            kind,
            succeed_count,
            calls: 0,
        }
    }

    /// How many times `step()` has been called.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl SortCursor for FailingCursor {
    fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    fn is_done(&self) -> bool {
        false
    }

    fn step(&mut self, array: &mut ArrayState) -> Result<Step, ArrayError> {
        let n = self.calls;
        self.calls += 1;
        if n >= self.succeed_count {
            return Err(ArrayError::IndexOutOfRange {
                index: array.len(),
                len: array.len(),
            });
        }
        array.swap(0, 1)?;
        Ok(Step::new(
            HighlightSet::new()
                .with(0, HighlightRole::Swapped)
                .with(1, HighlightRole::Swapped),
            false,
        ))
    }
}

/// One recorded step of a [`trace`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceStep {
    pub snapshot: Vec<i32>,
    pub highlights: HighlightSet,
    pub done: bool,
}

/// Run `kind` over `values` to completion, recording the array and
/// highlights after every step.
///
/// # Panics
///
/// Panics if a step fails; correct cursors never do.
pub fn trace(kind: AlgorithmKind, values: &[i32]) -> (Vec<TraceStep>, ArrayState) {
    let mut array = ArrayState::from_vec(values.to_vec());
    let mut cursor = kind.cursor(array.len());
    let mut steps = Vec::new();
    while !cursor.is_done() {
        let step = cursor
            .step(&mut array)
            .unwrap_or_else(|e| panic!("{kind} failed on {values:?}: {e}"));
        steps.push(TraceStep {
            snapshot: array.snapshot(),
            highlights: step.highlights,
            done: step.done,
        });
    }
    (steps, array)
}
