//! The [`SortCursor`] trait and the [`Step`] it yields.

use sortsim_core::{ArrayError, ArrayState, HighlightSet};

use crate::kind::AlgorithmKind;

/// Outcome of one [`SortCursor::step`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Step {
    /// Indices touched by this step and their roles.
    pub highlights: HighlightSet,
    /// Whether the array is now fully sorted and no further step will
    /// mutate it.
    pub done: bool,
}

impl Step {
    /// A step with the given highlights.
    pub fn new(highlights: HighlightSet, done: bool) -> Self {
        Self { highlights, done }
    }

    /// The no-op step returned once a cursor is exhausted.
    pub fn finished() -> Self {
        Self {
            highlights: HighlightSet::new(),
            done: true,
        }
    }
}

/// An in-progress sort that advances one renderable step at a time.
///
/// # Contract
///
/// - A cursor is created for one array length and owns all progress
///   state. It never holds a reference to the array between steps.
/// - `step()` leaves the array fully consistent: no half-swapped state
///   is ever observable between calls.
/// - `step()` is deterministic: the same array and cursor state always
///   produce the same mutation and highlights.
/// - Once `is_done()` is true, `step()` returns [`Step::finished`] and
///   does not touch the array.
/// - Array access failures are returned, never panicked on.
///
/// # Object safety
///
/// The scheduler stores the active cursor as `Box<dyn SortCursor>`.
pub trait SortCursor: Send + 'static {
    /// Which algorithm this cursor runs.
    fn kind(&self) -> AlgorithmKind;

    /// Whether the sort has finished.
    fn is_done(&self) -> bool;

    /// Perform one step on `array`.
    fn step(&mut self, array: &mut ArrayState) -> Result<Step, ArrayError>;
}

/// Step `cursor` until it reports done, returning the number of steps
/// that ran.
pub fn run_to_end(cursor: &mut dyn SortCursor, array: &mut ArrayState) -> Result<u64, ArrayError> {
    let mut steps = 0;
    while !cursor.is_done() {
        steps += 1;
        if cursor.step(array)?.done {
            break;
        }
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_step_is_done_and_empty() {
        let s = Step::finished();
        assert!(s.done);
        assert!(s.highlights.is_empty());
    }

    #[test]
    fn run_to_end_counts_steps() {
        // Selection takes len - 1 steps regardless of input order.
        let mut array = ArrayState::from_vec(vec![3, 1, 2, 4]);
        let mut cursor = AlgorithmKind::Selection.cursor(array.len());
        let steps = run_to_end(cursor.as_mut(), &mut array).unwrap();
        assert_eq!(steps, 3);
        assert_eq!(array.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn run_to_end_on_empty_runs_nothing() {
        let mut array = ArrayState::from_vec(vec![]);
        for kind in AlgorithmKind::ALL {
            let mut cursor = kind.cursor(0);
            assert_eq!(run_to_end(cursor.as_mut(), &mut array).unwrap(), 0);
        }
    }
}
