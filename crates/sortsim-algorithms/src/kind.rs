//! [`AlgorithmKind`]: the tagged set of available algorithms.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::bubble::BubbleCursor;
use crate::cursor::SortCursor;
use crate::heap::HeapCursor;
use crate::insertion::InsertionCursor;
use crate::merge::MergeCursor;
use crate::quick::QuickCursor;
use crate::selection::SelectionCursor;

/// One of the animated sorting algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// Adjacent compare-and-swap, one comparison per step.
    Bubble,
    /// Minimum scan and swap, one placement per step.
    Selection,
    /// Shift-left insertion, one inserted element per step.
    Insertion,
    /// Lomuto quicksort over an explicit span stack, one partition per step.
    Quick,
    /// Bottom-up merge over precomputed ranges, one merge per step.
    Merge,
    /// Max-heap sort, heap build then one extraction per step.
    Heap,
}

impl AlgorithmKind {
    /// Every algorithm, in menu order.
    pub const ALL: [AlgorithmKind; 6] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Quick,
        Self::Merge,
        Self::Heap,
    ];

    /// Human-readable name used in frame titles.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Quick => "Quick Sort",
            Self::Merge => "Merge Sort",
            Self::Heap => "Heap Sort",
        }
    }

    /// Build a fresh cursor for an array of `len` elements.
    pub fn cursor(self, len: usize) -> Box<dyn SortCursor> {
        match self {
            Self::Bubble => Box::new(BubbleCursor::new(len)),
            Self::Selection => Box::new(SelectionCursor::new(len)),
            Self::Insertion => Box::new(InsertionCursor::new(len)),
            Self::Quick => Box::new(QuickCursor::new(len)),
            Self::Merge => Box::new(MergeCursor::new(len)),
            Self::Heap => Box::new(HeapCursor::new(len)),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`AlgorithmKind::from_str`] for unknown names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sorting algorithm '{}'", self.input)
    }
}

impl Error for ParseAlgorithmError {}

impl FromStr for AlgorithmKind {
    type Err = ParseAlgorithmError;

    /// Accepts `"bubble"`, `"Bubble Sort"`, `"bubble_sort"`,
    /// `"bubblesort"` and the like, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let key = lower
            .strip_suffix("sort")
            .unwrap_or(&lower)
            .trim_end_matches([' ', '_', '-']);
        match key {
            "bubble" => Ok(Self::Bubble),
            "selection" => Ok(Self::Selection),
            "insertion" => Ok(Self::Insertion),
            "quick" => Ok(Self::Quick),
            "merge" => Ok(Self::Merge),
            "heap" => Ok(Self::Heap),
            _ => Err(ParseAlgorithmError {
                input: s.to_string(),
            }),
        }
    }
}
