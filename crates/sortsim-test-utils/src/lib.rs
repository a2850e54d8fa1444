//! Test utilities and mock types for sortsim development.
//!
//! Provides input [`patterns`], a [`RecordingRenderer`] that keeps every
//! frame for assertions, and [`fixtures`] such as a deliberately failing
//! cursor and a step tracer.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod patterns;

pub use fixtures::{trace, FailingCursor, TraceStep};

use sortsim_core::{HighlightSet, Renderer};

/// One frame captured by [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub snapshot: Vec<i32>,
    pub highlights: HighlightSet,
    pub title: String,
    /// Set for frames delivered through [`Renderer::finish`].
    pub is_final: bool,
}

/// Renderer that records every frame.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Frame>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent frame, if any.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Number of final frames seen.
    pub fn final_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_final).count()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snapshot: &[i32], highlights: &HighlightSet, title: &str) {
        self.frames.push(Frame {
            snapshot: snapshot.to_vec(),
            highlights: highlights.clone(),
            title: title.to_string(),
            is_final: false,
        });
    }

    fn finish(&mut self, snapshot: &[i32], title: &str) {
        self.frames.push(Frame {
            snapshot: snapshot.to_vec(),
            highlights: HighlightSet::new(),
            title: title.to_string(),
            is_final: true,
        });
    }
}

/// Sizes used by exhaustive correctness tests.
pub const TEST_SIZES: [usize; 20] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 33, 50, 100, 200, 500,
];

/// Whether `b` is a permutation of `a`.
pub fn is_permutation(a: &[i32], b: &[i32]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
