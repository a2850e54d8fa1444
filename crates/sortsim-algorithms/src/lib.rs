//! Step-at-a-time sorting algorithms for the sortsim engine.
//!
//! Every algorithm is a cursor implementing [`SortCursor`]: a small
//! state machine that performs exactly one renderable mutation of an
//! [`ArrayState`](sortsim_core::ArrayState) per [`step`](SortCursor::step)
//! call. The scheduler stays algorithm-agnostic and works only through
//! the trait; [`AlgorithmKind`] is the tagged enum that picks and builds
//! a cursor.
//!
//! | Algorithm | Cursor state | One step |
//! |-----------|--------------|----------|
//! | [`BubbleCursor`] | `(i, j)` | one adjacent compare (and swap) |
//! | [`SelectionCursor`] | `i` | one min-scan and swap into `i` |
//! | [`InsertionCursor`] | `i` | one full insertion of `a[i]` |
//! | [`QuickCursor`] | stack of [`Span`]s | one Lomuto partition |
//! | [`MergeCursor`] | queue of [`MergeRange`]s | one merge of two sorted halves |
//! | [`HeapCursor`] | `(heap size, i)` | heap build, then one extraction |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bubble;
pub mod cursor;
pub mod heap;
pub mod insertion;
pub mod kind;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::BubbleCursor;
pub use cursor::{run_to_end, SortCursor, Step};
pub use heap::HeapCursor;
pub use insertion::InsertionCursor;
pub use kind::{AlgorithmKind, ParseAlgorithmError};
pub use merge::{MergeCursor, MergeRange};
pub use quick::{QuickCursor, Span};
pub use selection::SelectionCursor;
