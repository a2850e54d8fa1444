//! Core types and traits for the sortsim sorting-animation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the sortsim workspace:
//! identifiers, error types, the mutable [`ArrayState`], per-step
//! [`HighlightSet`]s, and the [`Renderer`] collaborator trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;
pub mod highlight;
pub mod id;
pub mod render;

pub use array::ArrayState;
pub use error::ArrayError;
pub use highlight::{HighlightRole, HighlightSet};
pub use id::{SessionId, StepId};
pub use render::{NullRenderer, Renderer, ThrottledRenderer};
