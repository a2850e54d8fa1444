//! sortsim: a headless engine that animates classic sorting algorithms one
//! renderable step at a time.
//!
//! This is the facade crate re-exporting the public API of the sortsim
//! sub-crates. Most hosts only need this crate and a [`Renderer`](prelude::Renderer)
//! implementation.
//!
//! # Quick start
//!
//! ```rust
//! use sortsim::prelude::*;
//!
//! // A renderer that just counts frames.
//! #[derive(Default)]
//! struct Frames(usize);
//! impl Renderer for Frames {
//!     fn render(&mut self, _snapshot: &[i32], _highlights: &HighlightSet, _title: &str) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let config = VisualizerConfig::default().with_seed(42);
//! let mut vis = Visualizer::new(config, Frames::default()).unwrap();
//! let id = vis.start("quick".parse().unwrap(), 10).unwrap();
//! while let Some(_wait) = vis.tick_session(id).unwrap().next_tick_in() {
//!     // A real host sleeps or arms a timer for `_wait`.
//! }
//! assert!(vis.array().is_sorted());
//! assert_eq!(vis.status(), Some(SessionStatus::Completed));
//! assert!(vis.renderer().0 > 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sortsim-core` | `ArrayState`, highlights, IDs, `Renderer` |
//! | [`algorithms`] | `sortsim-algorithms` | `SortCursor`, `AlgorithmKind`, the six cursors |
//! | [`engine`] | `sortsim-engine` | Config, `StepScheduler`, `Visualizer` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the renderer seam (`sortsim-core`).
pub use sortsim_core as types;

/// Step-at-a-time sorting algorithms (`sortsim-algorithms`).
///
/// Implement [`algorithms::SortCursor`] to animate an algorithm of your own
/// through [`engine::StepScheduler::start_with_cursor`].
pub use sortsim_algorithms as algorithms;

/// Scheduler, configuration, and control surface (`sortsim-engine`).
pub use sortsim_engine as engine;

/// Common imports for typical sortsim usage.
///
/// ```rust
/// use sortsim::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use sortsim_core::{
        ArrayState, HighlightRole, HighlightSet, NullRenderer, Renderer, SessionId, StepId,
        ThrottledRenderer,
    };

    // Errors
    pub use sortsim_core::ArrayError;
    pub use sortsim_engine::{ConfigError, SchedulerError};

    // Algorithms
    pub use sortsim_algorithms::{AlgorithmKind, SortCursor, Step};

    // Engine
    pub use sortsim_engine::{
        Limits, SessionStatus, StepMetrics, StepScheduler, TickOutcome, Visualizer,
        VisualizerConfig,
    };
}
