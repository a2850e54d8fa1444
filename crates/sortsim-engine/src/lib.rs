//! Step scheduler and control surface for the sortsim engine.
//!
//! The [`StepScheduler`] advances one [`SortingSession`] one step per
//! tick and hands the pacing delay back to the host. The [`Visualizer`]
//! wraps it with array generation and a [`Renderer`](sortsim_core::Renderer),
//! exposing the `generate` / `start` / `stop` / `tick` surface a UI binds
//! to.
//!
//! Everything here is single-threaded: ticks run on the host's thread,
//! and no call blocks or sleeps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod scheduler;
pub mod session;
pub mod visualizer;

pub use config::{ConfigError, Limits, VisualizerConfig};
pub use error::SchedulerError;
pub use metrics::StepMetrics;
pub use scheduler::{StepScheduler, TickOutcome};
pub use session::{SessionStatus, SortingSession};
pub use visualizer::{Visualizer, GENERATED_TITLE};
