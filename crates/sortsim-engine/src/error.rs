//! Scheduler and control-surface errors.

use std::error::Error;
use std::fmt;

use sortsim_algorithms::AlgorithmKind;
use sortsim_core::ArrayError;

use crate::config::ConfigError;

/// Errors returned by [`StepScheduler`](crate::StepScheduler) and
/// [`Visualizer`](crate::Visualizer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchedulerError {
    /// `start` was called while a session is still running. The running
    /// session is unaffected.
    AlreadyRunning,
    /// A request was outside the configured limits. Nothing changed.
    InvalidConfiguration(ConfigError),
    /// An algorithm step failed. The session has been aborted.
    StepFailed {
        /// Algorithm that was running.
        algorithm: AlgorithmKind,
        /// The array access that failed.
        source: ArrayError,
    },
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRunning => write!(f, "a sort is already running"),
            Self::InvalidConfiguration(e) => write!(f, "invalid configuration: {e}"),
            Self::StepFailed { algorithm, source } => {
                write!(f, "{algorithm} step failed: {source}")
            }
        }
    }
}

impl Error for SchedulerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfiguration(e) => Some(e),
            Self::StepFailed { source, .. } => Some(source),
            Self::AlreadyRunning => None,
        }
    }
}

impl From<ConfigError> for SchedulerError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfiguration(e)
    }
}
