//! Per-session step metrics.
//!
//! [`StepMetrics`] accumulates over the life of one sorting session and
//! is reset when a new session starts.

use std::time::Duration;

/// Counters and timings for the current or most recent session.
///
/// Swaps and writes are effective changes only: exchanging or writing
/// equal values is not counted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Algorithm steps executed.
    pub steps: u64,
    /// Swaps that exchanged unequal values.
    pub swaps: u64,
    /// Single-element writes that changed a value.
    pub writes: u64,
    /// Wall-clock time of the most recent step, in microseconds.
    pub last_step_us: u64,
    /// Wall-clock time of all steps so far, in microseconds.
    pub total_step_us: u64,
}

impl StepMetrics {
    /// Record one executed step that took `elapsed`.
    pub(crate) fn record_step(&mut self, elapsed: Duration) {
        let us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.steps += 1;
        self.last_step_us = us;
        self.total_step_us = self.total_step_us.saturating_add(us);
    }

    /// Mean step time in microseconds, or 0 before the first step.
    pub fn mean_step_us(&self) -> u64 {
        self.total_step_us.checked_div(self.steps).unwrap_or(0)
    }
}
