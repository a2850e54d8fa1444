//! The single active sorting session.
//!
//! A [`SortingSession`] bundles everything one sort needs: the array
//! being sorted, the algorithm's cursor, the pacing delay, and the
//! metrics collected so far. The [`StepScheduler`](crate::StepScheduler)
//! owns at most one session at a time.

use std::fmt;
use std::time::{Duration, Instant};

use sortsim_algorithms::{AlgorithmKind, SortCursor, Step};
use sortsim_core::{ArrayError, ArrayState, SessionId, StepId};

use crate::metrics::StepMetrics;

/// Lifecycle of a [`SortingSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Ticks advance the sort.
    Running,
    /// The algorithm finished; the array is sorted.
    Completed,
    /// Stopped by the host before finishing.
    Cancelled,
    /// A step failed; the array is a permutation of the input but may
    /// not be sorted.
    Aborted,
}

impl SessionStatus {
    /// Whether the session has stopped for any reason.
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// One sort in progress (or just ended).
///
/// The cursor is dropped as soon as the session stops running; the array
/// and metrics remain readable until the scheduler discards the session.
pub struct SortingSession {
    id: SessionId,
    kind: AlgorithmKind,
    array: ArrayState,
    cursor: Option<Box<dyn SortCursor>>,
    delay: Duration,
    status: SessionStatus,
    last_step: StepId,
    metrics: StepMetrics,
    base_swaps: u64,
    base_writes: u64,
}

impl SortingSession {
    pub(crate) fn new(
        id: SessionId,
        cursor: Box<dyn SortCursor>,
        array: ArrayState,
        delay: Duration,
    ) -> Self {
        Self {
            id,
            kind: cursor.kind(),
            base_swaps: array.swaps(),
            base_writes: array.writes(),
            array,
            cursor: Some(cursor),
            delay,
            status: SessionStatus::Running,
            last_step: StepId::default(),
            metrics: StepMetrics::default(),
        }
    }

    /// This session's ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Algorithm being run.
    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    /// The array as of the last completed step.
    pub fn array(&self) -> &ArrayState {
        &self.array
    }

    /// Consume the session, returning its array.
    pub fn into_array(self) -> ArrayState {
        self.array
    }

    /// Delay the host should wait between ticks.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current lifecycle state.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether ticks still advance this session.
    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Most recent step executed (`StepId(0)` before the first).
    pub fn last_step(&self) -> StepId {
        self.last_step
    }

    /// Metrics accumulated by this session.
    pub fn metrics(&self) -> &StepMetrics {
        &self.metrics
    }

    /// Whether the cursor has nothing left to do.
    pub(crate) fn cursor_done(&self) -> bool {
        self.cursor.as_ref().is_none_or(|c| c.is_done())
    }

    /// Run one cursor step and fold its effects into the metrics.
    ///
    /// Does not change `status`; the scheduler decides what a step's
    /// outcome means for the session.
    pub(crate) fn advance(&mut self) -> Result<Step, ArrayError> {
        let Some(cursor) = self.cursor.as_mut() else {
            return Ok(Step::finished());
        };
        let started = Instant::now();
        let step = cursor.step(&mut self.array)?;
        self.metrics.record_step(started.elapsed());
        self.metrics.swaps = self.array.swaps() - self.base_swaps;
        self.metrics.writes = self.array.writes() - self.base_writes;
        self.last_step = StepId(self.last_step.0 + 1);
        Ok(step)
    }

    /// Leave the running state, dropping the cursor.
    pub(crate) fn finish(&mut self, status: SessionStatus) {
        debug_assert!(status.is_finished());
        self.status = status;
        self.cursor = None;
    }
}

impl fmt::Debug for SortingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortingSession")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("len", &self.array.len())
            .field("delay", &self.delay)
            .field("status", &self.status)
            .field("last_step", &self.last_step)
            .finish()
    }
}
