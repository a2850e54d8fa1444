//! The step scheduler: runs one session one step per tick.
//!
//! [`StepScheduler`] never sleeps and never spawns. Each
//! [`tick()`](StepScheduler::tick) executes at most one algorithm step
//! and returns how long the host should wait before ticking again. The
//! host owns the timer; cancellation is simply "the next tick does
//! nothing".
//!
//! # Stale timers
//!
//! A host timer armed for session N may fire after the user has stopped
//! N and started N+1. Hosts that cannot cancel their timers should call
//! [`tick_session()`](StepScheduler::tick_session) with the ID returned
//! by [`start()`](StepScheduler::start); ticks for any other session are
//! ignored.

use std::time::Duration;

use sortsim_algorithms::{AlgorithmKind, SortCursor};
use sortsim_core::{ArrayState, HighlightSet, SessionId, StepId};
use tracing::{error, info, trace, warn};

use crate::config::{ConfigError, Limits};
use crate::error::SchedulerError;
use crate::session::{SessionStatus, SortingSession};

// Compile-time assertion: the scheduler can move to a UI thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<StepScheduler>();
    }
};

// ── TickOutcome ─────────────────────────────────────────────────

/// What a [`StepScheduler::tick`] call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No running session (never started, stopped, finished, or a stale
    /// session ID). Nothing changed.
    Idle,
    /// One step ran and more remain.
    Stepped {
        /// The step just executed.
        step: StepId,
        /// Indices the step touched.
        highlights: HighlightSet,
        /// How long to wait before the next tick.
        next_tick_in: Duration,
    },
    /// The session finished; the array is sorted. Do not tick again.
    Completed {
        /// Total steps the session executed.
        steps: u64,
    },
}

impl TickOutcome {
    /// Delay before the next tick, if one should be scheduled.
    pub fn next_tick_in(&self) -> Option<Duration> {
        match self {
            Self::Stepped { next_tick_in, .. } => Some(*next_tick_in),
            Self::Idle | Self::Completed { .. } => None,
        }
    }
}

// ── StepScheduler ───────────────────────────────────────────────

/// Drives one [`SortingSession`] at a time.
///
/// A finished session (completed, cancelled, or aborted) stays readable
/// through [`session()`](Self::session) until the next
/// [`start()`](Self::start) or [`reset()`](Self::reset).
#[derive(Debug)]
pub struct StepScheduler {
    limits: Limits,
    session: Option<SortingSession>,
    next_id: SessionId,
}

impl Default for StepScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl StepScheduler {
    /// A scheduler using [`Limits::default()`].
    pub fn new() -> Self {
        Self::from_valid_limits(Limits::default())
    }

    /// A scheduler checking delays against `limits`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidLimits`] if `limits` fail
    /// [`Limits::validate`], e.g. a zero `min_delay`.
    pub fn with_limits(limits: Limits) -> Result<Self, ConfigError> {
        limits.validate()?;
        Ok(Self::from_valid_limits(limits))
    }

    fn from_valid_limits(limits: Limits) -> Self {
        Self {
            limits,
            session: None,
            next_id: SessionId(1),
        }
    }

    /// Start sorting `array` with `kind`, one step per `delay`.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::AlreadyRunning`] if a session is running, or
    /// [`SchedulerError::InvalidConfiguration`] if `delay` is zero or
    /// outside the limits. Neither changes the current session.
    pub fn start(
        &mut self,
        kind: AlgorithmKind,
        array: ArrayState,
        delay: Duration,
    ) -> Result<SessionId, SchedulerError> {
        let cursor = kind.cursor(array.len());
        self.start_with_cursor(cursor, array, delay)
    }

    /// Like [`start()`](Self::start) with a caller-supplied cursor.
    ///
    /// The cursor must have been created for `array.len()` elements.
    pub fn start_with_cursor(
        &mut self,
        cursor: Box<dyn SortCursor>,
        array: ArrayState,
        delay: Duration,
    ) -> Result<SessionId, SchedulerError> {
        if self.is_running() {
            warn!(algorithm = %cursor.kind(), "start rejected: a sort is already running");
            return Err(SchedulerError::AlreadyRunning);
        }
        if let Err(e) = self.limits.check_delay(delay) {
            warn!(algorithm = %cursor.kind(), error = %e, "start rejected");
            return Err(e.into());
        }

        let id = self.next_id;
        self.next_id = id.next();
        info!(
            session = %id,
            algorithm = %cursor.kind(),
            len = array.len(),
            delay_ms = delay.as_millis() as u64,
            "sort started"
        );
        self.session = Some(SortingSession::new(id, cursor, array, delay));
        Ok(id)
    }

    /// Advance the running session by one step.
    ///
    /// Returns [`TickOutcome::Idle`] without doing anything if no session
    /// is running.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::StepFailed`] if the algorithm step failed. The
    /// session is then [`Aborted`](SessionStatus::Aborted) and later
    /// ticks are idle.
    pub fn tick(&mut self) -> Result<TickOutcome, SchedulerError> {
        let Some(session) = self.session.as_mut().filter(|s| s.is_running()) else {
            return Ok(TickOutcome::Idle);
        };

        // Cursors over 0 or 1 elements complete without stepping.
        if session.cursor_done() {
            return Ok(Self::complete(session));
        }

        match session.advance() {
            Ok(step) => {
                trace!(
                    session = %session.id(),
                    step = %session.last_step(),
                    highlighted = step.highlights.len(),
                    done = step.done,
                    "step"
                );
                if step.done {
                    Ok(Self::complete(session))
                } else {
                    Ok(TickOutcome::Stepped {
                        step: session.last_step(),
                        highlights: step.highlights,
                        next_tick_in: session.delay(),
                    })
                }
            }
            Err(source) => {
                session.finish(SessionStatus::Aborted);
                error!(
                    session = %session.id(),
                    algorithm = %session.kind(),
                    step = session.last_step().0 + 1,
                    error = %source,
                    "sort aborted"
                );
                Err(SchedulerError::StepFailed {
                    algorithm: session.kind(),
                    source,
                })
            }
        }
    }

    /// [`tick()`](Self::tick), but only if `id` is the current session.
    pub fn tick_session(&mut self, id: SessionId) -> Result<TickOutcome, SchedulerError> {
        if self.current_id() != Some(id) {
            trace!(session = %id, "stale tick ignored");
            return Ok(TickOutcome::Idle);
        }
        self.tick()
    }

    /// Stop the running session. Returns `false` (and does nothing) if
    /// no session was running.
    pub fn cancel(&mut self) -> bool {
        match self.session.as_mut().filter(|s| s.is_running()) {
            Some(session) => {
                session.finish(SessionStatus::Cancelled);
                info!(
                    session = %session.id(),
                    algorithm = %session.kind(),
                    steps = session.metrics().steps,
                    "sort cancelled"
                );
                true
            }
            None => false,
        }
    }

    /// Cancel any running session and discard it, returning it.
    pub fn reset(&mut self) -> Option<SortingSession> {
        self.cancel();
        self.session.take()
    }

    /// The current or most recent session.
    pub fn session(&self) -> Option<&SortingSession> {
        self.session.as_ref()
    }

    /// ID of the current or most recent session.
    pub fn current_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(SortingSession::id)
    }

    /// Whether a session is running.
    pub fn is_running(&self) -> bool {
        self.session.as_ref().is_some_and(SortingSession::is_running)
    }

    /// The limits delays are checked against.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    fn complete(session: &mut SortingSession) -> TickOutcome {
        session.finish(SessionStatus::Completed);
        let metrics = session.metrics();
        info!(
            session = %session.id(),
            algorithm = %session.kind(),
            steps = metrics.steps,
            swaps = metrics.swaps,
            writes = metrics.writes,
            "sort completed"
        );
        TickOutcome::Completed {
            steps: metrics.steps,
        }
    }
}
