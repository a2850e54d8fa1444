//! The host-facing control surface.
//!
//! [`Visualizer`] is what a UI binds its buttons to: `generate`, `start`,
//! and `stop`, plus the `tick` its timer calls. It owns the array, the
//! [`StepScheduler`], the RNG, and the [`Renderer`], and redraws after
//! every state change.
//!
//! # Host loop
//!
//! ```
//! use sortsim_algorithms::AlgorithmKind;
//! use sortsim_core::NullRenderer;
//! use sortsim_engine::{Visualizer, VisualizerConfig};
//!
//! let config = VisualizerConfig::default().with_seed(7);
//! let mut vis = Visualizer::new(config, NullRenderer)?;
//! vis.start(AlgorithmKind::Heap, 1)?;
//! while let Some(wait) = vis.tick()?.next_tick_in() {
//!     // A real host would arm a timer for `wait` here.
//!     let _ = wait;
//! }
//! assert!(vis.array().is_sorted());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sortsim_algorithms::AlgorithmKind;
use sortsim_core::{ArrayState, HighlightSet, Renderer, SessionId};
use tracing::{debug, info};

use crate::config::{ConfigError, VisualizerConfig};
use crate::error::SchedulerError;
use crate::metrics::StepMetrics;
use crate::scheduler::{StepScheduler, TickOutcome};
use crate::session::SessionStatus;

/// Title of the frame drawn after `generate`.
pub const GENERATED_TITLE: &str = "Random Array";

/// Generate, start, stop, and tick, wired to a [`Renderer`].
pub struct Visualizer<R: Renderer> {
    config: VisualizerConfig,
    scheduler: StepScheduler,
    /// Array shown while no session holds one.
    idle: ArrayState,
    rng: ChaCha8Rng,
    seed: u64,
    renderer: R,
}

impl<R: Renderer> Visualizer<R> {
    /// Validate `config`, generate the initial array, and draw it.
    pub fn new(config: VisualizerConfig, renderer: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, seeded = config.seed.is_some(), "visualizer created");

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let idle = ArrayState::generate(config.size, config.min_value, config.max_value, &mut rng)
            .map_err(|_| ConfigError::InvalidValueRange {
                min: config.min_value,
                max: config.max_value,
            })?;

        let mut vis = Self {
            scheduler: StepScheduler::with_limits(config.limits.clone())?,
            config,
            idle,
            rng,
            seed,
            renderer,
        };
        vis.draw_idle();
        Ok(vis)
    }

    /// Replace the array with `size` fresh values in `[min, max]`.
    ///
    /// Stops any running sort first; ticks still pending for it become
    /// no-ops.
    ///
    /// # Errors
    ///
    /// [`SchedulerError::InvalidConfiguration`] if the request is outside
    /// the limits. The current array and session are left untouched.
    pub fn generate(&mut self, size: usize, min: i32, max: i32) -> Result<(), SchedulerError> {
        self.scheduler.limits().check_array(size, min, max)?;
        self.scheduler.reset();
        self.idle = ArrayState::generate(size, min, max, &mut self.rng)
            .map_err(|_| ConfigError::InvalidValueRange { min, max })?;
        debug!(size, min, max, "array generated");
        self.draw_idle();
        Ok(())
    }

    /// Start sorting the current array with `kind`, one step every
    /// `delay_ms` milliseconds.
    ///
    /// Returns the new session's ID for use with
    /// [`tick_session()`](Self::tick_session).
    ///
    /// # Errors
    ///
    /// [`SchedulerError::AlreadyRunning`] if a sort is running, or
    /// [`SchedulerError::InvalidConfiguration`] if the delay is outside
    /// the limits.
    pub fn start(&mut self, kind: AlgorithmKind, delay_ms: u64) -> Result<SessionId, SchedulerError> {
        self.start_with_delay(kind, Duration::from_millis(delay_ms))
    }

    /// [`start()`](Self::start) with the configured default delay.
    pub fn start_default(&mut self, kind: AlgorithmKind) -> Result<SessionId, SchedulerError> {
        self.start_with_delay(kind, self.config.delay)
    }

    fn start_with_delay(
        &mut self,
        kind: AlgorithmKind,
        delay: Duration,
    ) -> Result<SessionId, SchedulerError> {
        // The scheduler only replaces a finished session once the start is
        // accepted, so a rejected start leaves the previous one readable.
        let array = self.array().clone();
        self.scheduler.start(kind, array, delay)
    }

    /// Stop the running sort. Returns `false` if nothing was running.
    pub fn stop(&mut self) -> bool {
        self.scheduler.cancel()
    }

    /// Run one step of the current sort and redraw.
    ///
    /// Call again after [`TickOutcome::next_tick_in`]; stop when it
    /// returns `None`.
    pub fn tick(&mut self) -> Result<TickOutcome, SchedulerError> {
        let outcome = self.scheduler.tick()?;
        self.present(&outcome);
        Ok(outcome)
    }

    /// [`tick()`](Self::tick), ignored unless `id` is the current session.
    pub fn tick_session(&mut self, id: SessionId) -> Result<TickOutcome, SchedulerError> {
        let outcome = self.scheduler.tick_session(id)?;
        self.present(&outcome);
        Ok(outcome)
    }

    /// The array as currently drawn.
    pub fn array(&self) -> &ArrayState {
        self.scheduler.session().map_or(&self.idle, |s| s.array())
    }

    /// Whether a sort is running.
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Metrics of the current or most recent sort.
    pub fn metrics(&self) -> Option<&StepMetrics> {
        self.scheduler.session().map(|s| s.metrics())
    }

    /// Status of the current or most recent sort.
    pub fn status(&self) -> Option<SessionStatus> {
        self.scheduler.session().map(|s| s.status())
    }

    /// ID of the current or most recent sort.
    pub fn session_id(&self) -> Option<SessionId> {
        self.scheduler.current_id()
    }

    /// Seed the array RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The configuration this visualizer was built with.
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Borrow the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutably borrow the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Unwrap, returning the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn draw_idle(&mut self) {
        self.renderer
            .render(self.idle.as_slice(), &HighlightSet::new(), GENERATED_TITLE);
    }

    fn present(&mut self, outcome: &TickOutcome) {
        let Some(session) = self.scheduler.session() else {
            return;
        };
        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Stepped {
                step, highlights, ..
            } => {
                let title = format!("{} (step {step})", session.kind());
                self.renderer
                    .render(session.array().as_slice(), highlights, &title);
            }
            TickOutcome::Completed { .. } => {
                self.renderer
                    .finish(session.array().as_slice(), session.kind().name());
            }
        }
    }
}

impl<R: Renderer> std::fmt::Debug for Visualizer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visualizer")
            .field("len", &self.array().len())
            .field("seed", &self.seed)
            .field("session", &self.scheduler.session())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortsim_core::NullRenderer;

    use crate::config::Limits;

    fn seeded() -> Visualizer<NullRenderer> {
        Visualizer::new(VisualizerConfig::default().with_seed(42), NullRenderer).unwrap()
    }

    #[test]
    fn initial_array_follows_config() {
        let vis = seeded();
        assert_eq!(vis.array().len(), 20);
        assert!(vis.array().as_slice().iter().all(|v| (1..=99).contains(v)));
        assert_eq!(vis.seed(), 42);
        assert!(vis.status().is_none());
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = VisualizerConfig {
            min_value: 10,
            max_value: 0,
            ..Default::default()
        };
        assert!(matches!(
            Visualizer::new(cfg, NullRenderer),
            Err(ConfigError::InvalidValueRange { min: 10, max: 0 })
        ));
    }

    #[test]
    fn rejected_start_keeps_previous_session() {
        let mut vis = seeded();
        vis.start(AlgorithmKind::Bubble, 5).unwrap();
        vis.tick().unwrap();
        vis.stop();

        let err = vis.start(AlgorithmKind::Quick, 0).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidConfiguration(_)));
        assert_eq!(vis.status(), Some(SessionStatus::Cancelled));
        assert_eq!(vis.metrics().unwrap().steps, 1);
    }

    #[test]
    fn restart_continues_from_partially_sorted_array() {
        let mut vis = seeded();
        vis.start(AlgorithmKind::Bubble, 5).unwrap();
        for _ in 0..10 {
            vis.tick().unwrap();
        }
        vis.stop();
        let partial = vis.array().snapshot();

        vis.start(AlgorithmKind::Heap, 5).unwrap();
        assert_eq!(vis.array().as_slice(), partial.as_slice());
        assert_eq!(vis.metrics().unwrap().steps, 0);
    }

    #[test]
    fn requests_are_checked_against_configured_limits() {
        let cfg = VisualizerConfig {
            delay: Duration::from_millis(20),
            limits: Limits {
                max_size: 50,
                min_delay: Duration::from_millis(10),
                max_delay: Duration::from_millis(40),
            },
            ..VisualizerConfig::default().with_seed(3)
        };
        let mut vis = Visualizer::new(cfg, NullRenderer).unwrap();

        for delay_ms in [9, 41] {
            assert!(matches!(
                vis.start(AlgorithmKind::Merge, delay_ms),
                Err(SchedulerError::InvalidConfiguration(ConfigError::InvalidDelay { .. }))
            ));
        }
        assert!(matches!(
            vis.generate(51, 1, 99),
            Err(SchedulerError::InvalidConfiguration(ConfigError::InvalidSize { size: 51, max: 50 }))
        ));
        assert!(vis.generate(50, 1, 99).is_ok());
        assert!(vis.start(AlgorithmKind::Merge, 40).is_ok());
        assert_eq!(
            vis.start(AlgorithmKind::Merge, 40),
            Err(SchedulerError::AlreadyRunning)
        );
    }

    #[test]
    fn start_default_uses_configured_delay() {
        let mut vis = seeded();
        vis.start_default(AlgorithmKind::Selection).unwrap();
        assert_eq!(
            vis.tick().unwrap().next_tick_in(),
            Some(Duration::from_millis(100))
        );
    }
}
