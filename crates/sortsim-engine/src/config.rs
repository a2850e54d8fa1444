//! Visualizer configuration, request limits, and validation errors.
//!
//! [`VisualizerConfig`] is the construction input for a
//! [`Visualizer`](crate::Visualizer). [`validate()`](VisualizerConfig::validate)
//! checks it once up front; every later `generate` or `start` request is
//! checked against the same [`Limits`].

use std::error::Error;
use std::fmt;
use std::time::Duration;

// ── Limits ─────────────────────────────────────────────────────────

/// Bounds applied to every `generate` and `start` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Largest array `generate` accepts. Default: 10 000.
    pub max_size: usize,
    /// Shortest step delay. Default: 1 ms. Must be non-zero.
    pub min_delay: Duration,
    /// Longest step delay. Default: 1000 ms.
    pub max_delay: Duration,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_size: 10_000,
            min_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(1000),
        }
    }
}

impl Limits {
    /// Check the limits themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_delay.is_zero() {
            return Err(ConfigError::InvalidLimits {
                reason: "min_delay must be non-zero".to_string(),
            });
        }
        if self.min_delay > self.max_delay {
            return Err(ConfigError::InvalidLimits {
                reason: format!(
                    "min_delay ({:?}) exceeds max_delay ({:?})",
                    self.min_delay, self.max_delay,
                ),
            });
        }
        Ok(())
    }

    /// Check a request for an array of `size` values in `[min, max]`.
    pub fn check_array(&self, size: usize, min: i32, max: i32) -> Result<(), ConfigError> {
        if size > self.max_size {
            return Err(ConfigError::InvalidSize {
                size,
                max: self.max_size,
            });
        }
        if min > max {
            return Err(ConfigError::InvalidValueRange { min, max });
        }
        Ok(())
    }

    /// Check a requested step delay.
    pub fn check_delay(&self, delay: Duration) -> Result<(), ConfigError> {
        if delay < self.min_delay || delay > self.max_delay {
            return Err(ConfigError::InvalidDelay {
                delay,
                min: self.min_delay,
                max: self.max_delay,
            });
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// A configuration value or request outside the allowed limits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Requested array size exceeds [`Limits::max_size`].
    InvalidSize {
        /// The requested size.
        size: usize,
        /// The configured maximum.
        max: usize,
    },
    /// `min > max` for generated values.
    InvalidValueRange {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },
    /// Step delay outside `[min_delay, max_delay]`; zero is always rejected.
    InvalidDelay {
        /// The requested delay.
        delay: Duration,
        /// Shortest allowed delay.
        min: Duration,
        /// Longest allowed delay.
        max: Duration,
    },
    /// The [`Limits`] are themselves inconsistent.
    InvalidLimits {
        /// Which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, max } => {
                write!(f, "array size {size} exceeds maximum of {max}")
            }
            Self::InvalidValueRange { min, max } => {
                write!(f, "value range is empty: min {min} > max {max}")
            }
            Self::InvalidDelay { delay, min, max } => {
                write!(f, "delay {delay:?} is outside {min:?}..={max:?}")
            }
            Self::InvalidLimits { reason } => write!(f, "invalid limits: {reason}"),
        }
    }
}

impl Error for ConfigError {}

// ── VisualizerConfig ───────────────────────────────────────────────

/// Construction input for a [`Visualizer`](crate::Visualizer).
///
/// The defaults describe the initial array and speed shown before the
/// user touches any control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualizerConfig {
    /// Length of the initial array. Default: 20.
    pub size: usize,
    /// Smallest generated value. Default: 1.
    pub min_value: i32,
    /// Largest generated value. Default: 99.
    pub max_value: i32,
    /// Delay used when the host does not pick one. Default: 100 ms.
    pub delay: Duration,
    /// Bounds for later requests.
    pub limits: Limits,
    /// RNG seed for reproducible arrays. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            size: 20,
            min_value: 1,
            max_value: 99,
            delay: Duration::from_millis(100),
            limits: Limits::default(),
            seed: None,
        }
    }
}

impl VisualizerConfig {
    /// Validate the limits, then the initial array and delay against them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()?;
        self.limits
            .check_array(self.size, self.min_value, self.max_value)?;
        self.limits.check_delay(self.delay)?;
        Ok(())
    }

    /// Builder-style seed override.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
