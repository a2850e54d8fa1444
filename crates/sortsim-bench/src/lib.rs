//! Benchmark profiles for the sortsim engine.
//!
//! - [`reference_profile`]: 1 000 values at the fastest allowed delay
//! - [`stress_profile`]: the largest array the default limits accept
//! - [`bench_array`]: a seeded array outside any visualizer

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use sortsim_core::{ArrayError, ArrayState};
use sortsim_engine::{Limits, VisualizerConfig};

/// Reference profile: 1 000 values in `1..=999`, 1 ms delay.
pub fn reference_profile(seed: u64) -> VisualizerConfig {
    VisualizerConfig {
        size: 1_000,
        min_value: 1,
        max_value: 999,
        delay: Duration::from_millis(1),
        limits: Limits::default(),
        seed: Some(seed),
    }
}

/// Stress profile: [`Limits::max_size`] values, otherwise as
/// [`reference_profile`].
pub fn stress_profile(seed: u64) -> VisualizerConfig {
    let limits = Limits::default();
    VisualizerConfig {
        size: limits.max_size,
        limits,
        ..reference_profile(seed)
    }
}

/// A seeded array of `len` values in `1..=999`.
pub fn bench_array(len: usize, seed: u64) -> Result<ArrayState, ArrayError> {
    ArrayState::with_seed(len, 1, 999, seed)
}
