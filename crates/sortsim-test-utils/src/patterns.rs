//! Input patterns for exercising sorting algorithms.
//!
//! Every random pattern takes an explicit seed so a failing case can be
//! replayed exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniformly random values over the full `i32` range.
pub fn random(len: usize, seed: u64) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random()).collect()
}

/// Uniformly random values in `[min, max]`; a narrow range gives many
/// duplicates.
pub fn random_uniform(len: usize, min: i32, max: i32, seed: u64) -> Vec<i32> {
    // :.:.:.::
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(min..=max)).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.
    (0..len as i32).rev().collect()
}

/// Random values split into `saw_count` runs, each sorted ascending or
/// descending at random.
pub fn saw_mixed(len: usize, saw_count: usize, seed: u64) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::
    if len == 0 {
        return Vec::new();
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut vals: Vec<i32> = (0..len).map(|_| rng.random_range(0..1000)).collect();
    let chunk_size = (len / saw_count.max(1)).max(1);

    for chunk in vals.chunks_mut(chunk_size) {
        if rng.random_bool(0.5) {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    vals
}

/// Every pattern at `len`, labelled for assertion messages.
pub fn all_patterns(len: usize, seed: u64) -> Vec<(&'static str, Vec<i32>)> {
    vec![
        ("random", random(len, seed)),
        ("random_few_values", random_uniform(len, 0, 3, seed)),
        ("random_small_range", random_uniform(len, 1, 99, seed)),
        ("all_equal", all_equal(len)),
        ("ascending", ascending(len)),
        ("descending", descending(len)),
        ("saw_mixed", saw_mixed(len, 4, seed)),
    ]
}
