//! Workload profiles for the quadvec benchmarks and smoke driver.
//!
//! Provides deterministic position sequences and pre-filled containers
//! so every harness run measures the same work:
//!
//! - [`insert_positions`] / [`remove_positions`]: seeded random
//!   positions for churn benchmarks
//! - [`filled`]: a container of `n` sequential values

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use quadvec::QuadVec;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Deterministic insertion positions for a container grown from empty:
/// the `i`-th position is uniform in `[0, i]`.
pub fn insert_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|i| rng.random_range(0..=i)).collect()
}

/// Deterministic removal positions for a container shrinking from `n`
/// elements to empty: the `i`-th position is uniform in `[0, n - i)`.
pub fn remove_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|i| rng.random_range(0..n - i)).collect()
}

/// A container of `n` sequential values, pre-sized by its own growth
/// policy.
pub fn filled(n: usize) -> QuadVec<i64> {
    (0..n as i64).collect()
}
