// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and seeded randomness.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Returns a deterministic RNG so particle tests are reproducible.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
