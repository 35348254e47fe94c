//! Seedable random number generators.
//!
//! Every engine owns its own generator, so concurrent runs never share a
//! pseudo-random stream.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic generator for `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator for an optional seed; `None` draws a fresh seed.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    create_rng(seed.unwrap_or_else(rand::random))
}
