//! Deterministic RNG wrapper for demand generation.
//!
//! # Determinism strategy
//!
//! Synthetic flow schedules are the only randomized part of the workspace;
//! the control algorithm itself uses no randomness.  Each generator gets its
//! own independent `SmallRng` seeded by:
//!
//!   seed = run_seed XOR (stream_offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive stream offsets uniformly across the seed space.
//! Deriving per-direction child streams from one root seed means the same
//! seed always reproduces the same demand, regardless of the order in which
//! the directions are generated.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG for flow-schedule generation.
///
/// Used only in single-threaded contexts; give each worker its own `FlowRng`
/// derived via [`child`][FlowRng::child] if demand is ever generated in
/// parallel.
pub struct FlowRng(SmallRng);

impl FlowRng {
    pub fn new(seed: u64) -> Self {
        FlowRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `FlowRng` with a different seed offset — used to give
    /// each direction its own independent stream from the root seed.
    pub fn child(&mut self, offset: u64) -> FlowRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        FlowRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
