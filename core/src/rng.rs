//! Deterministic random number generation for demo data.
//!
//! RULE: nothing in the calculation core may call any RNG. Randomness
//! exists only to fabricate plausible demo scenarios at the consumer
//! boundary, and all of it flows through `DemoRng` streams derived from
//! a single seed.
//!
//! Each stream is seeded from (seed, stable stream slot), so adding a
//! new stream never perturbs the sequences of existing ones and any
//! stream is reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// Stable stream slot assignments.
/// NEVER reorder or remove entries — only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum DemoStream {
    Price = 0,
    Units = 1,
    Change = 2,
    Pick = 3,
    // Add new streams here — append only.
}

impl DemoStream {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Units => "units",
            Self::Change => "change",
            Self::Pick => "pick",
        }
    }
}

/// A named, deterministic RNG for a single demo stream.
pub struct DemoRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl DemoRng {
    pub fn new(seed: u64, stream: DemoStream) -> Self {
        let slot = stream as u64;
        let derived = seed ^ 0xa076_1d64_78bd_642f_u64.wrapping_mul(slot + 1);
        Self {
            name: stream.name(),
            inner: Pcg64Mcg::seed_from_u64(derived),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a float in [lo, hi).
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Sample from a simplified Pareto distribution.
    /// x_min: minimum value, alpha: shape (higher = less skewed).
    pub fn pareto(&mut self, x_min: f64, alpha: f64) -> f64 {
        let u = self.next_f64().max(1e-10);
        x_min * u.powf(-1.0 / alpha)
    }
}
