//! Seeded, reproducible source of uniform doubles, Laplace noise, and the
//! Gumbel-trick draw the exponential mechanism selector needs.
//!
//! Follows the xorshift construction used elsewhere in this workspace
//! (`butils::XorShift64`, consumed as a plain `u64` iterator by
//! `coding_benchmark`) rather than pulling in an external RNG crate: the
//! generator is small, its state is a single `u64`, and determinism across
//! platforms only requires integer xorshift plus IEEE-754 arithmetic.

/// A xorshift64 stream, seeded once and threaded explicitly by the miner.
pub struct Rng(u64);

impl Rng {
    /// Seeds the generator. A zero seed is remapped to a fixed nonzero value,
    /// since xorshift never leaves the all-zero state.
    pub fn new(seed: u64) -> Self {
        Self(if seed == 0 { 0x9E3779B97F4A7C15 } else { seed })
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform double in the open interval (0, 1).
    pub fn uniform(&mut self) -> f64 {
        loop {
            let v = (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64);
            if v > 0.0 && v < 1.0 {
                return v;
            }
        }
    }

    /// Laplace mechanism: adds noise drawn from Laplace(0, sens/eps) to `x`.
    pub fn laplace(&mut self, x: f64, eps: f64, sens: f64) -> f64 {
        let shifted = self.uniform() - 0.5;
        let sign = if shifted < 0.0 { -1.0 } else { 1.0 };
        x + (sens / eps) * sign * (1.0 - 2.0 * shifted.abs()).ln()
    }

    /// The `log(log(1/u))` term of the Gumbel-trick exponential mechanism,
    /// for a fresh uniform draw `u`.
    pub fn gumbel_term(&mut self) -> f64 {
        let u = self.uniform();
        (1.0 / u).ln().ln()
    }
}
