// src/random.rs

use std::f32::consts::TAU;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Injected source of noise for the generator. Never accessed through
/// ambient or global state; the caller constructs one and passes it in.
pub trait RandomSource {
    /// A uniform sample in `[0, 1)`, independent of prior calls.
    fn uniform(&mut self) -> f32;

    /// A standard-normal sample (mean 0, stddev 1), freshly drawn per call.
    ///
    /// The provided implementation is the Box-Muller transform over two
    /// uniforms mapped into `(0, 1]` so the logarithm never sees zero.
    fn gaussian(&mut self) -> f32 {
        let u1 = 1.0 - self.uniform();
        let u2 = 1.0 - self.uniform();
        (-2.0 * u1.ln()).sqrt() * (TAU * u2).sin()
    }
}

/// The default `RandomSource`, backed by a seedable PRNG so tests can pin
/// the noise stream and production can seed from entropy.
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    fn uniform(&mut self) -> f32 {
        self.rng.gen()
    }
}
