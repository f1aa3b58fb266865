use fastrand::Rng;

use retrace_model::DelayMs;

use crate::schedule::sampler::JitterSampler;

/// Uniform jitter sampler backed by a `fastrand` generator.
///
/// Two samplers built with the same seed replay the same draws in the same
/// order.
#[derive(Debug, Clone)]
pub struct UniformSampler {
    rng: Rng,
}

impl UniformSampler {
    /// Sampler seeded from OS entropy.
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// Sampler with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }
}

impl Default for UniformSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSampler for UniformSampler {
    fn sample(&mut self, half_range: DelayMs) -> DelayMs {
        (self.rng.f64() * 2.0 - 1.0) * half_range
    }
}
