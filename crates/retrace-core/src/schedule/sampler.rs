use retrace_model::DelayMs;

/// Randomness source for jitter offsets.
///
/// The engine asks for one draw per jittered step. Implementations are
/// injected by the caller; the seeded [`crate::schedule::UniformSampler`]
/// makes jittered schedules reproducible in tests.
pub trait JitterSampler: Send + 'static {
    /// Draw one offset uniformly from `[-half_range, +half_range]`.
    ///
    /// `half_range` is the policy's jitter amplitude in milliseconds and is
    /// non-negative for validated policies.
    fn sample(&mut self, half_range: DelayMs) -> DelayMs;
}

/// Owned handle to a jitter sampler.
///
/// Stored in [`crate::compare::Comparison`] and borrowed mutably for each
/// schedule expansion.
pub type SamplerHandle = Box<dyn JitterSampler>;
