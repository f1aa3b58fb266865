use retrace_model::DelayMs;

use crate::schedule::sampler::JitterSampler;

/// Sampler whose every draw is zero.
///
/// Useful for tests and callers that want jitter-enabled policies to behave
/// as if jitter were off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSampler for NoJitter {
    #[inline(always)]
    fn sample(&mut self, _: DelayMs) -> DelayMs {
        0.0
    }
}
