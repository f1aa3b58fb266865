//! Schedule expansion: turning one policy into a series of retry instants.
//!
//! The engine is a total function over finite numeric inputs. Randomness is
//! injected through [`JitterSampler`] instead of read from a process-wide
//! generator, so jittered runs can be replayed from a seed.
mod delay;
pub use delay::next_raw_delay;

mod noop;
pub use noop::NoJitter;

mod sampler;
pub use sampler::{JitterSampler, SamplerHandle};

mod series;
pub use series::{DurationSeries, expand};

mod uniform;
pub use uniform::UniformSampler;

/// Create a sampler handle that never perturbs delays.
#[inline]
pub fn no_jitter() -> SamplerHandle {
    Box::new(NoJitter)
}
