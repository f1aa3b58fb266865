use serde::Serialize;

use retrace_model::{DelayMs, RetryBudget, RetryPolicy};

use crate::schedule::delay::next_raw_delay;
use crate::schedule::sampler::JitterSampler;

/// Cumulative retry instants produced by expanding one policy.
///
/// Index 0 is the elapsed time of the first retry; the last index is the
/// time of the final simulated retry. Values are milliseconds since the
/// initial failure and non-decreasing by construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct DurationSeries(Vec<DelayMs>);

impl DurationSeries {
    /// Instants in retry order.
    pub fn instants(&self) -> &[DelayMs] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Instant at `index`, if simulated.
    pub fn get(&self, index: usize) -> Option<DelayMs> {
        self.0.get(index).copied()
    }

    /// Elapsed time of the last simulated retry, or zero when empty.
    pub fn total_ms(&self) -> DelayMs {
        self.0.last().copied().unwrap_or(0.0)
    }
}

impl From<Vec<DelayMs>> for DurationSeries {
    fn from(instants: Vec<DelayMs>) -> Self {
        Self(instants)
    }
}

/// Expands a policy into `budget` cumulative retry instants.
///
/// The first instant equals `first_ms` exactly; jitter only perturbs steps
/// after it. Each jittered step is clamped at zero after the draw, so the
/// series never decreases. The raw (pre-jitter) delay feeds the next step's
/// growth rule; jitter never compounds across steps. A zero budget yields
/// an empty series.
pub fn expand(
    policy: &RetryPolicy,
    budget: RetryBudget,
    sampler: &mut dyn JitterSampler,
) -> DurationSeries {
    if budget == 0 {
        return DurationSeries::default();
    }

    let mut instants = Vec::with_capacity(budget as usize);
    let mut raw = policy.first_ms;
    let mut cumulative = policy.first_ms;
    instants.push(cumulative);

    for _ in 1..budget {
        raw = next_raw_delay(policy, raw);
        let step = if policy.jitter.is_enabled() {
            (raw + sampler.sample(policy.jitter_ms)).max(0.0)
        } else {
            raw
        };
        cumulative += step;
        instants.push(cumulative);
    }

    DurationSeries(instants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{NoJitter, UniformSampler};

    fn expand_plain(policy: &RetryPolicy, budget: RetryBudget) -> Vec<DelayMs> {
        expand(policy, budget, &mut NoJitter).instants().to_vec()
    }

    #[test]
    fn linear_example_accumulates_additively() {
        let policy = RetryPolicy::linear(1000.0, 1000.0);
        let instants = expand_plain(&policy, 3);
        assert_eq!(instants, vec![1000.0, 3000.0, 6000.0]);
    }

    #[test]
    fn exponential_example_doubles_each_step() {
        let policy = RetryPolicy::exponential(1000.0, 2.0);
        let instants = expand_plain(&policy, 4);
        assert_eq!(instants, vec![1000.0, 3000.0, 7000.0, 15000.0]);
    }

    #[test]
    fn capped_example_flattens_at_ceiling() {
        let policy = RetryPolicy::capped_exponential(1000.0, 2.0, 5000.0);
        let instants = expand_plain(&policy, 4);
        assert_eq!(instants, vec![1000.0, 3000.0, 7000.0, 12000.0]);
    }

    #[test]
    fn linear_raw_delay_is_affine_in_step_index() {
        let (d, f) = (500.0, 250.0);
        let instants = expand_plain(&RetryPolicy::linear(d, f), 8);

        let mut expected_cumulative = 0.0;
        for (i, instant) in instants.iter().enumerate() {
            expected_cumulative += d + i as DelayMs * f;
            assert_eq!(*instant, expected_cumulative);
        }
    }

    #[test]
    fn exponential_raw_delay_is_geometric_in_step_index() {
        let (d, f) = (100.0, 3.0);
        let instants = expand_plain(&RetryPolicy::exponential(d, f), 6);

        for i in 1..instants.len() {
            let step = instants[i] - instants[i - 1];
            assert_eq!(step, d * f.powi(i as i32));
        }
    }

    #[test]
    fn capped_raw_delay_matches_clamped_closed_form() {
        let (d, f, cap) = (1000.0, 2.0, 5000.0);
        let instants = expand_plain(&RetryPolicy::capped_exponential(d, f, cap), 8);

        let mut prev_step = 0.0;
        for i in 0..instants.len() {
            let step = if i == 0 {
                instants[0]
            } else {
                instants[i] - instants[i - 1]
            };
            assert_eq!(step, (d * f.powi(i as i32)).min(cap));
            assert!(step >= prev_step);
            prev_step = step;
        }
    }

    #[test]
    fn budget_of_one_returns_first_delay_for_every_kind() {
        let policies = [
            RetryPolicy::linear(1000.0, 1000.0),
            RetryPolicy::exponential(1000.0, 2.0),
            RetryPolicy::capped_exponential(1000.0, 2.0, 5000.0),
            RetryPolicy::exponential(1000.0, 2.0).with_jitter(500.0),
        ];

        for policy in policies {
            let mut sampler = UniformSampler::with_seed(9);
            let series = expand(&policy, 1, &mut sampler);
            assert_eq!(series.instants(), &[1000.0]);
        }
    }

    #[test]
    fn zero_budget_yields_empty_series() {
        let series = expand(&RetryPolicy::default(), 0, &mut NoJitter);
        assert!(series.is_empty());
        assert_eq!(series.total_ms(), 0.0);
    }

    #[test]
    fn jittered_steps_stay_within_amplitude_of_raw() {
        let (d, f, amplitude) = (1000.0, 2.0, 300.0);
        let policy = RetryPolicy::exponential(d, f).with_jitter(amplitude);
        let mut sampler = UniformSampler::with_seed(1234);

        for _ in 0..1000 {
            let instants = expand(&policy, 5, &mut sampler).instants().to_vec();
            assert_eq!(instants[0], d);

            for i in 1..instants.len() {
                let step = instants[i] - instants[i - 1];
                let raw = d * f.powi(i as i32);
                assert!(step >= (raw - amplitude).max(0.0));
                assert!(step <= raw + amplitude);
            }
        }
    }

    #[test]
    fn jitter_clamp_masks_negative_draws_on_tiny_delays() {
        // First delay 1ms, amplitude 500ms: raw steps can go deeply negative
        // before the clamp. Steps must floor at zero and the cumulative
        // series must never decrease.
        let policy = RetryPolicy::linear(1.0, 1.0).with_jitter(500.0);
        let mut sampler = UniformSampler::with_seed(77);

        for _ in 0..200 {
            let instants = expand(&policy, 10, &mut sampler).instants().to_vec();
            for i in 1..instants.len() {
                assert!(instants[i] >= instants[i - 1]);
            }
        }
    }

    #[test]
    fn jitter_never_touches_the_first_instant() {
        let policy = RetryPolicy::exponential(1000.0, 2.0).with_jitter(999.0);
        let mut sampler = UniformSampler::with_seed(5);

        for _ in 0..50 {
            let series = expand(&policy, 3, &mut sampler);
            assert_eq!(series.get(0), Some(1000.0));
        }
    }

    #[test]
    fn same_seed_expands_identically() {
        let policy = RetryPolicy::exponential(1000.0, 2.0).with_jitter(250.0);

        let mut a = UniformSampler::with_seed(99);
        let mut b = UniformSampler::with_seed(99);

        assert_eq!(expand(&policy, 10, &mut a), expand(&policy, 10, &mut b));
    }

    #[test]
    fn distinct_seeds_expand_differently() {
        let policy = RetryPolicy::exponential(1000.0, 2.0).with_jitter(250.0);

        let mut a = UniformSampler::with_seed(1);
        let mut b = UniformSampler::with_seed(2);

        assert_ne!(expand(&policy, 10, &mut a), expand(&policy, 10, &mut b));
    }

    #[test]
    fn disabled_jitter_ignores_the_sampler_state() {
        let policy = RetryPolicy::exponential(1000.0, 2.0);

        let mut entropy = UniformSampler::new();
        let first = expand(&policy, 6, &mut entropy);
        let second = expand(&policy, 6, &mut entropy);

        assert_eq!(first, second);
    }

    #[test]
    fn series_serializes_as_plain_array() {
        let series = DurationSeries::from(vec![1000.0, 3000.0]);
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, "[1000.0,3000.0]");
    }
}
