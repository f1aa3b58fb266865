use retrace_model::{BackoffKind, DelayMs, RetryPolicy};

/// Raw delay of the next step, derived from the previous step's raw delay.
///
/// The growth rule always compounds on the per-step raw value, never on the
/// cumulative total. A capped policy without a configured ceiling grows
/// uncapped.
pub fn next_raw_delay(policy: &RetryPolicy, prev: DelayMs) -> DelayMs {
    match policy.kind {
        BackoffKind::Linear => prev + policy.factor,
        BackoffKind::Exponential => prev * policy.factor,
        BackoffKind::CappedExponential => match policy.cap() {
            Some(cap) => (prev * policy.factor).min(cap),
            None => prev * policy.factor,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_adds_factor() {
        let policy = RetryPolicy::linear(1000.0, 1000.0);
        assert_eq!(next_raw_delay(&policy, 1000.0), 2000.0);
        assert_eq!(next_raw_delay(&policy, 2000.0), 3000.0);
    }

    #[test]
    fn exponential_multiplies_by_factor() {
        let policy = RetryPolicy::exponential(1000.0, 2.0);
        assert_eq!(next_raw_delay(&policy, 1000.0), 2000.0);
        assert_eq!(next_raw_delay(&policy, 4000.0), 8000.0);
    }

    #[test]
    fn capped_clamps_at_ceiling() {
        let policy = RetryPolicy::capped_exponential(1000.0, 2.0, 5000.0);
        assert_eq!(next_raw_delay(&policy, 2000.0), 4000.0);
        assert_eq!(next_raw_delay(&policy, 4000.0), 5000.0);
        assert_eq!(next_raw_delay(&policy, 5000.0), 5000.0);
    }

    #[test]
    fn capped_without_ceiling_grows_uncapped() {
        let mut policy = RetryPolicy::capped_exponential(1000.0, 2.0, 5000.0);
        policy.max_ms = None;
        assert_eq!(next_raw_delay(&policy, 4000.0), 8000.0);
    }
}
