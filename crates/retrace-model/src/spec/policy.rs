use serde::{Deserialize, Serialize};

use crate::domain::{DelayMs, Flag};
use crate::error::{ModelError, ModelResult};
use crate::kind::BackoffKind;

const fn default_first_ms() -> DelayMs {
    1000.0
}

const fn default_factor() -> f64 {
    2.0
}

/// Declarative retry policy.
///
/// `RetryPolicy` describes *what* schedule to simulate, not how to expand
/// it; expansion lives in the core crate. The struct itself carries no
/// behavior beyond boundary validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    /// Growth rule applied between consecutive delays.
    #[serde(default)]
    pub kind: BackoffKind,

    /// Delay before the first retry, in milliseconds.
    ///
    /// Also the seed of the growth rule: every later delay derives from it.
    #[serde(default = "default_first_ms")]
    pub first_ms: DelayMs,

    /// Growth parameter.
    ///
    /// Milliseconds added to the previous delay for `Linear`; a plain
    /// multiplier for the exponential kinds.
    #[serde(default = "default_factor")]
    pub factor: f64,

    /// Ceiling for raw delays in milliseconds.
    ///
    /// Only consulted by `CappedExponential`; other kinds ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ms: Option<DelayMs>,

    /// Whether a random offset perturbs each delay after the first.
    #[serde(default)]
    pub jitter: Flag,

    /// Jitter amplitude: offsets are drawn uniformly from `± jitter_ms`.
    #[serde(default)]
    pub jitter_ms: DelayMs,
}

impl RetryPolicy {
    /// Linear policy: each delay grows by `factor` milliseconds.
    pub fn linear(first_ms: DelayMs, factor: f64) -> Self {
        Self {
            kind: BackoffKind::Linear,
            first_ms,
            factor,
            max_ms: None,
            jitter: Flag::disabled(),
            jitter_ms: 0.0,
        }
    }

    /// Exponential policy: each delay is the previous one times `factor`.
    pub fn exponential(first_ms: DelayMs, factor: f64) -> Self {
        Self {
            kind: BackoffKind::Exponential,
            first_ms,
            factor,
            max_ms: None,
            jitter: Flag::disabled(),
            jitter_ms: 0.0,
        }
    }

    /// Exponential policy whose raw delays never exceed `max_ms`.
    pub fn capped_exponential(first_ms: DelayMs, factor: f64, max_ms: DelayMs) -> Self {
        Self {
            kind: BackoffKind::CappedExponential,
            first_ms,
            factor,
            max_ms: Some(max_ms),
            jitter: Flag::disabled(),
            jitter_ms: 0.0,
        }
    }

    /// Enables jitter with a symmetric `± jitter_ms` amplitude.
    pub fn with_jitter(mut self, jitter_ms: DelayMs) -> Self {
        self.jitter = Flag::enabled();
        self.jitter_ms = jitter_ms;
        self
    }

    /// Ceiling on raw delays, when the kind honors one.
    ///
    /// Returns `None` for uncapped kinds even if `max_ms` is set.
    pub fn cap(&self) -> Option<DelayMs> {
        if self.kind.is_capped() { self.max_ms } else { None }
    }

    /// Checks numeric fields at the input boundary.
    ///
    /// The schedule engine itself is total over validated policies; all
    /// rejection happens here. Field names in errors use the wire form.
    pub fn validate(&self) -> ModelResult<()> {
        if !self.first_ms.is_finite() || self.first_ms < 0.0 {
            return Err(ModelError::InvalidField("firstMs"));
        }
        if !self.factor.is_finite() || self.factor < 0.0 {
            return Err(ModelError::InvalidField("factor"));
        }
        if let Some(max) = self.max_ms {
            if !max.is_finite() || max < 0.0 {
                return Err(ModelError::InvalidField("maxMs"));
            }
        } else if self.kind.is_capped() {
            return Err(ModelError::MissingCap);
        }
        if !self.jitter_ms.is_finite() || self.jitter_ms < 0.0 {
            return Err(ModelError::InvalidField("jitterMs"));
        }
        Ok(())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::exponential(default_first_ms(), default_factor())
    }
}
