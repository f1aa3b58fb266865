use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Growth rule applied between consecutive retry delays.
///
/// Each kind defines how the raw delay of step `i + 1` is derived from the
/// raw delay of step `i`:
///
/// - `Linear` adds the factor to the previous delay.
/// - `Exponential` multiplies the previous delay by the factor.
/// - `CappedExponential` multiplies, then clamps to the configured ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackoffKind {
    Linear,
    #[default]
    Exponential,
    CappedExponential,
}

impl BackoffKind {
    /// Canonical string form, matching the serde representation.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Exponential => "exponential",
            Self::CappedExponential => "capped-exponential",
        }
    }

    /// True when delays are bounded by a ceiling.
    pub const fn is_capped(&self) -> bool {
        matches!(self, Self::CappedExponential)
    }
}

impl fmt::Display for BackoffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

impl FromStr for BackoffKind {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "exponential" | "exp" => Ok(Self::Exponential),
            "capped-exponential" | "capped_exponential" | "capped" => Ok(Self::CappedExponential),
            other => Err(ModelError::UnknownBackoff(other.to_string())),
        }
    }
}
