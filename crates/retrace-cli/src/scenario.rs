use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use retrace_model::{DEFAULT_RETRY_BUDGET, RetryBudget, RetryPolicy};

/// Input scenario: the policies to compare and the shared retry budget.
///
/// Loaded from a JSON file; every field falls back to a default so a file
/// holding only `policies` is enough.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scenario {
    pub budget: RetryBudget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub policies: Vec<RetryPolicy>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            budget: DEFAULT_RETRY_BUDGET,
            seed: None,
            policies: Vec::new(),
        }
    }
}

impl Scenario {
    /// Reads a scenario from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read scenario file {}", path.display()))?;
        let scenario = serde_json::from_str(&text)
            .with_context(|| format!("parse scenario file {}", path.display()))?;
        Ok(scenario)
    }

    /// Built-in demo: the three growth shapes side by side.
    pub fn demo() -> Self {
        Self {
            budget: DEFAULT_RETRY_BUDGET,
            seed: None,
            policies: vec![
                RetryPolicy::linear(1000.0, 1000.0),
                RetryPolicy::exponential(1000.0, 2.0),
                RetryPolicy::capped_exponential(1000.0, 2.0, 5000.0),
            ],
        }
    }
}
