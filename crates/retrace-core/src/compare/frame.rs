use serde::Serialize;

use retrace_model::{DelayMs, PolicyId, RetryBudget};

use crate::compare::board::PolicyEntry;

/// One plotted column: a policy's instants under a position-derived label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartColumn {
    id: PolicyId,
    label: String,
    values: Vec<DelayMs>,
}

impl ChartColumn {
    /// Stable id of the policy behind this column.
    pub fn id(&self) -> PolicyId {
        self.id
    }

    /// Display label, `"Config N"` with N the 1-based list position.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// One value per retry count `0..=budget`; index 0 is always zero.
    pub fn values(&self) -> &[DelayMs] {
        &self.values
    }
}

/// Chart-ready table: one row per retry count, one column per policy.
///
/// Row 0 anchors every column at zero elapsed time; row `i` for `i >= 1`
/// holds each policy's cumulative instant `i - 1`. A renderer maps rows to
/// x-axis ticks and columns to plotted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartFrame {
    budget: RetryBudget,
    columns: Vec<ChartColumn>,
}

impl ChartFrame {
    /// Builds a frame from expanded entries, in list order.
    ///
    /// Labels are assigned positionally here, so removing an entry shifts
    /// the labels of everything after it while ids stay put.
    pub fn build(entries: &[PolicyEntry], budget: RetryBudget) -> Self {
        let columns = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let mut values = Vec::with_capacity(budget as usize + 1);
                values.push(0.0);
                values.extend_from_slice(entry.series().instants());

                ChartColumn {
                    id: entry.id(),
                    label: format!("Config {}", position + 1),
                    values,
                }
            })
            .collect();

        Self { budget, columns }
    }

    /// Shared retry budget the frame was built under.
    pub fn budget(&self) -> RetryBudget {
        self.budget
    }

    /// Number of rows, including row 0.
    pub fn row_count(&self) -> usize {
        self.budget as usize + 1
    }

    /// Columns in list order.
    pub fn columns(&self) -> &[ChartColumn] {
        &self.columns
    }

    /// Column for the identified policy, if present.
    pub fn column(&self, id: PolicyId) -> Option<&ChartColumn> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Values across all columns at one retry count, in column order.
    pub fn row(&self, retry: usize) -> Vec<DelayMs> {
        self.columns
            .iter()
            .filter_map(|column| column.values.get(retry).copied())
            .collect()
    }
}
