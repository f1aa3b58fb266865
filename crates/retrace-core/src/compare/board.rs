use std::fmt;

use tracing::debug;

use retrace_model::{
    DEFAULT_RETRY_BUDGET, MIN_RETRY_BUDGET, PolicyId, RetryBudget, RetryPolicy,
};

use crate::compare::frame::ChartFrame;
use crate::error::{CoreError, CoreResult};
use crate::schedule::{DurationSeries, SamplerHandle, UniformSampler, expand};

/// One policy in a comparison, with its expanded schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyEntry {
    id: PolicyId,
    policy: RetryPolicy,
    series: DurationSeries,
}

impl PolicyEntry {
    pub fn id(&self) -> PolicyId {
        self.id
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Schedule expanded under the comparison's current budget.
    pub fn series(&self) -> &DurationSeries {
        &self.series
    }
}

/// Ordered set of policies compared under one shared retry budget.
///
/// Ids are assigned from a per-comparison counter at add time and never
/// reused; list position only affects display labels. All mutations
/// revalidate input, re-expand every schedule, and rebuild the frame before
/// returning.
pub struct Comparison {
    entries: Vec<PolicyEntry>,
    budget: RetryBudget,
    next_id: u64,
    sampler: SamplerHandle,
    frame: ChartFrame,
}

impl Comparison {
    /// Comparison with the default budget and an entropy-seeded sampler.
    pub fn new() -> Self {
        Self::with_sampler(Box::new(UniformSampler::new()))
    }

    /// Comparison whose jitter draws replay deterministically from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_sampler(Box::new(UniformSampler::with_seed(seed)))
    }

    /// Comparison with a caller-provided randomness source.
    pub fn with_sampler(sampler: SamplerHandle) -> Self {
        Self {
            entries: Vec::new(),
            budget: DEFAULT_RETRY_BUDGET,
            next_id: 1,
            sampler,
            // Frame agrees with the budget from construction on.
            frame: ChartFrame::build(&[], DEFAULT_RETRY_BUDGET),
        }
    }

    /// Replace the budget and return the updated comparison.
    pub fn with_budget(mut self, budget: RetryBudget) -> Self {
        self.set_budget(budget);
        self
    }

    /// Validates and appends a policy; returns its stable id.
    pub fn add(&mut self, policy: RetryPolicy) -> CoreResult<PolicyId> {
        policy.validate()?;

        let id = PolicyId::new(self.next_id);
        self.next_id += 1;

        self.entries.push(PolicyEntry {
            id,
            policy,
            series: DurationSeries::default(),
        });
        self.rebuild();

        debug!(%id, count = self.entries.len(), "policy added");
        Ok(id)
    }

    /// Validates and replaces the identified policy in place.
    ///
    /// A failed validation leaves the list and frame untouched.
    pub fn update(&mut self, id: PolicyId, policy: RetryPolicy) -> CoreResult<()> {
        policy.validate()?;

        let index = self.index_of(id)?;
        self.entries[index].policy = policy;
        self.rebuild();

        debug!(%id, "policy updated");
        Ok(())
    }

    /// Removes the identified policy.
    ///
    /// Surviving entries keep their ids; their display labels shift down in
    /// the rebuilt frame.
    pub fn remove(&mut self, id: PolicyId) -> CoreResult<()> {
        let index = self.index_of(id)?;
        self.entries.remove(index);
        self.rebuild();

        debug!(%id, count = self.entries.len(), "policy removed");
        Ok(())
    }

    /// Sets the shared retry budget, clamped to at least one retry.
    pub fn set_budget(&mut self, budget: RetryBudget) {
        self.budget = budget.max(MIN_RETRY_BUDGET);
        self.rebuild();

        debug!(budget = self.budget, "budget changed");
    }

    pub fn budget(&self) -> RetryBudget {
        self.budget
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in list order.
    pub fn entries(&self) -> &[PolicyEntry] {
        &self.entries
    }

    /// Current state of the identified policy, if present.
    pub fn policy(&self, id: PolicyId) -> Option<&RetryPolicy> {
        self.entry(id).map(PolicyEntry::policy)
    }

    /// Expanded schedule of the identified policy, if present.
    pub fn series(&self, id: PolicyId) -> Option<&DurationSeries> {
        self.entry(id).map(PolicyEntry::series)
    }

    /// Chart frame for the current list and budget.
    pub fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    fn entry(&self, id: PolicyId) -> Option<&PolicyEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn index_of(&self, id: PolicyId) -> CoreResult<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(CoreError::UnknownPolicy(id))
    }

    fn rebuild(&mut self) {
        for entry in &mut self.entries {
            entry.series = expand(&entry.policy, self.budget, self.sampler.as_mut());
        }
        self.frame = ChartFrame::build(&self.entries, self.budget);
    }
}

impl Default for Comparison {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparison")
            .field("entries", &self.entries.len())
            .field("budget", &self.budget)
            .field("sampler", &"<handle>")
            .finish()
    }
}
