use retrace_model::{PolicyId, RetryPolicy};

use crate::compare::board::Comparison;
use crate::error::CoreResult;

/// Which slot a draft lands in when committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Commit appends a new policy.
    Creating,
    /// Commit replaces the identified policy.
    Editing(PolicyId),
}

/// In-progress policy edit, detached from the comparison.
///
/// The draft owns its own copy; the list stays untouched until commit, and
/// cancelling an edit is just dropping the draft. One draft type serves
/// both the create and edit flows, with the mode made explicit instead of
/// being inferred from shared buffer state.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyDraft {
    mode: EditMode,
    policy: RetryPolicy,
}

impl PolicyDraft {
    /// Draft for a brand-new policy, starting from defaults.
    pub fn create() -> Self {
        Self {
            mode: EditMode::Creating,
            policy: RetryPolicy::default(),
        }
    }

    /// Draft seeded from an existing policy's current state.
    pub fn edit(id: PolicyId, policy: RetryPolicy) -> Self {
        Self {
            mode: EditMode::Editing(id),
            policy,
        }
    }

    /// Draft editing the identified policy on `board`, if it exists.
    pub fn edit_from(board: &Comparison, id: PolicyId) -> Option<Self> {
        board.policy(id).cloned().map(|policy| Self::edit(id, policy))
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Mutable access for form-style field edits.
    pub fn policy_mut(&mut self) -> &mut RetryPolicy {
        &mut self.policy
    }

    /// Applies the draft to a comparison.
    ///
    /// Creating drafts append and return the fresh id; editing drafts
    /// replace in place and return the existing id. Validation failures
    /// leave both the board and the draft usable.
    pub fn commit(&self, board: &mut Comparison) -> CoreResult<PolicyId> {
        match self.mode {
            EditMode::Creating => board.add(self.policy.clone()),
            EditMode::Editing(id) => {
                board.update(id, self.policy.clone())?;
                Ok(id)
            }
        }
    }
}

impl Default for PolicyDraft {
    fn default() -> Self {
        Self::create()
    }
}
