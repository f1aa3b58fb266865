//! Common model-level constants.
//!
//! Shared defaults and bounds for the retry budget live here so the driver
//! and any frontend agree on a single source of truth.

use crate::domain::RetryBudget;

/// Retry budget used when a comparison is created without an explicit one.
pub const DEFAULT_RETRY_BUDGET: RetryBudget = 10;

/// Smallest meaningful retry budget.
///
/// A schedule always contains at least the first retry; budget setters clamp
/// to this value instead of failing.
pub const MIN_RETRY_BUDGET: RetryBudget = 1;
