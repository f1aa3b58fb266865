mod flag;
pub use flag::Flag;

mod id;
pub use id::PolicyId;

mod constants;
pub use constants::{DEFAULT_RETRY_BUDGET, MIN_RETRY_BUDGET};

/// Delay or elapsed-time value in milliseconds.
///
/// All schedule arithmetic is floating-point; fractional milliseconds are
/// preserved through the recurrence and only rounded for display.
pub type DelayMs = f64;

/// Number of retries simulated for a comparison.
///
/// Each policy in a comparison is expanded into exactly this many retry
/// instants.
pub type RetryBudget = u32;
