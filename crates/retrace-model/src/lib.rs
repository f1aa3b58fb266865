mod domain;
pub use domain::{DEFAULT_RETRY_BUDGET, MIN_RETRY_BUDGET};
pub use domain::{DelayMs, Flag, PolicyId, RetryBudget};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::BackoffKind;

mod spec;
pub use spec::RetryPolicy;
