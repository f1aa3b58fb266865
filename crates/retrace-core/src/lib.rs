pub mod compare;
pub mod error;
pub mod format;
pub mod schedule;

pub mod prelude {
    pub use crate::compare::{ChartFrame, Comparison, PolicyDraft};
    pub use crate::error::CoreError;
    pub use crate::format::format_duration;
    pub use crate::schedule::{DurationSeries, JitterSampler};
}
