//! Human-readable rendering of millisecond quantities.

use retrace_model::DelayMs;

const SECOND_MS: DelayMs = 1_000.0;
const MINUTE_MS: DelayMs = 60_000.0;
const HOUR_MS: DelayMs = 3_600_000.0;

/// Formats milliseconds with two decimals, scaled to the largest unit that
/// keeps the value below the next threshold.
///
/// Thresholds are strict: `999.99` renders in milliseconds, `1000.0` as
/// `"1.00s"`. Hours are the final unit and are never rolled over.
pub fn format_duration(ms: DelayMs) -> String {
    if ms < SECOND_MS {
        format!("{:.2}ms", ms)
    } else if ms < MINUTE_MS {
        format!("{:.2}s", ms / SECOND_MS)
    } else if ms < HOUR_MS {
        format!("{:.2}m", ms / MINUTE_MS)
    } else {
        format!("{:.2}h", ms / HOUR_MS)
    }
}
