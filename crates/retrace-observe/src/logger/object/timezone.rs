use std::{
    fmt,
    str::FromStr,
    sync::{OnceLock, RwLock},
};

use serde::{Deserialize, Serialize};
use time::UtcOffset;
use tracing::debug;

use crate::logger::error::LoggerError;

/// Cached local UTC offset, written once by `init_local_offset()`.
static LOCAL_OFFSET: RwLock<UtcOffset> = RwLock::new(UtcOffset::UTC);

/// Whether offset detection has already been attempted.
static INIT_DONE: OnceLock<()> = OnceLock::new();

/// Timezone used for log timestamps.
///
/// `Utc` always works; `Local` uses the system timezone and needs
/// [`init_local_offset`] to run while the process is still single-threaded.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum LoggerTimeZone {
    /// UTC timestamps (default).
    Utc,
    /// System-timezone timestamps.
    Local,
}

impl LoggerTimeZone {
    /// Canonical lowercase name, as accepted back by `FromStr`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Utc => "utc",
            Self::Local => "local",
        }
    }
}

impl Default for LoggerTimeZone {
    fn default() -> Self {
        Self::Utc
    }
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detects and caches the local UTC offset.
///
/// Must run in `main()` before any thread is spawned: on most Unix
/// platforms offset detection refuses to work once the process is
/// multi-threaded. Falls back to UTC silently when detection fails.
pub fn init_local_offset() {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    if let Ok(mut guard) = LOCAL_OFFSET.write() {
        *guard = offset;
    }
    debug!("local offset initialized: {}", format_offset(offset));
}

/// Cached local offset, detecting it on first use if nobody called
/// [`init_local_offset`].
pub(crate) fn get_or_detect_local_offset() -> UtcOffset {
    INIT_DONE.get_or_init(|| {
        match UtcOffset::current_local_offset() {
            Ok(detected) => {
                if let Ok(mut guard) = LOCAL_OFFSET.write() {
                    *guard = detected;
                }
            }
            Err(_) => {
                eprintln!(
                    "WARNING: local timezone detection failed; timestamps stay \
                     in UTC. Call init_local_offset() at the top of main()."
                );
            }
        }
    });

    LOCAL_OFFSET.read().map(|guard| *guard).unwrap_or(UtcOffset::UTC)
}

/// Formats an offset as `UTC±HH`, or `UTC±HH:MM` for half-hour zones.
fn format_offset(offset: UtcOffset) -> String {
    let hours = offset.whole_hours();
    let minutes = offset.minutes_past_hour();
    if minutes == 0 {
        format!("UTC{:+03}", hours)
    } else {
        format!("UTC{:+03}:{:02}", hours, minutes.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_utc() {
        assert_eq!(LoggerTimeZone::default(), LoggerTimeZone::Utc);
    }

    #[test]
    fn parses_names_ignoring_case_and_padding() {
        assert_eq!("utc".parse::<LoggerTimeZone>().unwrap(), LoggerTimeZone::Utc);
        assert_eq!(" UTC ".parse::<LoggerTimeZone>().unwrap(), LoggerTimeZone::Utc);
        assert_eq!(
            "Local".parse::<LoggerTimeZone>().unwrap(),
            LoggerTimeZone::Local
        );
    }

    #[test]
    fn rejects_named_zones() {
        for input in ["", "pst", "Europe/Berlin", "+03:00"] {
            assert!(input.parse::<LoggerTimeZone>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn display_matches_as_str() {
        for tz in [LoggerTimeZone::Utc, LoggerTimeZone::Local] {
            assert_eq!(tz.to_string(), tz.as_str());
        }
    }

    #[test]
    fn offsets_format_as_utc_plus_minus() {
        assert_eq!(format_offset(UtcOffset::UTC), "UTC+00");

        let tehran = UtcOffset::from_hms(3, 30, 0).unwrap();
        assert_eq!(format_offset(tehran), "UTC+03:30");

        let eastern = UtcOffset::from_hms(-5, 0, 0).unwrap();
        assert_eq!(format_offset(eastern), "UTC-05");
    }

    #[test]
    fn detection_yields_a_plausible_offset() {
        init_local_offset();
        let offset = get_or_detect_local_offset();
        assert!(offset.whole_hours().abs() <= 14);
    }
}
