use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use crate::logger::object::timezone::{LoggerTimeZone, get_or_detect_local_offset};

/// RFC3339 timestamp formatter honoring the configured timezone.
///
/// For `Local`, the current cached offset is read on every invocation, so
/// an offset refreshed after initialization shows up in later log lines.
/// Falls back to UTC if offset detection fails.
#[derive(Debug, Clone, Copy)]
pub struct LoggerRfc3339 {
    tz: LoggerTimeZone,
}

impl LoggerRfc3339 {
    pub fn new(tz: LoggerTimeZone) -> Self {
        Self { tz }
    }
}

impl FormatTime for LoggerRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = OffsetDateTime::now_utc();
        let stamped = match self.tz {
            LoggerTimeZone::Utc => now,
            LoggerTimeZone::Local => now.to_offset(get_or_detect_local_offset()),
        };

        match stamped.format(&Rfc3339) {
            Ok(ts) => {
                write!(w, "{} ", ts)
            }
            Err(_) => {
                write!(w, "<invalid-time> ")
            }
        }
    }
}
