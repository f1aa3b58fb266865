use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::logger::object::{LoggerFormat, LoggerLevel, LoggerTimeZone};

/// Logger configuration.
///
/// Every field has a default, so a partial config (or `{}`) deserializes
/// cleanly; unset fields fall back to the values in [`Default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format, text or JSON.
    pub format: LoggerFormat,
    /// Filter expression, e.g. "info" or "retrace_core=debug,info".
    pub level: LoggerLevel,
    /// Timezone used for timestamps.
    pub tz: LoggerTimeZone,
    /// Include the emitting module path in each line.
    pub with_targets: bool,
    /// Allow ANSI colors (text format only).
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Whether the installed logger should emit ANSI colors.
    ///
    /// True only when `use_color` is set and stdout is a real terminal, so
    /// redirected output stays clean. Evaluated at install time, not at
    /// config-parse time.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}
