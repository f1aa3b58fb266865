use serde::{Deserialize, Serialize};

/// Boolean switch with explicit on/off constructors.
///
/// Used for per-policy toggles such as jitter. Serializes as a plain JSON
/// boolean. Defaults to disabled: noise is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flag(bool);

impl Flag {
    /// Flag in the enabled state.
    pub const fn enabled() -> Self {
        Self(true)
    }

    /// Flag in the disabled state.
    pub const fn disabled() -> Self {
        Self(false)
    }

    /// True when enabled.
    pub const fn is_enabled(&self) -> bool {
        self.0
    }

    /// True when disabled.
    pub const fn is_disabled(&self) -> bool {
        !self.0
    }

    /// Raw boolean value.
    pub const fn value(&self) -> bool {
        self.0
    }
}

impl Default for Flag {
    fn default() -> Self {
        Self::disabled()
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Flag> for bool {
    fn from(flag: Flag) -> Self {
        flag.0
    }
}
