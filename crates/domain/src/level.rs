//! Severity levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Log severity. A higher code means a lower severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "String", into = "String")]
pub enum Level {
    /// Failures; routed to the error sink.
    Error = 1,
    /// Recoverable problems.
    Warn = 2,
    /// Normal operational messages.
    #[default]
    Info = 3,
    /// Verbose diagnostics.
    Debug = 4,
}

impl Level {
    /// The most severe level. Lines at this level go to the error sink.
    pub const MOST_SEVERE: Self = Self::Error;

    /// Returns every level, most severe first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Error, Self::Warn, Self::Info, Self::Debug]
    }

    /// Numeric code written in the `level` field.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a level by its numeric code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Error),
            2 => Some(Self::Warn),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Returns the level name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Returns true when a line at this level passes a `max` verbosity threshold.
    #[must_use]
    pub const fn enabled_under(self, max: Self) -> bool {
        self.code() <= max.code()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            // Numeric codes as written in the `level` field.
            other => other
                .parse::<u8>()
                .ok()
                .and_then(Self::from_code)
                .ok_or_else(|| DomainError::UnknownLevel(other.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}
