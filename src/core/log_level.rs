//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseLevelError;

/// Severity of a log line, ordered from least to most verbose.
///
/// `None` is a sentinel meaning "nothing enabled"; it is a valid threshold
/// but never an emit severity. `Debug` is not a distinct level: the `debug`
/// entry points are aliases for [`LogLevel::Verbose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[repr(i32)]
pub enum LogLevel {
    None = 0,
    Error = 1,
    Warning = 2,
    #[default]
    Info = 3,
    Verbose = 4,
    Trace = 5,
}

const ERROR_MARKER: &str = "*****";
const WARNING_MARKER: &str = "!!!";
const INFO_MARKER: &str = "===";
const VERBOSE_MARKER: &str = "---";
const TRACE_MARKER: &str = ".....";

impl LogLevel {
    /// The raw integer value used by the level registry.
    #[inline]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Maps a raw registry value back to a known level, if it is one.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(LogLevel::None),
            1 => Some(LogLevel::Error),
            2 => Some(LogLevel::Warning),
            3 => Some(LogLevel::Info),
            4 => Some(LogLevel::Verbose),
            5 => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// The short literal prefix that tags lines of this severity.
    pub const fn marker(self) -> &'static str {
        match self {
            LogLevel::None => "",
            LogLevel::Error => ERROR_MARKER,
            LogLevel::Warning => WARNING_MARKER,
            LogLevel::Info => INFO_MARKER,
            LogLevel::Verbose => VERBOSE_MARKER,
            LogLevel::Trace => TRACE_MARKER,
        }
    }

    /// Marker lookup for raw registry values. Unknown values degrade to an
    /// empty marker rather than failing.
    pub const fn marker_for_raw(raw: i32) -> &'static str {
        match Self::from_raw(raw) {
            Some(level) => level.marker(),
            None => "",
        }
    }

    pub const fn to_str(self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(LogLevel::None),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "INFO" => Ok(LogLevel::Info),
            "VERBOSE" => Ok(LogLevel::Verbose),
            // Debug is an alias of Verbose, see the type docs.
            "DEBUG" => Ok(LogLevel::Verbose),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(ParseLevelError::new(s)),
        }
    }
}
