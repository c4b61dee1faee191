//! Error types
//!
//! Emit entry points are fire and forget and never return an error; the only
//! fallible public operation is parsing a [`LogLevel`](super::LogLevel) from
//! a string.

/// Returned when a string does not name a known log level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: '{0}'")]
pub struct ParseLevelError(String);

impl ParseLevelError {
    pub(crate) fn new(input: &str) -> Self {
        Self(input.to_string())
    }
}
