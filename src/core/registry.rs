//! Process-wide level registry
//!
//! One shared threshold value with atomic load/store semantics. Any thread
//! may change it at any time; readers never block. Gating is advisory: a
//! call may pass the gate and the threshold may change before the line is
//! written, which is acceptable for diagnostic output.

use std::sync::atomic::{AtomicI32, Ordering};

use super::log_level::LogLevel;

/// Current minimum severity. Initialized once at process start, lives for
/// the lifetime of the process.
static LEVEL: AtomicI32 = AtomicI32::new(LogLevel::Info as i32);

/// Unconditionally overwrites the current threshold.
#[inline]
pub fn set_level(level: LogLevel) {
    set_level_raw(level.as_raw());
}

/// Raw variant of [`set_level`]. Out-of-range values are accepted as opaque
/// integers; gating still compares them with ordinary integer ordering.
#[inline]
pub fn set_level_raw(level: i32) {
    // Relaxed is enough: the registry is a single word and gating makes no
    // ordering promises relative to in-flight emit calls.
    LEVEL.store(level, Ordering::Relaxed);
}

/// Atomic snapshot of the current raw threshold.
#[inline]
pub fn level_raw() -> i32 {
    LEVEL.load(Ordering::Relaxed)
}

/// True iff the current threshold is at least as verbose as `level`.
///
/// This gates every logging call, including suppressed ones: one atomic
/// load plus a comparison, no allocation.
#[inline]
pub fn is_enabled(level: LogLevel) -> bool {
    is_enabled_raw(level.as_raw())
}

/// Raw variant of [`is_enabled`].
#[inline]
pub fn is_enabled_raw(level: i32) -> bool {
    level_raw() >= level
}

#[inline]
pub fn is_error() -> bool {
    is_enabled(LogLevel::Error)
}

#[inline]
pub fn is_warning() -> bool {
    is_enabled(LogLevel::Warning)
}

#[inline]
pub fn is_info() -> bool {
    is_enabled(LogLevel::Info)
}

#[inline]
pub fn is_verbose() -> bool {
    is_enabled(LogLevel::Verbose)
}

/// Alias of [`is_verbose`]; the crate has no distinct Debug level.
///
/// Intended to guard expensive argument construction:
///
/// ```
/// if loglite::is_debug() {
///     loglite::debug!("state dump:", "...");
/// }
/// ```
#[inline]
pub fn is_debug() -> bool {
    is_verbose()
}

#[inline]
pub fn is_trace() -> bool {
    is_enabled(LogLevel::Trace)
}
