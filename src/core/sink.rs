//! External sink hook
//!
//! A single settable function that, when installed, fully replaces the
//! built-in format-and-write path: every enabled emit call is forwarded to
//! it with the severity and the raw arguments. Lets a host application
//! splice in its own backend without changing call sites.

use std::fmt::Display;

use parking_lot::RwLock;

use super::log_level::LogLevel;

/// Replacement backend for enabled emit calls.
pub type SinkFn = Box<dyn Fn(LogLevel, &[&dyn Display]) + Send + Sync>;

static SINK: RwLock<Option<SinkFn>> = RwLock::new(None);

/// Installs `sink`, replacing any previous one.
pub fn set_sink<F>(sink: F)
where
    F: Fn(LogLevel, &[&dyn Display]) + Send + Sync + 'static,
{
    *SINK.write() = Some(Box::new(sink));
}

/// Removes the installed sink; subsequent emits use the built-in path.
pub fn clear_sink() {
    *SINK.write() = None;
}

/// Forwards to the installed sink, if any. Returns true when the call was
/// consumed and the built-in path must be skipped.
pub(crate) fn forward(level: LogLevel, args: &[&dyn Display]) -> bool {
    match SINK.read().as_ref() {
        Some(sink) => {
            sink(level, args);
            true
        }
        None => false,
    }
}
