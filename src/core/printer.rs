//! Line rendering and emission
//!
//! An enabled call resolves its caller, renders one line
//! `<MM/DD HH:MM:SS.mmm>: <marker>: [<func>:<line>]:<args>` and writes it to
//! standard output, line plus trailing newline, in a single write so that
//! concurrent emitters never interleave partial lines. A disabled call
//! returns after one atomic load.

use std::fmt::Display;
use std::fmt::Write as _;
use std::io::{self, Write};

use chrono::Local;

use super::caller::{resolve_caller, CallerLocation};
use super::log_level::LogLevel;
use super::registry;
use super::sink;

/// Minimum byte width of the argument section; shorter sections are padded
/// with trailing spaces, longer ones are never truncated.
const MIN_ARGS_WIDTH: usize = 60;

const TIMESTAMP_FORMAT: &str = "%m/%d %H:%M:%S%.3f";

/// Severity-gated emission. The fast path is the disabled one: no
/// formatting, no stack walk, no output.
///
/// Never inlined: caller resolution recognizes this function by name when
/// walking past the pipeline's own frames.
#[inline(never)]
pub(crate) fn emit(level: LogLevel, args: &[&dyn Display]) {
    if !registry::is_enabled(level) {
        return;
    }
    if sink::forward(level, args) {
        return;
    }
    print(level.marker(), args);
}

#[inline(never)]
fn print(marker: &str, args: &[&dyn Display]) {
    let caller = resolve_caller();
    let mut line = render(marker, &caller, args);
    line.push('\n');
    write_line(line.as_bytes());
}

fn write_line(line: &[u8]) {
    #[cfg(test)]
    {
        let mut capture = test_support::CAPTURE.lock();
        if let Some(buf) = capture.as_mut() {
            buf.extend_from_slice(line);
            return;
        }
    }
    // Fire and forget: a console write failure is not the caller's problem.
    let _ = io::stdout().lock().write_all(line);
}

fn render(marker: &str, caller: &CallerLocation, args: &[&dyn Display]) -> String {
    let mut out = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let _ = write!(out, ": {}: [{}:{}]:", marker, caller.func, caller.line);
    if !args.is_empty() {
        let mut section = String::new();
        for arg in args {
            let _ = write!(section, " {}", arg);
        }
        while section.len() < MIN_ARGS_WIDTH {
            section.push(' ');
        }
        out.push_str(&section);
    }
    out
}

/// Logs at [`LogLevel::Error`].
#[inline(never)]
pub fn error(args: &[&dyn Display]) {
    emit(LogLevel::Error, args);
}

/// Logs at [`LogLevel::Warning`].
#[inline(never)]
pub fn warning(args: &[&dyn Display]) {
    emit(LogLevel::Warning, args);
}

/// Logs at [`LogLevel::Info`].
#[inline(never)]
pub fn info(args: &[&dyn Display]) {
    emit(LogLevel::Info, args);
}

/// Logs at [`LogLevel::Verbose`].
#[inline(never)]
pub fn verbose(args: &[&dyn Display]) {
    emit(LogLevel::Verbose, args);
}

/// Alias of [`verbose`]; the crate has no distinct Debug level.
#[inline(never)]
pub fn debug(args: &[&dyn Display]) {
    emit(LogLevel::Verbose, args);
}

/// Logs at [`LogLevel::Trace`].
#[inline(never)]
pub fn trace(args: &[&dyn Display]) {
    emit(LogLevel::Trace, args);
}
