//! Best-effort caller resolution
//!
//! Walks the stack past the emission pipeline's own frames to identify the
//! function that called the public entry point. Resolution is best-effort:
//! a stack that cannot be symbolized degrades to an empty name and line 0
//! and never fails the logging call.

use backtrace::{resolve_frame, trace};

/// Demangled name fragments of the emission pipeline itself. The walk
/// reports the first frame matching none of these, so the severity entry
/// points, the macros, and the `GlobalLogger` delegation all report their
/// logical caller regardless of wrapper depth.
///
/// A new wrapper layer between an entry point and `resolve_caller` must be
/// added here, or reported locations silently point into the logger itself.
const PIPELINE_FRAMES: &[&str] = &[
    // trace/unwind machinery contributes the leading frames of every walk
    "backtrace::",
    "_Unwind",
    "libunwind",
    "loglite::core::caller::resolve_caller",
    "loglite::core::printer::emit",
    "loglite::core::printer::print",
    "loglite::core::printer::error",
    "loglite::core::printer::warning",
    "loglite::core::printer::info",
    "loglite::core::printer::verbose",
    "loglite::core::printer::debug",
    "loglite::core::printer::trace",
    "loglite::core::logger::GlobalLogger",
];

/// Resolved identity of the frame that invoked a logging entry point.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallerLocation {
    /// Shortened function name, empty when unresolved.
    pub func: String,
    /// Source line, 0 when unresolved.
    pub line: u32,
}

/// Resolves the nearest frame that does not belong to the emission
/// pipeline.
pub(crate) fn resolve_caller() -> CallerLocation {
    let mut location = CallerLocation::default();
    let mut done = false;
    trace(|frame| {
        resolve_frame(frame, |symbol| {
            if done {
                return;
            }
            let name = match symbol.name() {
                Some(name) => name.to_string(),
                None => return,
            };
            if is_pipeline_frame(&name) {
                return;
            }
            location.func = short_name(&name);
            location.line = symbol.lineno().unwrap_or(0);
            done = true;
        });
        !done
    });
    location
}

fn is_pipeline_frame(name: &str) -> bool {
    PIPELINE_FRAMES.iter().any(|fragment| name.contains(fragment))
}

/// Shortens a mangled-then-demangled symbol to its last two path segments,
/// dropping the trailing `h<hex>` disambiguator rustc appends, so
/// `myapp::sync_op::do_sync::hab12cd34ef567890` reports as
/// `sync_op::do_sync`.
fn short_name(symbol: &str) -> String {
    let mut parts: Vec<&str> = symbol.split("::").collect();
    if let Some(last) = parts.last() {
        let is_hash = last.len() == 17
            && last.starts_with('h')
            && last[1..].bytes().all(|b| b.is_ascii_hexdigit());
        if is_hash && parts.len() > 1 {
            parts.pop();
        }
    }
    let keep_from = parts.len().saturating_sub(2);
    parts[keep_from..].join("::")
}
