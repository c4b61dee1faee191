//! # loglite
//!
//! A minimal, process-wide leveled logging facility.
//!
//! ## Features
//!
//! - **Leveled**: Error, Warning, Info, Verbose (with a Debug alias), Trace
//! - **Lock-Free Gate**: one global atomic threshold, near-zero cost when a
//!   level is disabled
//! - **Caller Location**: best-effort function name and line via stack
//!   introspection
//! - **Single-Write Lines**: concurrent emitters never interleave output
//!
//! ## Example
//!
//! ```
//! use loglite::LogLevel;
//!
//! loglite::info!("Hello world", "arg1", "arg2");
//! loglite::warning!("My warning");
//!
//! // is_debug() guards expensive argument construction
//! if loglite::is_debug() {
//!     loglite::debug!("not visible at the default Info level");
//! }
//!
//! loglite::set_level(LogLevel::Trace);
//! loglite::trace!("now visible");
//! loglite::set_level(LogLevel::Info);
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        clear_sink, debug, error, info, is_debug, is_enabled, is_enabled_raw, is_error, is_info,
        is_trace, is_verbose, is_warning, level_raw, set_level, set_level_raw, set_sink, trace,
        verbose, warning, CallerLocation, GlobalLogger, LogLevel, Logger, ParseLevelError, SinkFn,
    };
}

pub use crate::core::{
    clear_sink, debug, error, info, is_debug, is_enabled, is_enabled_raw, is_error, is_info,
    is_trace, is_verbose, is_warning, level_raw, set_level, set_level_raw, set_sink, trace,
    verbose, warning, CallerLocation, GlobalLogger, LogLevel, Logger, ParseLevelError, SinkFn,
};
