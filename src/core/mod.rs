//! Core logger types and functions

pub mod caller;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod printer;
pub mod registry;
pub mod sink;

pub use caller::CallerLocation;
pub use error::ParseLevelError;
pub use log_level::LogLevel;
pub use logger::{GlobalLogger, Logger};
pub use printer::{debug, error, info, trace, verbose, warning};
pub use registry::{
    is_debug, is_enabled, is_enabled_raw, is_error, is_info, is_trace, is_verbose, is_warning,
    level_raw, set_level, set_level_raw,
};
pub use sink::{clear_sink, set_sink, SinkFn};
