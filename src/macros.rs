//! Logging macros, one per severity.
//!
//! Each macro takes any list of `Display` values and forwards them to the
//! severity's entry point, so mixed argument types need no manual
//! conversion:
//!
//! ```
//! loglite::info!("listening on port", 8080);
//! loglite::error!("sync failed after", 3, "attempts");
//! ```

/// Logs the arguments at Error level.
///
/// ```
/// loglite::error!("connection lost:", "peer closed");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => {
        $crate::core::printer::error(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs the arguments at Warning level.
///
/// ```
/// loglite::warning!("retrying, attempt", 2);
/// ```
#[macro_export]
macro_rules! warning {
    ($($arg:expr),* $(,)?) => {
        $crate::core::printer::warning(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs the arguments at Info level.
///
/// ```
/// loglite::info!("started");
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {
        $crate::core::printer::info(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs the arguments at Verbose level.
///
/// ```
/// loglite::verbose!("cache miss for", "users/42");
/// ```
#[macro_export]
macro_rules! verbose {
    ($($arg:expr),* $(,)?) => {
        $crate::core::printer::verbose(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Alias of [`verbose!`](crate::verbose); the crate has no distinct Debug
/// level. Guard expensive arguments with [`is_debug`](crate::is_debug).
///
/// ```
/// if loglite::is_debug() {
///     loglite::debug!("queue depth", 17);
/// }
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {
        $crate::core::printer::debug(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs the arguments at Trace level.
///
/// ```
/// loglite::trace!("entering handler");
/// ```
#[macro_export]
macro_rules! trace {
    ($($arg:expr),* $(,)?) => {
        $crate::core::printer::trace(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
