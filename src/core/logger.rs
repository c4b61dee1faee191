//! Capability trait over the logging surface
//!
//! Callers that want substitutability (tests, alternate backends) depend on
//! [`Logger`] instead of the global free functions. [`GlobalLogger`] is the
//! process-wide implementation.

use std::fmt::Display;

use super::printer;
use super::registry;

/// Object-safe logging capability.
pub trait Logger {
    fn error(&self, args: &[&dyn Display]);
    fn warning(&self, args: &[&dyn Display]);
    fn info(&self, args: &[&dyn Display]);
    fn debug(&self, args: &[&dyn Display]);
    fn is_debug(&self) -> bool;
}

/// [`Logger`] backed by the global level registry and stdout emitter.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalLogger;

impl Logger for GlobalLogger {
    fn error(&self, args: &[&dyn Display]) {
        printer::error(args);
    }

    fn warning(&self, args: &[&dyn Display]) {
        printer::warning(args);
    }

    fn info(&self, args: &[&dyn Display]) {
        printer::info(args);
    }

    fn debug(&self, args: &[&dyn Display]) {
        printer::debug(args);
    }

    fn is_debug(&self) -> bool {
        registry::is_debug()
    }
}
