//! Integration tests for the global logging surface
//!
//! These tests verify:
//! - Level gating and the named predicates
//! - Out-of-range raw thresholds
//! - Sink hook redirection
//! - The capability trait
//! - Thread safety of gated emission
//!
//! The level registry and sink hook are process-wide, so every test that
//! touches them runs under one lock and restores the defaults before
//! releasing it.

use loglite::prelude::*;
use parking_lot::Mutex;
use std::fmt::Display;
use std::sync::Arc;
use std::thread;

static REGISTRY_GUARD: Mutex<()> = Mutex::new(());

fn with_registry<F: FnOnce()>(f: F) {
    let _guard = REGISTRY_GUARD.lock();
    f();
    loglite::clear_sink();
    loglite::set_level(LogLevel::Info);
}

fn join_args(args: &[&dyn Display]) -> String {
    args.iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

struct SyncOp;

impl SyncOp {
    fn do_sync(&self) {
        loglite::error!("OOPS");
    }
}

#[test]
fn test_basic_usage() {
    with_registry(|| {
        loglite::error!("Hello world", "arg1", "arg2");
        loglite::warning!("My warning");
        loglite::info!("My info");

        // is_debug() is used to avoid unnecessary calculations
        if loglite::is_debug() {
            loglite::debug!("!!! You should NOT see it since default level is INFO");
        }

        loglite::set_level(LogLevel::Verbose);
        if loglite::is_debug() {
            loglite::debug!("Now you should see my Debug");
        }
        loglite::set_level(LogLevel::Error);
        loglite::debug!("!!! You should NOT see my Debug");
        loglite::warning!("!!! You should NOT see my warning");
        loglite::set_level(LogLevel::Info);
        loglite::warning!("You should see my warning");
        loglite::info!("You should see my info");

        // How it looks when logging from methods
        SyncOp.do_sync();
    });
}

#[test]
fn test_check_set_levels() {
    with_registry(|| {
        loglite::set_level(LogLevel::Error);
        assert!(loglite::is_error());
        assert!(!loglite::is_warning());
        assert!(!loglite::is_info());
        assert!(!loglite::is_verbose());
        assert!(!loglite::is_debug());
        assert!(!loglite::is_trace());

        loglite::set_level(LogLevel::Warning);
        assert!(loglite::is_error());
        assert!(loglite::is_warning());
        assert!(!loglite::is_info());
        assert!(!loglite::is_debug());

        loglite::set_level(LogLevel::Info);
        assert!(loglite::is_error());
        assert!(loglite::is_warning());
        assert!(loglite::is_info());
        assert!(!loglite::is_verbose());
        assert!(!loglite::is_debug());

        loglite::set_level(LogLevel::Verbose);
        assert!(loglite::is_info());
        assert!(loglite::is_verbose());
        assert!(loglite::is_debug());
        assert!(!loglite::is_trace());

        loglite::set_level(LogLevel::Trace);
        assert!(loglite::is_error());
        assert!(loglite::is_warning());
        assert!(loglite::is_info());
        assert!(loglite::is_verbose());
        assert!(loglite::is_debug());
        assert!(loglite::is_trace());

        loglite::set_level(LogLevel::None);
        assert!(!loglite::is_error());
        assert!(!loglite::is_trace());
    });
}

#[test]
fn test_is_enabled_ordering() {
    with_registry(|| {
        // A threshold enables itself and everything less verbose.
        loglite::set_level(LogLevel::Info);
        assert!(loglite::is_enabled(LogLevel::Error));
        assert!(loglite::is_enabled(LogLevel::Warning));
        assert!(loglite::is_enabled(LogLevel::Info));
        assert!(!loglite::is_enabled(LogLevel::Verbose));
        assert!(!loglite::is_enabled(LogLevel::Trace));

        loglite::set_level(LogLevel::Error);
        assert!(!loglite::is_enabled(LogLevel::Info));
    });
}

#[test]
fn test_unknown_raw_threshold() {
    with_registry(|| {
        loglite::set_level_raw(7);
        assert_eq!(loglite::level_raw(), 7);
        // Integer ordering still gates; 7 is more verbose than every level.
        assert!(loglite::is_enabled(LogLevel::Trace));
        assert!(loglite::is_enabled_raw(6));
        assert!(!loglite::is_enabled_raw(8));
        // The marker for the unknown value degrades to empty.
        assert_eq!(LogLevel::marker_for_raw(7), "");
        // Emitting must not crash while an unknown threshold is set.
        loglite::info!("still fine with a raw threshold of 7");

        loglite::set_level_raw(-5);
        assert!(!loglite::is_enabled(LogLevel::Error));
        loglite::error!("suppressed, threshold below every level");
    });
}

#[test]
fn test_set_level_idempotent() {
    with_registry(|| {
        loglite::set_level(LogLevel::Warning);
        let first = (
            loglite::is_error(),
            loglite::is_warning(),
            loglite::is_info(),
            loglite::is_debug(),
        );
        loglite::set_level(LogLevel::Warning);
        let second = (
            loglite::is_error(),
            loglite::is_warning(),
            loglite::is_info(),
            loglite::is_debug(),
        );
        assert_eq!(first, second);
    });
}

#[test]
fn test_sink_replaces_builtin_path() {
    with_registry(|| {
        let captured: Arc<Mutex<Vec<(LogLevel, String)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink_capture = Arc::clone(&captured);
        loglite::set_sink(move |level: LogLevel, args: &[&dyn Display]| {
            sink_capture.lock().push((level, join_args(args)));
        });

        loglite::error!("OOPS", 42);
        loglite::warning!("careful");

        {
            let entries = captured.lock();
            assert_eq!(
                *entries,
                vec![
                    (LogLevel::Error, "OOPS 42".to_string()),
                    (LogLevel::Warning, "careful".to_string()),
                ]
            );
        }

        loglite::clear_sink();
        loglite::info!("back to stdout");
        assert_eq!(captured.lock().len(), 2);
    });
}

#[test]
fn test_sink_sees_only_enabled_calls() {
    with_registry(|| {
        let captured: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink_capture = Arc::clone(&captured);
        loglite::set_sink(move |_level: LogLevel, args: &[&dyn Display]| {
            sink_capture.lock().push(join_args(args));
        });

        loglite::set_level(LogLevel::Error);
        loglite::info!("gated out before the sink");
        loglite::error!("reaches the sink");

        assert_eq!(*captured.lock(), vec!["reaches the sink".to_string()]);
    });
}

#[test]
fn test_capability_trait() {
    with_registry(|| {
        fn log_through(logger: &dyn Logger) {
            logger.error(&[&"trait error"]);
            logger.warning(&[&"trait warning"]);
            logger.info(&[&"trait info"]);
            if logger.is_debug() {
                logger.debug(&[&"trait debug"]);
            }
        }

        let logger = GlobalLogger;
        assert!(!logger.is_debug());
        log_through(&logger);

        loglite::set_level(LogLevel::Verbose);
        assert!(logger.is_debug());
        log_through(&logger);
    });
}

#[test]
fn test_concurrent_emitters_stay_attributable() {
    with_registry(|| {
        let tokens: Vec<String> = (0..100).map(|i| i.to_string().repeat(10)).collect();
        let tokens = Arc::new(tokens);

        let captured: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink_capture = Arc::clone(&captured);
        loglite::set_sink(move |_level: LogLevel, args: &[&dyn Display]| {
            sink_capture.lock().push(join_args(args));
        });
        loglite::set_level(LogLevel::Info);

        let handles: Vec<_> = (0..1000)
            .map(|_| {
                let tokens = Arc::clone(&tokens);
                thread::spawn(move || {
                    for token in tokens.iter() {
                        loglite::info!(token);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let entries = captured.lock();
        assert_eq!(entries.len(), 1000 * 100);
        for entry in entries.iter() {
            assert!(
                tokens.iter().any(|token| token == entry),
                "unattributable entry: {entry:?}"
            );
        }
    });
}
