//! Integration tests for redirecting the standard line logger
//!
//! These tests verify:
//! - Redirected lines arrive as plain structured entries
//! - Restore reinstates the exact flags, prefix and output
//! - Nothing printed after restore is forwarded
//! - Concurrent prints during a redirect are all forwarded

use ambient_logger::observer::{self, LoggedEntry, ObservedLogs};
use ambient_logger::prelude::*;
use ambient_logger::stdlog::{self, WriterOutput};
use ambient_logger::{bridge, std_print};
use parking_lot::{const_mutex, Mutex};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

// Tests in this binary share the process-wide line logger.
static LOCK: Mutex<()> = const_mutex(());

fn observed_logger(level: LogLevel) -> (Logger, ObservedLogs) {
    let (appender, logs) = observer::new();
    let logger = Logger::builder().min_level(level).appender(appender).build();
    (logger, logs)
}

#[test]
fn test_redirect_std_log() {
    let _lock = LOCK.lock();
    let initial_flags = stdlog::flags();
    let initial_prefix = stdlog::prefix();
    let initial_output = stdlog::output();

    let (logger, logs) = observed_logger(LogLevel::Debug);
    {
        let _restore = bridge::redirect_std_log(logger).guard();
        stdlog::print("redirected");
    }

    assert_eq!(
        logs.all_untimed(),
        vec![LoggedEntry::new(LogLevel::Info, "redirected")]
    );
    assert_eq!(initial_flags, stdlog::flags(), "expected to reset initial flags");
    assert_eq!(initial_prefix, stdlog::prefix(), "expected to reset initial prefix");
    assert!(Arc::ptr_eq(&initial_output, &stdlog::output()));
}

#[test]
fn test_restore_reinstates_customised_state() {
    let _lock = LOCK.lock();
    let original = stdlog::standard().state();
    stdlog::set_prefix("legacy: ");
    stdlog::set_flags(Flags::SHORT_FILE | Flags::MSG_PREFIX);
    let customised = stdlog::standard().state();

    let (logger, logs) = observed_logger(LogLevel::Info);
    let restore = bridge::redirect_std_log(logger);
    assert_eq!(stdlog::prefix(), "");
    assert!(stdlog::flags().is_empty());
    std_print!("job {} done", 7);
    restore.restore();

    assert_eq!(logs.all_untimed()[0].message, "job 7 done");
    assert_eq!(stdlog::prefix(), "legacy: ");
    assert_eq!(stdlog::flags(), Flags::SHORT_FILE | Flags::MSG_PREFIX);
    assert!(Arc::ptr_eq(&customised.output, &stdlog::output()));

    stdlog::standard().store_state(original);
}

#[test]
fn test_nothing_forwarded_after_restore() {
    let _lock = LOCK.lock();
    let original = stdlog::output();
    let buffer = Arc::new(WriterOutput::new(Vec::new()));
    stdlog::set_output(buffer.clone());

    let (logger, logs) = observed_logger(LogLevel::Info);
    let restore = bridge::redirect_std_log(logger);
    stdlog::print("before restore");
    restore.restore();
    stdlog::print("after restore");

    assert_eq!(logs.len(), 1);
    assert_eq!(logs.all_untimed()[0].message, "before restore");
    let written = String::from_utf8(buffer.lock().clone()).unwrap();
    assert!(written.ends_with("after restore\n"));
    assert!(!written.contains("before restore"));

    stdlog::set_output(original);
}

#[test]
fn test_redirect_at_level() {
    let _lock = LOCK.lock();
    let (logger, logs) = observed_logger(LogLevel::Debug);

    let restore = bridge::redirect_std_log_at(logger, LogLevel::Error);
    stdlog::print("disk failure");
    restore.restore();

    assert_eq!(
        logs.all_untimed(),
        vec![LoggedEntry::new(LogLevel::Error, "disk failure")]
    );
}

#[test]
fn test_forwarded_entry_points_at_legacy_call() {
    let _lock = LOCK.lock();
    let (logger, logs) = observed_logger(LogLevel::Info);
    let restore = bridge::redirect_std_log(logger);

    let line = line!() + 1;
    stdlog::print("here");
    restore.restore();

    let entry = &logs.all()[0];
    assert_eq!(entry.file.as_deref(), Some(file!()));
    assert_eq!(entry.line, Some(line));
}

#[test]
fn test_concurrent_prints_all_forwarded() {
    let _lock = LOCK.lock();
    let (logger, logs) = observed_logger(LogLevel::Info);
    let restore = bridge::redirect_std_log(logger);

    let handles: Vec<_> = (0..8)
        .map(|thread_id| {
            std::thread::spawn(move || {
                for i in 0..50 {
                    stdlog::print(format!("T{} line {}", thread_id, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("printer thread panicked");
    }
    restore.restore();

    assert_eq!(logs.len(), 400);
    for thread_id in 0..8 {
        // Lines from one thread keep their order.
        let mine: Vec<String> = logs
            .all_untimed()
            .into_iter()
            .map(|e| e.message)
            .filter(|m| m.starts_with(&format!("T{} ", thread_id)))
            .collect();
        let expected: Vec<String> = (0..50).map(|i| format!("T{} line {}", thread_id, i)).collect();
        assert_eq!(mine, expected);
    }
}

#[test]
fn test_file_output_round_trip() {
    let _lock = LOCK.lock();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("legacy.log");
    let file = fs::File::create(&log_file).expect("Failed to create log file");

    let original = stdlog::standard().state();
    stdlog::set_output(Arc::new(WriterOutput::new(file)));
    stdlog::set_flags(Flags::SHORT_FILE);
    stdlog::set_prefix("[svc] ");

    stdlog::print("written to file");
    let (logger, logs) = observed_logger(LogLevel::Info);
    let restore = bridge::redirect_std_log(logger);
    stdlog::print("sent to logger");
    restore.restore();
    stdlog::print("file again");

    stdlog::standard().store_state(original);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[svc] std_log_tests.rs:"));
    assert!(lines[0].ends_with(": written to file"));
    assert!(lines[1].ends_with(": file again"));
    assert_eq!(logs.all_untimed()[0].message, "sent to logger");
}
