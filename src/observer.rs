//! In-memory appender for asserting on emitted entries in tests
//!
//! ```
//! use ambient_logger::prelude::*;
//! use ambient_logger::observer;
//!
//! let (appender, logs) = observer::new();
//! let logger = Logger::builder().appender(appender).build();
//! logger.info("hello");
//! assert_eq!(logs.all_untimed()[0].message, "hello");
//! ```

use crate::core::{Appender, LogContext, LogEntry, LogLevel, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// An entry stripped of timestamp, thread and location, for equality checks
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEntry {
    pub level: LogLevel,
    pub message: String,
    pub context: LogContext,
}

impl LoggedEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            context: LogContext::new(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }
}

impl From<&LogEntry> for LoggedEntry {
    fn from(entry: &LogEntry) -> Self {
        Self {
            level: entry.level,
            message: entry.message.clone(),
            context: entry.context.clone(),
        }
    }
}

/// Create a connected appender / reader pair
pub fn new() -> (ObserverAppender, ObservedLogs) {
    let entries = Arc::new(Mutex::new(Vec::new()));
    (
        ObserverAppender {
            entries: Arc::clone(&entries),
        },
        ObservedLogs { entries },
    )
}

pub struct ObserverAppender {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Appender for ObserverAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "observer"
    }
}

/// Read side of the observer, cheap to clone
#[derive(Debug, Clone)]
pub struct ObservedLogs {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl ObservedLogs {
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// All entries in emission order
    pub fn all(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// All entries in emission order, without timestamps or call sites
    pub fn all_untimed(&self) -> Vec<LoggedEntry> {
        self.entries.lock().iter().map(LoggedEntry::from).collect()
    }

    /// Drain every collected entry
    pub fn take_all(&self) -> Vec<LogEntry> {
        std::mem::take(&mut *self.entries.lock())
    }

    pub fn filter_message(&self, message: &str) -> Vec<LogEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.message == message)
            .cloned()
            .collect()
    }
}
