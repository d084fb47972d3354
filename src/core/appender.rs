//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// A sink that receives fully-built entries from a [`Logger`](super::Logger).
///
/// Appenders are called synchronously under the logger's appender lock, in
/// the order they were added.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
