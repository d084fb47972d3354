//! Main logger implementation

use super::{
    appender::Appender,
    error::Result,
    log_context::{FieldValue, LogContext},
    log_entry::LogEntry,
    log_level::LogLevel,
    sugar::SugaredLogger,
};
use parking_lot::RwLock;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

type SharedAppenders = Arc<RwLock<Vec<Box<dyn Appender>>>>;

/// Synchronous structured logger.
///
/// Every emission method records its caller's source location. Entries
/// below the minimum level are discarded before any allocation happens.
pub struct Logger {
    min_level: LogLevel,
    appenders: SharedAppenders,
    /// Fields merged into every entry ahead of the entry's own fields
    context: LogContext,
    nop: bool,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            appenders: Arc::new(RwLock::new(Vec::new())),
            context: LogContext::new(),
            nop: false,
        }
    }

    /// A logger that discards everything, regardless of appenders added later.
    #[must_use]
    pub fn nop() -> Self {
        Self {
            nop: true,
            ..Self::new()
        }
    }

    pub fn is_nop(&self) -> bool {
        self.nop
    }

    /// Process log entry synchronously with per-appender panic isolation
    ///
    /// One failing appender doesn't prevent the others from receiving the
    /// entry. Returns `true` if any appender failed.
    fn process_sync(appenders: &mut [Box<dyn Appender>], entry: &LogEntry) -> bool {
        let mut has_error = false;

        for (idx, appender) in appenders.iter_mut().enumerate() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(entry)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                        idx,
                        appender.name(),
                        e
                    );
                    has_error = true;
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        idx, panic_msg
                    );
                    has_error = true;
                }
            }
        }

        has_error
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Whether an entry at `level` would reach the appenders
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        !self.nop && level >= self.min_level
    }

    /// Fields preset on this logger
    pub fn context(&self) -> &LogContext {
        &self.context
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.enabled(level) {
            return;
        }

        let entry = LogEntry::new(level, message).with_caller(Location::caller());
        self.log_entry(entry);
    }

    /// Log with structured context fields
    #[track_caller]
    pub fn log_with_context(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        context: LogContext,
    ) {
        if !self.enabled(level) {
            return;
        }

        let entry = LogEntry::new(level, message)
            .with_caller(Location::caller())
            .with_context(context);
        self.log_entry(entry);
    }

    /// Emit a pre-built entry.
    ///
    /// The entry keeps whatever location it already carries; preset fields
    /// are merged in front of its own.
    pub fn log_entry(&self, mut entry: LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }

        if !self.context.is_empty() {
            let mut merged = self.context.clone();
            merged.extend(&entry.context);
            entry.context = merged;
        }

        let mut appenders = self.appenders.write();
        Self::process_sync(&mut appenders, &entry);
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Helper for structured info logging
    #[track_caller]
    pub fn info_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(LogLevel::Info, message, context);
    }

    /// Helper for structured error logging
    #[track_caller]
    pub fn error_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(LogLevel::Error, message, context);
    }

    /// Create a child logger that adds `context` to every entry.
    ///
    /// The child shares this logger's appenders and level.
    #[must_use]
    pub fn with_context(&self, context: LogContext) -> Logger {
        let mut merged = self.context.clone();
        merged.extend(&context);
        Logger {
            min_level: self.min_level,
            appenders: Arc::clone(&self.appenders),
            context: merged,
            nop: self.nop,
        }
    }

    /// Wrap this logger in the key/value convenience API
    #[must_use]
    pub fn sugar(self) -> SugaredLogger {
        SugaredLogger::new(Arc::new(self))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let appenders = self.appenders.read();
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field(
                "appenders",
                &appenders.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .field("context", &self.context)
            .field("nop", &self.nop)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use ambient_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .appender(ConsoleAppender::new())
///     .field("service", "billing")
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    appenders: Vec<Box<dyn Appender>>,
    context: LogContext,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            appenders: Vec::new(),
            context: LogContext::new(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Add a field attached to every entry
    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.context.add_field(key, value);
        self
    }

    /// Add a set of fields attached to every entry
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: LogContext) -> Self {
        self.context.extend(&context);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::new();
        logger.set_min_level(self.min_level);
        logger.context = self.context;
        for appender in self.appenders {
            logger.add_appender(appender);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use ambient_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .build();
    /// assert_eq!(logger.min_level(), LogLevel::Debug);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use crate::observer;

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            Err(LoggerError::writer("failing", "always fails"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingAppender;

    impl Appender for PanickingAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            panic!("appender exploded");
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_builder_basic() {
        let logger = Logger::builder().min_level(LogLevel::Debug).build();
        assert_eq!(logger.min_level(), LogLevel::Debug);
        assert!(!logger.is_nop());
    }

    #[test]
    fn test_min_level_filters() {
        let (appender, logs) = observer::new();
        let logger = Logger::builder()
            .min_level(LogLevel::Warn)
            .appender(appender)
            .build();

        logger.info("dropped");
        logger.warn("kept");
        logger.error("kept too");

        let messages: Vec<String> = logs.all().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, ["kept", "kept too"]);
    }

    #[test]
    fn test_nop_discards_everything() {
        let (appender, logs) = observer::new();
        let mut logger = Logger::nop();
        logger.add_appender(Box::new(appender));

        logger.fatal("nothing");
        logger.log_entry(LogEntry::new(LogLevel::Error, "nothing either"));

        assert!(!logger.enabled(LogLevel::Fatal));
        assert_eq!(logs.len(), 0);
    }

    #[test]
    fn test_records_caller_location() {
        let (appender, logs) = observer::new();
        let logger = Logger::builder().appender(appender).build();

        let line = line!() + 1;
        logger.info("here");

        let entry = &logs.all()[0];
        assert_eq!(entry.file.as_deref(), Some(file!()));
        assert_eq!(entry.line, Some(line));
    }

    #[test]
    fn test_with_context_merges_fields() {
        let (appender, logs) = observer::new();
        let logger = Logger::builder()
            .appender(appender)
            .field("service", "api")
            .build();
        let child = logger.with_context(LogContext::new().with_field("request_id", "r-1"));

        child.info_with_context("handled", LogContext::new().with_field("status", 200));
        logger.info("parent");

        let entries = logs.all();
        assert_eq!(
            entries[0].context.format_fields(),
            "service=api request_id=r-1 status=200"
        );
        assert_eq!(entries[1].context.format_fields(), "service=api");
    }

    #[test]
    fn test_failing_appender_does_not_block_others() {
        let (appender, logs) = observer::new();
        let logger = Logger::builder()
            .appender(FailingAppender)
            .appender(PanickingAppender)
            .appender(appender)
            .build();

        logger.error("still delivered");

        assert_eq!(logs.len(), 1);
    }

    #[test]
    fn test_debug_lists_appender_names() {
        let (appender, _logs) = observer::new();
        let logger = Logger::builder().appender(appender).build();
        let debug = format!("{:?}", logger);
        assert!(debug.contains("observer"));
    }
}
