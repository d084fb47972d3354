//! Key/value convenience wrapper over [`Logger`]
//!
//! `SugaredLogger` trades a little speed for ergonomics: fields are passed
//! as loose key/value pairs instead of a pre-built [`LogContext`].
//!
//! ```
//! use ambient_logger::prelude::*;
//!
//! let sugar = Logger::new().sugar();
//! sugar.infow("user logged in", [("user_id", FieldValue::from(42)), ("admin", false.into())]);
//! ambient_logger::info!(sugar, "processed {} items", 3);
//! ```

use super::{
    log_context::{FieldValue, LogContext},
    log_level::LogLevel,
    logger::Logger,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SugaredLogger {
    base: Arc<Logger>,
}

impl SugaredLogger {
    pub fn new(base: Arc<Logger>) -> Self {
        Self { base }
    }

    /// The structured logger underneath
    pub fn desugar(&self) -> Arc<Logger> {
        Arc::clone(&self.base)
    }

    /// Child logger carrying `keys_and_values` on every entry
    #[must_use]
    pub fn with<I, K, V>(&self, keys_and_values: I) -> SugaredLogger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let context: LogContext = keys_and_values.into_iter().collect();
        SugaredLogger::new(Arc::new(self.base.with_context(context)))
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.base.log(level, message);
    }

    #[track_caller]
    pub fn logw<I, K, V>(&self, level: LogLevel, message: impl Into<String>, keys_and_values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        if !self.base.enabled(level) {
            return;
        }
        let context: LogContext = keys_and_values.into_iter().collect();
        self.base.log_with_context(level, message, context);
    }

    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    #[track_caller]
    pub fn debugw<I, K, V>(&self, message: impl Into<String>, keys_and_values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.logw(LogLevel::Debug, message, keys_and_values);
    }

    #[track_caller]
    pub fn infow<I, K, V>(&self, message: impl Into<String>, keys_and_values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.logw(LogLevel::Info, message, keys_and_values);
    }

    #[track_caller]
    pub fn warnw<I, K, V>(&self, message: impl Into<String>, keys_and_values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.logw(LogLevel::Warn, message, keys_and_values);
    }

    #[track_caller]
    pub fn errorw<I, K, V>(&self, message: impl Into<String>, keys_and_values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.logw(LogLevel::Error, message, keys_and_values);
    }
}

impl From<Arc<Logger>> for SugaredLogger {
    fn from(base: Arc<Logger>) -> Self {
        Self::new(base)
    }
}

impl From<Logger> for SugaredLogger {
    fn from(base: Logger) -> Self {
        base.sugar()
    }
}
