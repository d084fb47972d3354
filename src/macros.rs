//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They accept
//! anything with a `log(level, message)` method: a [`Logger`](crate::Logger),
//! a [`SugaredLogger`](crate::SugaredLogger), or the ambient loggers from
//! [`global`](crate::global). `std_print!` and `std_panic!` write through
//! the process-wide [`stdlog`](crate::stdlog) line logger.
//!
//! # Examples
//!
//! ```
//! use ambient_logger::prelude::*;
//! use ambient_logger::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Complex formatting
//! let user_id = 42;
//! let action = "login";
//! info!(logger, "User {} performed action: {}", user_id, action);
//!
//! // Ambient logger
//! info!(ambient_logger::global::sugared(), "Cache warmed in {}ms", 12);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use ambient_logger::prelude::*;
/// # let logger = Logger::new();
/// use ambient_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use ambient_logger::prelude::*;
/// # let mut logger = Logger::new();
/// # logger.set_min_level(LogLevel::Trace);
/// use ambient_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use ambient_logger::prelude::*;
/// # let logger = Logger::new();
/// use ambient_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use ambient_logger::prelude::*;
/// # let logger = Logger::new();
/// use ambient_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use ambient_logger::prelude::*;
/// # let logger = Logger::new();
/// use ambient_logger::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use ambient_logger::prelude::*;
/// # let logger = Logger::new();
/// use ambient_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use ambient_logger::prelude::*;
/// # let logger = Logger::new();
/// use ambient_logger::fatal;
/// fatal!(logger, "Critical system failure");
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Print a formatted line through the process-wide line logger.
///
/// # Examples
///
/// ```
/// use ambient_logger::std_print;
/// std_print!("listening on {}", "0.0.0.0:80");
/// ```
#[macro_export]
macro_rules! std_print {
    ($($arg:tt)+) => {
        $crate::stdlog::standard().print(::std::format_args!($($arg)+))
    };
}

/// Print a formatted line through the process-wide line logger, then panic.
///
/// # Examples
///
/// ```should_panic
/// use ambient_logger::std_panic;
/// std_panic!("unrecoverable: {}", "config missing");
/// ```
#[macro_export]
macro_rules! std_panic {
    ($($arg:tt)+) => {
        $crate::stdlog::standard().panic(::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use crate::observer;

    #[test]
    fn test_log_macro() {
        let logger = Logger::new();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_trace_macro() {
        let mut logger = Logger::new();
        logger.set_min_level(LogLevel::Trace);
        trace!(logger, "Trace message");
        trace!(logger, "Value: {}", 10);
    }

    #[test]
    fn test_debug_macro() {
        let logger = Logger::new();
        debug!(logger, "Debug message");
        debug!(logger, "Count: {}", 5);
    }

    #[test]
    fn test_info_macro() {
        let logger = Logger::new();
        info!(logger, "Info message");
        info!(logger, "Items: {}", 100);
    }

    #[test]
    fn test_warn_macro() {
        let logger = Logger::new();
        warn!(logger, "Warning message");
        warn!(logger, "Retry {} of {}", 1, 3);
    }

    #[test]
    fn test_error_macro() {
        let logger = Logger::new();
        error!(logger, "Error message");
        error!(logger, "Code: {}", 500);
    }

    #[test]
    fn test_fatal_macro() {
        let logger = Logger::new();
        fatal!(logger, "Fatal message");
        fatal!(logger, "Critical failure: {}", "system");
    }

    #[test]
    fn test_macros_format_message() {
        let (appender, logs) = observer::new();
        let logger = Logger::builder().appender(appender).build();

        warn!(logger, "Retry {} of {}", 2, 3);

        let entries = logs.all_untimed();
        assert_eq!(entries[0].level, LogLevel::Warn);
        assert_eq!(entries[0].message, "Retry 2 of 3");
    }

    #[test]
    fn test_std_print_goes_through_standard_logger() {
        use crate::bridge;

        let _lock = crate::test_support::GLOBAL_LOCK.lock();
        let (appender, logs) = observer::new();
        let restore = bridge::redirect_std_log(Logger::builder().appender(appender).build());

        std_print!("port {}", 8080);
        restore.restore();

        assert_eq!(logs.all_untimed()[0].message, "port 8080");
    }
}
