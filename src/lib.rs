//! # Ambient Logger
//!
//! A swappable process-wide logger for code that has no logger of its own,
//! and a bridge that turns a plain line logger's output into structured
//! entries.
//!
//! ## Features
//!
//! - **Ambient logging**: [`global::logger()`] and [`global::sugared()`] are
//!   lock-free reads of one atomically replaced slot
//! - **Scoped overrides**: [`global::replace_globals`] and
//!   [`bridge::redirect_std_log`] return handles that restore exactly what
//!   they replaced
//! - **Legacy bridge**: [`stdlog`] lines forwarded as structured entries
//! - **Thread Safe**: Readers and writers never see a half-replaced state
//!
//! ```
//! use ambient_logger::prelude::*;
//! use ambient_logger::{bridge, global, stdlog};
//!
//! let logger = Logger::builder()
//!     .min_level(LogLevel::Debug)
//!     .appender(ConsoleAppender::with_colors(false))
//!     .build();
//! let logger = std::sync::Arc::new(logger);
//!
//! let _globals = global::replace_globals(logger.clone()).guard();
//! let _std_log = bridge::redirect_std_log(logger).guard();
//!
//! global::sugared().infow("service started", [("port", 8080)]);
//! stdlog::print("legacy code still works");
//! ```

pub mod appenders;
pub mod bridge;
pub mod core;
pub mod global;
pub mod macros;
pub mod observer;
pub mod restore;
pub mod stdlog;

pub mod prelude {
    pub use crate::appenders::JsonAppender;
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    pub use crate::bridge::RestoreStdLog;
    pub use crate::core::{
        Appender, FieldValue, LogContext, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError,
        Result, SugaredLogger,
    };
    pub use crate::global::RestoreGlobals;
    pub use crate::restore::{Restore, RestoreGuard};
    pub use crate::stdlog::{Flags, StdLog};
}

pub use appenders::JsonAppender;
#[cfg(feature = "console")]
pub use appenders::ConsoleAppender;
pub use core::{
    Appender, FieldValue, LogContext, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError,
    Result, SugaredLogger,
};
pub use restore::{Restore, RestoreGuard};

#[cfg(test)]
pub(crate) mod test_support {
    use parking_lot::{const_mutex, Mutex};

    /// Serialises unit tests that touch process-wide logger state
    pub static GLOBAL_LOCK: Mutex<()> = const_mutex(());
}
