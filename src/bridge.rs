//! Routes [`StdLog`] lines into a structured [`Logger`]
//!
//! Each forwarded line becomes one entry whose message is the line without
//! its terminator, with no fields and the call site of the original print.
//!
//! ```
//! use ambient_logger::prelude::*;
//! use ambient_logger::{bridge, observer, stdlog};
//!
//! let (appender, logs) = observer::new();
//! let restore = bridge::redirect_std_log(Logger::builder().appender(appender).build());
//! stdlog::print("from legacy code");
//! restore.restore();
//!
//! assert_eq!(logs.all_untimed()[0].message, "from legacy code");
//! ```

use crate::core::{LogEntry, LogLevel, Logger};
use crate::restore::{Restore, RestoreGuard};
use crate::stdlog::{self, Flags, Output, StdLog, StdLogState};
use std::io;
use std::panic::Location;
use std::sync::Arc;

/// [`Output`] that turns each line into a structured entry
struct LoggerOutput {
    logger: Arc<Logger>,
    level: LogLevel,
}

impl Output for LoggerOutput {
    fn write_line(&self, line: &str, caller: &'static Location<'static>) -> io::Result<()> {
        let message = line.strip_suffix('\n').unwrap_or(line);
        let message = message.strip_suffix('\r').unwrap_or(message);
        self.logger
            .log_entry(LogEntry::raw(self.level, message).with_caller(caller));
        Ok(())
    }
}

fn forwarding_state(logger: Arc<Logger>, level: LogLevel) -> StdLogState {
    // The structured logger adds its own timestamp and location.
    StdLogState::new(Arc::new(LoggerOutput { logger, level }), "", Flags::empty())
}

/// Redirect the process-wide [`StdLog`] into `logger` at [`LogLevel::Info`].
///
/// Flags and prefix are cleared for as long as the redirect is in place.
pub fn redirect_std_log(logger: impl Into<Arc<Logger>>) -> RestoreStdLog<'static> {
    redirect_std_log_at(logger, LogLevel::Info)
}

/// Like [`redirect_std_log`], logging at `level`
pub fn redirect_std_log_at(
    logger: impl Into<Arc<Logger>>,
    level: LogLevel,
) -> RestoreStdLog<'static> {
    redirect(stdlog::standard(), logger, level)
}

/// Redirect any [`StdLog`] into `logger` at `level`.
///
/// The previous flags, prefix and output are captured and the forwarding
/// configuration installed in a single swap.
pub fn redirect(
    target: &StdLog,
    logger: impl Into<Arc<Logger>>,
    level: LogLevel,
) -> RestoreStdLog<'_> {
    let previous = target.swap_state(forwarding_state(logger.into(), level));
    RestoreStdLog { target, previous }
}

/// A standalone [`StdLog`] whose lines go to `logger` at [`LogLevel::Info`]
pub fn new_std_log(logger: impl Into<Arc<Logger>>) -> StdLog {
    new_std_log_at(logger, LogLevel::Info)
}

pub fn new_std_log_at(logger: impl Into<Arc<Logger>>, level: LogLevel) -> StdLog {
    let state = forwarding_state(logger.into(), level);
    StdLog::new(state.output, state.prefix, state.flags)
}

/// Puts back the configuration a redirect replaced
#[must_use = "the redirect stays installed until restore() is called"]
#[derive(Debug)]
pub struct RestoreStdLog<'a> {
    target: &'a StdLog,
    previous: Arc<StdLogState>,
}

impl<'a> RestoreStdLog<'a> {
    /// The configuration this handle will reinstate
    pub fn previous(&self) -> &StdLogState {
        &self.previous
    }

    pub fn restore(self) {
        self.target.store_state(self.previous);
    }

    /// Restore when the returned guard is dropped
    pub fn guard(self) -> RestoreGuard<Self> {
        RestoreGuard::new(self)
    }
}

impl Restore for RestoreStdLog<'_> {
    fn restore(self) {
        RestoreStdLog::restore(self);
    }
}
