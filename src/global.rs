//! Process-wide ambient logger
//!
//! Code without a logger of its own logs through [`logger()`] or
//! [`sugared()`]. Both read one slot holding an immutable [`Globals`] pair,
//! so a reader never sees the structured logger from one replacement paired
//! with the sugared logger from another.
//!
//! The slot starts out holding a no-op logger. [`replace_globals`] swaps in
//! a new pair and hands back a [`RestoreGlobals`] that puts the previous
//! pair back:
//!
//! ```
//! use ambient_logger::prelude::*;
//! use ambient_logger::{global, observer};
//!
//! let (appender, logs) = observer::new();
//! let restore = global::replace_globals(Logger::builder().appender(appender).build());
//!
//! global::logger().info("structured");
//! global::sugared().infow("sugared", [("attempt", 1)]);
//! restore.restore();
//!
//! assert_eq!(logs.len(), 2);
//! ```
//!
//! Restores are last-writer-wins: each handle reinstates the pair it
//! captured, regardless of replacements made through other handles since.

use crate::core::{Logger, SugaredLogger};
use crate::restore::{Restore, RestoreGuard};
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

static GLOBALS: LazyLock<ArcSwap<Globals>> =
    LazyLock::new(|| ArcSwap::from_pointee(Globals::nop()));

/// The ambient logger pair visible at one instant
#[derive(Debug, Clone)]
pub struct Globals {
    logger: Arc<Logger>,
    sugared: SugaredLogger,
}

impl Globals {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self {
            sugared: SugaredLogger::new(Arc::clone(&logger)),
            logger,
        }
    }

    fn nop() -> Self {
        Self::new(Arc::new(Logger::nop()))
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    pub fn sugared(&self) -> &SugaredLogger {
        &self.sugared
    }
}

/// Install `logger` (and its sugared form) as the ambient logger.
///
/// The returned handle must be restored by the caller; dropping it leaves
/// `logger` installed.
pub fn replace_globals(logger: impl Into<Arc<Logger>>) -> RestoreGlobals {
    let previous = GLOBALS.swap(Arc::new(Globals::new(logger.into())));
    RestoreGlobals { previous }
}

/// The ambient structured logger
#[inline]
pub fn logger() -> Arc<Logger> {
    Arc::clone(&GLOBALS.load().logger)
}

/// The ambient sugared logger
#[inline]
pub fn sugared() -> SugaredLogger {
    GLOBALS.load().sugared.clone()
}

/// Both ambient loggers, read together
pub fn snapshot() -> Arc<Globals> {
    GLOBALS.load_full()
}

/// Puts back the ambient pair that [`replace_globals`] replaced
#[must_use = "the replaced loggers stay installed until restore() is called"]
#[derive(Debug)]
pub struct RestoreGlobals {
    previous: Arc<Globals>,
}

impl RestoreGlobals {
    /// The pair this handle will reinstate
    pub fn previous(&self) -> &Globals {
        &self.previous
    }

    pub fn restore(self) {
        GLOBALS.store(self.previous);
    }

    /// Restore when the returned guard is dropped
    pub fn guard(self) -> RestoreGuard<Self> {
        RestoreGuard::new(self)
    }
}

impl Restore for RestoreGlobals {
    fn restore(self) {
        RestoreGlobals::restore(self);
    }
}
