//! Plain-text line logger
//!
//! `StdLog` writes one preformatted line per call: an optional prefix,
//! optional date/time and call-site annotations selected by [`Flags`], then
//! the message. It has no levels and no fields. A process-wide instance is
//! reachable through [`standard()`] and the free functions of this module;
//! [`bridge`](crate::bridge) can redirect it into a structured [`Logger`](crate::Logger).
//!
//! All configuration lives in one immutable [`StdLogState`] that is replaced
//! whole, so a line is always formatted and written with flags, prefix and
//! output taken from the same configuration.

use chrono::{Local, NaiveDateTime, Utc};
use parking_lot::{Mutex, MutexGuard};
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::ops::{BitOr, BitOrAssign};
use std::panic::Location;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

/// Line annotation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u32);

impl Flags {
    /// Local date: `2009/01/23`
    pub const DATE: Flags = Flags(1 << 0);
    /// Local time: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution, implies `TIME`: `01:23:23.123123`
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full source path and line: `/a/b/c/d.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final path element and line: `d.rs:23`. Overrides `LONG_FILE`
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Use UTC rather than the local time zone
    pub const UTC: Flags = Flags(1 << 5);
    /// Put the prefix right before the message instead of at line start
    pub const MSG_PREFIX: Flags = Flags(1 << 6);
    /// Initial flags of the standard logger
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const ALL_BITS: u32 = (1 << 7) - 1;

    pub const fn empty() -> Self {
        Flags(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Unknown bits are dropped
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Flags(bits & Self::ALL_BITS)
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

/// Destination for formatted lines
///
/// `line` always ends in `\n`. `caller` is the call site of the print.
pub trait Output: Send + Sync {
    fn write_line(&self, line: &str, caller: &'static Location<'static>) -> io::Result<()>;
}

/// Writes to the process's standard error
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrOutput;

impl Output for StderrOutput {
    fn write_line(&self, line: &str, _caller: &'static Location<'static>) -> io::Result<()> {
        io::stderr().lock().write_all(line.as_bytes())
    }
}

/// Swallows every line
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardOutput;

impl Output for DiscardOutput {
    fn write_line(&self, _line: &str, _caller: &'static Location<'static>) -> io::Result<()> {
        Ok(())
    }
}

/// Serialises lines into any `Write` sink
pub struct WriterOutput<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Lock the underlying writer, e.g. to inspect an in-memory buffer
    pub fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock()
    }
}

impl<W: Write + Send> Output for WriterOutput<W> {
    fn write_line(&self, line: &str, _caller: &'static Location<'static>) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }
}

/// One complete configuration of a [`StdLog`]
#[derive(Clone)]
pub struct StdLogState {
    pub flags: Flags,
    pub prefix: String,
    pub output: Arc<dyn Output>,
}

impl StdLogState {
    pub fn new(output: Arc<dyn Output>, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            flags,
            prefix: prefix.into(),
            output,
        }
    }

    /// Render `message` as a complete line under this configuration
    pub fn format_line(&self, caller: &Location<'_>, message: &str) -> String {
        let mut line = String::with_capacity(self.prefix.len() + message.len() + 48);
        let flags = self.flags;

        if !flags.contains(Flags::MSG_PREFIX) {
            line.push_str(&self.prefix);
        }

        if flags.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS) {
            let now: NaiveDateTime = if flags.contains(Flags::UTC) {
                Utc::now().naive_utc()
            } else {
                Local::now().naive_local()
            };
            if flags.contains(Flags::DATE) {
                let _ = write!(line, "{} ", now.format("%Y/%m/%d"));
            }
            if flags.contains(Flags::MICROSECONDS) {
                let _ = write!(line, "{} ", now.format("%H:%M:%S%.6f"));
            } else if flags.contains(Flags::TIME) {
                let _ = write!(line, "{} ", now.format("%H:%M:%S"));
            }
        }

        if flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE) {
            let file = if flags.contains(Flags::SHORT_FILE) {
                short_file(caller.file())
            } else {
                caller.file()
            };
            let _ = write!(line, "{}:{}: ", file, caller.line());
        }

        if flags.contains(Flags::MSG_PREFIX) {
            line.push_str(&self.prefix);
        }

        line.push_str(message);
        if !message.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

impl fmt::Debug for StdLogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdLogState")
            .field("flags", &self.flags)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

fn short_file(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

/// Line logger with swappable configuration
pub struct StdLog {
    state: ArcSwap<StdLogState>,
}

impl StdLog {
    pub fn new(output: Arc<dyn Output>, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            state: ArcSwap::from_pointee(StdLogState::new(output, prefix, flags)),
        }
    }

    /// Current configuration
    pub fn state(&self) -> Arc<StdLogState> {
        self.state.load_full()
    }

    /// Install `state` and return the configuration it replaced
    pub fn swap_state(&self, state: impl Into<Arc<StdLogState>>) -> Arc<StdLogState> {
        self.state.swap(state.into())
    }

    pub fn store_state(&self, state: impl Into<Arc<StdLogState>>) {
        self.state.store(state.into());
    }

    pub fn flags(&self) -> Flags {
        self.state.load().flags
    }

    pub fn set_flags(&self, flags: Flags) {
        self.state.rcu(|current| StdLogState {
            flags,
            ..StdLogState::clone(current)
        });
    }

    pub fn prefix(&self) -> String {
        self.state.load().prefix.clone()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        self.state.rcu(|current| StdLogState {
            prefix: prefix.clone(),
            ..StdLogState::clone(current)
        });
    }

    pub fn output(&self) -> Arc<dyn Output> {
        Arc::clone(&self.state.load().output)
    }

    pub fn set_output(&self, output: Arc<dyn Output>) {
        self.state.rcu(|current| StdLogState {
            output: Arc::clone(&output),
            ..StdLogState::clone(current)
        });
    }

    /// Format and write one line attributed to `caller`
    pub fn output_line(
        &self,
        caller: &'static Location<'static>,
        message: impl fmt::Display,
    ) -> io::Result<()> {
        let state = self.state.load();
        let line = state.format_line(caller, &message.to_string());
        state.output.write_line(&line, caller)
    }

    /// Write one line; write errors are ignored
    #[track_caller]
    pub fn print(&self, message: impl fmt::Display) {
        let _ = self.output_line(Location::caller(), message);
    }

    /// Write one line, then panic with the same message
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        let message = message.to_string();
        let _ = self.output_line(Location::caller(), &message);
        panic!("{}", message);
    }
}

impl Default for StdLog {
    fn default() -> Self {
        Self::new(Arc::new(StderrOutput), "", Flags::STD)
    }
}

impl fmt::Debug for StdLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StdLog").field(&*self.state.load()).finish()
    }
}

static STANDARD: LazyLock<StdLog> = LazyLock::new(StdLog::default);

/// The process-wide line logger: stderr, no prefix, [`Flags::STD`]
pub fn standard() -> &'static StdLog {
    &STANDARD
}

pub fn flags() -> Flags {
    standard().flags()
}

pub fn set_flags(flags: Flags) {
    standard().set_flags(flags);
}

pub fn prefix() -> String {
    standard().prefix()
}

pub fn set_prefix(prefix: impl Into<String>) {
    standard().set_prefix(prefix);
}

pub fn output() -> Arc<dyn Output> {
    standard().output()
}

pub fn set_output(output: Arc<dyn Output>) {
    standard().set_output(output);
}

#[track_caller]
pub fn print(message: impl fmt::Display) {
    standard().print(message);
}
