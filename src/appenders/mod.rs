//! Appender implementations

#[cfg(feature = "console")]
pub mod console;
pub mod json;

#[cfg(feature = "console")]
pub use console::ConsoleAppender;
pub use json::JsonAppender;

pub use crate::core::Appender;
pub use crate::observer::ObserverAppender;
