//! Console appender implementation

use crate::core::{Appender, LogEntry, LogLevel, Result};
use colored::Colorize;

const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub struct ConsoleAppender {
    use_colors: bool,
    timestamp_format: String,
    show_location: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            show_location: false,
        }
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    ///
    /// # Examples
    ///
    /// ```
    /// use ambient_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_custom_timestamp("%d/%b/%Y:%H:%M:%S %z");
    /// ```
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = format_str.to_string();
        self
    }

    /// Append `file:line` of the call site when the entry has one
    #[must_use]
    pub fn with_location(mut self, show_location: bool) -> Self {
        self.show_location = show_location;
        self
    }

    /// Format as text with optional colors
    fn format_text(&self, entry: &LogEntry) -> String {
        let level_str = if self.use_colors {
            format!("{:5}", entry.level.to_str())
                .color(entry.level.color_code())
                .to_string()
        } else {
            format!("{:5}", entry.level.to_str())
        };

        let mut line = format!(
            "[{}] [{}] {} - {}",
            entry.timestamp.format(&self.timestamp_format),
            level_str,
            entry.thread_name.as_ref().unwrap_or(&entry.thread_id),
            entry.message
        );

        if self.show_location {
            if let (Some(file), Some(lineno)) = (&entry.file, entry.line) {
                line.push_str(&format!(" ({}:{})", file, lineno));
            }
        }

        if !entry.context.is_empty() {
            line.push(' ');
            line.push_str(&entry.context.format_fields());
        }

        line
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.format_text(entry);

        // Route Error and Fatal levels to stderr, others to stdout
        match entry.level {
            LogLevel::Error | LogLevel::Fatal => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
