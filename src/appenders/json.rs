//! JSON appender for structured logging

use crate::core::{Appender, LogContext, LogEntry, Result};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON shape of one entry; user fields are nested so they never shadow
/// the fixed keys
#[derive(Serialize)]
struct JsonLine<'a> {
    timestamp: i64,
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    caller: Option<String>,
    #[serde(skip_serializing_if = "no_fields")]
    fields: &'a LogContext,
}

fn no_fields(fields: &&LogContext) -> bool {
    fields.is_empty()
}

impl<'a> From<&'a LogEntry> for JsonLine<'a> {
    fn from(entry: &'a LogEntry) -> Self {
        Self {
            timestamp: entry.timestamp.timestamp_millis(),
            level: entry.level.to_str(),
            message: &entry.message,
            caller: entry
                .file
                .as_ref()
                .zip(entry.line)
                .map(|(file, line)| format!("{}:{}", file, line)),
            fields: &entry.context,
        }
    }
}

/// JSON appender for structured logging
///
/// Writes each log entry as a single-line JSON object (JSONL format)
/// to any `Write` sink.
pub struct JsonAppender<W: Write + Send + Sync = BufWriter<File>> {
    writer: W,
    pretty: bool,
}

impl JsonAppender<BufWriter<File>> {
    /// Create a JSON appender appending to the file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write + Send + Sync> JsonAppender<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl<W: Write + Send + Sync> Appender for JsonAppender<W> {
    fn name(&self) -> &str {
        "json"
    }

    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = JsonLine::from(entry);

        let json = if self.pretty {
            serde_json::to_string_pretty(&line)?
        } else {
            serde_json::to_string(&line)?
        };

        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
