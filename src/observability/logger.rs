//! Structured JSON logger for fieldcheck
//!
//! Per OBSERVABILITY.md:
//! - One log line = one event
//! - Deterministic key ordering
//! - Synchronous, no buffering
//!
//! Events are emitted at subsystem boundaries (CLI commands, manifest
//! loading, dispatch, serving) and never inside the pure validation paths.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl LogLevel {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous one-line JSON logger.
///
/// The `event` key is always first, `level` second, then the caller's
/// fields sorted alphabetically so the same event always serializes to the
/// same line.
pub struct Logger;

impl Logger {
    /// Log at TRACE level to stdout
    pub fn trace(event: &str, fields: &[(&str, &str)]) {
        Self::emit(LogLevel::Trace, event, fields, &mut io::stdout());
    }

    /// Log at INFO level to stdout
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::emit(LogLevel::Info, event, fields, &mut io::stdout());
    }

    /// Log at WARN level to stdout
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::emit(LogLevel::Warn, event, fields, &mut io::stdout());
    }

    /// Log at ERROR level to stderr
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::emit(LogLevel::Error, event, fields, &mut io::stderr());
    }

    /// Log at FATAL level to stderr
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::emit(LogLevel::Fatal, event, fields, &mut io::stderr());
    }

    fn emit<W: Write>(level: LogLevel, event: &str, fields: &[(&str, &str)], writer: &mut W) {
        let mut line = String::with_capacity(128);
        line.push('{');
        push_pair(&mut line, "event", event);
        line.push(',');
        push_pair(&mut line, "level", level.as_str());

        let mut ordered: Vec<_> = fields.to_vec();
        ordered.sort_by_key(|(key, _)| *key);
        for (key, value) in ordered {
            line.push(',');
            push_pair(&mut line, key, value);
        }

        line.push('}');
        line.push('\n');

        // One write_all call so a line is never interleaved
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

/// Appends `"key":"value"` with JSON string escaping.
fn push_pair(line: &mut String, key: &str, value: &str) {
    line.push('"');
    push_escaped(line, key);
    line.push_str("\":\"");
    push_escaped(line, value);
    line.push('"');
}

fn push_escaped(line: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => line.push_str("\\\""),
            '\\' => line.push_str("\\\\"),
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            '\t' => line.push_str("\\t"),
            c if c.is_control() => {
                line.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => line.push(c),
        }
    }
}

/// Renders a log line to a string without writing it (for tests).
#[cfg(test)]
pub fn render_line(level: LogLevel, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::emit(level, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
