//! Leveled diagnostic logging on standard error.
//!
//! Standard output carries the generated inventory, so every log line goes
//! to stderr. The logger is silent until [`init`] enables a level.

use once_cell::sync::Lazy;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};

/// Log level, ordered from least to most verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Warning,
    Success,
    Info,
    Debug,
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Indentation level (for nested logs)
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Debug, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Render the entry as a single line (without newline)
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Warning => "[warn] ",
            LogLevel::Success => "[ok]   ",
            LogLevel::Info => "[info] ",
            LogLevel::Debug => "[debug]",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{} {}{}", prefix, indent, self.message)
    }
}

/// Sentinel stored in the threshold when logging is disabled
const QUIET: u8 = u8::MAX;

/// Global logger
pub static LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// Writes log entries at or below the configured level to stderr
pub struct Logger {
    threshold: AtomicU8,
}

impl Logger {
    pub fn new() -> Self {
        Self { threshold: AtomicU8::new(QUIET) }
    }

    /// Set the most verbose level to emit, `None` silences the logger
    pub fn set_level(&self, level: Option<LogLevel>) {
        let value = level.map(|l| l as u8).unwrap_or(QUIET);
        self.threshold.store(value, Ordering::Relaxed);
    }

    /// Whether an entry at `level` would be written
    pub fn enabled(&self, level: LogLevel) -> bool {
        let threshold = self.threshold.load(Ordering::Relaxed);
        threshold != QUIET && (level as u8) <= threshold
    }

    /// Write a log entry to stderr if its level is enabled
    pub fn log(&self, entry: LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }
        // A closed stderr must not abort the conversion
        let _ = writeln!(std::io::stderr().lock(), "{}", entry.render());
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Enable the global logger at `level` (`None` keeps it quiet)
pub fn init(level: Option<LogLevel>) {
    LOGGER.set_level(level);
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    LOGGER.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    LOGGER.log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    LOGGER.log(LogEntry::warning(msg));
}

pub fn log_debug(msg: impl Into<String>) {
    LOGGER.log(LogEntry::debug(msg));
}

pub fn log_debug_indent(msg: impl Into<String>, indent: u8) {
    LOGGER.log(LogEntry::debug(msg).with_indent(indent));
}
