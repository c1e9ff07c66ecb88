//! Leveled progress messages on stderr.
//!
//! Stdout carries command output (JSON), so everything the client reports
//! about what it is doing goes to stderr. `--quiet` keeps only warnings and
//! errors.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    fn marker(self) -> &'static str {
        match self {
            LogLevel::Info => "",
            LogLevel::Success => "✓",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }
}

/// One line of client activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth for sub-steps such as individual requests
    pub indent: u8,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            indent: 0,
        }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// The line as printed, without the trailing newline.
    pub fn render(&self) -> String {
        let pad = "   ".repeat(self.indent as usize + 1);
        match self.level.marker() {
            "" => format!("{}{}", pad, self.message),
            marker => format!("{}{} {}", pad, marker, self.message),
        }
    }
}

/// Hide info and success lines from now on.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn is_shown(level: LogLevel, quiet: bool) -> bool {
    !quiet || level >= LogLevel::Warning
}

pub fn log(entry: LogEntry) {
    if is_shown(entry.level, QUIET.load(Ordering::Relaxed)) {
        eprintln!("{}", entry.render());
    }
}

pub fn log_info(msg: impl Into<String>) {
    log(LogEntry::new(LogLevel::Info, msg));
}

pub fn log_success(msg: impl Into<String>) {
    log(LogEntry::new(LogLevel::Success, msg));
}

pub fn log_warning(msg: impl Into<String>) {
    log(LogEntry::new(LogLevel::Warning, msg));
}

pub fn log_error(msg: impl Into<String>) {
    log(LogEntry::new(LogLevel::Error, msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    log(LogEntry::new(LogLevel::Info, msg).with_indent(indent));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(LogEntry::new(LogLevel::Info, "Backend: x").render(), "   Backend: x");
        assert_eq!(LogEntry::new(LogLevel::Success, "done").render(), "   ✓ done");
        assert_eq!(
            LogEntry::new(LogLevel::Info, "GET http://h/api/health")
                .with_indent(1)
                .render(),
            "      GET http://h/api/health"
        );
        assert_eq!(LogEntry::new(LogLevel::Error, "Error: boom").render(), "   ❌ Error: boom");
    }

    #[test]
    fn test_quiet_keeps_problems() {
        assert!(is_shown(LogLevel::Info, false));
        assert!(!is_shown(LogLevel::Info, true));
        assert!(!is_shown(LogLevel::Success, true));
        assert!(is_shown(LogLevel::Warning, true));
        assert!(is_shown(LogLevel::Error, true));
    }
}
