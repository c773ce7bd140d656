//! Logging
//!
//! Structured logging for token and dispatch operations. A logger is built
//! from the configuration's `debug` flag and injected into every component.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Upwork log context.
///
/// Never put secrets (client secret, tokens) in here.
#[derive(Debug, Clone, Default)]
pub struct UpworkLogContext {
    /// Operation name.
    pub operation: Option<String>,
    /// Grant type in use.
    pub grant_type: Option<String>,
    /// Entry point of the request.
    pub entry_point: Option<String>,
    /// HTTP method actually sent.
    pub method: Option<String>,
    /// Relative request path.
    pub path: Option<String>,
    /// Additional context.
    pub extra: HashMap<String, String>,
}

impl UpworkLogContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    pub fn grant_type(mut self, grant_type: impl Into<String>) -> Self {
        self.grant_type = Some(grant_type.into());
        self
    }

    pub fn entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = Some(entry_point.into());
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    fn extra_fields(&self) -> String {
        let mut pairs: Vec<_> = self
            .extra
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        pairs.sort();
        pairs.join(" ")
    }
}

/// Logger interface.
pub trait Logger: Send + Sync {
    fn trace(&self, message: &str, context: &UpworkLogContext);

    fn debug(&self, message: &str, context: &UpworkLogContext);

    fn info(&self, message: &str, context: &UpworkLogContext);

    fn warn(&self, message: &str, context: &UpworkLogContext);

    fn error(&self, message: &str, context: &UpworkLogContext);

    /// Check if a log level is enabled.
    fn is_enabled(&self, level: LogLevel) -> bool;
}

/// No-op logger implementation.
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    fn trace(&self, _message: &str, _context: &UpworkLogContext) {}
    fn debug(&self, _message: &str, _context: &UpworkLogContext) {}
    fn info(&self, _message: &str, _context: &UpworkLogContext) {}
    fn warn(&self, _message: &str, _context: &UpworkLogContext) {}
    fn error(&self, _message: &str, _context: &UpworkLogContext) {}
    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Logger that emits `tracing` events under the `integrations_upwork` target.
pub struct TracingLogger {
    min_level: LogLevel,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self::with_level(LogLevel::Debug)
    }

    pub fn with_level(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! emit {
    ($macro:ident, $message:expr, $context:expr) => {
        tracing::$macro!(
            target: "integrations_upwork",
            operation = $context.operation.as_deref().unwrap_or(""),
            grant_type = $context.grant_type.as_deref().unwrap_or(""),
            entry_point = $context.entry_point.as_deref().unwrap_or(""),
            method = $context.method.as_deref().unwrap_or(""),
            path = $context.path.as_deref().unwrap_or(""),
            extra = %$context.extra_fields(),
            "{}",
            $message
        )
    };
}

impl Logger for TracingLogger {
    fn trace(&self, message: &str, context: &UpworkLogContext) {
        if self.is_enabled(LogLevel::Trace) {
            emit!(trace, message, context);
        }
    }

    fn debug(&self, message: &str, context: &UpworkLogContext) {
        if self.is_enabled(LogLevel::Debug) {
            emit!(debug, message, context);
        }
    }

    fn info(&self, message: &str, context: &UpworkLogContext) {
        if self.is_enabled(LogLevel::Info) {
            emit!(info, message, context);
        }
    }

    fn warn(&self, message: &str, context: &UpworkLogContext) {
        if self.is_enabled(LogLevel::Warn) {
            emit!(warn, message, context);
        }
    }

    fn error(&self, message: &str, context: &UpworkLogContext) {
        if self.is_enabled(LogLevel::Error) {
            emit!(error, message, context);
        }
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

/// Log entry for in-memory storage.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub context: UpworkLogContext,
    pub timestamp: u64,
}

/// In-memory logger for testing.
pub struct InMemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
    min_level: LogLevel,
}

impl InMemoryLogger {
    pub fn new() -> Self {
        Self::with_level(LogLevel::Trace)
    }

    pub fn with_level(min_level: LogLevel) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            min_level,
        }
    }

    /// Get all log entries.
    pub fn get_entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Get entries by level.
    pub fn get_entries_by_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.level == level)
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn log(&self, level: LogLevel, message: &str, context: &UpworkLogContext) {
        if level >= self.min_level {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64;

            self.entries.lock().push(LogEntry {
                level,
                message: message.to_string(),
                context: context.clone(),
                timestamp: now,
            });
        }
    }
}

impl Default for InMemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for InMemoryLogger {
    fn trace(&self, message: &str, context: &UpworkLogContext) {
        self.log(LogLevel::Trace, message, context);
    }

    fn debug(&self, message: &str, context: &UpworkLogContext) {
        self.log(LogLevel::Debug, message, context);
    }

    fn info(&self, message: &str, context: &UpworkLogContext) {
        self.log(LogLevel::Info, message, context);
    }

    fn warn(&self, message: &str, context: &UpworkLogContext) {
        self.log(LogLevel::Warn, message, context);
    }

    fn error(&self, message: &str, context: &UpworkLogContext) {
        self.log(LogLevel::Error, message, context);
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

/// Build the logger selected by the configuration's debug flag.
pub fn create_logger(debug: bool) -> Arc<dyn Logger> {
    if debug {
        Arc::new(TracingLogger::new())
    } else {
        Arc::new(NoOpLogger)
    }
}

/// No-op logger.
pub fn no_op_logger() -> NoOpLogger {
    NoOpLogger
}

/// Create in-memory logger for testing.
pub fn create_in_memory_logger() -> InMemoryLogger {
    InMemoryLogger::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error > LogLevel::Warn);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert!(LogLevel::Debug > LogLevel::Trace);
    }

    #[test]
    fn test_in_memory_logger() {
        let logger = InMemoryLogger::new();
        let context = UpworkLogContext::new()
            .operation("exchange_code")
            .grant_type("authorization_code");

        logger.info("Token exchange started", &context);
        logger.debug("Debug info", &context);
        logger.error("Error occurred", &context);

        let entries = logger.get_entries();
        assert_eq!(entries.len(), 3);

        let error_entries = logger.get_entries_by_level(LogLevel::Error);
        assert_eq!(error_entries.len(), 1);
        assert_eq!(
            error_entries[0].context.operation.as_deref(),
            Some("exchange_code")
        );
    }

    #[test]
    fn test_min_level_filtering() {
        let logger = InMemoryLogger::with_level(LogLevel::Warn);
        let context = UpworkLogContext::new();

        logger.trace("trace", &context);
        logger.debug("debug", &context);
        logger.info("info", &context);
        logger.warn("warn", &context);
        logger.error("error", &context);

        assert_eq!(logger.get_entries().len(), 2);
    }

    #[test]
    fn test_create_logger_follows_debug_flag() {
        assert!(create_logger(true).is_enabled(LogLevel::Debug));
        assert!(!create_logger(true).is_enabled(LogLevel::Trace));
        assert!(!create_logger(false).is_enabled(LogLevel::Error));
    }

    #[test]
    fn test_extra_fields_sorted() {
        let context = UpworkLogContext::new().extra("b", "2").extra("a", "1");
        assert_eq!(context.extra_fields(), "a=1 b=2");
    }
}
