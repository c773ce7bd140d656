//! Telemetry
//!
//! Structured logging for Upwork operations.

pub mod logging;

pub use logging::{
    create_in_memory_logger, create_logger, no_op_logger, InMemoryLogger, LogEntry, LogLevel,
    Logger, NoOpLogger, TracingLogger, UpworkLogContext,
};
