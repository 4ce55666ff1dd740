//! Loggers that emit `tracing` events.

use std::convert::Infallible;

use tracing::Level;

use crate::cache::{Logger, LoggerFactory};

/// A named logger that forwards messages to the active `tracing` subscriber.
///
/// Every event carries a `logger` field holding the display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    /// Create a logger with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Emit `message` at `level`.
    pub fn log(&self, level: Level, message: &str) {
        let logger = self.name.as_str();
        match level {
            Level::TRACE => tracing::trace!(logger, "{}", message),
            Level::DEBUG => tracing::debug!(logger, "{}", message),
            Level::INFO => tracing::info!(logger, "{}", message),
            Level::WARN => tracing::warn!(logger, "{}", message),
            _ => tracing::error!(logger, "{}", message),
        }
    }

    /// Whether an event at `level` would be recorded by the current subscriber.
    pub fn is_enabled(&self, level: Level) -> bool {
        match level {
            Level::TRACE => tracing::enabled!(Level::TRACE),
            Level::DEBUG => tracing::enabled!(Level::DEBUG),
            Level::INFO => tracing::enabled!(Level::INFO),
            Level::WARN => tracing::enabled!(Level::WARN),
            _ => tracing::enabled!(Level::ERROR),
        }
    }

    pub fn trace(&self, message: &str) {
        self.log(Level::TRACE, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }
}

impl Logger for TracingLogger {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Factory for [`TracingLogger`]s. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLoggerFactory;

impl LoggerFactory for TracingLoggerFactory {
    type Logger = TracingLogger;
    type Error = Infallible;

    fn create_logger(&self, name: &str) -> Result<TracingLogger, Infallible> {
        Ok(TracingLogger::new(name))
    }
}
