//! Crate-level error type.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors from setting up the logging environment.
///
/// Logger lookups never produce this type; factory errors reach the
/// caller unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A global tracing subscriber could not be installed.
    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

/// Result type for setup operations.
pub type Result<T> = std::result::Result<T, Error>;
