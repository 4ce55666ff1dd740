//! Named logger cache library.
//!
//! Hands out one shared logger per case-insensitive name, building each
//! logger on first request through a pluggable [`LoggerFactory`].

pub mod backend;
pub mod cache;
pub mod config;
pub mod error;
pub mod observability;

pub use backend::{TracingLogger, TracingLoggerFactory};
pub use cache::{from_fn, Logger, LoggerFactory, LoggerKey, NamedLoggerCache};
pub use config::AppConfig;
pub use error::{Error, Result};
