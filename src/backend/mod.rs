//! Concrete logger backends.

pub mod trace;

pub use trace::{TracingLogger, TracingLoggerFactory};
