//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! cache lookups and creations
//!     → logging.rs (subscriber setup for tracing events)
//!     → metrics.rs (counters, gauges)
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
