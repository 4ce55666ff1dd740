//! Named logger cache.
//!
//! # Data Flow
//! ```text
//! get_logger(name)
//!     → key.rs (case-fold to LoggerKey)
//!     → named.rs fast path: concurrent map read, no cache-wide lock
//!     → on miss: creation lock, re-check, factory.rs hook
//!     → Arc<Logger> stored under the key, shared with every caller
//! ```
//!
//! # Design Decisions
//! - One logger per normalized name for the lifetime of the cache
//! - No eviction; entries are only ever added
//! - Factory errors propagate unchanged and are not cached

pub mod factory;
pub mod key;
pub mod named;

pub use factory::{from_fn, FnFactory, Logger, LoggerFactory};
pub use key::LoggerKey;
pub use named::NamedLoggerCache;
