//! Logger cache metrics.
//!
//! # Metrics
//! - `logger_cache_lookups_total` (counter): lookups by `outcome` (hit, miss)
//! - `logger_cache_creations_total` (counter): loggers built by the factory
//! - `logger_cache_creation_failures_total` (counter): factory errors
//! - `logger_cache_entries` (gauge): distinct loggers cached
//!
//! Recording goes through the `metrics` facade and is a no-op until the
//! application installs a recorder.

use metrics::{counter, gauge};

/// Record a cache lookup on the fast path.
pub fn record_lookup(hit: bool) {
    let outcome = if hit { "hit" } else { "miss" };
    counter!("logger_cache_lookups_total", "outcome" => outcome).increment(1);
}

/// Record a successful creation and the resulting cache size.
pub fn record_creation(entries: usize) {
    counter!("logger_cache_creations_total").increment(1);
    gauge!("logger_cache_entries").set(entries as f64);
}

/// Record a factory error.
pub fn record_creation_failure() {
    counter!("logger_cache_creation_failures_total").increment(1);
}
