//! Memoizing logger cache.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;

use crate::cache::factory::LoggerFactory;
use crate::cache::key::LoggerKey;
use crate::config::schema::CacheConfig;
use crate::observability::metrics;

/// Thread-safe cache of named loggers.
///
/// Cloning the cache clones a handle; all clones share the same entries
/// and factory. Entries are created lazily on first lookup and are never
/// removed or replaced.
pub struct NamedLoggerCache<F: LoggerFactory> {
    inner: Arc<Inner<F>>,
}

struct Inner<F: LoggerFactory> {
    entries: DashMap<LoggerKey, Arc<F::Logger>>,
    /// Serializes creation so the factory runs once per key.
    create_lock: Mutex<()>,
    factory: F,
}

impl<F: LoggerFactory> NamedLoggerCache<F> {
    /// Create an empty cache that builds loggers with `factory`.
    pub fn new(factory: F) -> Self {
        Self::with_capacity(factory, 0)
    }

    /// Create an empty cache with room for `capacity` loggers.
    pub fn with_capacity(factory: F, capacity: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                entries: DashMap::with_capacity(capacity),
                create_lock: Mutex::new(()),
                factory,
            }),
        }
    }

    /// Create an empty cache sized from configuration.
    pub fn from_config(factory: F, config: &CacheConfig) -> Self {
        Self::with_capacity(factory, config.initial_capacity)
    }

    /// Get the logger for `name`, creating it on first request.
    ///
    /// Names are matched case-insensitively and `None` is the same logger
    /// as `Some("")`. The factory sees the name as passed on the call that
    /// created the entry. Factory errors are returned unchanged and leave
    /// no entry behind, so the next lookup tries again.
    pub fn get_logger(&self, name: Option<&str>) -> Result<Arc<F::Logger>, F::Error> {
        let key = LoggerKey::normalize(name);

        if let Some(logger) = self.inner.entries.get(key.as_str()) {
            metrics::record_lookup(true);
            return Ok(Arc::clone(logger.value()));
        }
        metrics::record_lookup(false);

        // The guarded value is (), so a panic in a previous factory call
        // leaves nothing to repair.
        let _guard = self
            .inner
            .create_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(logger) = self.inner.entries.get(key.as_str()) {
            return Ok(Arc::clone(logger.value()));
        }

        let name = name.unwrap_or_default();
        let logger = match self.inner.factory.create_logger(name) {
            Ok(logger) => Arc::new(logger),
            Err(e) => {
                metrics::record_creation_failure();
                return Err(e);
            }
        };

        tracing::debug!(logger = name, key = %key, "Created logger");
        self.inner.entries.insert(key, Arc::clone(&logger));
        metrics::record_creation(self.inner.entries.len());

        Ok(logger)
    }

    /// Shorthand for `get_logger(Some(name))`.
    pub fn logger(&self, name: &str) -> Result<Arc<F::Logger>, F::Error> {
        self.get_logger(Some(name))
    }

    /// Whether a logger for `name` has been created.
    pub fn contains(&self, name: &str) -> bool {
        self.inner
            .entries
            .contains_key(LoggerKey::from(name).as_str())
    }

    /// Number of distinct loggers created so far.
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Whether no logger has been created yet.
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// The factory used to create loggers.
    pub fn factory(&self) -> &F {
        &self.inner.factory
    }
}

impl<F: LoggerFactory> Clone for NamedLoggerCache<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: LoggerFactory> fmt::Debug for NamedLoggerCache<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedLoggerCache")
            .field("entries", &self.inner.entries.len())
            .finish_non_exhaustive()
    }
}
