//! Shared factories for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use named_loggers::{Logger, LoggerFactory};

/// Logger that remembers its name and which factory call produced it.
#[derive(Debug)]
pub struct RecordingLogger {
    pub name: String,
    pub serial: usize,
}

impl Logger for RecordingLogger {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Factory that counts calls and can be told to fail or stall.
#[derive(Clone, Default)]
pub struct CountingFactory {
    calls: Arc<AtomicUsize>,
    fail_first: usize,
    delay: Option<Duration>,
}

impl CountingFactory {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the first `n` calls.
    #[allow(dead_code)]
    pub fn failing_first(n: usize) -> Self {
        Self {
            fail_first: n,
            ..Self::default()
        }
    }

    /// Sleep inside every call to widen the creation window.
    #[allow(dead_code)]
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct BackendDown(pub String);

impl LoggerFactory for CountingFactory {
    type Logger = RecordingLogger;
    type Error = BackendDown;

    fn create_logger(&self, name: &str) -> Result<RecordingLogger, BackendDown> {
        let serial = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        if serial < self.fail_first {
            return Err(BackendDown(name.to_string()));
        }
        Ok(RecordingLogger {
            name: name.to_string(),
            serial,
        })
    }
}
