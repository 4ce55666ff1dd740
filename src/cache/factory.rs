//! Logger creation hook.

use std::fmt;

/// A named logger handed out by the cache.
pub trait Logger: Send + Sync {
    /// The name the logger was created with, in its original casing.
    fn name(&self) -> &str;
}

/// Builds a logger for a name the cache has not seen yet.
///
/// The cache calls [`create_logger`](LoggerFactory::create_logger) at most
/// once per normalized name and passes the name exactly as the caller
/// supplied it. An error leaves the cache untouched and is returned to the
/// caller as-is.
///
/// Implementations must not look up loggers from the cache that is calling
/// them.
pub trait LoggerFactory: Send + Sync {
    /// Logger type produced by this factory.
    type Logger: Logger;

    /// Error returned when a logger cannot be built.
    type Error;

    /// Build the logger for `name`.
    fn create_logger(&self, name: &str) -> Result<Self::Logger, Self::Error>;
}

/// A [`LoggerFactory`] backed by a closure.
#[derive(Clone)]
pub struct FnFactory<F> {
    create: F,
}

/// Wrap a closure as a [`LoggerFactory`].
pub fn from_fn<F, L, E>(create: F) -> FnFactory<F>
where
    F: Fn(&str) -> Result<L, E> + Send + Sync,
    L: Logger,
{
    FnFactory { create }
}

impl<F, L, E> LoggerFactory for FnFactory<F>
where
    F: Fn(&str) -> Result<L, E> + Send + Sync,
    L: Logger,
{
    type Logger = L;
    type Error = E;

    fn create_logger(&self, name: &str) -> Result<L, E> {
        (self.create)(name)
    }
}

impl<F> fmt::Debug for FnFactory<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFactory").finish_non_exhaustive()
    }
}
