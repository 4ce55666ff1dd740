//! Structured logging setup.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` overrides the configured level when set
//! - Installing a second global subscriber is an error, not a panic

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::{LogFormat, LoggingConfig};
use crate::error::{Error, Result};

/// Build the filter: `RUST_LOG` if set and valid, else the configured level.
pub fn env_filter(cfg: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.level.to_lowercase()))
}

/// Install the global tracing subscriber described by `cfg`.
pub fn init_logging(cfg: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(cfg));
    let layer = fmt::layer()
        .with_ansi(cfg.ansi)
        .with_target(cfg.with_target);

    let result = match cfg.format {
        LogFormat::Full => registry.with(layer).try_init(),
        LogFormat::Compact => registry.with(layer.compact()).try_init(),
    };

    result.map_err(|e| Error::LoggingInit(e.to_string()))
}
