//! Named logger cache (v1)
//!
//! Resolves each name given on the command line through a process-wide
//! logger cache and writes one event per name through the resolved logger.
//!
//! ```text
//!     names ──▶ NamedLoggerCache ──hit──▶ Arc<TracingLogger> ──▶ tracing subscriber
//!                     │                          ▲
//!                     └──miss──▶ TracingLoggerFactory
//! ```

use std::path::PathBuf;

use clap::Parser;

use named_loggers::config::{load_config, AppConfig};
use named_loggers::observability::init_logging;
use named_loggers::{Logger, NamedLoggerCache, TracingLoggerFactory};

#[derive(Parser)]
#[command(name = "named-loggers")]
#[command(about = "Resolve logger names through a shared case-insensitive cache", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Message written through each resolved logger.
    #[arg(short, long, default_value = "logger ready")]
    message: String,

    /// Logger names to resolve.
    names: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    init_logging(&config.logging)?;

    tracing::info!(
        level = %config.logging.level,
        initial_capacity = config.cache.initial_capacity,
        "Configuration loaded"
    );

    let cache = NamedLoggerCache::from_config(TracingLoggerFactory, &config.cache);

    for name in &cli.names {
        let logger = match cache.logger(name) {
            Ok(logger) => logger,
            Err(never) => match never {},
        };
        logger.info(&cli.message);
        tracing::debug!(requested = %name, resolved = logger.name(), "Resolved logger");
    }

    tracing::info!(
        requested = cli.names.len(),
        distinct = cache.len(),
        "Done"
    );
    Ok(())
}
