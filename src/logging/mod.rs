//! Structured logging on top of `tracing-subscriber`.
//!
//! The library itself only emits `tracing` events (table construction and
//! rehashes at `debug`, single inserts/removals at `trace`); installing a
//! subscriber is left to the binary.

pub mod filters;
pub mod formatter;

use std::error::Error;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::{LogFormat, LoggingConfig};

/// Installs the global subscriber described by `config`.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    let env_filter = filters::build_filter(config);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(formatter::build_layer(config))
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        format = ?config.format,
        "Logging system initialized"
    );

    Ok(())
}
