//! Tracing subscriber installation for tracker binaries.

use crate::config::{LogFormat, TrackerConfig};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Errors returned while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber described by `config`.
///
/// Log lines go to standard error so standard output stays free for the
/// rendered view.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for a malformed filter directive
/// and [`TelemetryError::Install`] when a subscriber is already set.
pub fn init_tracing(config: &TrackerConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()?,
    }
    Ok(())
}
