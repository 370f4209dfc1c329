//! Runtime configuration for tracker binaries.
//!
//! Configuration is read from the environment and may be overridden by
//! command-line flags.
//!
//! # Examples
//!
//! ```
//! use task_tracker::config::{LogFormat, TrackerConfig};
//!
//! let config = TrackerConfig::from_lookup(|key| match key {
//!     "TASK_TRACKER_LOG_FORMAT" => Some("json".to_owned()),
//!     _ => None,
//! })
//! .expect("valid configuration");
//! assert_eq!(config.log_format, LogFormat::Json);
//! assert_eq!(config.log_filter, "task_tracker=info,warn");
//! ```

use std::env;
use thiserror::Error;

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV: &str = "TASK_TRACKER_LOG";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "TASK_TRACKER_LOG_FORMAT";

/// Filter used when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "task_tracker=info,warn";

/// Errors returned while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The log format is not supported.
    #[error("unsupported log format '{0}', expected compact or json")]
    InvalidLogFormat(String),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}

impl TryFrom<&str> for LogFormat {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(value.to_owned())),
        }
    }
}

/// Settings shared by tracker binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    /// Log line format.
    pub log_format: LogFormat,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_format: LogFormat::default(),
        }
    }
}

impl TrackerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogFormat`] when the format variable
    /// holds an unsupported value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`; blank values fall back to the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogFormat`] when the format value is
    /// unsupported.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();
        if let Some(filter) = non_blank(LOG_FILTER_ENV) {
            config.log_filter = filter;
        }
        if let Some(format) = non_blank(LOG_FORMAT_ENV) {
            config.log_format = LogFormat::try_from(format.as_str())?;
        }
        Ok(config)
    }

    /// Overrides the log filter directive.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Overrides the log format.
    #[must_use]
    pub const fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }
}
