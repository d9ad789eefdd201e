//! Logging setup.
//!
//! Library code only emits `tracing` events; the binary installs a
//! subscriber once at startup with [`init_logging`]. `RUST_LOG`, when set,
//! takes precedence over the configured level.

use serde::Deserialize;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::SettingsError;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive: trace, debug, info, warn, error, off, or `target=level` pairs
    pub level: String,

    pub format: LogFormat,

    /// Enable colored output (text format only)
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            color: true,
        }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), SettingsError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.level)?,
    };

    let registry = Registry::default().with(filter);
    let result = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339()),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color),
            )
            .try_init(),
    };

    result.map_err(|e| SettingsError::Invalid {
        key: "logging",
        message: e.to_string(),
    })
}

fn build_filter(level: &str) -> Result<EnvFilter, SettingsError> {
    EnvFilter::try_new(level).map_err(|e| SettingsError::Invalid {
        key: "logging.level",
        message: e.to_string(),
    })
}
