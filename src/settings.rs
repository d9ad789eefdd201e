//! Settings - server, store, and logging configuration.
//!
//! Sources, lowest to highest precedence: built-in defaults, a TOML file
//! (`recordstore.toml` in the working directory when present, or an
//! explicit path), then `RECORDSTORE__*` environment variables with `__`
//! separating nested keys (`RECORDSTORE__STORE__ID_POLICY=monotonic`).
//! The binary applies command-line flags on top.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::SettingsError;
use crate::logging::LoggingConfig;
use crate::store::StoreOptions;

pub const ENV_PREFIX: &str = "RECORDSTORE";
pub const DEFAULT_CONFIG_FILE: &str = "recordstore";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Address the HTTP server listens on.
    pub bind: String,
    /// Directory holding the backing files.
    pub data_dir: PathBuf,
    pub store: StoreOptions,
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            data_dir: PathBuf::from("."),
            store: StoreOptions::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from `file` (required when given, optional default
    /// otherwise) and the environment.
    pub fn load(file: Option<&Path>) -> Result<Self, SettingsError> {
        let builder = Config::builder();
        let builder = match file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };
        let settings: Settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parsed listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind.parse::<SocketAddr>().map_err(|e| SettingsError::Invalid {
            key: "bind",
            message: format!("{}: {}", self.bind, e),
        })
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.bind_addr()?;
        if self.data_dir.as_os_str().is_empty() {
            return Err(SettingsError::Invalid {
                key: "data_dir",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
