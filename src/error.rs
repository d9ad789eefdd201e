use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for record store operations.
///
/// A lookup that finds nothing is not an error; it is reported as `None`
/// by the store and as [`Outcome::NotFound`](crate::Outcome) by the timer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("backing file {path} unavailable: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The collection could not be encoded as JSON.
    #[error("record serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The monotonic counter has passed the largest representable identifier.
    #[error("no identifiers left for {0}")]
    IdentifiersExhausted(&'static str),
    /// Another operation panicked while holding the collection lock.
    #[error("record store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Error type for loading settings and initialising logging.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A source could not be read or did not match the expected shape.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    /// A value was read but is not usable.
    #[error("invalid setting {key}: {message}")]
    Invalid { key: &'static str, message: String },
}
